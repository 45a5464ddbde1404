//! The `decode` command: resolve a stored integer against a value set.

use enumlogic::EnumValues;

use super::{ad_hoc_definition, CommandError, ValueArgs, CLI_FIELD};

/// Decode `code` against `args.values`.
///
/// Mirrors the accessor: a code no value owns reports as unknown rather than
/// failing, since stale integers are expected in stored data.
pub fn decode_code(code: &str, args: &ValueArgs) -> Result<String, CommandError> {
    let code: i64 = code
        .trim()
        .parse()
        .map_err(|_| CommandError::Code(code.to_owned()))?;
    if args.values.is_empty() {
        return Err(CommandError::Missing("candidate values"));
    }
    let def = ad_hoc_definition(
        CLI_FIELD,
        EnumValues::list(args.values.iter().cloned()),
        args.options(),
    )?;
    Ok(match def.decode_entry(code) {
        Some(entry) => format!("{code}\t{} (key `{}`)\n", entry.value(), entry.key()),
        None => format!(
            "{code}\tunknown (no declared value encodes to it with denominator {})\n",
            def.denominator()
        ),
    })
}
