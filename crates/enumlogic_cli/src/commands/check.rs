//! The `check` command: report values that share a code.

use enumlogic::EnumValues;

use super::{ad_hoc_definition, CommandError, ValueArgs, CLI_FIELD};

/// List every collision among `args.values`, or confirm there are none.
///
/// Returns the report and whether any collision was found.
pub fn check_values(args: &ValueArgs) -> Result<(String, bool), CommandError> {
    if args.values.is_empty() {
        return Err(CommandError::Missing("values to check"));
    }
    let def = ad_hoc_definition(
        CLI_FIELD,
        EnumValues::list(args.values.iter().cloned()),
        args.options(),
    )?;
    let collisions = def.collisions();
    if collisions.is_empty() {
        return Ok((
            format!(
                "ok: {} values, no collisions (denominator {})\n",
                def.len(),
                def.denominator()
            ),
            false,
        ));
    }

    let mut out = format!(
        "{} collision(s) among {} values (denominator {}):\n",
        collisions.len(),
        def.len(),
        def.denominator()
    );
    for collision in &collisions {
        out.push_str(&format!(
            "  {}: `{}` is shadowed by `{}`\n",
            collision.code, collision.earlier, collision.later
        ));
    }
    Ok((out, true))
}
