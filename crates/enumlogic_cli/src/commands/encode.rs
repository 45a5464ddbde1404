//! The `encode` command: print the code of each value.

use enumlogic::Codec;

use super::{CommandError, ValueArgs};

/// One `value<TAB>code` line per value, in argument order.
pub fn encode_values(args: &ValueArgs) -> Result<String, CommandError> {
    if args.values.is_empty() {
        return Err(CommandError::Missing("value to encode"));
    }
    let codec = Codec::new(args.denominator());
    let mut out = String::new();
    for value in &args.values {
        out.push_str(&format!("{value}\t{}\n", codec.encode(value)));
    }
    Ok(out)
}
