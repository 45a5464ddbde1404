//! The `options` command: preview the constant and options map of a field.

use enumlogic::{EnumOptions, EnumValues};

use super::{ad_hoc_definition, CommandError};

/// `field` plus `value` or `value=Text` arguments.
///
/// Any `=` switches the whole declaration to labelled form; bare values in a
/// labelled declaration are their own text.
pub fn print_options(field: &str, decls: &[String]) -> Result<String, CommandError> {
    if decls.is_empty() {
        return Err(CommandError::Missing("values"));
    }
    let labelled = decls.iter().any(|decl| decl.contains('='));
    let values = if labelled {
        EnumValues::labelled(decls.iter().map(|decl| match decl.split_once('=') {
            Some((value, text)) => (value.to_owned(), text.to_owned()),
            None => (decl.clone(), decl.clone()),
        }))
    } else {
        EnumValues::list(decls.iter().cloned())
    };
    let def = ad_hoc_definition(field, values, EnumOptions::new())?;

    let mut out = format!(
        "{} = [{}]\n",
        def.constant_name(),
        def.values()
            .map(|value| format!("{value:?}"))
            .collect::<Vec<_>>()
            .join(", ")
    );
    for entry in def.entries() {
        out.push_str(&format!(
            "  {:?} => {:?}\tis_{}\t{}\n",
            entry.text(),
            entry.value(),
            entry.predicate(),
            entry.code()
        ));
    }
    Ok(out)
}
