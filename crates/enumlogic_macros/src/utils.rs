//! Shared utilities for the derive.

use syn::{punctuated::Punctuated, token::Comma, Data, DeriveInput, Field, Fields};

/// Validate that the input is a struct with named fields, returning the fields.
pub fn validate_struct_with_named_fields<'a>(
    input: &'a DeriveInput,
    macro_name: &str,
) -> syn::Result<&'a Punctuated<Field, Comma>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(&fields.named),
            _ => Err(syn::Error::new_spanned(
                input,
                format!("{macro_name} derive only supports structs with named fields"),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            input,
            format!("{macro_name} derive only supports structs"),
        )),
    }
}

/// Check if a type is `Option<i64>`.
pub fn is_option_i64(ty: &syn::Type) -> bool {
    let syn::Type::Path(type_path) = ty else {
        return false;
    };
    let Some(segment) = type_path.path.segments.last() else {
        return false;
    };
    if segment.ident != "Option" {
        return false;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return false;
    };
    match args.args.first() {
        Some(syn::GenericArgument::Type(syn::Type::Path(inner))) if args.args.len() == 1 => {
            inner.qself.is_none() && inner.path.segments.last().is_some_and(|s| s.ident == "i64")
        }
        _ => false,
    }
}

/// Parse `name` as an identifier, or `None` if it is not one.
pub fn ident(name: &str) -> Option<syn::Ident> {
    syn::parse_str::<syn::Ident>(name).ok()
}

#[cfg(test)]
mod tests {
    use super::is_option_i64;
    use syn::parse_quote;

    #[test]
    fn test_is_option_i64() {
        assert!(is_option_i64(&parse_quote!(Option<i64>)));
        assert!(is_option_i64(&parse_quote!(std::option::Option<i64>)));
        assert!(!is_option_i64(&parse_quote!(Option<i32>)));
        assert!(!is_option_i64(&parse_quote!(Option<String>)));
        assert!(!is_option_i64(&parse_quote!(Option)));
        assert!(!is_option_i64(&parse_quote!(i64)));
    }
}
