//! Parsing of `#[enumlogic(...)]` field attributes.

use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::{Attribute, LitInt, LitStr, Token};

/// `"value" = "Display Text"` inside `labels(...)`.
struct Label {
    value: LitStr,
    text: LitStr,
}

impl Parse for Label {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let value: LitStr = input.parse()?;
        let _: Token![=] = input.parse()?;
        let text: LitStr = input.parse()?;
        Ok(Label { value, text })
    }
}

/// One declared value with its display text.
pub struct DeclaredValue {
    pub value: String,
    pub text: String,
    pub span: Span,
}

/// Everything declared in one field's `#[enumlogic(...)]`.
pub struct EnumAttr {
    pub values: Vec<DeclaredValue>,
    /// Whether the values came from `labels(...)`.
    pub labelled: bool,
    pub denominator: Option<u32>,
    pub constant: Option<LitStr>,
    pub namespace: bool,
    pub message: Option<LitStr>,
    pub allow_nil: bool,
    pub allow_blank: bool,
    pub reject_collisions: bool,
    pub span: Span,
}

impl EnumAttr {
    /// Find and parse the `#[enumlogic(...)]` attribute, if the field has one.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Option<Self>> {
        let mut found = None;
        for attr in attrs {
            if !attr.path().is_ident("enumlogic") {
                continue;
            }
            if found.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate #[enumlogic(...)] attribute",
                ));
            }
            found = Some(Self::parse(attr)?);
        }
        Ok(found)
    }

    fn parse(attr: &Attribute) -> syn::Result<Self> {
        let mut decl = EnumAttr {
            values: Vec::new(),
            labelled: false,
            denominator: None,
            constant: None,
            namespace: false,
            message: None,
            allow_nil: false,
            allow_blank: false,
            reject_collisions: false,
            span: proc_macro2::Span::call_site(),
        };
        let mut has_values = false;

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("values") || meta.path.is_ident("labels") {
                if has_values {
                    return Err(meta.error("values are already declared for this field"));
                }
                has_values = true;
                let content;
                syn::parenthesized!(content in meta.input);
                if meta.path.is_ident("labels") {
                    decl.labelled = true;
                    let labels = content.parse_terminated(Label::parse, Token![,])?;
                    decl.values = labels
                        .into_iter()
                        .map(|label| DeclaredValue {
                            value: label.value.value(),
                            text: label.text.value(),
                            span: label.value.span(),
                        })
                        .collect();
                } else {
                    let values = content.parse_terminated(<LitStr as Parse>::parse, Token![,])?;
                    decl.values = values
                        .into_iter()
                        .map(|lit| DeclaredValue {
                            value: lit.value(),
                            text: lit.value(),
                            span: lit.span(),
                        })
                        .collect();
                }
                Ok(())
            } else if meta.path.is_ident("denominator") {
                let lit: LitInt = meta.value()?.parse()?;
                let denominator: u32 = lit.base10_parse()?;
                if denominator == 0 {
                    return Err(syn::Error::new_spanned(lit, "denominator must be positive"));
                }
                decl.denominator = Some(denominator);
                Ok(())
            } else if meta.path.is_ident("constant") {
                decl.constant = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("message") {
                decl.message = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("namespace") {
                decl.namespace = true;
                Ok(())
            } else if meta.path.is_ident("allow_nil") {
                decl.allow_nil = true;
                Ok(())
            } else if meta.path.is_ident("allow_blank") {
                decl.allow_blank = true;
                Ok(())
            } else if meta.path.is_ident("reject_collisions") {
                decl.reject_collisions = true;
                Ok(())
            } else {
                Err(meta.error("unsupported enumlogic option"))
            }
        })?;

        if !has_values {
            return Err(syn::Error::new_spanned(
                attr,
                "missing `values(...)` or `labels(...)` in #[enumlogic(...)]",
            ));
        }
        if decl.values.is_empty() {
            return Err(syn::Error::new_spanned(
                attr,
                "an enumlogic field needs at least one value",
            ));
        }
        decl.span = syn::spanned::Spanned::span(attr);
        Ok(decl)
    }
}
