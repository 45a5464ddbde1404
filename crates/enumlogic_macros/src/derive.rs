//! Enumlogic derive macro implementation.
//!
//! Generates inherent accessors per enum field plus `EnumModel` and
//! `Validate` impls. Generated code references `::enumlogic`, so the derive
//! is meant to be used through the `enumlogic` crate's re-export.

use std::collections::{HashMap, HashSet};

use enumlogic_codec::{constant_name, normalize, Codec, Denominator};
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{parse_macro_input, Ident, LitStr};

use crate::attr::EnumAttr;
use crate::utils::{ident, is_option_i64, validate_struct_with_named_fields};

/// Main entry point for the Enumlogic derive macro.
pub fn derive_enumlogic(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);

    match derive_enumlogic_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// One enum field after validation.
struct EnumField {
    ident: Ident,
    /// Field name without a raw-identifier prefix.
    name: String,
    decl: EnumAttr,
    constant: Ident,
    /// `(value, key, predicate method)` per distinct key, first value declared.
    predicates: Vec<(String, String, Ident)>,
}

pub(crate) fn derive_enumlogic_impl(input: &syn::DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fields = validate_struct_with_named_fields(input, "Enumlogic")?;

    let mut enum_fields = Vec::new();
    for field in fields {
        let Some(decl) = EnumAttr::from_attrs(&field.attrs)? else {
            continue;
        };
        let field_ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected named field"))?;
        if !is_option_i64(&field.ty) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "enumlogic fields must be `Option<i64>` (the stored code)",
            ));
        }
        enum_fields.push(check_field(field_ident, decl)?);
    }

    if enum_fields.is_empty() {
        return Err(syn::Error::new_spanned(
            input,
            "Enumlogic derive needs at least one field marked #[enumlogic(...)]",
        ));
    }
    check_generated_names(&enum_fields)?;

    let accessors = enum_fields.iter().map(generate_accessors);
    let field_names: Vec<&str> = enum_fields.iter().map(|f| f.name.as_str()).collect();
    let definition_fns: Vec<Ident> = enum_fields
        .iter()
        .map(|f| format_ident!("{}_definition", f.name))
        .collect();
    let stored: Vec<&Ident> = enum_fields.iter().map(|f| &f.ident).collect();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #[allow(dead_code)]
        impl #impl_generics #name #ty_generics #where_clause {
            #(#accessors)*
        }

        #[automatically_derived]
        impl #impl_generics ::enumlogic::EnumModel for #name #ty_generics #where_clause {
            const ENUM_FIELDS: &'static [&'static str] = &[#(#field_names),*];

            fn enum_definition(field: &str) -> ::core::option::Option<&'static ::enumlogic::EnumDefinition> {
                match field {
                    #(#field_names => ::core::option::Option::Some(Self::#definition_fns()),)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        #[automatically_derived]
        impl #impl_generics ::enumlogic::Validate for #name #ty_generics #where_clause {
            fn validate_into(&self, errors: &mut ::enumlogic::ValidationErrors) {
                #(Self::#definition_fns().inclusion().validate(self.#stored, errors);)*
            }
        }
    })
}

/// Apply the rules the runtime definition would enforce, at expansion time.
fn check_field(field_ident: Ident, decl: EnumAttr) -> syn::Result<EnumField> {
    let name = field_ident.unraw().to_string();

    let constant_str = match &decl.constant {
        Some(lit) => lit.value(),
        None => constant_name(&name),
    };
    let constant = match (ident(&constant_str), &decl.constant) {
        (Some(constant), _) => constant,
        (None, Some(lit)) => {
            return Err(syn::Error::new_spanned(
                lit,
                format!("`{constant_str}` is not a valid constant name"),
            ))
        }
        (None, None) => {
            return Err(syn::Error::new(
                decl.span,
                format!("cannot derive a constant name from `{name}`; pass `constant = \"...\"`"),
            ))
        }
    };

    let mut seen = HashSet::new();
    let mut keys = HashSet::new();
    let mut predicates = Vec::with_capacity(decl.values.len());
    for declared in &decl.values {
        if !seen.insert(declared.value.as_str()) {
            return Err(syn::Error::new(
                declared.span,
                format!("value `{}` is declared more than once", declared.value),
            ));
        }
        let key = normalize(&declared.value);
        // Values sharing a key share one predicate.
        if !keys.insert(key.clone()) {
            continue;
        }
        let predicate = if decl.namespace {
            format!("is_{key}_{name}")
        } else {
            format!("is_{key}")
        };
        let method = ident(&predicate).ok_or_else(|| {
            syn::Error::new(
                declared.span,
                format!(
                    "value `{}` does not produce a valid predicate name (`{predicate}`)",
                    declared.value
                ),
            )
        })?;
        predicates.push((declared.value.clone(), key, method));
    }

    if decl.reject_collisions {
        check_collisions(&decl)?;
    }

    Ok(EnumField {
        ident: field_ident,
        name,
        decl,
        constant,
        predicates,
    })
}

fn check_collisions(decl: &EnumAttr) -> syn::Result<()> {
    let denominator = decl
        .denominator
        .and_then(Denominator::new)
        .unwrap_or_default();
    let codec = Codec::new(denominator);
    let mut codes: HashMap<i64, &str> = HashMap::new();
    for declared in &decl.values {
        let code = codec.encode(&declared.value);
        if let Some(first) = codes.insert(code, declared.value.as_str()) {
            return Err(syn::Error::new(
                declared.span,
                format!(
                    "values `{first}` and `{}` both encode to {code} (denominator {denominator}); \
                     pick another denominator",
                    declared.value
                ),
            ));
        }
    }
    Ok(())
}

/// Generated methods and constants must be unique across all enum fields.
fn check_generated_names(fields: &[EnumField]) -> syn::Result<()> {
    let mut methods: HashMap<String, &str> = HashMap::new();
    let mut constants: HashMap<String, &str> = HashMap::new();

    for field in fields {
        if let Some(other) = constants.insert(field.constant.to_string(), &field.name) {
            return Err(syn::Error::new(
                field.decl.span,
                format!(
                    "constant `{}` is already generated for field `{other}`",
                    field.constant
                ),
            ));
        }

        let fixed = [
            field.name.clone(),
            format!("set_{}", field.name),
            format!("{}_key", field.name),
            format!("{}_text", field.name),
            format!("{}_int", field.name),
            format!("{}_value", field.name),
            format!("{}_options", field.name),
            format!("{}_definition", field.name),
        ];
        let predicates = field.predicates.iter().map(|(_, _, method)| method.to_string());
        for method in fixed.into_iter().chain(predicates) {
            if let Some(other) = methods.insert(method.clone(), &field.name) {
                let hint = if method.starts_with("is_") {
                    "; add `namespace` to one of the fields"
                } else {
                    ""
                };
                return Err(syn::Error::new(
                    field.decl.span,
                    format!("generated method `{method}` clashes with one generated for `{other}`{hint}"),
                ));
            }
        }
    }
    Ok(())
}

fn generate_accessors(field: &EnumField) -> TokenStream2 {
    let stored = &field.ident;
    let name = field.name.as_str();
    let constant = &field.constant;
    let span = field.decl.span;

    // Keyword field names (`r#type`) keep the raw prefix on the getter.
    let getter = if ident(name).is_some() {
        format_ident!("{}", name)
    } else {
        Ident::new_raw(name, Span::call_site())
    };
    let definition_fn = format_ident!("{}_definition", name);
    let options_fn = format_ident!("{}_options", name);
    let value_fn = format_ident!("{}_value", name);
    let setter = format_ident!("set_{}", name);
    let key_fn = format_ident!("{}_key", name);
    let text_fn = format_ident!("{}_text", name);
    let int_fn = format_ident!("{}_int", name);

    let values: Vec<LitStr> = field
        .decl
        .values
        .iter()
        .map(|v| LitStr::new(&v.value, v.span))
        .collect();
    let values_expr = if field.decl.labelled {
        let texts = field
            .decl
            .values
            .iter()
            .map(|v| LitStr::new(&v.text, v.span));
        quote! { ::enumlogic::EnumValues::labelled([#((#values, #texts)),*]) }
    } else {
        quote! { ::enumlogic::EnumValues::list([#(#values),*]) }
    };
    let options_expr = options_expr(field);

    let predicates = field.predicates.iter().map(|(value, key, method)| {
        let doc = format!("Whether `{name}` is `{value}` (or another value with key `{key}`).");
        quote! {
            #[doc = #doc]
            pub fn #method(&self) -> bool {
                Self::#definition_fn().attr().key(self.#stored) == ::core::option::Option::Some(#key)
            }
        }
    });

    let constant_doc = format!("Canonical values of `{name}`, in declaration order.");
    let panic_msg = format!("invalid enumlogic declaration for `{name}`: {{}}");

    quote::quote_spanned! {span=>
        #[doc = #constant_doc]
        pub const #constant: &'static [&'static str] = &[#(#values),*];

        /// Definition backing this field, built on first use.
        pub fn #definition_fn() -> &'static ::enumlogic::EnumDefinition {
            static DEFINITION: ::std::sync::OnceLock<::enumlogic::EnumDefinition> =
                ::std::sync::OnceLock::new();
            DEFINITION.get_or_init(|| {
                match ::enumlogic::EnumDefinition::define(#name, #values_expr, #options_expr) {
                    ::core::result::Result::Ok(definition) => definition,
                    ::core::result::Result::Err(err) => panic!(#panic_msg, err),
                }
            })
        }

        /// Display text → value, in declaration order.
        pub fn #options_fn() -> &'static ::enumlogic::IndexMap<::std::string::String, ::std::string::String> {
            Self::#definition_fn().options()
        }

        /// Encode any value with this field's codec.
        pub fn #value_fn(value: &str) -> i64 {
            Self::#definition_fn().encode(value)
        }

        /// Decoded value; `None` if unset or unknown.
        pub fn #getter(&self) -> ::core::option::Option<&'static str> {
            Self::#definition_fn().attr().read(self.#stored)
        }

        /// Store the code for `value`. Blank input leaves the field as it was.
        pub fn #setter(&mut self, value: impl ::core::convert::AsRef<str>) {
            Self::#definition_fn()
                .attr()
                .write(&mut self.#stored, ::core::option::Option::Some(value.as_ref()));
        }

        /// Normalized key of the decoded value.
        pub fn #key_fn(&self) -> ::core::option::Option<&'static str> {
            Self::#definition_fn().attr().key(self.#stored)
        }

        /// Display text of the decoded value.
        pub fn #text_fn(&self) -> ::core::option::Option<&'static str> {
            Self::#definition_fn().attr().text(self.#stored)
        }

        /// The stored code, whether or not it decodes.
        pub fn #int_fn(&self) -> ::core::option::Option<i64> {
            self.#stored
        }

        #(#predicates)*
    }
}

fn options_expr(field: &EnumField) -> TokenStream2 {
    let decl = &field.decl;
    let mut expr = quote! { ::enumlogic::EnumOptions::new() };
    if let Some(denominator) = decl.denominator {
        expr = quote! { #expr.denominator(#denominator) };
    }
    if let Some(constant) = &decl.constant {
        expr = quote! { #expr.constant(#constant) };
    }
    if let Some(message) = &decl.message {
        expr = quote! { #expr.message(#message) };
    }
    if decl.namespace {
        expr = quote! { #expr.namespace(true) };
    }
    if decl.allow_nil {
        expr = quote! { #expr.allow_nil(true) };
    }
    if decl.allow_blank {
        expr = quote! { #expr.allow_blank(true) };
    }
    if decl.reject_collisions {
        expr = quote! { #expr.collisions(::enumlogic::CollisionPolicy::Reject) };
    }
    expr
}

#[cfg(test)]
mod tests;
