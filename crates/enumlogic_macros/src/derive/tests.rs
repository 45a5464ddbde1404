use super::*;
use pretty_assertions::assert_eq;
use syn::parse_quote;

fn expand(input: syn::DeriveInput) -> syn::Result<String> {
    derive_enumlogic_impl(&input).map(|tokens| tokens.to_string())
}

fn expand_err(input: syn::DeriveInput) -> String {
    match derive_enumlogic_impl(&input) {
        Ok(_) => panic!("expected expansion to fail"),
        Err(err) => err.to_string(),
    }
}

#[test]
fn test_generates_accessors() {
    let out = expand(parse_quote! {
        struct Computer {
            #[enumlogic(values("apple", "dell", "hp"))]
            kind: Option<i64>,
        }
    })
    .expect("expands");

    for expected in [
        "const KINDS",
        "fn kind_definition",
        "fn kind_options",
        "fn kind_value",
        "fn kind (",
        "fn set_kind",
        "fn kind_key",
        "fn kind_text",
        "fn kind_int",
        "fn is_apple",
        "fn is_dell",
        "fn is_hp",
        "EnumModel for Computer",
        "Validate for Computer",
        "EnumValues :: list",
    ] {
        assert!(out.contains(expected), "missing `{expected}` in:\n{out}");
    }
}

#[test]
fn test_labels_and_options() {
    let out = expand(parse_quote! {
        struct Computer {
            #[enumlogic(
                labels("apple" = "Apple", "dell" = "Dell"),
                denominator = 1000,
                constant = "BRANDS",
                message = "must be a known brand",
                allow_nil,
                allow_blank,
                reject_collisions
            )]
            kind: Option<i64>,
        }
    })
    .expect("expands");

    assert!(out.contains("EnumValues :: labelled"));
    assert!(out.contains("const BRANDS"));
    assert!(out.contains(". denominator (1000u32)"));
    assert!(out.contains(". constant (\"BRANDS\")"));
    assert!(out.contains(". message (\"must be a known brand\")"));
    assert!(out.contains(". allow_nil (true)"));
    assert!(out.contains(". allow_blank (true)"));
    assert!(out.contains("CollisionPolicy :: Reject"));
}

#[test]
fn test_namespace_predicates() {
    let out = expand(parse_quote! {
        struct Computer {
            #[enumlogic(values("apple", "Hewlett-Packard"), namespace)]
            kind: Option<i64>,
        }
    })
    .expect("expands");
    assert!(out.contains("fn is_apple_kind"));
    assert!(out.contains("fn is_hewlett_packard_kind"));
    assert!(!out.contains("fn is_apple ("));
}

#[test]
fn test_raw_field_name() {
    let out = expand(parse_quote! {
        struct Part {
            #[enumlogic(values("bolt", "nut"))]
            r#type: Option<i64>,
        }
    })
    .expect("expands");
    assert!(out.contains("const TYPES"));
    assert!(out.contains("fn r#type"));
    assert!(out.contains("fn type_key"));
}

#[test]
fn test_rejects_enums() {
    let err = expand_err(parse_quote! {
        enum Kind { Apple }
    });
    assert_eq!(err, "Enumlogic derive only supports structs");
}

#[test]
fn test_rejects_non_option_field() {
    let err = expand_err(parse_quote! {
        struct Computer {
            #[enumlogic(values("apple"))]
            kind: i64,
        }
    });
    assert!(err.contains("must be `Option<i64>`"), "{err}");
}

#[test]
fn test_requires_an_enum_field() {
    let err = expand_err(parse_quote! {
        struct Computer {
            kind: Option<i64>,
        }
    });
    assert!(err.contains("at least one field"), "{err}");
}

#[test]
fn test_requires_values() {
    let err = expand_err(parse_quote! {
        struct Computer {
            #[enumlogic(namespace)]
            kind: Option<i64>,
        }
    });
    assert!(err.contains("missing `values(...)`"), "{err}");

    let err = expand_err(parse_quote! {
        struct Computer {
            #[enumlogic(values())]
            kind: Option<i64>,
        }
    });
    assert!(err.contains("at least one value"), "{err}");
}

#[test]
fn test_rejects_zero_denominator() {
    let err = expand_err(parse_quote! {
        struct Computer {
            #[enumlogic(values("apple"), denominator = 0)]
            kind: Option<i64>,
        }
    });
    assert_eq!(err, "denominator must be positive");
}

#[test]
fn test_rejects_unknown_option() {
    let err = expand_err(parse_quote! {
        struct Computer {
            #[enumlogic(values("apple"), colour = "red")]
            kind: Option<i64>,
        }
    });
    assert_eq!(err, "unsupported enumlogic option");
}

#[test]
fn test_rejects_duplicate_value() {
    let err = expand_err(parse_quote! {
        struct Computer {
            #[enumlogic(values("apple", "apple"))]
            kind: Option<i64>,
        }
    });
    assert_eq!(err, "value `apple` is declared more than once");
}

#[test]
fn test_values_sharing_a_key_share_one_predicate() {
    let out = expand(parse_quote! {
        struct Computer {
            #[enumlogic(values("Dell", "dell", "hewlett packard", "hewlett-packard"))]
            kind: Option<i64>,
        }
    })
    .expect("expands");
    assert_eq!(out.matches("fn is_dell (").count(), 1, "{out}");
    assert_eq!(out.matches("fn is_hewlett_packard (").count(), 1, "{out}");
    assert!(out.contains("\"hewlett-packard\""), "{out}");
}

#[test]
fn test_rejects_option_of_other_type() {
    let err = expand_err(parse_quote! {
        struct Computer {
            #[enumlogic(values("apple"))]
            kind: Option<String>,
        }
    });
    assert!(err.contains("must be `Option<i64>`"), "{err}");
}

#[test]
fn test_rejects_invalid_predicate_name() {
    let err = expand_err(parse_quote! {
        struct Computer {
            #[enumlogic(values("a.b"))]
            kind: Option<i64>,
        }
    });
    assert!(err.contains("valid predicate name"), "{err}");
}

#[test]
fn test_rejects_predicate_clash_across_fields() {
    let err = expand_err(parse_quote! {
        struct Computer {
            #[enumlogic(values("apple"))]
            kind: Option<i64>,
            #[enumlogic(values("apple"))]
            vendor: Option<i64>,
        }
    });
    assert!(err.contains("`is_apple`"), "{err}");
    assert!(err.contains("namespace"), "{err}");
}

#[test]
fn test_namespace_resolves_clash() {
    let out = expand(parse_quote! {
        struct Computer {
            #[enumlogic(values("apple"), namespace)]
            kind: Option<i64>,
            #[enumlogic(values("apple"), namespace)]
            vendor: Option<i64>,
        }
    })
    .expect("expands");
    assert!(out.contains("fn is_apple_kind"));
    assert!(out.contains("fn is_apple_vendor"));
}

#[test]
fn test_rejects_duplicate_constant() {
    let err = expand_err(parse_quote! {
        struct Computer {
            #[enumlogic(values("apple"), namespace)]
            kind: Option<i64>,
            #[enumlogic(values("hp"), namespace, constant = "KINDS")]
            vendor: Option<i64>,
        }
    });
    assert_eq!(err, "constant `KINDS` is already generated for field `kind`");
}

#[test]
fn test_rejects_collision_on_request() {
    let err = expand_err(parse_quote! {
        struct Computer {
            #[enumlogic(values("apple", "dell"), denominator = 4294967295, reject_collisions)]
            kind: Option<i64>,
        }
    });
    assert!(err.starts_with("values `apple` and `dell` both encode to 0"), "{err}");
}
