//! Naming rules shared by the definition engine and the derive macro.

/// Normalize a symbolic value into a key token.
///
/// Lowercases every character and collapses each run of whitespace and
/// hyphens into a single underscore. Total and pure.
///
/// ```text
/// "Dell"          → "dell"
/// "Hewlett-Packard" → "hewlett_packard"
/// "Big  -  Blue"  → "big_blue"
/// ```
pub fn normalize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_separator = false;
    for ch in value.chars() {
        if ch == '-' || ch.is_whitespace() {
            if !in_separator {
                out.push('_');
                in_separator = true;
            }
        } else {
            in_separator = false;
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Default constant name for a field: pluralized, then uppercased.
pub fn constant_name(field: &str) -> String {
    pluralize(field).to_uppercase()
}

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "fish",
    "information",
    "jeans",
    "money",
    "police",
    "rice",
    "series",
    "sheep",
    "species",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("man", "men"),
    ("move", "moves"),
    ("person", "people"),
    ("sex", "sexes"),
    ("woman", "women"),
    ("zombie", "zombies"),
];

/// English pluralization for snake_case identifiers.
///
/// Only the last `_`-separated segment is inflected (`order_status` →
/// `order_statuses`). Covers the common inflection rules; anything unusual
/// should pass an explicit constant name instead.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    let split = word.rfind('_').map_or(0, |i| i + 1);
    let (head, last) = word.split_at(split);
    if last.is_empty() {
        return word.to_owned();
    }

    let lower = last.to_ascii_lowercase();
    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_owned();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(single, _)| *single == lower) {
        return format!("{head}{plural}");
    }

    format!("{head}{}", inflect(last, &lower))
}

fn inflect(last: &str, lower: &str) -> String {
    let stem = |n: usize| &last[..last.len() - n];

    if lower.ends_with("quiz") {
        return format!("{last}zes");
    }
    if lower.ends_with("octopus") || lower.ends_with("virus") {
        return format!("{}i", stem(2));
    }
    if lower.ends_with("status") || lower.ends_with("alias") || lower.ends_with("bus") {
        return format!("{last}es");
    }
    if ["matrix", "vertex", "index"].iter().any(|w| lower.ends_with(w)) {
        return format!("{}ices", stem(2));
    }
    if lower.ends_with("sis") || lower.ends_with("axis") || lower.ends_with("testis") {
        return format!("{}es", stem(2));
    }
    if lower.ends_with("tum") || lower.ends_with("ium") {
        return format!("{}a", stem(2));
    }
    if ["x", "ch", "ss", "sh", "zz"].iter().any(|s| lower.ends_with(s)) {
        return format!("{last}es");
    }
    if lower.ends_with('s') {
        return last.to_owned();
    }
    if let Some(before) = lower.strip_suffix('y') {
        let consonant = before
            .chars()
            .last()
            .is_some_and(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'));
        if consonant || before.ends_with("qu") {
            return format!("{}ies", stem(1));
        }
    }
    if lower.ends_with("fe") && !lower.ends_with("ffe") {
        return format!("{}ves", stem(2));
    }
    if lower.ends_with("lf") || lower.ends_with("rf") {
        return format!("{}ves", stem(1));
    }
    format!("{last}s")
}
