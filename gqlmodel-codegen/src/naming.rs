//! Identifier transforms from schema names to Rust names.
//!
//! Every function here is pure: the same schema name always yields the same
//! identifier. Type resolution relies on this to reference generated types
//! before they are built.

/// Rust keywords that cannot be used as plain identifiers.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that are not allowed as raw identifiers either.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Splits a schema identifier into lowercase-insensitive words.
///
/// Separators are any non-alphanumeric character and case boundaries, so
/// `createdAt`, `created_at` and `CREATED-AT` all split into the same words.
/// Runs of capitals stay together (`HTTPServer` is `HTTP`, `Server`).
#[must_use]
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Converts a schema type or enum value name to a PascalCase Rust name.
#[must_use]
pub fn to_type_name(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for word in split_words(s) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.extend(chars.flat_map(char::to_lowercase));
        }
    }

    if result.is_empty() || result.starts_with(|c: char| c.is_numeric()) {
        result.insert(0, '_');
    }

    escape_keyword(result)
}

/// Converts a schema field name to a snake_case Rust name.
#[must_use]
pub fn to_field_name(s: &str) -> String {
    let mut result = split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_");

    if result.is_empty() || result.starts_with(|c: char| c.is_numeric()) {
        result.insert(0, '_');
    }

    escape_keyword(result)
}

/// Converts an enum value literal to a Rust variant name.
#[must_use]
pub fn to_variant_name(s: &str) -> String {
    to_type_name(s)
}

/// Escapes `ident` when it is a Rust keyword.
pub(crate) fn escape_keyword(ident: String) -> String {
    if NON_RAW_KEYWORDS.contains(&ident.as_str()) {
        format!("{}_", ident)
    } else if KEYWORDS.contains(&ident.as_str()) {
        format!("r#{}", ident)
    } else {
        ident
    }
}
