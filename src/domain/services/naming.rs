//! Case transforms applied to user-supplied names
//!
//! Only the first character changes; nothing is split, pluralized or
//! normalized.

/// Uppercase the first character (type, property and method names)
pub fn pascal(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character (parameter and local names)
pub fn camel(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
