// crates/modgen-core/src/text.rs

/// Uppercase the first character and leave the rest as is.
/// `"user"` -> `"User"`, `""` -> `""`.
pub fn capitalize_string(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
