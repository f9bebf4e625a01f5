//! Keyboard input handling

/// Normalize a `KeyboardEvent.key` value before it reaches the core key
/// map: single letters fold to lowercase so Shift or CapsLock doesn't
/// strand a held key, named keys ("ArrowUp", ...) pass through.
pub fn normalize_key(key: &str) -> String {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_lowercase().to_string(),
        _ => key.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_fold_to_lowercase() {
        assert_eq!(normalize_key("W"), "w");
        assert_eq!(normalize_key("w"), "w");
    }

    #[test]
    fn test_named_keys_pass_through() {
        assert_eq!(normalize_key("ArrowUp"), "ArrowUp");
        assert_eq!(normalize_key("ArrowLeft"), "ArrowLeft");
    }
}
