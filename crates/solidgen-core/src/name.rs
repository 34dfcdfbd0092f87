//! Name normalization for generated identifiers

use heck::ToUpperCamelCase;

/// Convert a free-form user-supplied name into a PascalCase identifier.
///
/// Whitespace, `-`, and `_` all act as word separators. The input is trimmed
/// and ASCII-lowercased first so existing casing never introduces extra word
/// boundaries; each word's first letter is then capitalized and the words are
/// concatenated with no separator.
///
/// An input that is empty after trimming yields an empty string; callers must
/// reject that before any generation begins.
pub fn to_pascal_case(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().to_upper_camel_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphens_and_underscores_are_separators() {
        assert_eq!(to_pascal_case("my-cool_component"), "MyCoolComponent");
        assert_eq!(to_pascal_case("nav_bar"), "NavBar");
        assert_eq!(to_pascal_case("drop-down"), "DropDown");
    }

    #[test]
    fn test_whitespace_separates_words() {
        assert_eq!(to_pascal_case("shopping cart"), "ShoppingCart");
        assert_eq!(to_pascal_case("  user   profile  "), "UserProfile");
    }

    #[test]
    fn test_existing_casing_is_flattened() {
        // Lowercasing happens before word splitting, so mixed casing inside a
        // word does not create new boundaries.
        assert_eq!(to_pascal_case("MyButton"), "Mybutton");
        assert_eq!(to_pascal_case("BADGE"), "Badge");
    }

    #[test]
    fn test_empty_and_blank_inputs() {
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_pascal_case("   "), "");
    }

    #[test]
    fn test_no_separators_remain() {
        let out = to_pascal_case("a-b_c d");
        assert!(!out.contains('-'));
        assert!(!out.contains('_'));
        assert!(!out.contains(' '));
        assert_eq!(out, "ABCD");
    }
}
