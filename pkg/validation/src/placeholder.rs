//! Template placeholder detection.
//!
//! Label values may reference a value substituted at deploy time, written as
//! `{{ env.NAME }}` (or `{{ env:NAME }}`). Only that exact shape is exempt from
//! literal validation; other brace content is treated as a literal value.

use lazy_regex::regex_is_match;
use pkg_constants::names::{PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};

/// Returns true if `value` is a single environment placeholder and nothing else.
pub fn is_placeholder(value: &str) -> bool {
    if !value.starts_with(PLACEHOLDER_OPEN) || !value.ends_with(PLACEHOLDER_CLOSE) {
        return false;
    }
    regex_is_match!(r"^\{\{[ \t]*env[.:][A-Za-z0-9_]+[ \t]*\}\}$", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_env_placeholders() {
        assert!(is_placeholder("{{env.EXAMPLE}}"));
        assert!(is_placeholder("{{ env.EXAMPLE }}"));
        assert!(is_placeholder("{{ env:EXAMPLE_2 }}"));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!is_placeholder(""));
        assert!(!is_placeholder("{{}}"));
        assert!(!is_placeholder("{{ env. }}"));
        assert!(!is_placeholder("{{ secret.EXAMPLE }}"));
        assert!(!is_placeholder("{{ env.A }}/b"));
        assert!(!is_placeholder("x{{ env.A }}"));
        assert!(!is_placeholder("{{ env.A }} {{ env.B }}"));
        assert!(!is_placeholder("{{ env.A-B }}"));
        assert!(!is_placeholder("{env.EXAMPLE}"));
    }

    #[test]
    fn names_are_ascii_only() {
        assert!(!is_placeholder("{{ env.名前 }}"));
        assert!(!is_placeholder("{{\u{3000}env.EXAMPLE }}"));
        assert!(!is_placeholder("{{ env.EXAMPLE\n}}"));
    }
}
