//! Identifier naming constants shared by the validation rules.

// ─── Reserved values ──────────────────────────────────────────────────────

/// Wildcard sentinel. Never a legal identifier of any kind.
pub const WILDCARD: &str = "*";

/// Delimiters used when identifiers are serialized into lists.
pub const LIST_DELIMITERS: &[char] = &[';', ':', ','];

/// Literals the orchestrator refuses as ConfigMap / Secret keys.
pub const RESERVED_KEY_LITERALS: &[&str] = &[".", ".."];

// ─── Structure ────────────────────────────────────────────────────────────

/// Separates the optional prefix of a label key from its name.
pub const LABEL_KEY_SEPARATOR: char = '/';

/// Opening delimiter of a template placeholder, e.g. `{{ env.TEAM }}`.
pub const PLACEHOLDER_OPEN: &str = "{{";

/// Closing delimiter of a template placeholder.
pub const PLACEHOLDER_CLOSE: &str = "}}";

// ─── Length limits ────────────────────────────────────────────────────────

/// Maximum length of a DNS label (RFC 1123 / RFC 1035).
pub const DNS_LABEL_MAX_LENGTH: usize = 63;

/// Maximum length of a DNS subdomain (RFC 1123).
pub const DNS_SUBDOMAIN_MAX_LENGTH: usize = 253;

/// Maximum length of a label value and of the name segment of a label key.
pub const LABEL_MAX_LENGTH: usize = 63;

/// Maximum length of a ConfigMap or Secret data key.
pub const CONFIG_KEY_MAX_LENGTH: usize = 253;
