//! Per-kind rule definitions.
//!
//! Rules are plain `const` data evaluated by the matcher. Adding a kind means
//! adding a constant here and a variant to [`Kind`](crate::Kind).

use pkg_constants::names::{
    CONFIG_KEY_MAX_LENGTH, DNS_LABEL_MAX_LENGTH, LABEL_MAX_LENGTH, RESERVED_KEY_LITERALS,
};

/// Set of characters a value may be made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Anything. Reserved delimiters are still refused by the matcher.
    Any,
    /// `[a-z0-9-]`
    DnsLabel,
    /// `[a-z0-9.-]`
    DnsSubdomain,
    /// `[A-Za-z0-9._-]`
    Qualified,
}

impl CharClass {
    pub fn allows(self, c: char) -> bool {
        match self {
            CharClass::Any => true,
            CharClass::DnsLabel => c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-',
            CharClass::DnsSubdomain => {
                c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.'
            }
            CharClass::Qualified => c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'),
        }
    }

    /// Completes "contains invalid character 'x', ..." in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            CharClass::Any => "any character is allowed",
            CharClass::DnsLabel => "only lowercase letters, digits and '-' are allowed",
            CharClass::DnsSubdomain => "only lowercase letters, digits, '-' and '.' are allowed",
            CharClass::Qualified => "only letters, digits, '-', '_' and '.' are allowed",
        }
    }
}

/// Constraint on the first and last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    None,
    /// Starts and ends with an ASCII letter or digit.
    Alphanumeric,
    /// Starts with a letter, ends with a letter or digit.
    LetterStart,
}

/// Shape of the value beyond its characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    Single,
    /// `[prefix/]name`, where the prefix is a lowercase DNS subdomain.
    PrefixedName,
    /// Like `Single`, but a `/` is reported as a structural violation.
    NoSlash,
}

/// Immutable validation rule for one identifier kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub charset: CharClass,
    pub anchor: Anchor,
    pub empty_allowed: bool,
    /// Exact values refused in addition to the wildcard `*`.
    pub reserved: &'static [&'static str],
    pub structure: Structure,
    /// Applies to the whole value, or to the name segment of a prefixed name.
    pub max_len: Option<usize>,
    /// Refuse values made only of digits.
    pub reject_numeric: bool,
    /// Accept `{{ env.NAME }}` placeholders without further checks.
    pub allow_placeholder: bool,
}

pub const FUNCTION_NAME: Rule = Rule {
    charset: CharClass::DnsLabel,
    anchor: Anchor::Alphanumeric,
    empty_allowed: false,
    reserved: &[],
    structure: Structure::Single,
    max_len: Some(DNS_LABEL_MAX_LENGTH),
    reject_numeric: true,
    allow_placeholder: false,
};

pub const NAMESPACE: Rule = Rule {
    charset: CharClass::DnsLabel,
    anchor: Anchor::LetterStart,
    empty_allowed: false,
    reserved: &[],
    structure: Structure::Single,
    max_len: Some(DNS_LABEL_MAX_LENGTH),
    reject_numeric: false,
    allow_placeholder: false,
};

pub const ENV_VAR_NAME: Rule = Rule {
    charset: CharClass::Any,
    anchor: Anchor::None,
    empty_allowed: false,
    reserved: &[],
    structure: Structure::Single,
    max_len: None,
    reject_numeric: false,
    allow_placeholder: false,
};

/// Shared by ConfigMap keys and Secret keys.
pub const DATA_KEY: Rule = Rule {
    charset: CharClass::Qualified,
    anchor: Anchor::None,
    empty_allowed: false,
    reserved: RESERVED_KEY_LITERALS,
    structure: Structure::Single,
    max_len: Some(CONFIG_KEY_MAX_LENGTH),
    reject_numeric: false,
    allow_placeholder: false,
};

pub const LABEL_KEY: Rule = Rule {
    charset: CharClass::Qualified,
    anchor: Anchor::Alphanumeric,
    empty_allowed: false,
    reserved: &[],
    structure: Structure::PrefixedName,
    max_len: Some(LABEL_MAX_LENGTH),
    reject_numeric: false,
    allow_placeholder: false,
};

pub const LABEL_VALUE: Rule = Rule {
    charset: CharClass::Qualified,
    anchor: Anchor::Alphanumeric,
    empty_allowed: true,
    reserved: &[],
    structure: Structure::NoSlash,
    max_len: Some(LABEL_MAX_LENGTH),
    reject_numeric: false,
    allow_placeholder: true,
};
