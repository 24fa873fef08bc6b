//! Charset and anchor matching shared by every rule.

use pkg_constants::names::{
    DNS_LABEL_MAX_LENGTH, DNS_SUBDOMAIN_MAX_LENGTH, LABEL_KEY_SEPARATOR, LIST_DELIMITERS,
    WILDCARD,
};

use crate::error::Violation;
use crate::rule::{Anchor, CharClass, Rule, Structure};

pub(crate) fn check(rule: &Rule, value: &str) -> Result<(), Violation> {
    if value.is_empty() {
        return if rule.empty_allowed {
            Ok(())
        } else {
            Err(Violation::Empty)
        };
    }

    if value == WILDCARD || rule.reserved.iter().any(|r| *r == value) {
        return Err(Violation::Reserved);
    }

    match rule.structure {
        Structure::Single => check_segment(rule, value),
        Structure::NoSlash => {
            if value.contains(LABEL_KEY_SEPARATOR) {
                return Err(Violation::SlashNotAllowed);
            }
            check_segment(rule, value)
        }
        Structure::PrefixedName => check_prefixed_name(rule, value),
    }
}

fn check_prefixed_name(rule: &Rule, value: &str) -> Result<(), Violation> {
    let Some((prefix, name)) = value.split_once(LABEL_KEY_SEPARATOR) else {
        return check_segment(rule, value);
    };

    if name.contains(LABEL_KEY_SEPARATOR) {
        return Err(Violation::MultipleSlashes);
    }
    if prefix.is_empty() {
        return Err(Violation::EmptyPrefix);
    }
    if name.is_empty() {
        return Err(Violation::EmptyName);
    }

    check_subdomain(prefix).map_err(|v| Violation::InvalidPrefix(Box::new(v)))?;
    check_segment(rule, name)
}

/// Lowercase RFC 1123 subdomain: dot-separated DNS labels.
fn check_subdomain(domain: &str) -> Result<(), Violation> {
    check_length(domain, Some(DNS_SUBDOMAIN_MAX_LENGTH))?;
    check_chars(domain, CharClass::DnsSubdomain)?;

    for label in domain.split('.') {
        if label.is_empty() {
            return Err(Violation::EmptyDomainSegment);
        }
        check_length(label, Some(DNS_LABEL_MAX_LENGTH))?;
        check_anchor(label, Anchor::Alphanumeric)?;
    }

    Ok(())
}

fn check_segment(rule: &Rule, segment: &str) -> Result<(), Violation> {
    check_length(segment, rule.max_len)?;
    check_chars(segment, rule.charset)?;
    check_anchor(segment, rule.anchor)?;

    if rule.reject_numeric && segment.chars().all(|c| c.is_ascii_digit()) {
        return Err(Violation::Numeric);
    }

    Ok(())
}

fn check_length(segment: &str, max_len: Option<usize>) -> Result<(), Violation> {
    match max_len {
        Some(max) if segment.len() > max => Err(Violation::TooLong {
            max,
            len: segment.len(),
        }),
        _ => Ok(()),
    }
}

fn check_chars(segment: &str, charset: CharClass) -> Result<(), Violation> {
    for c in segment.chars() {
        if LIST_DELIMITERS.contains(&c) {
            return Err(Violation::ReservedDelimiter(c));
        }
        if !charset.allows(c) {
            return Err(Violation::InvalidCharacter {
                found: c,
                allowed: charset.describe(),
            });
        }
    }
    Ok(())
}

fn check_anchor(segment: &str, anchor: Anchor) -> Result<(), Violation> {
    let (Some(first), Some(last)) = (segment.chars().next(), segment.chars().next_back()) else {
        return Ok(());
    };

    let (start_ok, start_expected) = match anchor {
        Anchor::None => return Ok(()),
        Anchor::Alphanumeric => (first.is_ascii_alphanumeric(), "an alphanumeric character"),
        Anchor::LetterStart => (first.is_ascii_alphabetic(), "a letter"),
    };
    if !start_ok {
        return Err(Violation::InvalidStart {
            found: first,
            expected: start_expected,
        });
    }

    if !last.is_ascii_alphanumeric() {
        return Err(Violation::InvalidEnd {
            found: last,
            expected: "an alphanumeric character",
        });
    }

    Ok(())
}
