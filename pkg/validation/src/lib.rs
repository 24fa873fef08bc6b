//! Identifier validation for function deployments.
//!
//! Every user supplied name is checked here before it reaches the cluster
//! API. Validation is a pure function of `(Kind, &str)`: rules are `const`
//! data, nothing is cached and nothing is normalized, so the value is judged
//! exactly as given.
//!
//! ```
//! use pkg_validation::{validate_function_name, validate_label_value};
//!
//! assert!(validate_function_name("hello-world").is_ok());
//! assert!(validate_label_value("{{ env.TEAM }}").is_ok());
//!
//! let err = validate_function_name("Hello").unwrap_err();
//! assert!(err.to_string().starts_with("Function name 'Hello'"));
//! ```

pub mod error;
pub mod kind;
mod matcher;
pub mod placeholder;
pub mod rule;

pub use error::{ValidationError, Violation};
pub use kind::Kind;
pub use placeholder::is_placeholder;
pub use rule::Rule;

use tracing::{debug, trace};

/// Validate `value` against the rule for `kind`.
pub fn validate(kind: Kind, value: &str) -> Result<(), ValidationError> {
    let rule = kind.rule();

    if rule.allow_placeholder && is_placeholder(value) {
        trace!(%kind, value, "template placeholder accepted");
        return Ok(());
    }

    matcher::check(rule, value).map_err(|violation| {
        debug!(%kind, value, %violation, "identifier rejected");
        ValidationError::new(kind, value, violation)
    })
}

/// Function names: lowercase letters, digits and `-`, alphanumeric at both
/// ends, and not purely numeric.
pub fn validate_function_name(name: &str) -> Result<(), ValidationError> {
    validate(Kind::FunctionName, name)
}

/// Namespaces: DNS-1035 labels, so the first character must be a letter.
pub fn validate_namespace(namespace: &str) -> Result<(), ValidationError> {
    validate(Kind::Namespace, namespace)
}

/// Environment variable names accept anything except the wildcard and the
/// list delimiters `;`, `:` and `,`.
pub fn validate_env_var_name(name: &str) -> Result<(), ValidationError> {
    validate(Kind::EnvVarName, name)
}

pub fn validate_config_map_key(key: &str) -> Result<(), ValidationError> {
    validate(Kind::ConfigMapKey, key)
}

pub fn validate_secret_key(key: &str) -> Result<(), ValidationError> {
    validate(Kind::SecretKey, key)
}

/// Label keys are `[prefix/]name`; the prefix must be a lowercase DNS
/// subdomain.
pub fn validate_label_key(key: &str) -> Result<(), ValidationError> {
    validate(Kind::LabelKey, key)
}

/// Label values may be empty or a `{{ env.NAME }}` placeholder; otherwise
/// they follow the label key name rules and may not contain `/`.
pub fn validate_label_value(value: &str) -> Result<(), ValidationError> {
    validate(Kind::LabelValue, value)
}
