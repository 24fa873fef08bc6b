use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::rule::{self, Rule};

/// The resource kinds whose identifiers are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    FunctionName,
    Namespace,
    EnvVarName,
    ConfigMapKey,
    SecretKey,
    LabelKey,
    LabelValue,
}

impl Kind {
    pub const ALL: [Kind; 7] = [
        Kind::FunctionName,
        Kind::Namespace,
        Kind::EnvVarName,
        Kind::ConfigMapKey,
        Kind::SecretKey,
        Kind::LabelKey,
        Kind::LabelValue,
    ];

    /// Human readable label that prefixes every error message for this kind.
    pub fn label(self) -> &'static str {
        match self {
            Kind::FunctionName => "Function name",
            Kind::Namespace => "Namespace",
            Kind::EnvVarName => "Environment variable name",
            Kind::ConfigMapKey => "ConfigMap key",
            Kind::SecretKey => "Secret key",
            Kind::LabelKey => "Label key",
            Kind::LabelValue => "Label value",
        }
    }

    /// Stable kebab-case name, as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::FunctionName => "function-name",
            Kind::Namespace => "namespace",
            Kind::EnvVarName => "env-var-name",
            Kind::ConfigMapKey => "config-map-key",
            Kind::SecretKey => "secret-key",
            Kind::LabelKey => "label-key",
            Kind::LabelValue => "label-value",
        }
    }

    pub fn rule(self) -> &'static Rule {
        match self {
            Kind::FunctionName => &rule::FUNCTION_NAME,
            Kind::Namespace => &rule::NAMESPACE,
            Kind::EnvVarName => &rule::ENV_VAR_NAME,
            // Both data key kinds share one rule so they can never drift apart.
            Kind::ConfigMapKey | Kind::SecretKey => &rule::DATA_KEY,
            Kind::LabelKey => &rule::LABEL_KEY,
            Kind::LabelValue => &rule::LABEL_VALUE,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown identifier kind '{0}'")]
pub struct UnknownKind(pub String);

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_kind_name() {
        for kind in Kind::ALL {
            assert_eq!(kind.as_str().parse::<Kind>(), Ok(kind));
        }
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = "label".parse::<Kind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown identifier kind 'label'");
    }

    #[test]
    fn serde_uses_kind_names() {
        for kind in Kind::ALL {
            let yaml = serde_yaml::to_string(&kind).unwrap();
            assert_eq!(yaml.trim(), kind.as_str());
            assert_eq!(serde_yaml::from_str::<Kind>(&yaml).unwrap(), kind);
        }
        assert_eq!(
            serde_yaml::from_str::<Kind>("label-key").unwrap(),
            Kind::LabelKey
        );
        assert!(serde_yaml::from_str::<Kind>("LabelKey").is_err());
    }

    #[test]
    fn data_keys_share_a_rule() {
        assert!(std::ptr::eq(Kind::ConfigMapKey.rule(), Kind::SecretKey.rule()));
    }
}
