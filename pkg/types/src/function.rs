use pkg_validation::{Kind, ValidationError, validate};
use serde::Deserialize;

/// Function configuration file (YAML).
///
/// Example `func.yaml`:
/// ```yaml
/// name: hello
/// namespace: prod
/// envs:
///   - name: LOG_LEVEL
///     value: debug
/// labels:
///   - key: app.kubernetes.io/part-of
///     value: "{{ env.TEAM }}"
/// volumes:
///   - configMap: hello-settings
///     path: /workspace/config
///     items: [settings.json]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FunctionConfigFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub envs: Vec<Env>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub volumes: Vec<Volume>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Env {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Label {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

/// A ConfigMap or Secret mounted into the function, optionally restricted to
/// a subset of its keys.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Volume {
    #[serde(default, alias = "configMap", alias = "config-map")]
    pub config_map: Option<String>,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

impl FunctionConfigFile {
    /// Every user supplied identifier in the file, paired with its kind, in
    /// declaration order.
    pub fn identifiers(&self) -> Vec<(Kind, &str)> {
        let mut ids = vec![(Kind::FunctionName, self.name.as_deref().unwrap_or_default())];

        if let Some(ns) = self.namespace.as_deref().filter(|ns| !ns.is_empty()) {
            ids.push((Kind::Namespace, ns));
        }

        ids.extend(
            self.envs
                .iter()
                .filter_map(|env| env.name.as_deref())
                .map(|name| (Kind::EnvVarName, name)),
        );

        for label in &self.labels {
            ids.push((Kind::LabelKey, label.key.as_str()));
            ids.push((Kind::LabelValue, label.value.as_str()));
        }

        for volume in &self.volumes {
            let kind = match (&volume.config_map, &volume.secret) {
                (Some(_), _) => Kind::ConfigMapKey,
                (None, Some(_)) => Kind::SecretKey,
                (None, None) => continue,
            };
            ids.extend(volume.items.iter().map(|item| (kind, item.as_str())));
        }

        ids
    }

    /// Validate every identifier, collecting all rejections.
    pub fn validate(&self) -> Vec<ValidationError> {
        self.identifiers()
            .into_iter()
            .filter_map(|(kind, value)| validate(kind, value).err())
            .collect()
    }
}
