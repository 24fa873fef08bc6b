use std::path::Path;
use tracing::debug;

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(
    path: impl AsRef<Path>,
) -> anyhow::Result<T> {
    let path = path.as_ref();
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Config file {} not found, using defaults", path.display());
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: T = serde_yaml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::FunctionConfigFile;
    use pkg_constants::paths::DEFAULT_FUNCTION_CONFIG;
    use std::io::Write;

    #[test]
    fn missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg: FunctionConfigFile = load_config_file(dir.path().join(DEFAULT_FUNCTION_CONFIG)).unwrap();
        assert_eq!(cfg, FunctionConfigFile::default());
    }

    #[test]
    fn loads_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name: hello\nnamespace: prod").unwrap();

        let cfg: FunctionConfigFile = load_config_file(file.path()).unwrap();
        assert_eq!(cfg.name.as_deref(), Some("hello"));
        assert_eq!(cfg.namespace.as_deref(), Some("prod"));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name: [unterminated").unwrap();

        let res: anyhow::Result<FunctionConfigFile> = load_config_file(file.path());
        assert!(res.is_err());
    }
}
