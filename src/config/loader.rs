//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::SassyConfig;
use crate::config::validation::normalize_mount;
use crate::error::ConfigError;

/// Load and validate middleware options from a TOML file.
pub fn load_config(path: &Path) -> Result<SassyConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: SassyConfig = toml::from_str(&content)?;

    config.mount = normalize_mount(&config.mount)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::OutputStyle;

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sassy.toml");
        fs::write(
            &path,
            "mount = \"/css/\"\nmax_age = 200\noutput_style = \"compressed\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.mount, "/css");
        assert_eq!(config.max_age, 200);
        assert_eq!(config.output_style, OutputStyle::Compressed);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = load_config(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));

        let path = dir.path().join("bad.toml");
        fs::write(&path, "max_age = \"soon\"").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Parse(_))));

        fs::write(&path, "mount = \"css\"").unwrap();
        assert!(matches!(
            load_config(&path),
            Err(ConfigError::InvalidMount(_))
        ));
    }
}
