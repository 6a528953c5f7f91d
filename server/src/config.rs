use anyhow::{anyhow, Context, Result};
use dirs::config_dir;
use ron::de::from_str;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
pub use wordpass_dto::config::*;

pub fn default_config_path() -> Result<String> {
    let mut path =
        config_dir().ok_or_else(|| anyhow!("Could not find platform specific config directory."))?;
    path.push("wordpass/config.ron");
    Ok(path.to_string_lossy().into_owned())
}

pub fn load_config(config_path: &str) -> Result<Config> {
    let path = Path::new(config_path);
    let config: Config = if path.exists() {
        // If the file exists, attempt to read and parse it.
        let config_contents = fs::read_to_string(path)
            .with_context(|| format!("Unable to read config file: {config_path}"))?;
        from_str(&config_contents)
            .with_context(|| format!("Unable to parse config file: {config_path}"))?
    } else {
        // If the file does not exist, create a default config and save it.
        let config = Config::default();
        save_config(&config, config_path)?;
        config
    };
    config
        .server
        .validate()
        .map_err(|e| anyhow!("Invalid config file {config_path}: {e}"))?;
    debug!("Loaded config: {}", config_path);
    Ok(config)
}

pub fn save_config(config: &Config, config_path: &str) -> Result<()> {
    let path = Path::new(config_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Unable to create config directory: {}", parent.display()))?;
    }

    let ron_string = ron::ser::to_string_pretty(config, ron::ser::PrettyConfig::default())?;
    // Only write the file if the content has changed
    let existing_content = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };
    if existing_content != ron_string {
        fs::write(path, ron_string.as_bytes())
            .with_context(|| format!("Unable to write config file: {config_path}"))?;
        info!("Saved config file: {}", config_path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_config_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/config.ron");
        let path = path.to_str().unwrap();
        let config = load_config(path).unwrap();
        assert_eq!(config, Config::default());
        assert!(Path::new(path).exists());
        // Second load reads the file back
        assert_eq!(load_config(path).unwrap(), config);
    }

    #[test]
    fn existing_config_is_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(&path, r#"(server: (addr: "0.0.0.0", port: 9000))"#).unwrap();
        let config = load_config(path.to_str().unwrap()).unwrap();
        assert_eq!(config.server.addr, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn missing_server_section_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(&path, "()").unwrap();
        let config = load_config(path.to_str().unwrap()).unwrap();
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(&path, r#"(server: (addr: "0.0.0.0", port: 0))"#).unwrap();
        assert!(load_config(path.to_str().unwrap()).is_err());
        fs::write(&path, "not ron").unwrap();
        assert!(load_config(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn unchanged_config_is_not_rewritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ron");
        let path_str = path.to_str().unwrap();
        save_config(&Config::default(), path_str).unwrap();
        let modified = fs::metadata(&path).unwrap().modified().unwrap();
        save_config(&Config::default(), path_str).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), modified);
    }
}
