use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub static_files_path: String,
    pub leaderboard_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            static_files_path: "web".to_string(),
            leaderboard_limit: 20,
        }
    }
}

impl ServerConfig {
    pub fn from_yaml_file(path: &str) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read config file '{}': {}", path, e))?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, String> {
        let config: ServerConfig = serde_yaml_ng::from_str(content)
            .map_err(|e| format!("failed to parse config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.listen_addr.is_empty() {
            return Err("listen_addr must not be empty".to_string());
        }
        if self.static_files_path.is_empty() {
            return Err("static_files_path must not be empty".to_string());
        }
        if self.leaderboard_limit == 0 {
            return Err("leaderboard_limit must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_yaml_overrides_defaults() {
        let config = ServerConfig::from_yaml_str("listen_addr: 127.0.0.1:8080\n").unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.leaderboard_limit, ServerConfig::default().leaderboard_limit);
    }

    #[test]
    fn test_zero_leaderboard_limit_is_rejected() {
        let result = ServerConfig::from_yaml_str("leaderboard_limit: 0\n");
        assert!(result.is_err());
    }
}
