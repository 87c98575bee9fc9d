use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_cluster_name")]
    pub cluster_name: String,
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
    pub engine: EngineConfig,
}

/// Where the resource-manager console API lives.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    pub base_url: String,
}

fn default_cluster_name() -> String {
    "default".to_string()
}

fn default_listen_port() -> u16 {
    8090
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| format!("reading config {}: {}", path.display(), e))?;
        let cfg: Config =
            serde_yaml::from_str(&data).map_err(|e| format!("parsing config: {}", e))?;

        if cfg.engine.base_url.is_empty() {
            return Err("engine.base_url must be configured".into());
        }

        Ok(cfg)
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.listen_port)
    }
}
