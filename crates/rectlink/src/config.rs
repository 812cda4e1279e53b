use anyhow::Result;
use rectlink::RoutingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "rectlink";

const VALID_KEYS: &str = "routing.connection_margin, routing.min_rect_gap, \
    routing.obstacle_clearance, routing.border_epsilon, routing.angle_epsilon";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing: Option<RoutingConfig>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `rectlink config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents)?;
        if let Some(routing) = &config.routing {
            check_routing(routing)?;
        }
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("using default configuration: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# rectlink configuration\n{yaml}");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Routing settings, falling back to the defaults.
    pub fn routing(&self) -> RoutingConfig {
        self.routing.unwrap_or_default()
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let Some(field) = key.strip_prefix("routing.") else {
            anyhow::bail!("Unknown config key: {key}. Valid keys: {VALID_KEYS}");
        };

        let number: f64 = value
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid value for {key}: {value}. Must be a number."))?;

        let mut routing = self.routing();
        match field {
            "connection_margin" => routing.connection_margin = number,
            "min_rect_gap" => routing.min_rect_gap = number,
            "obstacle_clearance" => routing.obstacle_clearance = number,
            "border_epsilon" => routing.border_epsilon = number,
            "angle_epsilon" => routing.angle_epsilon = number,
            _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {VALID_KEYS}"),
        }
        check_routing(&routing)?;
        self.routing = Some(routing);
        Ok(())
    }
}

/// Every value must be a positive finite number, and lead-out points must
/// land outside the collision bands.
fn check_routing(routing: &RoutingConfig) -> Result<()> {
    let fields = [
        ("routing.connection_margin", routing.connection_margin),
        ("routing.min_rect_gap", routing.min_rect_gap),
        ("routing.obstacle_clearance", routing.obstacle_clearance),
        ("routing.border_epsilon", routing.border_epsilon),
        ("routing.angle_epsilon", routing.angle_epsilon),
    ];
    for (key, value) in fields {
        if !value.is_finite() || value <= 0.0 {
            anyhow::bail!("Invalid value for {key}: {value}. Must be a positive number.");
        }
    }

    if routing.obstacle_clearance >= routing.connection_margin {
        anyhow::bail!(
            "routing.obstacle_clearance ({}) must be smaller than routing.connection_margin ({})",
            routing.obstacle_clearance,
            routing.connection_margin
        );
    }
    Ok(())
}
