use crate::assets::AssetLoader;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Settings applied to every plot unless overridden
    #[serde(default)]
    pub defaults: RenderDefaults,

    /// Named plot definitions
    #[serde(default)]
    pub plots: BTreeMap<String, PlotConfig>,

    /// Plot rendered by the CLI when none is named
    #[serde(default)]
    pub default_plot: Option<String>,
}

/// Global render defaults
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RenderDefaults {
    #[serde(default = "default_mode")]
    pub mode: String,

    #[serde(default = "default_size")]
    pub width: u32,

    #[serde(default = "default_size")]
    pub height: u32,

    #[serde(default = "default_contours")]
    pub contours: bool,
}

fn default_mode() -> String {
    "hsl".to_string()
}

fn default_size() -> u32 {
    600
}

fn default_contours() -> bool {
    true
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            width: default_size(),
            height: default_size(),
            contours: default_contours(),
        }
    }
}

/// Configuration for one named plot
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PlotConfig {
    /// Function name from the built-in catalogue
    pub function: String,

    /// Real axis range `[min, max]`
    #[serde(default = "default_range")]
    pub x: [f64; 2],

    /// Imaginary axis range `[min, max]`
    #[serde(default = "default_range")]
    pub y: [f64; 2],

    #[serde(default)]
    pub mode: Option<String>,

    #[serde(default)]
    pub variant: Option<String>,

    #[serde(default)]
    pub contours: Option<bool>,
}

fn default_range() -> [f64; 2] {
    [-2.0, 2.0]
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => Self::from_yaml_or_default(&content),
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse YAML, falling back to the built-in configuration on error.
    pub fn from_yaml_or_default(content: &str) -> Self {
        match serde_yaml::from_str::<Self>(content) {
            Ok(config) => {
                tracing::info!(
                    plots = config.plots.len(),
                    default_plot = ?config.default_plot,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }

    /// Look up a plot by name
    pub fn get_plot(&self, name: &str) -> Option<&PlotConfig> {
        self.plots.get(name)
    }

    /// Get the default plot and its name
    pub fn get_default_plot(&self) -> Option<(&str, &PlotConfig)> {
        let name = self.default_plot.as_deref()?;
        self.plots.get(name).map(|plot| (name, plot))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut plots = BTreeMap::new();
        plots.insert(
            "identity".to_string(),
            PlotConfig {
                function: "identity".to_string(),
                x: default_range(),
                y: default_range(),
                mode: None,
                variant: None,
                contours: None,
            },
        );

        Self {
            defaults: RenderDefaults::default(),
            plots,
            default_plot: Some("identity".to_string()),
        }
    }
}
