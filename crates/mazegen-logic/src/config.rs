//! Generator configuration.
//!
//! ```
//! use mazegen_logic::config::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_json(r#"{ "use_test_map": true }"#).unwrap();
//! assert!(config.generate_new_map);
//! assert_eq!(config.template().rows(), 4);
//! ```

use crate::grid::TemplateGrid;
use crate::quadrant::QuadrantLayout;
use crate::templates;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid generator config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings the generator reads once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// When false the generator leaves the scene alone.
    pub generate_new_map: bool,
    /// Use the 4×4 test template instead of the full maze quadrant.
    pub use_test_map: bool,
    /// Explicit template, overriding both built-ins.
    pub template: Option<TemplateGrid>,
    pub layout: QuadrantLayout,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generate_new_map: true,
            use_test_map: false,
            template: None,
            layout: QuadrantLayout::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The template this config selects.
    pub fn template(&self) -> TemplateGrid {
        match &self.template {
            Some(grid) => grid.clone(),
            None => templates::builtin(self.use_test_map),
        }
    }

    /// Human-readable name of the selected template.
    pub fn template_name(&self) -> &'static str {
        match (&self.template, self.use_test_map) {
            (Some(_), _) => "custom",
            (None, true) => "test map",
            (None, false) => "level map",
        }
    }
}
