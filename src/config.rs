use crate::error::Result;
use crate::utils::constants::{DEFAULT_CELL_VALUE, DEFAULT_DECIMAL_PLACES, SETTINGS_ENV_PREFIX};
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

/// Run settings, layered from built-in defaults, an optional settings file
/// and `GRID_*` environment variables (highest precedence)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProcessingSettings {
    /// Value for cells that were never observed nor interpolated
    pub default_value: i32,

    /// Rendered instead of a blank field for non-ocean cells in value grids
    #[serde(default)]
    pub land_value: Option<i32>,

    #[validate(range(min = 0, max = 6))]
    pub decimal_places: usize,

    pub log_missing_cells: bool,
}

impl Default for ProcessingSettings {
    fn default() -> Self {
        Self {
            default_value: DEFAULT_CELL_VALUE,
            land_value: None,
            decimal_places: DEFAULT_DECIMAL_PLACES,
            log_missing_cells: true,
        }
    }
}

impl ProcessingSettings {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(SETTINGS_ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, environment: Environment) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("default_value", i64::from(defaults.default_value))?
            .set_default("decimal_places", defaults.decimal_places as u64)?
            .set_default("log_missing_cells", defaults.log_missing_cells)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: Self = builder
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }
}
