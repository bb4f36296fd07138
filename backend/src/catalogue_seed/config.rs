//! Catalogue seeding configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Configuration values controlling catalogue seeding at startup.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATALOGUE_SEED")]
pub struct CatalogueSeedSettings {
    /// Seed the catalogue on startup; defaults to `true`.
    pub enabled: Option<bool>,
    /// Optional fixture path overriding the bundled catalogue.
    pub fixture_path: Option<PathBuf>,
}

impl CatalogueSeedSettings {
    /// Whether seeding should run.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}
