//! Startup wiring for catalogue seeding.

mod config;
mod startup;

pub use config::CatalogueSeedSettings;
pub use startup::{BUNDLED_CATALOGUE, StartupSeedingError, seed_catalogue_on_startup};
