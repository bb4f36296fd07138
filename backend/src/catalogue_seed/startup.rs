//! Startup seeding orchestration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::info;

use crate::catalogue_seed::config::CatalogueSeedSettings;
use crate::domain::ports::CourseRepository;
use crate::domain::{CatalogueSeedOutcome, CatalogueSeeder, CatalogueSeedingError, SeedingResult};

/// Catalogue fixture compiled into the binary.
pub const BUNDLED_CATALOGUE: &str = include_str!("../../fixtures/catalogue/courses.json");

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Fixture override could not be read.
    #[error("failed to read catalogue fixture at {path}: {source}")]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Fixture parsing, validation or persistence failed.
    #[error("catalogue seeding error: {0}")]
    Seeding(#[from] CatalogueSeedingError),
}

/// Seed the course catalogue when enabled.
///
/// Uses the fixture at `settings.fixture_path` when set, otherwise
/// [`BUNDLED_CATALOGUE`]. Returns `None` when seeding is disabled.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use academy::catalogue_seed::{CatalogueSeedSettings, seed_catalogue_on_startup};
/// use academy::outbound::memory::{MemoryCourseRepository, MemoryStore};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let courses = Arc::new(MemoryCourseRepository::new(MemoryStore::new()));
/// let outcome = seed_catalogue_on_startup(&CatalogueSeedSettings::default(), courses).await?;
/// assert!(outcome.is_some());
/// # Ok(())
/// # }
/// ```
pub async fn seed_catalogue_on_startup<C>(
    settings: &CatalogueSeedSettings,
    courses: Arc<C>,
) -> Result<Option<CatalogueSeedOutcome>, StartupSeedingError>
where
    C: CourseRepository,
{
    if !settings.is_enabled() {
        info!(reason = "disabled", "catalogue seeding skipped");
        return Ok(None);
    }

    let fixture = match &settings.fixture_path {
        Some(path) => load_fixture(path)?,
        None => BUNDLED_CATALOGUE.to_owned(),
    };

    let outcome = CatalogueSeeder::new(courses)
        .seed_from_json(&fixture)
        .await?;

    match outcome.result {
        SeedingResult::Applied => {
            info!(course_count = outcome.course_count, "catalogue seeding applied");
        }
        SeedingResult::AlreadySeeded => {
            info!(
                course_count = outcome.course_count,
                "catalogue already populated; skipping"
            );
        }
    }

    Ok(Some(outcome))
}

fn read_error(path: &Path, source: std::io::Error) -> StartupSeedingError {
    StartupSeedingError::FixtureRead {
        path: path.to_path_buf(),
        source,
    }
}

fn load_fixture(path: &Path) -> Result<String, StartupSeedingError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "fixture path must be a file",
            ),
        )
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|source| read_error(path, source))?;
    dir.read_to_string(Path::new(file_name))
        .map_err(|source| read_error(path, source))
}
