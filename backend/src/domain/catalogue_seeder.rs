//! Catalogue seeding orchestration.
//!
//! Parses a catalogue fixture into validated courses and stores them through
//! the course repository port. Seeding is run-once: a catalogue that already
//! holds courses is left untouched.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::domain::ports::CourseRepository;
use crate::domain::{CourseDraft, CourseValidationError, NewCourse};

/// Catalogue fixture format understood by the seeder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CatalogueFixture {
    /// Format version; only `1` is understood.
    pub version: u32,
    /// Courses in the order they should be created.
    pub courses: Vec<CourseDraft>,
}

const SUPPORTED_VERSION: u32 = 1;

/// Whether a seeding attempt wrote anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedingResult {
    /// Courses were created.
    Applied,
    /// The catalogue already held courses; nothing was written.
    AlreadySeeded,
}

/// Result of attempting to seed the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueSeedOutcome {
    /// Number of courses in the fixture.
    pub course_count: usize,
    /// Persistence outcome for the run.
    pub result: SeedingResult,
}

/// Errors raised while preparing or applying catalogue seed data.
#[derive(Debug, Error)]
pub enum CatalogueSeedingError {
    /// Fixture was not valid JSON for the expected shape.
    #[error("catalogue fixture could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    /// Fixture declared a format version this build does not understand.
    #[error("catalogue fixture version {found} is not supported")]
    UnsupportedVersion { found: u32 },
    /// A course failed validation.
    #[error("catalogue fixture course {index} is invalid: {source}")]
    InvalidCourse {
        index: usize,
        #[source]
        source: CourseValidationError,
    },
}

/// Service that seeds the course catalogue from a fixture.
#[derive(Clone)]
pub struct CatalogueSeeder<C> {
    courses: Arc<C>,
}

impl<C> CatalogueSeeder<C> {
    /// Create a new seeder over the given course repository.
    pub fn new(courses: Arc<C>) -> Self {
        Self { courses }
    }
}

impl<C> CatalogueSeeder<C>
where
    C: CourseRepository,
{
    /// Parse and apply a JSON catalogue fixture.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueSeedingError`] when the fixture cannot be parsed or
    /// any course fails validation. Nothing is stored in that case.
    pub async fn seed_from_json(
        &self,
        fixture_json: &str,
    ) -> Result<CatalogueSeedOutcome, CatalogueSeedingError> {
        let fixture: CatalogueFixture = serde_json::from_str(fixture_json)?;
        self.seed(fixture).await
    }

    /// Validate and apply a parsed fixture.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueSeedingError`] when the fixture version is
    /// unsupported or any course fails validation.
    pub async fn seed(
        &self,
        fixture: CatalogueFixture,
    ) -> Result<CatalogueSeedOutcome, CatalogueSeedingError> {
        if fixture.version != SUPPORTED_VERSION {
            return Err(CatalogueSeedingError::UnsupportedVersion {
                found: fixture.version,
            });
        }
        let courses = fixture
            .courses
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                NewCourse::new(draft)
                    .map_err(|source| CatalogueSeedingError::InvalidCourse { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let course_count = courses.len();

        if !self.courses.list_all().await.is_empty() {
            return Ok(CatalogueSeedOutcome {
                course_count,
                result: SeedingResult::AlreadySeeded,
            });
        }

        for course in courses {
            let created = self.courses.create(course).await;
            info!(course_id = %created.id(), category = created.category(), "seeded course");
        }

        Ok(CatalogueSeedOutcome {
            course_count,
            result: SeedingResult::Applied,
        })
    }
}
