//! Catalogue courses and the value objects they own.
//!
//! Courses arrive as [`CourseDraft`] payloads (seed fixtures, tests),
//! are validated into [`NewCourse`], and become a [`Course`] once the store
//! allocates an identifier. Lessons, materials and tests have no lifecycle
//! of their own.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{CourseId, LessonId, MaterialId, QuestionId, TestId, UserId};


/// Category value that stands for "every category" in catalogue filters.
pub const ALL_CATEGORIES: &str = "Barcha yo'nalishlar";

/// Validation errors returned by course constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseValidationError {
    EmptyField {
        field: &'static str,
    },
    InvalidRating {
        value: String,
    },
    DuplicateId {
        field: &'static str,
        id: u64,
    },
    AnswerOutOfRange {
        question: QuestionId,
        answer: usize,
        options: usize,
    },
}

impl fmt::Display for CourseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::InvalidRating { value } => {
                write!(f, "rating must be a decimal number (got {value:?})")
            }
            Self::DuplicateId { field, id } => write!(f, "{field} contains id {id} twice"),
            Self::AnswerOutOfRange {
                question,
                answer,
                options,
            } => write!(
                f,
                "question {question} has correct answer {answer} but only {options} options"
            ),
        }
    }
}

impl std::error::Error for CourseValidationError {}

fn validate_non_empty(
    value: String,
    field: &'static str,
) -> Result<String, CourseValidationError> {
    if value.trim().is_empty() {
        return Err(CourseValidationError::EmptyField { field });
    }
    Ok(value)
}

fn ensure_unique_ids<I, T>(ids: I, field: &'static str) -> Result<(), CourseValidationError>
where
    I: IntoIterator<Item = T>,
    T: Copy + Eq + Hash + Into<u64>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CourseValidationError::DuplicateId {
                field,
                id: id.into(),
            });
        }
    }
    Ok(())
}

static RATING_RE: OnceLock<Regex> = OnceLock::new();

fn rating_regex() -> &'static Regex {
    RATING_RE.get_or_init(|| {
        Regex::new(r"^[0-9]+(\.[0-9]+)?$")
            .unwrap_or_else(|error| panic!("rating regex failed to compile: {error}"))
    })
}

/// Average review score kept as the decimal text clients display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rating(String);

impl Rating {
    /// Validate a decimal rating such as `4.9`.
    pub fn new(raw: impl Into<String>) -> Result<Self, CourseValidationError> {
        let value = raw.into();
        if !rating_regex().is_match(&value) {
            return Err(CourseValidationError::InvalidRating { value });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Rating {
    type Error = CourseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for String {
    fn from(value: Rating) -> Self {
        value.0
    }
}

/// Video lesson embedded from YouTube.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoLesson {
    pub id: LessonId,
    pub title: String,
    pub duration: String,
    pub youtube_id: String,
}

/// Downloadable material format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Pdf,
    Doc,
}

/// Downloadable course material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseMaterial {
    pub id: MaterialId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MaterialKind,
    pub filename: String,
    /// Human-readable size, e.g. `2.5 MB`.
    pub size: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestQuestionDto {
    id: QuestionId,
    question: String,
    options: Vec<String>,
    correct_answer: usize,
}

/// Multiple-choice question.
///
/// ## Invariants
/// - `correct_answer` indexes into `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TestQuestionDto")]
pub struct TestQuestion {
    id: QuestionId,
    question: String,
    options: Vec<String>,
    correct_answer: usize,
}

impl TestQuestion {
    /// Validate and construct a question.
    pub fn new(
        id: QuestionId,
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer: usize,
    ) -> Result<Self, CourseValidationError> {
        let question = validate_non_empty(question.into(), "question")?;
        if correct_answer >= options.len() {
            return Err(CourseValidationError::AnswerOutOfRange {
                question: id,
                answer: correct_answer,
                options: options.len(),
            });
        }
        Ok(Self {
            id,
            question,
            options,
            correct_answer,
        })
    }

    pub const fn id(&self) -> QuestionId {
        self.id
    }
    pub fn question(&self) -> &str {
        &self.question
    }
    pub fn options(&self) -> &[String] {
        &self.options
    }
    pub const fn correct_answer(&self) -> usize {
        self.correct_answer
    }
}

impl TryFrom<TestQuestionDto> for TestQuestion {
    type Error = CourseValidationError;

    fn try_from(dto: TestQuestionDto) -> Result<Self, Self::Error> {
        Self::new(dto.id, dto.question, dto.options, dto.correct_answer)
    }
}

/// Quiz attached to a course.
///
/// `question_count` is the advertised size of the quiz and is not checked
/// against `questions`; published quizzes may list fewer questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseTest {
    pub id: TestId,
    pub title: String,
    pub question_count: u32,
    pub duration: String,
    #[serde(default)]
    pub questions: Vec<TestQuestion>,
}

/// Input payload for [`NewCourse::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub price: u64,
    pub duration: String,
    pub rating: String,
    pub review_count: u32,
    pub image_url: String,
    pub category: String,
    pub teacher_id: UserId,
    #[serde(default)]
    pub video_lessons: Vec<VideoLesson>,
    #[serde(default)]
    pub materials: Vec<CourseMaterial>,
    #[serde(default)]
    pub tests: Vec<CourseTest>,
}

/// Validated course content awaiting an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    title: String,
    description: String,
    price: u64,
    duration: String,
    rating: Rating,
    review_count: u32,
    image_url: String,
    category: String,
    teacher_id: UserId,
    video_lessons: Vec<VideoLesson>,
    materials: Vec<CourseMaterial>,
    tests: Vec<CourseTest>,
}

impl NewCourse {
    /// Validate a draft.
    ///
    /// Lesson, material and test ids must be unique within the course.
    pub fn new(draft: CourseDraft) -> Result<Self, CourseValidationError> {
        Self::try_from(draft)
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl TryFrom<CourseDraft> for NewCourse {
    type Error = CourseValidationError;

    fn try_from(draft: CourseDraft) -> Result<Self, Self::Error> {
        let title = validate_non_empty(draft.title, "course.title")?;
        let category = validate_non_empty(draft.category, "course.category")?;
        let rating = Rating::new(draft.rating)?;
        ensure_unique_ids(
            draft.video_lessons.iter().map(|lesson| lesson.id),
            "course.videoLessons",
        )?;
        ensure_unique_ids(
            draft.materials.iter().map(|material| material.id),
            "course.materials",
        )?;
        ensure_unique_ids(draft.tests.iter().map(|test| test.id), "course.tests")?;

        Ok(Self {
            title,
            description: draft.description,
            price: draft.price,
            duration: draft.duration,
            rating,
            review_count: draft.review_count,
            image_url: draft.image_url,
            category,
            teacher_id: draft.teacher_id,
            video_lessons: draft.video_lessons,
            materials: draft.materials,
            tests: draft.tests,
        })
    }
}

/// Catalogue course. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    id: CourseId,
    #[serde(flatten)]
    content: NewCourse,
}

impl Course {
    /// Attach an allocated identifier to validated content.
    #[must_use]
    pub const fn from_new(id: CourseId, content: NewCourse) -> Self {
        Self { id, content }
    }

    pub const fn id(&self) -> CourseId {
        self.id
    }
    pub fn title(&self) -> &str {
        &self.content.title
    }
    pub fn description(&self) -> &str {
        &self.content.description
    }
    pub const fn price(&self) -> u64 {
        self.content.price
    }
    pub fn duration(&self) -> &str {
        &self.content.duration
    }
    pub const fn rating(&self) -> &Rating {
        &self.content.rating
    }
    pub const fn review_count(&self) -> u32 {
        self.content.review_count
    }
    pub fn image_url(&self) -> &str {
        &self.content.image_url
    }
    pub fn category(&self) -> &str {
        &self.content.category
    }
    /// Weak reference; the teacher need not exist as a stored user.
    pub const fn teacher_id(&self) -> UserId {
        self.content.teacher_id
    }
    pub fn video_lessons(&self) -> &[VideoLesson] {
        &self.content.video_lessons
    }
    pub fn materials(&self) -> &[CourseMaterial] {
        &self.content.materials
    }
    pub fn tests(&self) -> &[CourseTest] {
        &self.content.tests
    }

    /// Whether `lesson` is one of this course's video lessons.
    #[must_use]
    pub fn has_lesson(&self, lesson: LessonId) -> bool {
        self.video_lessons().iter().any(|candidate| candidate.id == lesson)
    }

    /// Whether `test` is one of this course's tests.
    #[must_use]
    pub fn has_test(&self, test: TestId) -> bool {
        self.tests().iter().any(|candidate| candidate.id == test)
    }
}

/// Category restriction applied when listing the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every course.
    #[default]
    All,
    /// Courses whose category equals the name exactly.
    Named(String),
}

impl CategoryFilter {
    /// Interpret an optional query value.
    ///
    /// Absent, empty, and the [`ALL_CATEGORIES`] sentinel all select every
    /// course. Anything else is matched exactly, without case folding.
    ///
    /// # Examples
    /// ```
    /// use academy::domain::{CategoryFilter, ALL_CATEGORIES};
    ///
    /// assert_eq!(CategoryFilter::from_query(None), CategoryFilter::All);
    /// assert_eq!(CategoryFilter::from_query(Some(ALL_CATEGORIES)), CategoryFilter::All);
    /// assert_eq!(
    ///     CategoryFilter::from_query(Some("Dasturlash")),
    ///     CategoryFilter::Named("Dasturlash".to_owned()),
    /// );
    /// ```
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") | Some(ALL_CATEGORIES) => Self::All,
            Some(name) => Self::Named(name.to_owned()),
        }
    }

    /// Whether `course` passes the filter.
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => course.category() == name,
        }
    }
}
