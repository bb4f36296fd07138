//! Behaviour-driven tests for registration, enrollment and progress.
//!
//! Scenarios run against the in-memory adapters seeded with the bundled
//! catalogue, exercising the domain services end to end.

use std::collections::BTreeSet;
use std::sync::Arc;

use academy::catalogue_seed::{CatalogueSeedSettings, seed_catalogue_on_startup};
use academy::domain::ports::{EnrollmentCommand, EnrollmentQuery, LoginService, UserRegistration};
use academy::domain::{
    CourseId, Enrollment, EnrollmentId, Error, LessonId, LoginCredentials, Progress,
    ProgressUpdate, RegistrationRequest, UserId, UserType,
};
use academy::outbound::memory::MemoryStore;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use tokio::runtime::Runtime;

#[expect(
    dead_code,
    reason = "Shared helpers include functions used only by other integration suites."
)]
mod support;

use support::{MemoryServices, memory_services};

const PASSWORD: &str = "correct horse";

/// Wrapper for non-Clone runtime handle.
#[derive(Clone)]
struct RuntimeHandle(Arc<Runtime>);

#[derive(Default, ScenarioState)]
struct EnrollmentWorld {
    runtime: Slot<RuntimeHandle>,
    services: Slot<MemoryServices>,
    student: Slot<UserId>,
    email: Slot<String>,
    enrollment: Slot<Enrollment>,
    last_error: Slot<Error>,
}

impl EnrollmentWorld {
    fn run<T, Fut>(&self, operation: impl FnOnce(MemoryServices) -> Fut) -> T
    where
        Fut: Future<Output = T>,
    {
        let runtime = self.runtime.get().expect("runtime");
        let services = self.services.get().expect("services");
        runtime.0.block_on(operation(services))
    }

    fn record<T>(&self, result: Result<T, Error>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.last_error.set(err);
                None
            }
        }
    }

    fn register(&self, email: &str) -> Result<UserId, Error> {
        let request =
            RegistrationRequest::try_from_parts(email, PASSWORD, "Ada Lovelace", UserType::Student)
                .expect("valid registration");
        self.run(|services| async move { services.accounts.register(&request).await })
            .map(|user| user.id())
    }

    fn student(&self) -> UserId {
        self.student.get().expect("student registered")
    }
}

fn unquote(raw: &str) -> &str {
    raw.trim_matches('"')
}

fn lesson_ids(raw: &str) -> BTreeSet<LessonId> {
    unquote(raw)
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| part.trim().parse().expect("lesson id"))
        .collect()
}

#[fixture]
fn world() -> EnrollmentWorld {
    EnrollmentWorld::default()
}

// -----------------------------------------------------------------------------
// Given Steps
// -----------------------------------------------------------------------------

#[given("a seeded catalogue")]
fn a_seeded_catalogue(world: &EnrollmentWorld) {
    let runtime = Runtime::new().expect("create runtime");
    let services = memory_services(&MemoryStore::new());
    runtime
        .block_on(seed_catalogue_on_startup(
            &CatalogueSeedSettings::default(),
            services.courses.clone(),
        ))
        .expect("bundled catalogue seeds");
    world.runtime.set(RuntimeHandle(Arc::new(runtime)));
    world.services.set(services);
}

#[given("a registered student {email}")]
fn a_registered_student(world: &EnrollmentWorld, email: String) {
    let email = unquote(&email).to_owned();
    let id = world.register(&email).expect("registration succeeds");
    world.student.set(id);
    world.email.set(email);
}

// -----------------------------------------------------------------------------
// When Steps
// -----------------------------------------------------------------------------

#[when("the student enrols in course {course_id}")]
fn the_student_enrols_in_course(world: &EnrollmentWorld, course_id: u64) {
    let user_id = world.student();
    let course_id = CourseId::new(course_id).expect("valid course id");
    let result = world.run(|services| async move {
        services.enrollments.enroll(user_id, course_id).await
    });
    if let Some(enrollment) = world.record(result) {
        world.enrollment.set(enrollment);
    }
}

#[when("the student records progress {progress} with lessons {lessons}")]
fn the_student_records_progress(world: &EnrollmentWorld, progress: i64, lessons: String) {
    let enrollment_id: EnrollmentId = world.enrollment.get().expect("enrolled").id();
    let update = ProgressUpdate {
        progress: Progress::new(progress).expect("progress in range"),
        completed_lessons: lesson_ids(&lessons),
        completed_tests: BTreeSet::new(),
    };
    let result = world.run(|services| async move {
        services
            .enrollments
            .update_progress(enrollment_id, update)
            .await
    });
    if let Some(enrollment) = world.record(result) {
        world.enrollment.set(enrollment);
    }
}

#[when("another account registers with {email}")]
fn another_account_registers_with(world: &EnrollmentWorld, email: String) {
    let result = world.register(unquote(&email));
    world.record(result);
}

#[when("the student logs in with password {password}")]
fn the_student_logs_in_with_password(world: &EnrollmentWorld, password: String) {
    let email = world.email.get().expect("student email");
    let credentials =
        LoginCredentials::try_from_parts(&email, unquote(&password)).expect("valid credentials");
    let result =
        world.run(|services| async move { services.accounts.authenticate(&credentials).await });
    world.record(result);
}

// -----------------------------------------------------------------------------
// Then Steps
// -----------------------------------------------------------------------------

#[then("the enrollment progress is {progress}")]
fn the_enrollment_progress_is(world: &EnrollmentWorld, progress: u8) {
    let enrollment = world.enrollment.get().expect("enrollment recorded");
    assert_eq!(enrollment.progress().get(), progress);
}

#[then("the student has {count} enrollments")]
fn the_student_has_enrollments(world: &EnrollmentWorld, count: usize) {
    let user_id = world.student();
    let listed = world
        .run(|services| async move { services.enrollments.list_for_user(user_id).await })
        .expect("listing succeeds");
    assert_eq!(listed.len(), count);
    assert!(listed.iter().all(|entry| entry.course.is_some()));
}

#[then("the completed lessons are {lessons}")]
fn the_completed_lessons_are(world: &EnrollmentWorld, lessons: String) {
    let enrollment = world.enrollment.get().expect("enrollment recorded");
    assert_eq!(enrollment.completed_lessons(), &lesson_ids(&lessons));
}

#[then("the last operation fails with {code}")]
fn the_last_operation_fails_with(world: &EnrollmentWorld, code: String) {
    let err = world.last_error.get().expect("an operation should have failed");
    let actual = serde_json::to_value(err.code()).expect("code serialises");
    assert_eq!(actual, serde_json::json!(unquote(&code)));
}

// -----------------------------------------------------------------------------
// Scenario Bindings
// -----------------------------------------------------------------------------

#[scenario(
    path = "tests/features/enrollment.feature",
    name = "Enrolling in a course starts with zero progress"
)]
fn enrolling_starts_with_zero_progress(world: EnrollmentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/enrollment.feature",
    name = "Enrolling twice in the same course is rejected"
)]
fn enrolling_twice_is_rejected(world: EnrollmentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/enrollment.feature",
    name = "Enrolling in an unknown course is rejected"
)]
fn enrolling_in_unknown_course_is_rejected(world: EnrollmentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/enrollment.feature",
    name = "Progress updates replace the previous state"
)]
fn progress_updates_replace_previous_state(world: EnrollmentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/enrollment.feature",
    name = "Progress for lessons outside the course is rejected"
)]
fn progress_for_foreign_lessons_is_rejected(world: EnrollmentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/enrollment.feature",
    name = "Registering an email twice is rejected"
)]
fn registering_twice_is_rejected(world: EnrollmentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/enrollment.feature",
    name = "Logging in with the wrong password is rejected"
)]
fn wrong_password_is_rejected(world: EnrollmentWorld) {
    let _ = world;
}
