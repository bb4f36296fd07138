//! End-to-end tests for the `/api` surface over the seeded in-memory store.

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use rstest::rstest;
use serde_json::{Value, json};

use academy::Trace;
use academy::catalogue_seed::{CatalogueSeedSettings, seed_catalogue_on_startup};
use academy::domain::TRACE_ID_HEADER;
use academy::inbound::http::api_scope;
use academy::outbound::memory::MemoryStore;

mod support;

use support::memory_services;

macro_rules! seeded_app {
    () => {{
        let services = memory_services(&MemoryStore::new());
        seed_catalogue_on_startup(&CatalogueSeedSettings::default(), services.courses.clone())
            .await
            .expect("bundled catalogue seeds");
        test::init_service(
            App::new()
                .app_data(web::Data::new(services.http_state()))
                .wrap(Trace)
                .service(api_scope()),
        )
        .await
    }};
}

#[rstest]
#[actix_web::test]
async fn student_journey_from_registration_to_progress() {
    let app = seeded_app!();

    let register = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "email": "aziz@example.com",
            "password": "parol123",
            "fullName": "Aziz Karimov",
            "userType": "student",
        }))
        .to_request();
    let registered: Value = test::call_and_read_body_json(&app, register).await;
    let user_id = registered["user"]["id"].as_u64().expect("user id");
    assert!(registered["user"].get("password").is_none());

    let login = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "aziz@example.com", "password": "parol123" }))
        .to_request();
    let logged_in: Value = test::call_and_read_body_json(&app, login).await;
    assert_eq!(logged_in["user"]["id"], json!(user_id));

    let programming = test::TestRequest::get()
        .uri("/api/courses?category=Dasturlash")
        .to_request();
    let courses: Value = test::call_and_read_body_json(&app, programming).await;
    let titles: Vec<&str> = courses
        .as_array()
        .expect("course array")
        .iter()
        .filter_map(|course| course["title"].as_str())
        .collect();
    assert_eq!(titles, ["Python Dasturlash", "Web Sayt Yaratish"]);

    let enroll = test::TestRequest::post()
        .uri("/api/enrollments")
        .set_json(json!({ "userId": user_id, "courseId": 1 }))
        .to_request();
    let enrollment: Value = test::call_and_read_body_json(&app, enroll).await;
    assert_eq!(enrollment["progress"], json!(0));
    let enrollment_id = enrollment["id"].as_u64().expect("enrollment id");

    let progress = test::TestRequest::put()
        .uri(&format!("/api/enrollments/{enrollment_id}/progress"))
        .set_json(json!({
            "progress": 30,
            "completedLessons": [3, 1, 1],
            "completedTests": [1],
        }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, progress).await;
    assert_eq!(updated["progress"], json!(30));
    assert_eq!(updated["completedLessons"], json!([1, 3]));

    let mine = test::TestRequest::get()
        .uri(&format!("/api/enrollments/user/{user_id}"))
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, mine).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["course"]["title"], json!("Python Dasturlash"));
    assert_eq!(listed[0]["progress"], json!(30));
}

#[rstest]
#[case("/api/courses", 3)]
#[case("/api/courses?category=Barcha%20yo%27nalishlar", 3)]
#[case("/api/courses?category=Data%20Science", 1)]
#[case("/api/courses?category=Dizayn", 0)]
#[actix_web::test]
async fn course_listing_filters_seeded_catalogue(#[case] uri: &str, #[case] expected: usize) {
    let app = seeded_app!();

    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body.as_array().map(Vec::len), Some(expected));
}

#[rstest]
#[actix_web::test]
async fn seeded_course_detail_carries_nested_content() {
    let app = seeded_app!();

    let req = test::TestRequest::get().uri("/api/courses/3").to_request();
    let course: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(course["title"], json!("Ma'lumotlar Tahlili"));
    assert_eq!(course["category"], json!("Data Science"));
    assert_eq!(course["videoLessons"].as_array().map(Vec::len), Some(12));
    assert_eq!(course["materials"][0]["type"], json!("pdf"));
}

#[rstest]
#[actix_web::test]
async fn errors_carry_trace_id_header_and_body() {
    let app = seeded_app!();

    let req = test::TestRequest::get().uri("/api/courses/404").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let header_trace = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace-id header");
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], json!("not_found"));
    assert_eq!(body["traceId"], json!(header_trace));
}

#[rstest]
#[actix_web::test]
async fn material_download_serves_placeholder_attachment() {
    let app = seeded_app!();

    let req = test::TestRequest::get()
        .uri("/api/download/python-qollanma.pdf")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let disposition = res
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(disposition.contains("python-qollanma.pdf"));
    let body = test::read_body(res).await;
    assert!(body.starts_with(b"%PDF"));
}
