use super::test_support::temp_state;
use super::{configure, cors};
use actix_web::http::{header, Method, StatusCode};
use actix_web::{test, web, App};
use serde_json::{json, Value};

fn ava_inputs() -> Value {
    json!({
        "email": " Ava@Example.com ",
        "founder_display_name": "Ava",
        "problem_domain": "productivity",
        "problems": ["too many emails", "lose track of tasks"],
        "value_prop": "an inbox that triages itself",
        "is_paid_service": true,
        "price_points": [4.99, 9.99],
        "target_segments": [],
        "target_actions": ["join_waitlist"],
    })
}

fn step_keys(body: &Value) -> Vec<String> {
    body["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["key"].as_str().unwrap().to_string())
        .collect()
}

#[actix_web::test]
async fn created_session_serves_compiled_questions() {
    let (_dir, state) = temp_state(true);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/sessions")
        .set_json(ava_inputs())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let sid = created["session_id"].as_str().unwrap().to_string();
    assert_eq!(
        created["share_link"],
        format!("http://localhost:5173/respond?sid={}", sid)
    );

    let req = test::TestRequest::get()
        .uri(&format!("/api/sessions/{}/questions", sid))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let keys = step_keys(&body);

    let problem_keys: Vec<&String> = keys.iter().filter(|k| k.starts_with("pb_")).collect();
    assert_eq!(problem_keys, vec!["pb_1", "pb_2"]);
    assert!(!keys.contains(&"segment".to_string()));

    let steps = body["steps"].as_array().unwrap();
    let label_of = |key: &str| {
        steps
            .iter()
            .find(|s| s["key"] == key)
            .and_then(|s| s["label"].as_str())
            .unwrap_or_default()
            .to_string()
    };
    assert!(label_of("willing_to_pay_price_1").contains("$4.99"));
    assert!(label_of("willing_to_pay_price_2").contains("$9.99"));
    assert!(label_of("cta_choice").contains("join the waitlist"));
    assert!(label_of("anything_else").contains("Ava"));
}

#[actix_web::test]
async fn session_creation_requires_an_email() {
    let (_dir, state) = temp_state(true);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/sessions")
        .set_json(json!({"email": "not-an-email", "problems": ["x"]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "valid email is required");
}

#[actix_web::test]
async fn missing_session_is_404() {
    let (_dir, state) = temp_state(true);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/sessions/nope/questions")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/responses")
        .set_json(json!({"session_id": "nope", "answers": {"context": "x"}}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn latest_submission_drives_completion() {
    let (_dir, state) = temp_state(true);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/sessions")
        .set_json(ava_inputs())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let sid = created["session_id"].as_str().unwrap().to_string();

    // 5 of the 10 answerable steps
    let partial = json!({
        "context": "I drown in email",
        "pb_1": {"scale": 5, "reason": "daily pain", "attempts": "filters"},
        "pb_2": {"scale": 2},
        "use_likelihood": 4,
        "willing_to_pay": 3,
    });
    let req = test::TestRequest::post()
        .uri("/api/responses")
        .set_json(json!({"session_id": sid, "tester_email": "Tess@Example.com", "answers": partial}))
        .to_request();
    let stored: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored["ok"], true);
    assert_eq!(stored["hashes"]["sha256"].as_str().unwrap().len(), 64);
    assert_eq!(stored["hashes"]["keccak"].as_str().unwrap().len(), 64);

    let uri = "/api/testers/questionnaires?tester_email=tess@example.com";
    let list: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let q = &list["questionnaires"][0];
    assert_eq!(q["session_id"], sid.as_str());
    assert_eq!(q["company_name"], "Ava");
    assert_eq!(q["is_completed"], true);
    assert_eq!(q["completion_percentage"], 50);
    assert_eq!(q["total_questions"], 16);

    let mut full = partial.clone();
    for (key, value) in [
        ("willing_to_pay_price_1", json!(4)),
        ("willing_to_pay_price_2", json!(2)),
        ("price_fair", json!("$5")),
        ("anything_else", json!("no")),
        ("cta_choice", json!("Yes")),
    ] {
        full[key] = value;
    }
    let req = test::TestRequest::post()
        .uri("/api/responses")
        .set_json(json!({"session_id": sid, "tester_email": "tess@example.com", "answers": full}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let list: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(list["questionnaires"][0]["completion_percentage"], 100);

    let anonymous: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/testers/questionnaires")
            .to_request(),
    )
    .await;
    assert_eq!(anonymous["questionnaires"][0]["is_completed"], false);
    assert_eq!(anonymous["questionnaires"][0]["completion_percentage"], 0);

    let summary: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/sessions/{}/summary", sid))
            .to_request(),
    )
    .await;
    assert_eq!(summary["responses_count"], 2);
    assert!(summary["first_ts"].as_str().unwrap() <= summary["last_ts"].as_str().unwrap());
}

#[actix_web::test]
async fn unknown_answer_keys_follow_configured_policy() {
    for strict in [true, false] {
        let (_dir, state) = temp_state(strict);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/sessions")
            .set_json(ava_inputs())
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let sid = created["session_id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri("/api/responses")
            .set_json(json!({"session_id": sid, "answers": {"context": "x", "pb_7": 3}}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        if strict {
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["detail"], "unknown answer keys: pb_7");
        } else {
            assert_eq!(resp.status(), StatusCode::OK);
        }
    }
}

#[actix_web::test]
async fn empty_answers_are_rejected() {
    let (_dir, state) = temp_state(true);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/responses")
        .set_json(json!({"session_id": "any", "answers": {}}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn founder_views_sessions_and_responses() {
    let (_dir, state) = temp_state(true);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/founders/register")
        .set_json(json!({"email": "ava@example.com", "display_name": "Ava"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/sessions")
        .set_json(ava_inputs())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let sid = created["session_id"].as_str().unwrap().to_string();

    let long_answer = "a".repeat(60);
    let req = test::TestRequest::post()
        .uri("/api/responses")
        .set_json(json!({
            "session_id": sid,
            "tester_email": "tess@example.com",
            "tester_handle": "@tess",
            "answers": {"price_fair": "$5", "context": long_answer},
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let sessions: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/founders/sessions?founder_email=AVA@example.com")
            .to_request(),
    )
    .await;
    assert_eq!(sessions["sessions"][0]["id"], sid.as_str());
    assert_eq!(sessions["sessions"][0]["responses_count"], 1);
    assert!(sessions["sessions"][0]["last_response_at"].is_string());

    let listed: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/sessions/{}/responses", sid))
            .to_request(),
    )
    .await;
    let item = &listed["responses"][0];
    assert_eq!(item["tester_email"], "tess@example.com");
    assert_eq!(item["tester_handle"], "@tess");
    assert_eq!(
        item["preview"],
        format!("price_fair=$5, context={}…", "a".repeat(40))
    );
    assert!(item["answers"].is_null());

    let with_answers: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!(
                "/api/sessions/{}/responses?include_answers=true&tester_email=nobody@example.com",
                sid
            ))
            .to_request(),
    )
    .await;
    assert_eq!(with_answers["responses"].as_array().unwrap().len(), 0);

    let with_answers: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!(
                "/api/sessions/{}/responses?include_answers=true&tester_email=tess@example.com",
                sid
            ))
            .to_request(),
    )
    .await;
    assert_eq!(with_answers["responses"][0]["answers"]["price_fair"], "$5");

    let tester: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/testers/responses?tester_email=tess@example.com")
            .to_request(),
    )
    .await;
    assert_eq!(tester["responses"][0]["company_name"], "Ava");
    assert_eq!(tester["responses"][0]["problem_domain"], "productivity");
    assert_eq!(tester["responses"][0]["session_status"], "active");
}

#[actix_web::test]
async fn file_mode_round_trip() {
    let (_dir, state) = temp_state(true);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/files/sessions")
        .set_json(json!({"founder_inputs": {
            "idea_summary": "focus app",
            "target_user": "students",
            "problems": ["distraction"],
        }}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let sid = created["session_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/files/responses")
        .set_json(json!({"session_id": sid, "respondent_id": "r1", "answers": {"context": "x"}}))
        .to_request();
    let stored: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored["ok"], true);

    let summary: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/files/sessions/{}/summary", sid))
            .to_request(),
    )
    .await;
    assert_eq!(summary["responses_count"], 1);

    let req = test::TestRequest::post()
        .uri("/api/files/sessions")
        .set_json(json!({"founder_inputs": {
            "idea_summary": "focus app",
            "target_user": "students",
            "problems": [],
        }}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn health_reports_ok() {
    let (_dir, state) = temp_state(true);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/health").to_request(),
    )
    .await;
    assert_eq!(body["status"], "ok");

    let hashes: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/hash")
            .set_json(json!({"text": "abc"}))
            .to_request(),
    )
    .await;
    assert_eq!(
        hashes["sha256"],
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[actix_web::test]
async fn preflight_follows_allowed_origins() {
    let (_dir, state) = temp_state(true);
    let origins = vec!["http://localhost:5173".to_string()];
    let app = test::init_service(
        App::new()
            .wrap(cors(&origins))
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;

    let preflight = |origin: &str| {
        test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/responses")
            .insert_header((header::ORIGIN, origin.to_string()))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
            .to_request()
    };

    let resp = test::call_service(&app, preflight("http://localhost:5173")).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5173"
    );
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );

    let resp = test::call_service(&app, preflight("https://elsewhere.example")).await;
    assert!(!resp.status().is_success());
    assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[actix_web::test]
async fn wildcard_origin_admits_any_caller() {
    let (_dir, state) = temp_state(true);
    let origins = vec!["*".to_string()];
    let app = test::init_service(
        App::new()
            .wrap(cors(&origins))
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/sessions")
        .insert_header((header::ORIGIN, "https://miniapp.example"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://miniapp.example"
    );

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((header::ORIGIN, "https://miniapp.example"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
