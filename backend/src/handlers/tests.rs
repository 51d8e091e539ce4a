use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::{
    build_router,
    config::Config,
    db::connection::lazy_pool,
    error::AppError,
    models::{
        event::Event,
        report::{LecturerReportRow, StudentReportRow},
        submit_assignment::SubmissionSummary,
        user::{fixtures::user_with_role, User, UserRole},
    },
    repositories::{
        attendance::MockAttendanceRepositoryTrait, event::MockEventRepositoryTrait,
        report::MockReportRepositoryTrait, submit_assignment::MockSubmissionRepositoryTrait,
        user::MockUserRepositoryTrait,
    },
    state::AppState,
    utils::{
        jwt::{create_access_token, verify_access_token, Claims},
        password::hash_password,
    },
};

const BOUNDARY: &str = "portal-test-boundary";

fn base_state() -> AppState {
    let config = Config::for_tests();
    let pool = lazy_pool(&config.database_url).expect("lazy pool");
    AppState::new(pool, config)
}

fn users_returning(user: User) -> MockUserRepositoryTrait {
    let mut users = MockUserRepositoryTrait::new();
    users
        .expect_find_by_id()
        .returning(move |_, _| Ok(Some(user.clone())));
    users
}

fn token_for(user: &User) -> String {
    let claims = Claims::new(user.id.clone(), user.email.clone(), user.role, 1);
    create_access_token(&claims, &Config::for_tests().jwt_secret).expect("token")
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

fn multipart_request(method: &str, uri: &str, token: &str, parts: &[Part<'_>]) -> Request<Body> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, file_name, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n",
                        name, file_name
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

fn sample_event(id: i32, date: &str) -> Event {
    Event {
        id,
        name: format!("Event {}", id),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        time: Some("10:00".into()),
        location: Some("Main campus".into()),
        venue: Some("Hall A".into()),
        description: None,
    }
}

fn attendance_mark(status: &str) -> Value {
    json!({
        "studentId": "student-1",
        "firstName": "Amal",
        "lastName": "Perera",
        "attendance": status,
        "classroom": "B201",
        "module": "Networking",
        "batch": "COM12",
        "date": "2024-03-04"
    })
}

#[tokio::test]
async fn protected_route_without_token_is_unauthorized() {
    let app = build_router(base_state());
    let (status, body) = send(app, get("/api/events", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn token_signed_with_another_secret_is_unauthorized() {
    let user = user_with_role(UserRole::Lecturer);
    let claims = Claims::new(user.id.clone(), user.email.clone(), user.role, 1);
    let forged = create_access_token(&claims, "some-other-secret").unwrap();

    let app = build_router(base_state());
    let (status, _) = send(app, get("/api/events", Some(&forged))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_for_deleted_account_is_unauthorized() {
    let user = user_with_role(UserRole::Admin);
    let mut users = MockUserRepositoryTrait::new();
    users.expect_find_by_id().returning(|_, _| Ok(None));

    let app = build_router(base_state().with_users(users));
    let (status, _) = send(app, get("/api/admin/profile", Some(&token_for(&user)))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn legacy_token_header_is_accepted() {
    let user = user_with_role(UserRole::Lecturer);
    let token = token_for(&user);
    let mut events = MockEventRepositoryTrait::new();
    events
        .expect_list()
        .times(1)
        .returning(|_| Ok(vec![sample_event(1, "2024-01-01"), sample_event(2, "2024-06-01")]));

    let app = build_router(base_state().with_users(users_returning(user)).with_events(events));
    let request = Request::builder()
        .uri("/api/events")
        .header("x-auth-token", token)
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[1]["date"], "2024-06-01");
    assert_eq!(body[0]["venue"], "Hall A");
}

#[tokio::test]
async fn student_cannot_read_admin_reports() {
    let user = user_with_role(UserRole::Student);
    let mut reports = MockReportRepositoryTrait::new();
    reports.expect_students().never();

    let app = build_router(
        base_state()
            .with_users(users_returning(user.clone()))
            .with_reports(reports),
    );
    let (status, body) = send(app, get("/api/admin/reports/students", Some(&token_for(&user)))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");
}

#[tokio::test]
async fn lecturer_cannot_read_admin_profile() {
    let user = user_with_role(UserRole::Lecturer);
    let app = build_router(base_state().with_users(users_returning(user.clone())));
    let (status, _) = send(app, get("/api/admin/profile", Some(&token_for(&user)))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_profile_and_student_reports_are_camel_case() {
    let user = user_with_role(UserRole::Admin);
    let token = token_for(&user);
    let mut reports = MockReportRepositoryTrait::new();
    reports.expect_students().returning(|_, _| {
        Ok(vec![StudentReportRow {
            student_id: "student-1".into(),
            student_name: "Amal Perera".into(),
            first_name: "Amal".into(),
            last_name: "Perera".into(),
            email: None,
            batch_no: Some("COM12".into()),
            module: Some("Networking".into()),
            results: Some("Pass".into()),
        }])
    });
    let state = base_state()
        .with_users(users_returning(user))
        .with_reports(reports);

    let (status, profile) = send(
        build_router(state.clone()),
        get("/api/admin/profile", Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["role"], "admin");
    assert_eq!(profile["firstName"], "Nimal");

    let (status, rows) = send(
        build_router(state),
        get("/api/admin/reports/students", Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows[0]["studentName"], "Amal Perera");
    assert_eq!(rows[0]["batchNo"], "COM12");
    assert!(rows[0]["email"].is_null());
}

#[tokio::test]
async fn lecturer_report_rows_include_module() {
    let user = user_with_role(UserRole::Admin);
    let mut reports = MockReportRepositoryTrait::new();
    reports.expect_lecturers().times(1).returning(|_| {
        Ok(vec![LecturerReportRow {
            lecturer_id: "lecturer-1".into(),
            lecturer_name: "Kamal Silva".into(),
            department: Some("Computing".into()),
            module: Some("Databases, Networking".into()),
            email: Some("kamal@campus.test".into()),
            contact_number: None,
        }])
    });

    let app = build_router(
        base_state()
            .with_users(users_returning(user.clone()))
            .with_reports(reports),
    );
    let (status, rows) = send(app, get("/api/admin/reports/lecturers", Some(&token_for(&user)))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows[0]["lecturerName"], "Kamal Silva");
    assert_eq!(rows[0]["module"], "Databases, Networking");
    assert!(rows[0]["contactNumber"].is_null());
}

#[tokio::test]
async fn lecturer_students_forwards_module_and_batch_filters() {
    let user = user_with_role(UserRole::Lecturer);
    let mut reports = MockReportRepositoryTrait::new();
    reports
        .expect_students()
        .withf(|_, query| query.normalized() == (Some("Networking"), Some("COM12")))
        .times(1)
        .returning(|_, _| Ok(Vec::new()));

    let app = build_router(
        base_state()
            .with_users(users_returning(user.clone()))
            .with_reports(reports),
    );
    let (status, body) = send(
        app,
        get(
            "/api/lecturer/students?module=Networking&batch=COM12",
            Some(&token_for(&user)),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn attendance_outside_the_three_states_is_rejected() {
    let user = user_with_role(UserRole::Lecturer);
    let mut attendance = MockAttendanceRepositoryTrait::new();
    attendance.expect_create_many().never();

    let app = build_router(
        base_state()
            .with_users(users_returning(user.clone()))
            .with_attendance(attendance),
    );
    let request = json_request(
        "POST",
        "/api/attendance",
        Some(&token_for(&user)),
        json!([attendance_mark("Sick")]),
    );
    let (status, _) = send(app, request).await;
    assert!(status.is_client_error(), "unexpected status {}", status);
}

#[tokio::test]
async fn attendance_with_blank_fields_fails_validation() {
    let user = user_with_role(UserRole::Lecturer);
    let mut attendance = MockAttendanceRepositoryTrait::new();
    attendance.expect_create_many().never();

    let mut mark = attendance_mark("Present");
    mark["classroom"] = json!("");
    let app = build_router(
        base_state()
            .with_users(users_returning(user.clone()))
            .with_attendance(attendance),
    );
    let (status, body) = send(
        app,
        json_request("POST", "/api/attendance", Some(&token_for(&user)), json!([mark])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn attendance_batch_is_stored() {
    let user = user_with_role(UserRole::Lecturer);
    let mut attendance = MockAttendanceRepositoryTrait::new();
    attendance
        .expect_create_many()
        .withf(|_, records| records.len() == 2)
        .times(1)
        .returning(|_, records| {
            Ok(records
                .iter()
                .enumerate()
                .map(|(i, r)| crate::models::attendance::AttendanceRecord {
                    id: i as i32 + 1,
                    student_id: r.student_id.clone(),
                    first_name: r.first_name.clone(),
                    last_name: r.last_name.clone(),
                    attendance: r.attendance,
                    classroom: r.classroom.clone(),
                    module: r.module.clone(),
                    batch: r.batch.clone(),
                    date: r.date,
                })
                .collect())
        });

    let app = build_router(
        base_state()
            .with_users(users_returning(user.clone()))
            .with_attendance(attendance),
    );
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/attendance",
            Some(&token_for(&user)),
            json!([attendance_mark("Present"), attendance_mark("Late")]),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body[0]["id"], 1);
    assert_eq!(body[1]["attendance"], "Late");
}

#[tokio::test]
async fn login_trims_email_and_issues_token() {
    let mut user = user_with_role(UserRole::Lecturer);
    user.password_hash = hash_password("correct-horse").unwrap();
    let mut users = MockUserRepositoryTrait::new();
    let stored = user.clone();
    users
        .expect_find_by_email()
        .withf(|_, email| email == "lecturer@campus.test")
        .returning(move |_, _| Ok(Some(stored.clone())));

    let app = build_router(base_state().with_users(users));
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/auth/login",
            None,
            json!({ "email": " lecturer@campus.test", "password": "correct-horse" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["role"], "lecturer");
    assert!(body["expiresAt"].is_string());
    let token = body["token"].as_str().unwrap();
    let claims = verify_access_token(token, &Config::for_tests().jwt_secret).unwrap();
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.role, UserRole::Lecturer);
}

#[tokio::test]
async fn login_rejects_wrong_password_and_unknown_email_alike() {
    let mut user = user_with_role(UserRole::Admin);
    user.password_hash = hash_password("right").unwrap();
    let mut users = MockUserRepositoryTrait::new();
    users.expect_find_by_email().returning(move |_, email| {
        Ok((email == "admin@campus.test").then(|| user.clone()))
    });
    let state = base_state().with_users(users);

    let (wrong_status, wrong_body) = send(
        build_router(state.clone()),
        json_request(
            "POST",
            "/api/auth/login",
            None,
            json!({ "email": "admin@campus.test", "password": "wrong" }),
        ),
    )
    .await;
    let (unknown_status, unknown_body) = send(
        build_router(state),
        json_request(
            "POST",
            "/api/auth/login",
            None,
            json!({ "email": "ghost@campus.test", "password": "wrong" }),
        ),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body["error"], unknown_body["error"]);
}

#[tokio::test]
async fn lecturer_profile_update_stores_image_and_fields() {
    let user = user_with_role(UserRole::Lecturer);
    let token = token_for(&user);
    let mut users = users_returning(user);
    users
        .expect_update_profile()
        .withf(|_, user| user.first_name == "Kamal" && user.date_of_birth.is_some())
        .times(1)
        .returning(|_, user| Ok(user.clone()));

    let app = build_router(base_state().with_users(users));
    let request = multipart_request(
        "PUT",
        "/api/lecturer/profile/update",
        &token,
        &[
            Part::Text("firstName", "Kamal"),
            Part::Text("lastName", "Silva"),
            Part::Text("dateOfBirth", ""),
            Part::Text("contactNumber", "0710000000"),
            Part::File("profileImage", "me.png", b"\x89PNG\r\n"),
        ],
    );
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstName"], "Kamal");
    assert_eq!(body["contactNumber"], "0710000000");
    assert_eq!(body["address"], "12 Temple Road");
    let image = body["profileImage"].as_str().unwrap();
    assert!(image.starts_with("/uploads/") && image.ends_with(".png"));
}

#[tokio::test]
async fn failed_profile_save_removes_the_uploaded_image() {
    let user = user_with_role(UserRole::Lecturer);
    let token = token_for(&user);
    let attempted = Arc::new(Mutex::new(None::<String>));
    let mut users = users_returning(user);
    let seen = Arc::clone(&attempted);
    users
        .expect_update_profile()
        .times(1)
        .returning(move |_, user| {
            *seen.lock().unwrap() = user.profile_image.clone();
            Err(AppError::InternalServerError(anyhow::anyhow!("database unavailable")))
        });

    let app = build_router(base_state().with_users(users));
    let request = multipart_request(
        "PUT",
        "/api/lecturer/profile/update",
        &token,
        &[
            Part::Text("firstName", "Kamal"),
            Part::Text("lastName", "Silva"),
            Part::File("profileImage", "me.png", b"\x89PNG\r\n"),
        ],
    );
    let (status, _) = send(app, request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let path = attempted.lock().unwrap().clone().expect("image stored before save");
    let file_name = path.trim_start_matches("/uploads/");
    let on_disk = std::path::Path::new(&Config::for_tests().upload_dir).join(file_name);
    assert!(!on_disk.exists(), "orphaned upload left at {}", on_disk.display());
}

#[tokio::test]
async fn lecturer_profile_update_without_file_keeps_image() {
    let mut user = user_with_role(UserRole::Lecturer);
    user.profile_image = Some("/uploads/existing.png".into());
    let token = token_for(&user);
    let mut users = users_returning(user);
    users
        .expect_update_profile()
        .returning(|_, user| Ok(user.clone()));

    let app = build_router(base_state().with_users(users));
    let request = multipart_request(
        "PUT",
        "/api/lecturer/profile/update",
        &token,
        &[
            Part::Text("firstName", "Nimal"),
            Part::File("profileImage", "", b""),
        ],
    );
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profileImage"], "/uploads/existing.png");
}

#[tokio::test]
async fn lecturer_profile_update_rejects_blank_name() {
    let user = user_with_role(UserRole::Lecturer);
    let token = token_for(&user);
    let mut users = users_returning(user);
    users.expect_update_profile().never();

    let app = build_router(base_state().with_users(users));
    let request = multipart_request(
        "PUT",
        "/api/lecturer/profile/update",
        &token,
        &[Part::Text("firstName", "  ")],
    );
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn student_submits_assignment_and_lecturer_lists_metadata() {
    let student = user_with_role(UserRole::Student);
    let lecturer = user_with_role(UserRole::Lecturer);
    let mut submissions = MockSubmissionRepositoryTrait::new();
    submissions
        .expect_create()
        .withf(|_, new| {
            new.student_user_id.as_deref() == Some("student-1")
                && new.module.as_deref() == Some("Networking")
                && new.submitted_assignment.as_deref() == Some(&b"report"[..])
        })
        .times(1)
        .returning(|_, new| {
            Ok(SubmissionSummary {
                id: 7,
                student_user_id: new.student_user_id.clone(),
                module: new.module.clone(),
                batch: new.batch.clone(),
                submitted_at: Some(Utc::now()),
                size_bytes: new.submitted_assignment.as_ref().map_or(0, |b| b.len() as i64),
            })
        });
    submissions.expect_list().returning(|_, _| {
        Ok(vec![SubmissionSummary {
            id: 7,
            student_user_id: Some("student-1".into()),
            module: Some("Networking".into()),
            batch: Some("COM12".into()),
            submitted_at: None,
            size_bytes: 6,
        }])
    });

    let mut users = MockUserRepositoryTrait::new();
    let (s, l) = (student.clone(), lecturer.clone());
    users.expect_find_by_id().returning(move |_, id| {
        Ok(match id {
            "student-1" => Some(s.clone()),
            "lecturer-1" => Some(l.clone()),
            _ => None,
        })
    });
    let state = base_state().with_users(users).with_submissions(submissions);

    let request = multipart_request(
        "POST",
        "/api/assignments/submit",
        &token_for(&student),
        &[
            Part::Text("module", "Networking"),
            Part::Text("batch", "COM12"),
            Part::File("submittedAssignment", "report.pdf", b"report"),
        ],
    );
    let (status, body) = send(build_router(state.clone()), request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 7);
    assert_eq!(body["sizeBytes"], 6);

    let (status, body) = send(
        build_router(state),
        get("/api/assignments?module=Networking", Some(&token_for(&lecturer))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["studentUserId"], "student-1");
    assert_eq!(body[0]["sizeBytes"], 6);
    assert!(body[0].get("submittedAssignment").is_none());
}

#[tokio::test]
async fn lecturer_cannot_submit_assignments() {
    let lecturer = user_with_role(UserRole::Lecturer);
    let token = token_for(&lecturer);
    let app = build_router(base_state().with_users(users_returning(lecturer)));
    let request = multipart_request(
        "POST",
        "/api/assignments/submit",
        &token,
        &[Part::Text("module", "Networking")],
    );
    let (status, _) = send(app, request).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
