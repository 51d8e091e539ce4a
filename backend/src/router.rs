use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{admin, assignments, attendance, auth, events, health, lecturer, profile},
    middleware::{self as guard, LEGACY_TOKEN_HEADER},
    state::AppState,
    utils::upload::UPLOAD_ROUTE,
};

// Headroom for multipart boundaries and text parts on top of the file limit.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/health", get(health::health))
        .route("/api/auth/login", post(auth::login));

    let user_routes = Router::new()
        .route("/api/events", get(events::list_events))
        .route_layer(from_fn_with_state(state.clone(), guard::auth));

    let admin_routes = Router::new()
        .route("/api/admin/profile", get(profile::get_profile))
        .route("/api/admin/reports/students", get(admin::student_reports))
        .route("/api/admin/reports/lecturers", get(admin::lecturer_reports))
        .route_layer(from_fn_with_state(state.clone(), guard::auth_admin));

    let lecturer_routes = Router::new()
        .route("/api/lecturer/profile", get(profile::get_profile))
        .route(
            "/api/lecturer/profile/update",
            put(lecturer::update_profile),
        )
        .route("/api/lecturer/students", get(lecturer::list_students))
        .route(
            "/api/attendance",
            post(attendance::record_attendance).get(attendance::list_attendance),
        )
        .route("/api/assignments", get(assignments::list_submissions))
        .route_layer(from_fn_with_state(state.clone(), guard::auth_lecturer));

    let student_routes = Router::new()
        .route(
            "/api/assignments/submit",
            post(assignments::submit_assignment),
        )
        .route_layer(from_fn_with_state(state.clone(), guard::auth_student));

    Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .merge(admin_routes)
        .merge(lecturer_routes)
        .merge(student_routes)
        .nest_service(UPLOAD_ROUTE, ServeDir::new(&state.config.upload_dir))
        .layer(DefaultBodyLimit::max(
            state.config.upload_max_bytes + MULTIPART_OVERHEAD_BYTES,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config))
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static(LEGACY_TOKEN_HEADER),
        ]);

    match config.cors_allow_origin.as_deref() {
        Some(origin) => match HeaderValue::from_str(origin) {
            Ok(value) => layer.allow_origin(AllowOrigin::exact(value)),
            Err(_) => {
                tracing::warn!(origin, "Invalid CORS_ALLOW_ORIGIN, allowing any origin");
                layer.allow_origin(Any)
            }
        },
        None => layer.allow_origin(Any),
    }
}
