use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// GET / - algorithms service information
pub async fn algorithms_root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Classwork Algorithms API",
        "version": version,
        "endpoints": {
            "public": ["POST /register", "POST /login", "GET /health"],
            "protected": [
                "GET /protected",
                "POST /bubble_sort",
                "POST /binary_search",
                "POST /filter_even",
                "POST /sum_elements",
                "POST /max_value",
                "POST /min_value",
                "POST /average",
                "POST /median",
            ],
        }
    }))
}

/// GET / - task service greeting
pub async fn tasks_root() -> Json<Value> {
    Json(json!({ "message": "Task Manager API" }))
}

/// GET /health - liveness probe shared by both services
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "timestamp": chrono::Utc::now(),
        })),
    )
}
