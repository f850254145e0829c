use axum::{Extension, Json};
use serde_json::{json, Value};

use crate::middleware::AuthUser;

/// GET /protected - example route that greets the token's subject
pub async fn protected(Extension(user): Extension<AuthUser>) -> Json<Value> {
    Json(json!({
        "msg": format!("Hello, {}. This is a protected route", user.username)
    }))
}
