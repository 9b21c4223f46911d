use axum::{extract::Path, Extension, Json};
use serde_json::{json, Value};

use crate::random::SharedRandom;

pub const DESC: &str = "This route is not cachced and only uses `GET` method with params.";

pub async fn handler(
    Extension(random): Extension<SharedRandom>,
    Path(id): Path<String>,
) -> Json<Value> {
    Json(json!({
        "ramdom": random.next_f64(),
        "params": { "id": id },
        "desc": DESC,
    }))
}
