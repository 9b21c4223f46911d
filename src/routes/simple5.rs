use axum::{extract::Query, Extension, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::random::SharedRandom;

pub const DESC: &str = "This route is not cachced and only uses `GET` method with query params.";

#[derive(Debug, Default)]
pub struct Params {
    pub query: Option<String>,
}

impl Params {
    /// First `query` pair wins; repeated keys and unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let query = pairs
            .into_iter()
            .find(|(key, _)| key == "query")
            .map(|(_, value)| value);
        Params { query }
    }
}

pub async fn handler(
    Extension(random): Extension<SharedRandom>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Value> {
    let params = Params::from_pairs(pairs);
    info!(query = %params.query.as_deref().unwrap_or("null"), "simple5 handler is run");
    Json(json!({
        "ramdom": random.next_f64(),
        "desc": DESC,
    }))
}
