#![allow(dead_code)]

use axum::Router;
use cat_breeds::api::routes::public_routes;
use cat_breeds::config::Config;
use cat_breeds::server::build_state;
use cat_breeds::state::AppState;
use serde_json::{Value, json};
use std::path::Path;

pub fn create_test_state(upstream_base_url: &str, response_log: &Path) -> AppState {
    let config = Config {
        upstream_base_url: upstream_base_url.to_string(),
        response_log_path: response_log.to_string_lossy().into_owned(),
        ..Config::default()
    };

    build_state(&config).unwrap()
}

pub fn create_test_app(upstream_base_url: &str, response_log: &Path) -> Router {
    public_routes().with_state(create_test_state(upstream_base_url, response_log))
}

pub fn breed(name: &str, country: &str) -> Value {
    json!({
        "breed": name,
        "country": country,
        "origin": "Natural",
        "coat": "Short",
        "pattern": "Solid"
    })
}

pub fn breeds_page(current_page: u32, last_page: u32, data: Vec<Value>) -> Value {
    json!({
        "current_page": current_page,
        "data": data,
        "last_page": last_page,
        "per_page": 25
    })
}
