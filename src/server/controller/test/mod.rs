use crate::server::{
    cache::ListingCache,
    error::{
        validation::{BAD_REQUEST_TYPE, UNPROCESSABLE_TYPE},
        INTERNAL_ERROR_TYPE,
    },
    router::{self, NO_STORE},
    service::listing::ListingSettings,
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use entity::prelude::*;
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::{json, Value};
use std::sync::Arc;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;
use url::Url;


fn app(db: &DatabaseConnection) -> Router {
    router::app(AppState::new(
        db.clone(),
        Arc::new(ListingCache::new(100)),
        ListingSettings::default(),
        Url::parse("http://localhost:8080/").unwrap(),
    ))
}

/// Sends one request through the router and decodes the JSON response body.
async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Sends one bodiless request through the router and returns its `Cache-Control` header.
async fn cache_control(app: Router, method: &str, uri: &str) -> Option<String> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    response
        .headers()
        .get(header::CACHE_CONTROL)
        .map(|value| value.to_str().unwrap().to_string())
}

async fn seed_games(db: &DatabaseConnection) -> Result<(), DbErr> {
    for (name, year) in [
        ("Terraforming Mars", 2016),
        ("Citadels", 2000),
        ("Axis & Allies", 1981),
    ] {
        factory::board_game::BoardGameFactory::new(db)
            .name(name)
            .year(year)
            .build()
            .await?;
    }

    Ok(())
}
