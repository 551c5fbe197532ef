mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::Extension, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::api::API;
use crate::server::handlers::{drivers, riders};

pub type DynAPI = Arc<dyn API + Send + Sync>;

pub fn app<T: API + Sync + Send + 'static>(api: T) -> Router {
    let api = Arc::new(api) as DynAPI;

    Router::new()
        .route("/", get(root))
        .route(
            "/status",
            get(riders::find_status).post(drivers::update_status),
        )
        .route(
            "/request",
            get(riders::find_driver)
                .post(riders::create_request)
                .delete(riders::cancel_request),
        )
        .route("/pending-rider", get(drivers::find_pending_rider))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, port: u16) {
    let app = app(api);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

async fn root() -> Json<Value> {
    Json(json!({ "status": "success" }))
}
