use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::entities::Driver;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateRequestParams {
    pub user_id: String,
}

pub async fn find_status(Extension(api): Extension<DynAPI>) -> Json<Value> {
    let status = api.status().await;

    Json(json!({ "status": status }))
}

pub async fn find_driver(Extension(api): Extension<DynAPI>) -> Json<Option<Driver>> {
    let driver = api.driver().await;

    driver.into()
}

pub async fn create_request(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateRequestParams>,
) -> Result<Json<Value>, Error> {
    api.request_ride(params.user_id).await?;

    Ok(Json(json!({ "success": true })))
}

pub async fn cancel_request(Extension(api): Extension<DynAPI>) -> Result<Json<Value>, Error> {
    api.cancel_request().await?;

    Ok(Json(json!({ "success": true })))
}
