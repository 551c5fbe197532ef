use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::entities::{Rider, Status};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct UpdateStatusParams {
    pub status: String,
}

pub async fn find_pending_rider(Extension(api): Extension<DynAPI>) -> Json<Option<Rider>> {
    let rider = api.rider().await;

    rider.into()
}

pub async fn update_status(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<UpdateStatusParams>,
) -> Result<Json<Value>, Error> {
    let status = params.status.parse::<Status>()?;

    api.set_driver_status(status).await?;

    Ok(Json(json!({ "success": true })))
}
