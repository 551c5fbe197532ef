use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::entities::{Driver, Rider, Status};
use crate::error::Error;

#[async_trait]
pub trait TripAPI {
    async fn status(&self) -> Status;

    async fn driver(&self) -> Option<Driver>;

    async fn rider(&self) -> Option<Rider>;

    async fn request_ride(&self, user_id: String) -> Result<(), Error>;

    async fn cancel_request(&self) -> Result<(), Error>;

    async fn set_driver_status(&self, status: Status) -> Result<(), Error>;
}

pub trait API: TripAPI {}

/// Best-effort pub/sub fan-out to connected rider and driver clients.
#[async_trait]
pub trait Broadcaster {
    async fn publish(&self, channel: &str, event: &str, payload: Value) -> Result<(), Error>;
}

/// Audience-targeted mobile push delivery. Returns the provider's publish id.
#[async_trait]
pub trait PushNotifier {
    async fn publish(&self, interests: &[String], payload: Value) -> Result<String, Error>;
}

pub type DynBroadcaster = Arc<dyn Broadcaster + Send + Sync>;
pub type DynPushNotifier = Arc<dyn PushNotifier + Send + Sync>;
