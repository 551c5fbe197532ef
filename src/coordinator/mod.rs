mod alerts;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use crate::api::{DynBroadcaster, DynPushNotifier, TripAPI, API};
use crate::coordinator::alerts::{ride_request_payload, rider_alert_for};
use crate::entities::{Driver, Rider, Status};
use crate::error::{missing_field_error, ride_in_progress_error, Error};

pub const STATUS_CHANNEL: &str = "cabs";
pub const STATUS_EVENT: &str = "status-update";

pub const RIDER_INTEREST: &str = "rider";
pub const DRIVER_INTEREST: &str = "ride_requests";

#[derive(Debug, Default)]
struct TripState {
    status: Status,
    rider: Option<Rider>,
    driver: Option<Driver>,
    user_id: Option<String>,
}

/// Owns the single shared trip and serializes every transition through one
/// mutex. Broadcast and push side effects are dispatched only after the
/// mutation has committed, on their own tasks, so a slow or failing
/// collaborator never holds up the caller.
pub struct Coordinator {
    state: Mutex<TripState>,
    broadcaster: DynBroadcaster,
    notifier: DynPushNotifier,
}

impl Coordinator {
    pub fn new(broadcaster: DynBroadcaster, notifier: DynPushNotifier) -> Self {
        Self {
            state: Mutex::new(TripState::default()),
            broadcaster,
            notifier,
        }
    }

    fn broadcast(&self, payload: Value) {
        let broadcaster = self.broadcaster.clone();

        tokio::spawn(async move {
            if let Err(err) = broadcaster
                .publish(STATUS_CHANNEL, STATUS_EVENT, payload)
                .await
            {
                tracing::error!(?err, "status broadcast failed");
            }
        });
    }

    fn notify(&self, interest: &'static str, payload: Value) {
        let notifier = self.notifier.clone();

        tokio::spawn(async move {
            match notifier.publish(&[interest.into()], payload).await {
                Ok(publish_id) => tracing::info!(%publish_id, interest, "notification sent"),
                Err(err) => tracing::error!(?err, interest, "notification failed"),
            }
        });
    }
}

#[async_trait]
impl TripAPI for Coordinator {
    async fn status(&self) -> Status {
        self.state.lock().await.status
    }

    async fn driver(&self) -> Option<Driver> {
        self.state.lock().await.driver.clone()
    }

    async fn rider(&self) -> Option<Rider> {
        self.state.lock().await.rider.clone()
    }

    #[tracing::instrument(skip(self))]
    async fn request_ride(&self, user_id: String) -> Result<(), Error> {
        if user_id.trim().is_empty() {
            return Err(missing_field_error("user_id"));
        }

        // TODO: take the rider record from the caller once the demo apps send one
        let rider = Rider::new("Jane Doe", "+18001234567", -122.088426, 37.388064)?;

        {
            let mut state = self.state.lock().await;

            if state.status != Status::Neutral {
                return Err(ride_in_progress_error());
            }

            state.user_id = Some(user_id);
            state.status = Status::Searching;
            state.rider = Some(rider.clone());
        }

        self.notify(DRIVER_INTEREST, ride_request_payload(&rider));
        self.broadcast(json!({ "status": Status::Searching, "rider": rider }));

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn cancel_request(&self) -> Result<(), Error> {
        {
            let mut state = self.state.lock().await;

            // only the driver is cleared here; the pending rider stays
            // visible to the driver app until a terminal status wipes it
            state.driver = None;
            state.status = Status::Neutral;
        }

        self.broadcast(json!({ "status": Status::Neutral }));

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn set_driver_status(&self, status: Status) -> Result<(), Error> {
        let driver = {
            let mut state = self.state.lock().await;

            state.status = status;

            if status.clears_participants() {
                state.rider = None;
                state.driver = None;
            } else {
                state.driver = Some(Driver::new("John Doe")?);
            }

            state.driver.clone()
        };

        if let Some(alert) = rider_alert_for(status) {
            self.notify(RIDER_INTEREST, alert.into_payload());
        }

        self.broadcast(json!({ "status": status, "driver": driver }));

        Ok(())
    }
}

impl API for Coordinator {}
