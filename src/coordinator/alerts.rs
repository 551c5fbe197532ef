use serde_json::{json, Value};

use crate::entities::{Rider, Status};

/// A rider-facing mobile alert, keyed off the trip status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub body: &'static str,
}

/// The status-to-alert table the rider app is built around. `Searching` is
/// the rider's own doing, so it never produces an alert.
pub fn rider_alert_for(status: Status) -> Option<Alert> {
    match status {
        Status::Neutral => Some(Alert {
            title: "Driver Cancelled :(",
            body: "Sorry, your driver had to cancel. Open the app to request again.",
        }),
        Status::Searching => None,
        Status::FoundRide => Some(Alert {
            title: "\u{1f695} Ride Found",
            body: "The driver is on the way.",
        }),
        Status::Arrived => Some(Alert {
            title: "\u{1f695} Driver Waiting",
            body: "The driver is outside. Please meet him.",
        }),
        Status::OnTrip => Some(Alert {
            title: "\u{1f695} On Your Way",
            body: "The trip has started. Enjoy your ride.",
        }),
        Status::EndedTrip => Some(Alert {
            title: "\u{1f31f} Ride Complete",
            body: "Your ride cost $15. Open the app to rate the driver.",
        }),
    }
}

impl Alert {
    pub fn into_payload(self) -> Value {
        json!({
            "apns": {
                "aps": {
                    "alert": {
                        "title": self.title,
                        "body": self.body,
                    },
                    "sound": "default",
                }
            }
        })
    }
}

/// The driver-facing "new pickup" alert, carrying the actionable category and
/// a static-map preview of the pickup point.
pub fn ride_request_payload(rider: &Rider) -> Value {
    let attachment_url = format!(
        "https://maps.google.com/maps/api/staticmap?markers=color:red|{},{}&zoom=13&size=500x300&sensor=true",
        rider.latitude, rider.longitude
    );

    json!({
        "apns": {
            "aps": {
                "alert": {
                    "title": "\u{1f697} New Ride Request",
                    "body": format!("New pickup request from {}.", rider.name),
                },
                "category": "DriverActions",
                "mutable-content": 1,
                "sound": "default",
            },
            "data": {
                "attachment-url": attachment_url,
            }
        }
    })
}
