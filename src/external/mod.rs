mod beams;
mod pusher;

pub use beams::BeamsClient;
pub use pusher::PusherClient;

use uuid::Uuid;

/// Randomized unique identifier for correlating deliveries in logs.
pub fn unique_id() -> String {
    Uuid::new_v4().to_string()
}
