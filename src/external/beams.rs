use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::env;
use std::time::Duration;

use crate::api::PushNotifier;
use crate::error::{invalid_input_error, upstream_error, Error};

/// Pusher Beams publish client, targeting device interests with an
/// APNs-shaped payload.
pub struct BeamsClient {
    instance_id: String,
    secret_key: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct PublishResponse {
    #[serde(rename = "publishId")]
    publish_id: String,
}

impl BeamsClient {
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            instance_id: env::var("BEAMS_INSTANCE_ID")?,
            secret_key: env::var("BEAMS_SECRET_KEY")?,
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(5))
                .build()?,
        })
    }
}

#[async_trait]
impl PushNotifier for BeamsClient {
    #[tracing::instrument(skip(self, payload))]
    async fn publish(&self, interests: &[String], payload: Value) -> Result<String, Error> {
        let mut body = payload;

        let publish = body.as_object_mut().ok_or_else(|| invalid_input_error())?;
        publish.insert("interests".into(), json!(interests));

        let url = format!(
            "https://{0}.pushnotifications.pusher.com/publish_api/v1/instances/{0}/publishes/interests",
            self.instance_id
        );

        let res = self
            .client
            .post(url)
            .bearer_auth(&self.secret_key)
            .json(&body)
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: PublishResponse = res.json().await?;

        Ok(data.publish_id)
    }
}
