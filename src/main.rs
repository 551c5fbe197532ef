use std::env;
use std::sync::Arc;

use hansom::coordinator::Coordinator;
use hansom::external::{BeamsClient, PusherClient};
use hansom::server::serve;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt::init();

    let broadcaster = Arc::new(PusherClient::from_env().unwrap());
    let notifier = Arc::new(BeamsClient::from_env().unwrap());

    let coordinator = Coordinator::new(broadcaster, notifier);

    let port = env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(4000);

    serve(coordinator, port).await;
}
