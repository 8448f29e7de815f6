use studio_contact::config::get_configuration;
use studio_contact::startup::Application;
use studio_contact::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber(String::from("studio_contact"), String::from("debug"));

    init_subscriber(subscriber);

    let config = get_configuration().expect("Missing configuration file.");
    let application = Application::build(config)
        .await
        .expect("Failed to build application.");

    tracing::info!("Server listening on port {}", application.get_port());

    application.run_until_stop().await
}
