//! Sends a test email with the configured notifier credentials, so a broken
//! API key or sender address shows up before a real inquiry does.

use studio_contact::config::get_configuration;
use studio_contact::email_client::EmailClient;
use studio_contact::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() {
    let subscriber = get_subscriber(String::from("email_check"), String::from("info"));

    init_subscriber(subscriber);

    let config = get_configuration().expect("Missing configuration file.");
    let sender_email = config
        .get_email_client_sender()
        .expect("Sender email is not valid");
    let inbox_email = config
        .get_email_client_inbox()
        .expect("Inbox email is not valid");
    let email_client = EmailClient::new(
        config.get_email_client_base_url(),
        sender_email,
        config.get_email_client_api(),
        None,
    );

    let outcome = email_client
        .send_email(
            inbox_email.clone(),
            "Test email from the studio contact service",
            "This is a test email to confirm the notifier credentials work.",
        )
        .await;

    match outcome {
        Ok(()) => tracing::info!("Test email sent to {}", inbox_email.as_ref()),
        Err(err) => tracing::error!("Failed to send the test email: {:?}", err),
    }
}
