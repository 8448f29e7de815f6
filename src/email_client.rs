use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time;

use crate::domain::email_address::EmailAddress;

const REQUEST_TIMEOUT: time::Duration = time::Duration::from_secs(10);

/// Outbound email relay. Failures surface as `NotificationError` values for
/// the caller to handle; a slow relay is cut off by the request timeout.
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: EmailAddress,
    api_key: Secret<String>,
}

#[derive(thiserror::Error, Debug)]
#[error("Failed to deliver the notification email.")]
pub struct NotificationError(#[from] reqwest::Error);

#[derive(serde::Serialize)]
pub struct SendEmailBody {
    personalizations: Vec<SendgridPersonalization>,
    from: SendgridEmail,
    subject: String,
    content: Vec<SendgridContent>,
}

#[derive(serde::Serialize)]
struct SendgridEmail {
    email: String,
}

#[derive(serde::Serialize)]
struct SendgridPersonalization {
    to: Vec<SendgridEmail>,
}

#[derive(serde::Serialize)]
struct SendgridContent {
    content_type: String,
    value: String,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: EmailAddress,
        api_key: Secret<String>,
        timeout: Option<time::Duration>,
    ) -> EmailClient {
        let http_client = Client::builder()
            .timeout(timeout.unwrap_or(REQUEST_TIMEOUT))
            .build()
            .unwrap();

        EmailClient {
            http_client,
            base_url,
            sender,
            api_key,
        }
    }

    pub async fn send_email(
        &self,
        recipient: EmailAddress,
        subject: &str,
        text_content: &str,
    ) -> Result<(), NotificationError> {
        let url = format!("{}/mail/send", self.base_url);
        let body = SendEmailBody {
            from: SendgridEmail {
                email: String::from(self.sender.as_ref()),
            },
            personalizations: vec![SendgridPersonalization {
                to: vec![SendgridEmail {
                    email: String::from(recipient.as_ref()),
                }],
            }],
            subject: String::from(subject),
            content: vec![SendgridContent {
                content_type: String::from("text/plain"),
                value: String::from(text_content),
            }],
        };

        self.http_client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .json(&body)
            .send()
            .await?
            .error_for_status()?; // return an error when server response status code is 4xx or 5xx

        Ok(())
    }
}
