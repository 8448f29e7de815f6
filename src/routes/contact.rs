use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::{
    domain::{
        inquiry::Inquiry,
        new_inquiry::{InquiryBody, NewInquiry},
    },
    email_client::{EmailClient, NotificationError},
    startup::InquiryInbox,
};

/// Body shared by every response the handler produces, mirroring what the
/// website's form script expects: a success flag plus a displayable message.
#[derive(serde::Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
}

#[derive(thiserror::Error)]
#[error("Failed to store the contact inquiry.")]
pub struct StorageError(#[from] sqlx::Error);

impl std::fmt::Debug for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for StorageError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::InternalServerError().json(SubmitResponse {
            success: false,
            message: String::from("Server error, please try again later."),
        })
    }
}

#[tracing::instrument(
    name = "Submitting a new contact inquiry handler",
    skip(body, db_pool, email_client, inquiry_inbox),
    fields(
        inquiry_email = %body.email,
        inquiry_name = %body.name
    )
)]
pub async fn handle_submit_inquiry(
    body: web::Json<InquiryBody>,
    db_pool: web::Data<PgPool>,
    email_client: web::Data<EmailClient>,
    inquiry_inbox: web::Data<InquiryInbox>,
) -> Result<HttpResponse, StorageError> {
    let new_inquiry = NewInquiry::from(body.into_inner());
    let inquiry = create_inquiry(&new_inquiry, &db_pool).await?;

    // The inquiry is already stored at this point: a failed email must not
    // turn the response into a failure.
    match send_inquiry_notification(&email_client, &inquiry_inbox, &inquiry).await {
        Ok(()) => tracing::info!("Notification email sent to {}", inquiry_inbox.0.as_ref()),
        Err(err) => tracing::error!(
            "Failed to send the notification email to {}: {:?}",
            inquiry_inbox.0.as_ref(),
            err
        ),
    }

    Ok(HttpResponse::Ok().json(SubmitResponse {
        success: true,
        message: String::from("Message received. Thank you!"),
    }))
}

#[tracing::instrument(
    name = "Insert a new inquiry into the database",
    skip(new_inquiry, db_pool)
)]
async fn create_inquiry(
    new_inquiry: &NewInquiry,
    db_pool: &web::Data<PgPool>,
) -> Result<Inquiry, StorageError> {
    sqlx::query(
        r#"
        INSERT INTO inquiries (id, name, email, phone, message)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, email, phone, message, submitted_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new_inquiry.name.as_str())
    .bind(new_inquiry.email.as_str())
    .bind(new_inquiry.phone.as_deref())
    .bind(new_inquiry.message.as_str())
    .map(|row: PgRow| Inquiry {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        phone: row.get("phone"),
        message: row.get("message"),
        submitted_at: row.get("submitted_at"),
    })
    .fetch_one(db_pool.get_ref())
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        StorageError(err)
    })
}

#[tracing::instrument(
    name = "Send a notification email to the studio inbox",
    skip(email_client, inquiry_inbox, inquiry)
)]
async fn send_inquiry_notification(
    email_client: &EmailClient,
    inquiry_inbox: &InquiryInbox,
    inquiry: &Inquiry,
) -> Result<(), NotificationError> {
    let text_body = format!(
        "Name: {}\nPhone: {}\nEmail: {}\nMessage: {}",
        inquiry.name,
        inquiry.phone.as_deref().unwrap_or(""),
        inquiry.email,
        inquiry.message
    );

    email_client
        .send_email(
            inquiry_inbox.0.clone(),
            "New Contact Form Submission",
            text_body.as_str(),
        )
        .await
}
