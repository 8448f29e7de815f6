use actix_web::{HttpRequest, HttpResponse, Responder};

/// Liveness probe for deploy checks and uptime monitoring
#[tracing::instrument(name = "Health Check handler")]
pub async fn health_check(_: HttpRequest) -> impl Responder {
    HttpResponse::Ok()
}
