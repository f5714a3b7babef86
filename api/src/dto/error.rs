use actix_web::http::StatusCode;
pub use krest_shared::errors::ErrorResponse;

/// Extension trait rendering the shared error body as an actix response.
///
/// The shared crate stays framework-free, so pairing the body with a status
/// line happens here rather than on [`ErrorResponse`] itself.
pub trait ErrorResponseExt {
    fn to_response(&self, status: StatusCode) -> actix_web::HttpResponse;
}

impl ErrorResponseExt for ErrorResponse {
    fn to_response(&self, status: StatusCode) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(status).json(self)
    }
}
