use actix_web::HttpResponse;
use log::warn;

use crate::db::StoreError;

pub mod detail_pages;
pub mod tables;

/// Maps store failures onto the HTTP surface: validation-class errors are the
/// caller's fault (400), `NotFound` is 404, storage trouble is 503. The
/// `Display` text of the error is the response body in every case.
pub(crate) fn error_response(err: StoreError) -> HttpResponse {
    match &err {
        StoreError::Validation(_) | StoreError::UnknownDetailPage(_) => {
            HttpResponse::BadRequest().body(err.to_string())
        }
        StoreError::NotFound(_) => HttpResponse::NotFound().body(err.to_string()),
        StoreError::Database(_) | StoreError::Corrupt(_) => {
            warn!("store failure: {err}");
            HttpResponse::ServiceUnavailable().body(err.to_string())
        }
    }
}
