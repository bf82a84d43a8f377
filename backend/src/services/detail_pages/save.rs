use actix_web::{web, HttpResponse, Responder};
use common::model::detail_page::DetailPage;
use common::model::error::ValidationError;
use common::requests::SaveDetailPageRequest;
use log::info;
use rusqlite::{params, Connection};

use crate::db::{self, StoreError};
use crate::services::error_response;

pub fn save_page(
    conn: &Connection,
    payload: &SaveDetailPageRequest,
) -> Result<DetailPage, StoreError> {
    let title = payload.title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle.into());
    }
    let slug = payload.slug.trim();
    if slug.is_empty() {
        return Err(ValidationError::EmptySlug.into());
    }

    conn.execute(
        "INSERT INTO detail_pages (title, slug) VALUES (?1, ?2)",
        params![title, slug],
    )?;
    let id = conn.last_insert_rowid();
    info!("created detail page {id} ({slug})");

    Ok(DetailPage {
        id,
        title: title.to_string(),
        slug: slug.to_string(),
    })
}

/// Actix handler for `POST /api/detail_pages/save`.
pub async fn process(payload: web::Json<SaveDetailPageRequest>) -> impl Responder {
    let result = db::open().and_then(|conn| save_page(&conn, &payload));
    match result {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err),
    }
}
