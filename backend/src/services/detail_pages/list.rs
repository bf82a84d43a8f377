use actix_web::{HttpResponse, Responder};
use common::model::detail_page::DetailPage;
use rusqlite::Connection;

use crate::db::{self, StoreError};
use crate::services::error_response;

pub fn list_pages(conn: &Connection) -> Result<Vec<DetailPage>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, title, slug FROM detail_pages ORDER BY title")?;
    let pages = stmt
        .query_map([], |row| {
            Ok(DetailPage {
                id: row.get(0)?,
                title: row.get(1)?,
                slug: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(pages)
}

/// Actix handler for `GET /api/detail_pages`.
pub async fn process() -> impl Responder {
    let result = db::open().and_then(|conn| list_pages(&conn));
    match result {
        Ok(pages) => HttpResponse::Ok().json(pages),
        Err(err) => error_response(err),
    }
}
