use actix_web::{web, HttpResponse, Responder};
use log::info;
use rusqlite::{params, Connection};

use crate::db::{self, StoreError};
use crate::services::error_response;

/// Deletes a table independently of its detail page. Unknown ids surface as
/// `NotFound`; callers that want idempotency treat a 404 as already settled.
pub fn delete_table(conn: &Connection, id: i64) -> Result<(), StoreError> {
    let deleted = conn.execute("DELETE FROM dynamic_tables WHERE id = ?1", params![id])?;
    if deleted == 0 {
        return Err(StoreError::NotFound(id));
    }
    info!("deleted table {id}");
    Ok(())
}

/// Actix handler for `DELETE /api/tables/{table_id}`.
pub async fn process(table_id: web::Path<i64>) -> impl Responder {
    let result = db::open().and_then(|conn| delete_table(&conn, *table_id));
    match result {
        Ok(()) => HttpResponse::Ok().body("Table deleted"),
        Err(err) => error_response(err),
    }
}
