//! # Detail Page Service Module
//!
//! Minimal surface over the catalog cards that dynamic tables attach to:
//! the builder needs a list of candidate target pages, and the store needs
//! the pages to exist so `detail_page_id` references can be validated.
//! Everything else about study pages is managed outside this subsystem.

mod list;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/detail_pages";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/save", post().to(save::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{self, StoreError};
    use common::model::error::ValidationError;
    use common::requests::SaveDetailPageRequest;
    use rusqlite::Connection;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        db::init_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn created_pages_show_up_in_the_listing() {
        let conn = test_conn();
        let request = SaveDetailPageRequest {
            title: "Masters in the Netherlands".into(),
            slug: "masters-netherlands".into(),
        };
        let page = save::save_page(&conn, &request).unwrap();
        assert!(page.id > 0);

        let pages = list::list_pages(&conn).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0], page);
    }

    #[test]
    fn blank_title_and_slug_are_rejected() {
        let conn = test_conn();
        let err = save::save_page(
            &conn,
            &SaveDetailPageRequest { title: " ".into(), slug: "x".into() },
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::Validation(ValidationError::EmptyTitle)));

        let err = save::save_page(
            &conn,
            &SaveDetailPageRequest { title: "x".into(), slug: "".into() },
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::Validation(ValidationError::EmptySlug)));
    }
}
