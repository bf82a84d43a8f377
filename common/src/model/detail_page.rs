use serde::{Deserialize, Serialize};

/// The catalog card a dynamic table is attached to. Only the fields the
/// builder's target selector needs; everything else about study pages lives
/// outside this subsystem.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetailPage {
    pub id: i64,
    pub title: String,
    pub slug: String,
}
