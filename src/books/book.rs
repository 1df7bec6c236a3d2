use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::error::AppResult;

/// A catalog row. Also the create request body, since callers supply the id.
#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub price: f64,
}

impl Book {
    pub async fn from_id(id: i64, db: &SqlitePool) -> AppResult<Option<Self>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, genre, price
            FROM books
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(book)
    }
}

/// Columns the list endpoint will sort by. Anything else in the `sort`
/// parameter is ignored rather than rejected.
#[derive(Debug, Clone, Copy)]
pub enum SortKey {
    Title,
    Author,
    Genre,
    Price,
}

impl SortKey {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "title" => Some(Self::Title),
            "author" => Some(Self::Author),
            "genre" => Some(Self::Genre),
            "price" => Some(Self::Price),
            _ => None,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Genre => "genre",
            Self::Price => "price",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Only a case-insensitive "desc" sorts descending.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(order) if order.eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}
