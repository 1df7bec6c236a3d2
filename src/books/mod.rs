mod book;

pub use book::*;
use sqlx::Row;

use crate::error::{is_unique_violation, AppError, AppResult};
use axum::{
    debug_handler,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

#[debug_handler]
#[tracing::instrument(skip(state))]
pub async fn create_book(
    State(state): State<AppState>,
    Json(book): Json<Book>,
) -> AppResult<impl IntoResponse> {
    let result = sqlx::query(
        r#"
        INSERT INTO books (id, title, author, genre, price)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(book.id)
    .bind(&book.title)
    .bind(&book.author)
    .bind(&book.genre)
    .bind(book.price)
    .execute(&state.db)
    .await;

    match result {
        Ok(_) => Ok((StatusCode::CREATED, Json(book))),
        Err(err) if is_unique_violation(&err) => Err(AppError::Conflict(book.id)),
        Err(err) => Err(err.into()),
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateBookParams {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub price: f64,
}

/// Replaces all four mutable fields. The response echoes the request body,
/// without the id.
#[debug_handler]
#[tracing::instrument(skip(state))]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(params): Json<UpdateBookParams>,
) -> AppResult<Json<UpdateBookParams>> {
    if Book::from_id(id, &state.db).await?.is_none() {
        return Err(AppError::NotFound(id));
    }

    sqlx::query(
        r#"
        UPDATE books
        SET title = ?, author = ?, genre = ?, price = ?
        WHERE id = ?
        "#,
    )
    .bind(&params.title)
    .bind(&params.author)
    .bind(&params.genre)
    .bind(params.price)
    .bind(id)
    .execute(&state.db)
    .await?;

    Ok(Json(params))
}

#[debug_handler]
#[tracing::instrument(skip(state))]
pub async fn get_book_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Book>> {
    match Book::from_id(id, &state.db).await? {
        Some(book) => Ok(Json(book)),
        None => Err(AppError::NotFound(id)),
    }
}

#[derive(Debug, Deserialize)]
pub struct ListBooksParams {
    title: Option<String>,
    author: Option<String>,
    genre: Option<String>,
    sort: Option<String>,
    order: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookList {
    pub books: Vec<Book>,
}

#[debug_handler]
#[tracing::instrument(skip(state))]
pub async fn list_books(
    Query(params): Query<ListBooksParams>,
    State(state): State<AppState>,
) -> AppResult<Json<BookList>> {
    let mut query = sqlx::QueryBuilder::new(
        r#"
        SELECT id, title, author, genre, price
        FROM books
        "#,
    );

    if params.title.is_some() || params.author.is_some() || params.genre.is_some() {
        query.push(" WHERE ");
        let mut separated = query.separated(" AND ");
        if let Some(title) = params.title {
            separated.push("title = ");
            separated.push_bind_unseparated(title);
        }
        if let Some(author) = params.author {
            separated.push("author = ");
            separated.push_bind_unseparated(author);
        }
        if let Some(genre) = params.genre {
            separated.push("genre = ");
            separated.push_bind_unseparated(genre);
        }
    }

    match params.sort.as_deref() {
        Some(sort) => {
            // An unrecognized sort key adds no ORDER BY at all.
            if let Some(key) = SortKey::parse(sort) {
                let order = SortOrder::parse(params.order.as_deref());
                query.push(" ORDER BY ");
                query.push(key.column());
                query.push(" ");
                query.push(order.sql());
            }
        }
        None => {
            query.push(" ORDER BY id ASC");
        }
    }

    tracing::debug!("Query: {}", query.sql());

    let books = query
        .build()
        .fetch_all(&state.db)
        .await?
        .into_iter()
        .map(|row| Book {
            id: row.get("id"),
            title: row.get("title"),
            author: row.get("author"),
            genre: row.get("genre"),
            price: row.get("price"),
        })
        .collect::<Vec<_>>();

    Ok(Json(BookList { books }))
}
