use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use crate::books::domain::model::Book;
use crate::books::dto::BookDraft;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{json_to_server_error, AppState, ServerError};

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(state.store.clone())
}

pub async fn get_books(
    State(state): State<AppState>,
    Query(req): Query<ListBooksCommandRequest>) -> Result<Json<Vec<Book>>, ServerError> {
    let svc = build_service(&state);
    let res = ListBooksCommand::new(svc).execute(req).await?;
    Ok(Json(res.books))
}

pub async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<Json<Book>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let svc = build_service(&state);
    let res = GetBookCommand::new(svc).execute(req).await?;
    Ok(Json(res.book))
}

pub async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<Book>), ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(&state);
    let res = AddBookCommand::new(svc).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res.book)))
}

// 204 whether or not the id matched; a miss is a silent no-op
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
    json: Json<Value>) -> Result<StatusCode, ServerError> {
    let draft: BookDraft = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let req = UpdateBookCommandRequest::new(
        book_id, draft.title.as_str(), draft.author.as_str(),
        draft.category.as_str(), draft.rating);
    let svc = build_service(&state);
    let _ = UpdateBookCommand::new(svc).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}

// 204 whether or not the id matched; a miss is a silent no-op
pub async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest { book_id };
    let svc = build_service(&state);
    let _ = RemoveBookCommand::new(svc).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}
