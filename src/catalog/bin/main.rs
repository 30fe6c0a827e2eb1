use std::net::SocketAddr;
use axum::{
    routing::get,
    Router,
};
use books_catalog::catalog::controller::{add_book, find_book_by_id, get_books, remove_book, update_book};
use books_catalog::core::controller::AppState;
use books_catalog::core::domain::Configuration;
use books_catalog::utils::telemetry::setup_tracing;
use tracing::log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    setup_tracing();

    let config = Configuration::from_env();
    let state = AppState::new(&config);

    let app = Router::new()
        .route("/api/books", get(get_books).post(add_book))
        .route("/api/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .with_state(state);

    let addr: SocketAddr = config.bind_addr.parse()?;
    info!("catalog service listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
