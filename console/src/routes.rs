use crate::backend::SearchBackend;
use crate::console::{submit, ConsoleSettings};
use crate::form::SearchForm;
use crate::page::render_page;
use crate::view::ConsoleView;
use axum::extract::multipart::MultipartError;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use log::error;
use std::sync::Arc;
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct AppState<B>
where
    B: SearchBackend,
{
    pub backend: B,
    pub settings: Arc<ConsoleSettings>,
}

pub fn router<B>(state: AppState<B>, static_dir: &str, max_upload_bytes: usize) -> Router
where
    B: SearchBackend + Clone + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/search", get(index).post(search::<B>))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
        .nest_service("/static", ServeDir::new(static_dir))
}

async fn index() -> Html<String> {
    Html(render_page(ConsoleView::idle("")))
}

async fn search<B>(
    State(state): State<AppState<B>>,
    multipart: Multipart,
) -> Result<Html<String>, MultipartError>
where
    B: SearchBackend + Clone + 'static,
{
    let form = SearchForm::from_multipart(multipart)
        .await
        .inspect_err(|err| error!("Failed to read search form: {err}"))?;
    let model = submit(&state.backend, form, &state.settings).await;
    Ok(Html(render_page(model)))
}
