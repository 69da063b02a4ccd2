//! HTTP server implementation for the task page.
//!
//! axum-based server translating page requests into view events: form
//! posts dispatch events and redirect back to `/`, which re-renders from
//! the current state. Request failures never surface here; the dispatcher
//! logs them and the page simply re-renders the unchanged state.

use axum::{
    Router,
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Json, Redirect},
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::render;
use crate::app::App;
use crate::types::TaskId;
use crate::view::Event;

/// Server state shared across handlers.
#[derive(Clone)]
pub struct WebServer {
    app: Arc<App>,
}

impl WebServer {
    pub fn new(app: Arc<App>) -> Self {
        Self { app }
    }

    pub fn app(&self) -> &App {
        &self.app
    }
}

/// Health check response.
#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Root endpoint: re-fetch the list and render the page.
async fn index(State(state): State<WebServer>) -> Html<String> {
    state.app().dispatch(Event::RefreshList).await;
    let view = state.app().snapshot().await;
    Html(render::render_page(&view))
}

/// Form data for task creation.
#[derive(Debug, serde::Deserialize)]
struct NewTaskForm {
    title: String,
    description: String,
}

/// Handle the creation form. On failure the draft is retained and the
/// redirect re-renders it into the form.
async fn create_task(
    State(state): State<WebServer>,
    Form(form): Form<NewTaskForm>,
) -> impl IntoResponse {
    let app = state.app();
    app.dispatch(Event::DraftTitleChanged(form.title)).await;
    app.dispatch(Event::DraftDescriptionChanged(form.description))
        .await;
    app.dispatch(Event::SubmitNewTask).await;
    Redirect::to("/")
}

/// Handle the per-row delete control.
async fn delete_task(
    State(state): State<WebServer>,
    Path(task_id): Path<TaskId>,
) -> impl IntoResponse {
    state.app().dispatch(Event::DeleteTask(task_id)).await;
    Redirect::to("/")
}

/// Open the edit modal for a listed task.
async fn begin_edit(
    State(state): State<WebServer>,
    Path(task_id): Path<TaskId>,
) -> impl IntoResponse {
    state.app().dispatch(Event::BeginEdit(task_id)).await;
    Redirect::to("/")
}

/// Form data for the edit modal.
#[derive(Debug, serde::Deserialize)]
struct EditForm {
    description: String,
}

/// Save the modal's description. On failure the modal stays open with the
/// unsaved draft intact, allowing retry.
async fn save_edit(
    State(state): State<WebServer>,
    Form(form): Form<EditForm>,
) -> impl IntoResponse {
    let app = state.app();
    app.dispatch(Event::EditedDescriptionChanged(form.description))
        .await;
    app.dispatch(Event::SaveEdit).await;
    Redirect::to("/")
}

/// Close the modal, discarding the draft text.
async fn cancel_edit(State(state): State<WebServer>) -> impl IntoResponse {
    state.app().dispatch(Event::CancelEdit).await;
    Redirect::to("/")
}

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with all routes.
fn build_router(state: WebServer) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/tasks", post(create_task))
        .route("/tasks/{task_id}/delete", post(delete_task))
        .route("/tasks/{task_id}/edit", get(begin_edit))
        .route("/edit/save", post(save_edit))
        .route("/edit/cancel", post(cancel_edit))
        .route("/api/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server on the specified port.
///
/// Returns a oneshot sender that signals graceful shutdown, and the
/// actual address the server is bound to.
pub async fn start_server(
    app: Arc<App>,
    port: u16,
) -> anyhow::Result<(oneshot::Sender<()>, SocketAddr)> {
    let state = WebServer::new(app);
    let router = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    info!("Task page listening on http://{}", bound_addr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("Task page server shutting down");
            })
            .await
        {
            tracing::error!("Task page server error: {}", e);
        }
    });

    Ok((shutdown_tx, bound_addr))
}
