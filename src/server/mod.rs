//! HTTP presentation surface.
//!
//! One read-only page: `GET /` with optional `model` and `file` query
//! parameters. Selectors are validated against the catalog listing, so a
//! missing or unknown `file` falls back to the first document of the model.
//! This is a local, trusted viewing tool: no mutation endpoints, no
//! authentication.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::catalog::{Catalog, ImageStore};
use crate::config::ViewerConfig;
use crate::core::normalize;
use crate::report::{
    HtmlRenderer, NOTICE_NO_DOCUMENTS, NOTICE_UNREADABLE, RenderError, ViewerPage, render,
};

#[derive(Debug, Error)]
pub enum ServeError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The two optional selectors accepted by the page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewQuery {
    pub model: Option<String>,
    pub file: Option<String>,
}

/// Application state: catalog, image lookup, and the HTML backend. One
/// normalization and render pass per request; nothing is cached across
/// requests.
pub struct App {
    catalog: Catalog,
    images: ImageStore,
    renderer: HtmlRenderer,
}

impl App {
    pub fn new(config: &ViewerConfig) -> Result<Self, RenderError> {
        Ok(Self {
            catalog: Catalog::new(config.data_root.clone()),
            images: ImageStore::new(config.image_dirs.clone()),
            renderer: HtmlRenderer::new()?,
        })
    }

    /// Build the page model for one request. All file and parse failures
    /// are absorbed here into the fixed user-facing notices.
    pub fn page(&self, query: &ViewQuery) -> ViewerPage {
        let mut page = ViewerPage {
            models: self.catalog.models(),
            ..ViewerPage::default()
        };

        let Some(model) = query.model.as_deref().filter(|m| !m.is_empty()) else {
            return page;
        };
        page.selected_model = Some(model.to_string());
        page.files = self.catalog.documents(model);

        if page.files.is_empty() {
            page.notice = Some(NOTICE_NO_DOCUMENTS.to_string());
            return page;
        }

        // Requested file if it is actually listed, else the first one.
        let file = query
            .file
            .as_deref()
            .filter(|f| page.files.iter().any(|listed| listed == f))
            .unwrap_or(&page.files[0])
            .to_string();

        match self.catalog.read_document(model, &file) {
            Ok(raw) => {
                let invoice = normalize(&raw);
                let image = file_stem(&file).and_then(|base| self.images.find(base));
                page.report = Some(render(&invoice, &raw, image.as_ref()));
            }
            Err(e) => {
                warn!(model, file = %file, error = %e, "unable to produce document");
                page.notice = Some(NOTICE_UNREADABLE.to_string());
            }
        }
        page.selected_file = Some(file);
        page
    }
}

fn file_stem(file: &str) -> Option<&str> {
    Path::new(file).file_stem().and_then(|s| s.to_str())
}

pub fn router(app: Arc<App>) -> Router {
    Router::new()
        .route("/", get(view))
        .route("/healthz", get(healthz))
        .with_state(app)
}

async fn view(State(app): State<Arc<App>>, Query(query): Query<ViewQuery>) -> Response {
    let page = app.page(&query);
    match app.renderer.render_page(&page) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = %e, "page rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal rendering error").into_response()
        }
    }
}

async fn healthz() -> &'static str {
    "ok"
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: ViewerConfig) -> Result<(), ServeError> {
    let app = Arc::new(App::new(&config)?);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!(
        addr = %config.listen_addr,
        root = %config.data_root.display(),
        "invoice output viewer listening"
    );
    axum::serve(listener, router(app)).await?;
    Ok(())
}
