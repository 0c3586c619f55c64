//! HTML rendering backend.
//!
//! One embedded Tera template draws the whole viewer page: the model/file
//! selection form, the report sections, and the fixed empty-state or
//! read-failure notices. Tera's autoescaping covers every document-derived
//! string, so untrusted extraction output cannot inject markup.

use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use super::sections::Report;

static VIEWER_TEMPLATE: &str = include_str!("viewer.html");

/// User-facing message shown when a model has no documents.
pub const NOTICE_NO_DOCUMENTS: &str = "No JSON documents found for the selected model.";
/// User-facing message shown for any read or parse failure.
pub const NOTICE_UNREADABLE: &str = "Unable to read or parse the selected JSON document.";

/// Everything the page template needs for one view request.
#[derive(Debug, Clone, Serialize, Default)]
pub struct ViewerPage {
    pub models: Vec<String>,
    pub selected_model: Option<String>,
    pub files: Vec<String>,
    pub selected_file: Option<String>,
    pub report: Option<Report>,
    /// Fixed informational message (empty catalog or read failure).
    pub notice: Option<String>,
}

/// Template rendering failed. The template is embedded and parsed at
/// construction, so render-time failures indicate a bug, not bad input.
#[derive(Debug, Error)]
#[error("template error: {0}")]
pub struct RenderError(#[from] tera::Error);

/// HTML backend holding the parsed template.
pub struct HtmlRenderer {
    tera: Tera,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template("viewer.html", VIEWER_TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Render the full viewer page.
    pub fn render_page(&self, page: &ViewerPage) -> Result<String, RenderError> {
        let context = Context::from_serialize(page)?;
        Ok(self.tera.render("viewer.html", &context)?)
    }
}
