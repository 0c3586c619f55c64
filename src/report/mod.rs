//! Report rendering: section selection and the HTML backend.

mod html;
mod sections;

pub use html::{HtmlRenderer, NOTICE_NO_DOCUMENTS, NOTICE_UNREADABLE, RenderError, ViewerPage};
pub use sections::{FieldRow, Report, Section, SectionBody, render};
