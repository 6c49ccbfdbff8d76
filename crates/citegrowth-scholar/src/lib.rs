//! # citegrowth-scholar
//!
//! Adapter between a Google Scholar results page and the projection model.
//!
//! 1. [`ScholarPage`] reads `(citations, year)` per listed article, following
//!    the versioned layout rules in `ScholarLayoutConfig`.
//! 2. [`Annotator`] projects each article and appends the rendered count to
//!    its citation label through an `IAnnotationSink`. The page itself is a
//!    sink: [`Annotator::annotate_page`] edits the document, and
//!    [`ScholarPage::html`] returns the annotated markup.
//!
//! Articles that fail extraction or projection are left unannotated.

pub mod annotate;
pub mod clock;
pub mod extract;
pub mod parse;
pub mod render;
pub mod sink;

pub use annotate::{AnnotationReport, Annotator, SkippedArticle};
pub use clock::current_calendar_year;
pub use extract::{ExtractedArticle, ScholarPage};
pub use render::render_annotation;
pub use sink::{Annotation, AnnotationLog};
