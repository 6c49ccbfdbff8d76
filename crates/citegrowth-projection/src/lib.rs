//! # citegrowth-projection
//!
//! Projects an article's present citation count to the count it is expected
//! to reach 10 years after publication.
//!
//! ```text
//! expected = current × GammaCDF(10) / GammaCDF(age)
//! ```
//!
//! Citation accumulation is assumed to follow a common gamma-shaped curve;
//! the article's own count scales it. All inputs, including the current
//! calendar year, are explicit.

pub mod engine;
pub mod formula;
pub mod gamma;
pub mod validation;

pub use engine::ProjectionEngine;
pub use formula::{project_breakdown, project_citations};
pub use gamma::GammaCdf;
