//! Per-article projection and write-back.

use citegrowth_core::config::AnnotationConfig;
use citegrowth_core::errors::CitegrowthError;
use citegrowth_core::traits::{IAnnotationSink, ICitationProjector};
use serde::Serialize;

use crate::clock;
use crate::extract::{ExtractedArticle, ScholarPage};
use crate::render;

/// An article left unannotated, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedArticle {
    pub position: usize,
    pub reason: String,
}

/// Outcome of annotating one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnnotationReport {
    pub current_year: i32,
    /// Positions that received an annotation.
    pub annotated: Vec<usize>,
    pub skipped: Vec<SkippedArticle>,
}

impl AnnotationReport {
    pub fn total(&self) -> usize {
        self.annotated.len() + self.skipped.len()
    }
}

/// Projects each listed article and writes the rendered count back.
pub struct Annotator<P: ICitationProjector> {
    projector: P,
    config: AnnotationConfig,
}

impl<P: ICitationProjector> Annotator<P> {
    pub fn new(projector: P, config: AnnotationConfig) -> Self {
        Self { projector, config }
    }

    pub fn projector(&self) -> &P {
        &self.projector
    }

    /// Annotate every article on `page` as of `current_year`, writing into `sink`.
    ///
    /// A failing article is skipped and recorded; the rest proceed.
    pub fn annotate(
        &self,
        page: &ScholarPage,
        current_year: i32,
        sink: &mut dyn IAnnotationSink,
    ) -> AnnotationReport {
        self.annotate_articles(page.articles(), current_year, sink)
    }

    /// Annotate `page` in place: each rendered count is appended to its
    /// citation label in the document. Read the result with `page.html()`.
    pub fn annotate_page(&self, page: &mut ScholarPage, current_year: i32) -> AnnotationReport {
        let articles = page.articles();
        self.annotate_articles(articles, current_year, page)
    }

    fn annotate_articles(
        &self,
        articles: Vec<ExtractedArticle>,
        current_year: i32,
        sink: &mut dyn IAnnotationSink,
    ) -> AnnotationReport {
        let mut report = AnnotationReport {
            current_year,
            ..Default::default()
        };

        for article in articles {
            let position = article.position;
            match self.annotate_one(&article, current_year, sink) {
                Ok(()) => report.annotated.push(position),
                Err(e) => {
                    tracing::warn!(position, error = %e, "article left unannotated");
                    report.skipped.push(SkippedArticle {
                        position,
                        reason: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            annotated = report.annotated.len(),
            skipped = report.skipped.len(),
            current_year,
            "annotated results page"
        );
        report
    }

    /// Annotate using the wall-clock year.
    pub fn annotate_now(
        &self,
        page: &ScholarPage,
        sink: &mut dyn IAnnotationSink,
    ) -> AnnotationReport {
        self.annotate(page, clock::current_calendar_year(), sink)
    }

    fn annotate_one(
        &self,
        article: &ExtractedArticle,
        current_year: i32,
        sink: &mut dyn IAnnotationSink,
    ) -> Result<(), CitegrowthError> {
        let observation = article.outcome.clone()?;
        let expected = self
            .projector
            .project_observation(&observation, current_year)?;

        let text = render::render_annotation(expected, &self.config);
        let label = article.citation_text.as_deref().unwrap_or_default();
        sink.append(article.position, label, &text)?;
        Ok(())
    }
}
