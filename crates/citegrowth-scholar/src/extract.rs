//! Article extraction from a results page.

use citegrowth_core::config::ScholarLayoutConfig;
use citegrowth_core::errors::ExtractionError;
use citegrowth_core::models::ArticleObservation;
use citegrowth_core::traits::IAnnotationSink;
use scraper::node::{Node, Text};
use scraper::{ElementRef, Html, Selector};

use crate::parse;

/// One listed article as found on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedArticle {
    /// Index among the listed articles (non-article children excluded).
    pub position: usize,
    /// Text of the citation label, when the footer had one at the expected index.
    pub citation_text: Option<String>,
    pub outcome: Result<ArticleObservation, ExtractionError>,
}

/// Compiled CSS selectors of a layout.
#[derive(Debug)]
struct Selectors {
    container: Selector,
    footer: Selector,
    author: Selector,
}

impl Selectors {
    fn compile(layout: &ScholarLayoutConfig) -> Result<Self, ExtractionError> {
        Ok(Self {
            container: compile(&layout.results_container)?,
            footer: compile(&layout.footer_links)?,
            author: compile(&layout.author_line)?,
        })
    }
}

fn compile(selector: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(selector).map_err(|e| ExtractionError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// A parsed results page.
pub struct ScholarPage {
    document: Html,
    selectors: Selectors,
    layout: ScholarLayoutConfig,
}

impl ScholarPage {
    /// Parse `html` under `layout`.
    ///
    /// Fails only when a selector is invalid or the results container is
    /// absent; problems with individual articles surface per article.
    pub fn parse(html: &str, layout: &ScholarLayoutConfig) -> Result<Self, ExtractionError> {
        let selectors = Selectors::compile(layout)?;
        let document = Html::parse_document(html);

        if document.select(&selectors.container).next().is_none() {
            return Err(ExtractionError::ContainerNotFound {
                selector: layout.results_container.clone(),
            });
        }

        tracing::debug!(
            layout_version = %layout.layout_version,
            "parsed results page"
        );
        Ok(Self {
            document,
            selectors,
            layout: layout.clone(),
        })
    }

    pub fn layout(&self) -> &ScholarLayoutConfig {
        &self.layout
    }

    /// Serialized document, including any annotations written back.
    pub fn html(&self) -> String {
        self.document.html()
    }

    /// Listed articles in page order.
    pub fn articles(&self) -> Vec<ExtractedArticle> {
        self.article_elements()
            .into_iter()
            .enumerate()
            .map(|(position, article)| self.extract(position, article))
            .collect()
    }

    /// Append `text` as a new text node at the end of the citation label of
    /// the article at `position`.
    ///
    /// `original_text` must still match the label, so a page edited since
    /// extraction is never annotated at the wrong spot.
    pub fn append_to_citation_label(
        &mut self,
        position: usize,
        original_text: &str,
        text: &str,
    ) -> Result<(), ExtractionError> {
        let failed = |reason: String| ExtractionError::WriteBackFailed { position, reason };

        let link_id = {
            let article = self
                .article_elements()
                .into_iter()
                .nth(position)
                .ok_or_else(|| failed("no article at this position".to_string()))?;
            let link = self
                .citation_link(article)
                .map_err(|e| failed(e.to_string()))?;
            let current: String = link.text().collect();
            if current != original_text {
                return Err(failed(format!(
                    "label reads {current:?}, expected {original_text:?}"
                )));
            }
            link.id()
        };

        let mut link = self
            .document
            .tree
            .get_mut(link_id)
            .ok_or_else(|| failed("label node vanished".to_string()))?;
        link.append(Node::Text(Text { text: text.into() }));
        Ok(())
    }

    fn article_elements(&self) -> Vec<ElementRef<'_>> {
        let Some(container) = self.document.select(&self.selectors.container).next() else {
            return Vec::new();
        };

        container
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().classes().any(|c| c == self.layout.article_class))
            .collect()
    }

    fn extract(&self, position: usize, article: ElementRef<'_>) -> ExtractedArticle {
        let citation_text = self
            .citation_link(article)
            .map(|link| link.text().collect::<String>());

        let outcome = citation_text
            .as_ref()
            .map_err(Clone::clone)
            .and_then(|label| parse::parse_citation_count(label))
            .and_then(|citations| {
                let year = self.publication_year(article)?;
                Ok(ArticleObservation::new(citations, year))
            });

        if let Ok(obs) = &outcome {
            tracing::debug!(
                position,
                citations = obs.current_citations,
                year = obs.publication_year,
                "extracted article"
            );
        }

        ExtractedArticle {
            position,
            citation_text: citation_text.ok(),
            outcome,
        }
    }

    fn citation_link<'a>(&self, article: ElementRef<'a>) -> Result<ElementRef<'a>, ExtractionError> {
        let footer = article.select(&self.selectors.footer).next().ok_or_else(|| {
            ExtractionError::ElementNotFound {
                selector: self.layout.footer_links.clone(),
            }
        })?;

        let index = self.layout.citation_link_index;
        footer
            .children()
            .filter_map(ElementRef::wrap)
            .nth(index)
            .ok_or(ExtractionError::CitationLabelMissing { index })
    }

    fn publication_year(&self, article: ElementRef<'_>) -> Result<i32, ExtractionError> {
        let author = article.select(&self.selectors.author).next().ok_or_else(|| {
            ExtractionError::ElementNotFound {
                selector: self.layout.author_line.clone(),
            }
        })?;
        let text: String = author.text().collect();
        parse::parse_publication_year(&text, self.layout.author_segment_delimiter)
    }
}

/// Writes annotations straight into the parsed document.
impl IAnnotationSink for ScholarPage {
    fn append(
        &mut self,
        position: usize,
        original_text: &str,
        text: &str,
    ) -> Result<(), ExtractionError> {
        self.append_to_citation_label(position, original_text, text)
    }
}
