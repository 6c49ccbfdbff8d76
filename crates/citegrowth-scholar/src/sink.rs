use citegrowth_core::errors::ExtractionError;
use citegrowth_core::traits::IAnnotationSink;
use serde::Serialize;

/// One appended annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub position: usize,
    /// Label text at extraction time.
    pub original_text: String,
    pub appended: String,
}

impl Annotation {
    /// Label text after write-back, e.g. `"Cited by 50 (162)"`.
    pub fn annotated_label(&self) -> String {
        format!("{}{}", self.original_text, self.appended)
    }
}

/// In-memory sink that records annotations in write order.
#[derive(Debug, Default)]
pub struct AnnotationLog {
    entries: Vec<Annotation>,
}

impl AnnotationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Annotation] {
        &self.entries
    }

    pub fn get(&self, position: usize) -> Option<&Annotation> {
        self.entries.iter().find(|a| a.position == position)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<Annotation> {
        self.entries
    }
}

impl IAnnotationSink for AnnotationLog {
    fn append(
        &mut self,
        position: usize,
        original_text: &str,
        text: &str,
    ) -> Result<(), ExtractionError> {
        self.entries.push(Annotation {
            position,
            original_text: original_text.to_string(),
            appended: text.to_string(),
        });
        Ok(())
    }
}
