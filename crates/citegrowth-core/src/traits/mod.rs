pub mod annotation_sink;
pub mod projector;

pub use annotation_sink::IAnnotationSink;
pub use projector::ICitationProjector;
