//! Services wrapping the external translation provider and the bundled detector

pub mod detector;
pub mod translator;

pub use detector::DetectorService;
pub use translator::TranslatorService;
