//! Language detection service
//!
//! Thin wrapper over whatlang's trigram detector. Results are reported by
//! English display name so they can be resolved through the language table.

use crate::languages;
use tracing::debug;
use whatlang::{Detector, Lang};

/// Detects the dominant language of a text sample
pub struct DetectorService {
    detector: Detector,
}

impl std::fmt::Debug for DetectorService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectorService").finish_non_exhaustive()
    }
}

impl Default for DetectorService {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectorService {
    /// Create a detector covering every language whatlang supports
    pub fn new() -> Self {
        Self {
            detector: Detector::new(),
        }
    }

    /// Detect the language of `text`, returning its English display name
    pub fn detect(&self, text: &str) -> Option<&'static str> {
        let info = self.detector.detect(text)?;
        debug!(
            "whatlang detected: '{}' (confidence: {:.2})",
            info.lang().code(),
            info.confidence()
        );
        Some(display_name(info.lang()))
    }

    /// Detect the language of `text` and resolve it to a two-letter code.
    ///
    /// `Ok(None)` means nothing was detected. `Err` carries the display name
    /// of a detected language the table has no code for.
    pub fn detect_code(&self, text: &str) -> Result<Option<&'static str>, &'static str> {
        match self.detect(text) {
            Some(name) => languages::code_for_name(name).map(Some).ok_or(name),
            None => Ok(None),
        }
    }
}

/// English display name for a detected language.
///
/// Mostly whatlang's own names. Sinhala and Burmese are renamed to match the
/// table. Chinese, Bokmal, Slovene and Tagalog keep names the table does not
/// carry, so they are detected but unmapped.
fn display_name(lang: Lang) -> &'static str {
    match lang {
        Lang::Sin => "Sinhala",
        Lang::Mya => "Myanmar (Burmese)",
        Lang::Cmn => "Chinese",
        Lang::Nob => "Bokmal",
        Lang::Slv => "Slovene",
        Lang::Tgl => "Tagalog",
        other => other.eng_name(),
    }
}
