// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Last-analysis session state

use image::DynamicImage;
use std::collections::BTreeSet;

use crate::mapper::ZoneLabel;

/// Outcome of the most recent successful analysis
///
/// Explicit caller-owned state: the HTTP layer holds exactly one slot of this
/// behind a lock and overwrites it only when a new analysis succeeds. A
/// failed upstream call leaves the previous session untouched, so the grid,
/// annotated view and download keep serving the prior result.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    /// The analyzed image, kept for overlay rendering
    pub image: DynamicImage,
    /// Full analysis text, verbatim from the model
    pub analysis: String,
    /// Extracted box count; `None` means the text gave no usable count
    pub box_count: Option<u32>,
    /// Zones mentioned in the analysis text
    pub zones: BTreeSet<ZoneLabel>,
    /// Model that produced the analysis
    pub model: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::{extract_box_count, extract_zones};
    use image::RgbImage;

    fn session_for(text: &str) -> AnalysisSession {
        AnalysisSession {
            image: DynamicImage::ImageRgb8(RgbImage::new(30, 30)),
            analysis: text.to_string(),
            box_count: extract_box_count(text),
            zones: extract_zones(text),
            model: "pixtral-12b-2409".to_string(),
        }
    }

    #[test]
    fn test_session_reflects_extraction() {
        let s = session_for("I count 5 boxes. Boxes are located top-left and center.");
        assert_eq!(s.box_count, Some(5));
        assert_eq!(
            s.zones,
            BTreeSet::from([ZoneLabel::TopLeft, ZoneLabel::Center])
        );
    }

    #[test]
    fn test_session_degraded_extraction_is_not_an_error() {
        let s = session_for("La cuisine est lumineuse.");
        assert_eq!(s.box_count, None);
        assert!(s.zones.is_empty());
        assert_eq!(s.analysis, "La cuisine est lumineuse.");
    }
}
