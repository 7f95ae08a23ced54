// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Analyze response types

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::mapper::{zone_to_region, Region, ZoneLabel};

/// A highlighted zone and its pixel region on the analyzed image
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneAnnotation {
    /// Zone label on the 3x3 grid
    pub zone: ZoneLabel,
    /// Pixel rectangle of that zone
    pub region: Region,
}

/// Response from delivery image analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Full analysis text, verbatim from the model
    pub analysis: String,
    /// Extracted box count; `null` means "could not determine", which is
    /// distinct from zero
    pub box_count: Option<u32>,
    /// Zones mentioned in the analysis, sorted, duplicates collapsed
    pub zones: Vec<ZoneLabel>,
    /// Fixed-grid annotations for the detected zones
    pub annotations: Vec<ZoneAnnotation>,
    /// Analyzed image width in pixels
    pub image_width: u32,
    /// Analyzed image height in pixels
    pub image_height: u32,
    /// Round-trip time of the model call in milliseconds
    pub processing_time_ms: u64,
    /// Model that produced the analysis
    pub model: String,
}

impl AnalyzeResponse {
    /// Build a response from extraction results
    pub fn new(
        analysis: String,
        box_count: Option<u32>,
        zones: &BTreeSet<ZoneLabel>,
        image_width: u32,
        image_height: u32,
        processing_time_ms: u64,
        model: &str,
    ) -> Self {
        let annotations = zones
            .iter()
            .map(|&zone| ZoneAnnotation {
                zone,
                region: zone_to_region(zone, image_width, image_height),
            })
            .collect();

        Self {
            analysis,
            box_count,
            zones: zones.iter().copied().collect(),
            annotations,
            image_width,
            image_height,
            processing_time_ms,
            model: model.to_string(),
        }
    }
}
