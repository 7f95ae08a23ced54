// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text-to-zone mapping for vision model output
//!
//! This module provides:
//! - Box count extraction from free-text analysis
//! - Spatial zone extraction from position keywords
//! - Zone to pixel-region conversion on a fixed 3x3 grid
//!
//! Everything here is a pure function of its inputs. Unparseable text is a
//! degraded result (absent count, empty zone set), never an error.

pub mod box_count;
pub mod zones;

pub use box_count::extract_box_count;
pub use zones::{extract_zones, zone_to_region, Region, ZoneLabel};
