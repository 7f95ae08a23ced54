// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Spatial zone extraction and 3x3 grid geometry

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One of the 9 named positions on the fixed 3x3 reference grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoneLabel {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    Center,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// A pixel rectangle within the source image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ZoneLabel {
    /// All 9 zones in row-major order
    pub const ALL: [ZoneLabel; 9] = [
        ZoneLabel::TopLeft,
        ZoneLabel::TopCenter,
        ZoneLabel::TopRight,
        ZoneLabel::MiddleLeft,
        ZoneLabel::Center,
        ZoneLabel::MiddleRight,
        ZoneLabel::BottomLeft,
        ZoneLabel::BottomCenter,
        ZoneLabel::BottomRight,
    ];

    /// Canonical phrase for this zone
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneLabel::TopLeft => "top-left",
            ZoneLabel::TopCenter => "top-center",
            ZoneLabel::TopRight => "top-right",
            ZoneLabel::MiddleLeft => "middle-left",
            ZoneLabel::Center => "center",
            ZoneLabel::MiddleRight => "middle-right",
            ZoneLabel::BottomLeft => "bottom-left",
            ZoneLabel::BottomCenter => "bottom-center",
            ZoneLabel::BottomRight => "bottom-right",
        }
    }

    /// (column, row) on the 3x3 grid, both in 0..3
    pub fn grid_position(&self) -> (u32, u32) {
        match self {
            ZoneLabel::TopLeft => (0, 0),
            ZoneLabel::TopCenter => (1, 0),
            ZoneLabel::TopRight => (2, 0),
            ZoneLabel::MiddleLeft => (0, 1),
            ZoneLabel::Center => (1, 1),
            ZoneLabel::MiddleRight => (2, 1),
            ZoneLabel::BottomLeft => (0, 2),
            ZoneLabel::BottomCenter => (1, 2),
            ZoneLabel::BottomRight => (2, 2),
        }
    }

    /// Compound phrases that identify this zone in model output.
    ///
    /// Only full compound phrases are listed; bare direction words like "top"
    /// never identify a zone on their own. The center zone is special-cased in
    /// [`extract_zones`] because its single-word phrases need standalone-word
    /// checks.
    fn phrases(&self) -> &'static [&'static str] {
        match self {
            ZoneLabel::TopLeft => &["top-left", "top left", "upper-left", "upper left"],
            ZoneLabel::TopCenter => &[
                "top-center",
                "top center",
                "top-middle",
                "top middle",
                "upper-center",
                "upper center",
            ],
            ZoneLabel::TopRight => &["top-right", "top right", "upper-right", "upper right"],
            ZoneLabel::MiddleLeft => &[
                "middle-left",
                "middle left",
                "center-left",
                "center left",
            ],
            ZoneLabel::Center => &["center", "middle"],
            ZoneLabel::MiddleRight => &[
                "middle-right",
                "middle right",
                "center-right",
                "center right",
            ],
            ZoneLabel::BottomLeft => &["bottom-left", "bottom left", "lower-left", "lower left"],
            ZoneLabel::BottomCenter => &[
                "bottom-center",
                "bottom center",
                "bottom-middle",
                "bottom middle",
                "lower-center",
                "lower center",
            ],
            ZoneLabel::BottomRight => &[
                "bottom-right",
                "bottom right",
                "lower-right",
                "lower right",
            ],
        }
    }
}

impl fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract the set of zones mentioned in free-text analysis
///
/// Case-insensitive search for the full compound phrase of each zone (plus
/// spacing and upper/lower synonyms). Bare "center"/"middle" count as the
/// center zone only when they stand alone: "top-center" and "middle-left"
/// must not also light up center.
///
/// Returns the empty set when no position language is present.
pub fn extract_zones(text: &str) -> BTreeSet<ZoneLabel> {
    let lower = text.to_lowercase();
    let mut zones = BTreeSet::new();

    for zone in ZoneLabel::ALL {
        if zone == ZoneLabel::Center {
            continue;
        }
        if zone.phrases().iter().any(|p| lower.contains(p)) {
            zones.insert(zone);
        }
    }

    if has_standalone_center(&lower) {
        zones.insert(ZoneLabel::Center);
    }

    zones
}

/// True when "center" or "middle" appears as a standalone word, not as part
/// of a compound phrase such as "top-center" or "middle left".
fn has_standalone_center(lower: &str) -> bool {
    const PREFIXES: [&str; 4] = ["top", "bottom", "upper", "lower"];
    const SUFFIXES: [&str; 2] = ["left", "right"];

    for word in ZoneLabel::Center.phrases() {
        for (start, _) in lower.match_indices(word) {
            let before = &lower[..start];
            let after = &lower[start + word.len()..];

            // word boundaries
            if before
                .chars()
                .next_back()
                .map_or(false, |c| c.is_alphanumeric())
            {
                continue;
            }
            if after.chars().next().map_or(false, |c| c.is_alphanumeric()) {
                continue;
            }

            let trimmed_before = before.strip_suffix(['-', ' ']).unwrap_or(before);
            let prefixed = PREFIXES.iter().any(|p| {
                trimmed_before.ends_with(p)
                    && !trimmed_before[..trimmed_before.len() - p.len()]
                        .chars()
                        .next_back()
                        .map_or(false, |c| c.is_alphanumeric())
            });
            if prefixed {
                continue;
            }

            let trimmed_after = after.strip_prefix(['-', ' ']).unwrap_or(after);
            if SUFFIXES.iter().any(|s| trimmed_after.starts_with(s)) {
                continue;
            }

            return true;
        }
    }
    false
}

/// Pixel region of a zone on a width x height image
///
/// The image is divided into a 3x3 grid of equal cells by integer division;
/// remainder pixels go to the last row and column. The 9 regions partition
/// the image exactly for any width, height >= 3.
pub fn zone_to_region(zone: ZoneLabel, width: u32, height: u32) -> Region {
    let (col, row) = zone.grid_position();
    let cell_w = width / 3;
    let cell_h = height / 3;

    Region {
        x: col * cell_w,
        y: row * cell_h,
        width: if col == 2 { width - 2 * cell_w } else { cell_w },
        height: if row == 2 { height - 2 * cell_h } else { cell_h },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_two_zones() {
        let zones = extract_zones("A box at the top-left and another at the bottom-right.");
        let expected: BTreeSet<_> = [ZoneLabel::TopLeft, ZoneLabel::BottomRight].into();
        assert_eq!(zones, expected);
    }

    #[test]
    fn test_bare_top_is_not_a_zone() {
        let zones = extract_zones("There is a fragile marker on top of the stack.");
        assert!(zones.is_empty());
    }

    #[test]
    fn test_bare_left_is_not_a_zone() {
        assert!(extract_zones("The truck left the site.").is_empty());
    }

    #[test]
    fn test_standalone_center() {
        let zones = extract_zones("One large box sits in the center of the image.");
        assert_eq!(zones, BTreeSet::from([ZoneLabel::Center]));
    }

    #[test]
    fn test_standalone_middle() {
        let zones = extract_zones("A box in the middle of the frame.");
        assert_eq!(zones, BTreeSet::from([ZoneLabel::Center]));
    }

    #[test]
    fn test_top_center_does_not_light_center() {
        let zones = extract_zones("A small box at the top-center.");
        assert_eq!(zones, BTreeSet::from([ZoneLabel::TopCenter]));
    }

    #[test]
    fn test_middle_left_does_not_light_center() {
        let zones = extract_zones("A medium box middle-left of the picture.");
        assert_eq!(zones, BTreeSet::from([ZoneLabel::MiddleLeft]));
    }

    #[test]
    fn test_spaced_compound_phrase() {
        let zones = extract_zones("Boxes in the bottom left corner.");
        assert_eq!(zones, BTreeSet::from([ZoneLabel::BottomLeft]));
    }

    #[test]
    fn test_upper_lower_synonyms() {
        let zones = extract_zones("One in the upper right, one in the lower left.");
        let expected: BTreeSet<_> = [ZoneLabel::TopRight, ZoneLabel::BottomLeft].into();
        assert_eq!(zones, expected);
    }

    #[test]
    fn test_center_left_maps_to_middle_left() {
        let zones = extract_zones("A box at center-left.");
        assert_eq!(zones, BTreeSet::from([ZoneLabel::MiddleLeft]));
    }

    #[test]
    fn test_case_insensitive() {
        let zones = extract_zones("Boxes at TOP-LEFT and Bottom-Center.");
        let expected: BTreeSet<_> = [ZoneLabel::TopLeft, ZoneLabel::BottomCenter].into();
        assert_eq!(zones, expected);
    }

    #[test]
    fn test_duplicates_collapse() {
        let zones = extract_zones("top-left, top-left and again top left");
        assert_eq!(zones.len(), 1);
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_zones("").is_empty());
    }

    #[test]
    fn test_no_position_language() {
        assert!(extract_zones("Cinq cartons sont visibles sur la palette.").is_empty());
    }

    #[test]
    fn test_all_nine_zones() {
        let text = "top-left top-center top-right middle-left plus one in the center, \
                    middle-right bottom-left bottom-center bottom-right";
        let zones = extract_zones(text);
        assert_eq!(zones.len(), 9);
    }

    #[test]
    fn test_idempotent() {
        let text = "Boxes at top-left and center.";
        assert_eq!(extract_zones(text), extract_zones(text));
    }

    #[test]
    fn test_word_inside_other_word_ignored() {
        // "epicenter" must not match the center zone
        assert!(extract_zones("The epicenter of activity.").is_empty());
    }

    #[test]
    fn test_zone_label_serde_kebab_case() {
        let json = serde_json::to_string(&ZoneLabel::TopLeft).unwrap();
        assert_eq!(json, "\"top-left\"");
        let back: ZoneLabel = serde_json::from_str("\"bottom-center\"").unwrap();
        assert_eq!(back, ZoneLabel::BottomCenter);
    }

    #[test]
    fn test_zone_label_display() {
        assert_eq!(ZoneLabel::MiddleRight.to_string(), "middle-right");
    }

    #[test]
    fn test_zone_to_region_top_left() {
        let r = zone_to_region(ZoneLabel::TopLeft, 300, 90);
        assert_eq!(
            r,
            Region {
                x: 0,
                y: 0,
                width: 100,
                height: 30
            }
        );
    }

    #[test]
    fn test_zone_to_region_remainder_goes_last() {
        // 100 = 33 + 33 + 34, 101 = 33 + 33 + 35
        let r = zone_to_region(ZoneLabel::BottomRight, 100, 101);
        assert_eq!(r.x, 66);
        assert_eq!(r.y, 66);
        assert_eq!(r.width, 34);
        assert_eq!(r.height, 35);
    }

    #[test]
    fn test_regions_partition_exactly() {
        for (w, h) in [(3u32, 3u32), (4, 5), (100, 101), (1920, 1080), (7, 1000)] {
            let mut covered = 0u64;
            for zone in ZoneLabel::ALL {
                let r = zone_to_region(zone, w, h);
                covered += u64::from(r.width) * u64::from(r.height);
                assert!(r.x + r.width <= w);
                assert!(r.y + r.height <= h);
            }
            assert_eq!(covered, u64::from(w) * u64::from(h), "{}x{}", w, h);

            // no overlaps: row-major neighbors must tile edge to edge
            for zone in ZoneLabel::ALL {
                let (col, row) = zone.grid_position();
                let r = zone_to_region(zone, w, h);
                if col > 0 {
                    let left = ZoneLabel::ALL[(row * 3 + col - 1) as usize];
                    let l = zone_to_region(left, w, h);
                    assert_eq!(l.x + l.width, r.x);
                }
                if row > 0 {
                    let up = ZoneLabel::ALL[((row - 1) * 3 + col) as usize];
                    let u = zone_to_region(up, w, h);
                    assert_eq!(u.y + u.height, r.y);
                }
            }
        }
    }

    #[test]
    fn test_zone_to_region_deterministic() {
        let a = zone_to_region(ZoneLabel::Center, 640, 480);
        let b = zone_to_region(ZoneLabel::Center, 640, 480);
        assert_eq!(a, b);
    }
}
