// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Box count extraction from vision model output

use once_cell::sync::Lazy;
use regex::Regex;

/// Count patterns in priority order. The first pattern that matches anywhere
/// in the text wins; every pattern requires a "box" qualifier next to the
/// number so that unrelated numerals (e.g. a worksheet count) never match.
static COUNT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)I count (\d+) box",
        r"(?i)count.*?(\d+) box",
        r"(?i)There are (\d+) box",
        r"(?i)(?:total of |approximately )?(\d+) box",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("count pattern must compile"))
    .collect()
});

/// Extract the reported box count from free-text analysis
///
/// # Arguments
/// * `text` - Arbitrary model output, may be empty
///
/// # Returns
/// * `Some(n)` - The count captured by the highest-priority matching pattern
/// * `None` - No pattern matched; "could not determine", distinct from zero
pub fn extract_box_count(text: &str) -> Option<u32> {
    for pattern in COUNT_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            if let Ok(count) = caps[1].parse::<u32>() {
                return Some(count);
            }
        }
    }
    None
}
