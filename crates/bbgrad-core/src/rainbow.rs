//! Rainbow stop generation.
//!
//! Hues are spread evenly from 0° to 300° (stopping short of 360° so the two
//! ends are not both red) at 100% saturation and 55% lightness.

use crate::color::{from_hsl, lerp_scalar, Color};
use crate::gradient::count_targets;

const HUE_START: f64 = 0.0;
const HUE_END: f64 = 300.0;
const SATURATION: f64 = 100.0;
const LIGHTNESS: f64 = 55.0;

pub const MIN_STOPS: usize = 2;
pub const MAX_STOPS: usize = 24;

/// Stop count used when the text has no targets.
pub const EMPTY_TEXT_STOPS: usize = 7;

/// Evenly spaced rainbow with `target_count` stops, clamped to `[2, 24]`.
#[allow(clippy::cast_precision_loss)]
pub fn rainbow_stops(target_count: usize) -> Vec<Color> {
    let n = target_count.clamp(MIN_STOPS, MAX_STOPS);
    (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64;
            from_hsl(lerp_scalar(HUE_START, HUE_END, t), SATURATION, LIGHTNESS)
        })
        .collect()
}

/// One rainbow stop per target character of `text`, within the usual bounds.
pub fn rainbow_for_text(text: &str, include_spaces: bool) -> Vec<Color> {
    match count_targets(text, include_spaces) {
        0 => rainbow_stops(EMPTY_TEXT_STOPS),
        n => rainbow_stops(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(stops: &[Color]) -> Vec<String> {
        stops.iter().map(Color::to_hex).collect()
    }

    #[test]
    fn small_counts_give_two_stops() {
        for n in [0, 1, 2] {
            assert_eq!(hex(&rainbow_stops(n)), ["#FF1A1A", "#FF1AFF"]);
        }
    }

    #[test]
    fn large_counts_are_capped() {
        assert_eq!(rainbow_stops(100).len(), MAX_STOPS);
        assert_eq!(rainbow_stops(24).len(), 24);
        assert_eq!(rainbow_stops(23).len(), 23);
    }

    #[test]
    fn seven_stop_sweep() {
        assert_eq!(
            hex(&rainbow_stops(7)),
            ["#FF1A1A", "#FFD91A", "#66FF1A", "#1AFF8C", "#1AB2FF", "#401AFF", "#FF1AFF"]
        );
    }

    #[test]
    fn text_without_targets_uses_seven() {
        assert_eq!(rainbow_for_text("", false).len(), EMPTY_TEXT_STOPS);
        assert_eq!(rainbow_for_text("   ", false).len(), EMPTY_TEXT_STOPS);
    }

    #[test]
    fn text_sizes_the_rainbow() {
        assert_eq!(rainbow_for_text("a", false).len(), 2);
        assert_eq!(rainbow_for_text("a b c", false).len(), 3);
        assert_eq!(rainbow_for_text("a b c", true).len(), 5);
        assert_eq!(rainbow_for_text(&"x".repeat(50), false).len(), MAX_STOPS);
    }
}
