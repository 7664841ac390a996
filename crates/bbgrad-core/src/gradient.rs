//! Piecewise-linear gradient over an ordered list of stops.
//!
//! The compiler and the preview both resolve colors through [`Gradient`], so
//! the markup and the on-screen preview can never disagree.
//!
//! Target `k` of `n` sits at `t = k / (n - 1)` on the gradient. `t` is scaled
//! into segment space (`t * (stops - 1)`), the integer part picks the pair of
//! stops and the fraction interpolates between them. The first target always
//! lands exactly on the first stop and the last target on the last stop.

use crate::color::{clamp01, lerp, Color};

/// A gradient with at least two stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient<'a> {
    stops: &'a [Color],
}

impl<'a> Gradient<'a> {
    /// Wraps a stop list, or `None` when there are fewer than two stops.
    pub fn new(stops: &'a [Color]) -> Option<Self> {
        if stops.len() < 2 {
            None
        } else {
            Some(Self { stops })
        }
    }

    pub fn stops(&self) -> &'a [Color] {
        self.stops
    }

    /// Color at global position `t` in `[0, 1]`.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn at(&self, t: f64) -> Color {
        let last_segment = self.stops.len() - 2;
        let seg_float = clamp01(t) * (self.stops.len() - 1) as f64;
        let segment = (seg_float.floor().max(0.0) as usize).min(last_segment);
        let local_t = seg_float - segment as f64;
        lerp(self.stops[segment], self.stops[segment + 1], clamp01(local_t))
    }

    /// Color for the target at `rank` out of `count` targets.
    #[allow(clippy::cast_precision_loss)]
    pub fn at_rank(&self, rank: usize, count: usize) -> Color {
        let t = if count <= 1 {
            0.0
        } else {
            rank as f64 / (count - 1) as f64
        };
        self.at(t)
    }

    /// Resolves a color for every character of `chars`; non-targets get `None`.
    pub fn colorize(&self, chars: &[char], is_target: impl Fn(char) -> bool) -> Vec<Option<Color>> {
        let count = chars.iter().filter(|&&ch| is_target(ch)).count();
        let mut rank = 0;
        chars
            .iter()
            .map(|&ch| {
                if is_target(ch) {
                    let color = self.at_rank(rank, count);
                    rank += 1;
                    Some(color)
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Number of characters in `text` that would receive a color.
pub fn count_targets(text: &str, include_spaces: bool) -> usize {
    text.chars()
        .filter(|ch| include_spaces || !ch.is_whitespace())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb() -> Vec<Color> {
        vec![
            Color::new(255, 0, 0),
            Color::new(0, 255, 0),
            Color::new(0, 0, 255),
        ]
    }

    #[test]
    fn needs_two_stops() {
        assert!(Gradient::new(&[]).is_none());
        assert!(Gradient::new(&[Color::WHITE]).is_none());
        assert!(Gradient::new(&[Color::WHITE, Color::WHITE]).is_some());
    }

    #[test]
    fn endpoints_hit_first_and_last_stop() {
        let stops = rgb();
        let g = Gradient::new(&stops).unwrap();
        assert_eq!(g.at(0.0), stops[0]);
        assert_eq!(g.at(1.0), stops[2]);
    }

    #[test]
    fn midpoint_hits_middle_stop() {
        let stops = rgb();
        let g = Gradient::new(&stops).unwrap();
        assert_eq!(g.at(0.5), stops[1]);
        assert_eq!(g.at_rank(1, 3), stops[1]);
    }

    #[test]
    fn single_target_gets_first_stop() {
        let stops = rgb();
        let g = Gradient::new(&stops).unwrap();
        assert_eq!(g.at_rank(0, 1), stops[0]);
    }

    #[test]
    fn two_stop_midpoint_rounds() {
        let stops = [Color::BLACK, Color::WHITE];
        let g = Gradient::new(&stops).unwrap();
        assert_eq!(g.at_rank(1, 3), Color::new(128, 128, 128));
    }

    #[test]
    fn colorize_skips_non_targets() {
        let stops = [Color::BLACK, Color::WHITE];
        let g = Gradient::new(&stops).unwrap();
        let chars: Vec<char> = "a b".chars().collect();
        let colors = g.colorize(&chars, |ch| !ch.is_whitespace());
        assert_eq!(colors, vec![Some(Color::BLACK), None, Some(Color::WHITE)]);
    }

    #[test]
    fn count_targets_by_policy() {
        assert_eq!(count_targets("a b\tc", false), 3);
        assert_eq!(count_targets("a b\tc", true), 5);
        assert_eq!(count_targets("   ", false), 0);
        assert_eq!(count_targets("", true), 0);
    }
}
