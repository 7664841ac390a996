//! How many more characters fit in the output budget.
//!
//! [`estimate_capacity`] answers "how many more characters can I type?" by
//! appending a filler letter to the text and binary-searching the largest
//! count whose compiled markup still fits the budget.
//!
//! The search assumes markup length never shrinks when a filler is appended.
//! With the hex format that always holds, because every colored character
//! adds exactly the same number of markup characters. With the rgb format,
//! channel values with fewer decimal digits can shorten other tags, so
//! treat the result as an estimate there.

use crate::color::Color;
use crate::compile::compile;
use crate::options::RenderOptions;

/// Default output budget, in UTF-16 code units.
pub const DEFAULT_BUDGET: usize = 600;

/// Upper bound of the search. Well above the answer for [`DEFAULT_BUDGET`]
/// (each hex-colored character costs 24 units).
pub const MAX_TRY: usize = 120;

/// Character appended during the search. Must be a non-whitespace,
/// non-bracket letter so it is always a target and never escaped.
pub const FILLER: char = 'a';

/// Largest `k` in `[0, MAX_TRY]` such that `base` followed by `k` fillers
/// compiles to at most `budget` units.
///
/// Returns 0 when `base` already exceeds the budget.
pub fn estimate_capacity(
    base: &str,
    stops: &[Color],
    options: &RenderOptions,
    budget: usize,
) -> usize {
    let base_len = compile(base, stops, options).len();
    if base_len > budget {
        tracing::debug!(base_len, budget, "base text already over budget");
        return 0;
    }

    let fits = |k: usize| {
        let mut text = String::with_capacity(base.len() + k);
        text.push_str(base);
        text.extend(std::iter::repeat(FILLER).take(k));
        compile(&text, stops, options).len() <= budget
    };

    let mut lo = 0;
    let mut hi = MAX_TRY;
    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        if fits(mid) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }

    tracing::debug!(base_len, budget, capacity = lo, "estimated capacity");
    lo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::INSUFFICIENT_STOPS;

    fn stops() -> Vec<Color> {
        vec![Color::new(0x85, 0xB9, 0xFF), Color::new(0xD0, 0x64, 0xFF)]
    }

    fn opts() -> RenderOptions {
        RenderOptions::default()
    }

    // Each colored char costs 24 units in hex format.
    const PER_CHAR: usize = 24;

    #[test]
    fn empty_text_default_budget() {
        assert_eq!(estimate_capacity("", &stops(), &opts(), DEFAULT_BUDGET), 25);
    }

    #[test]
    fn accounts_for_existing_text() {
        // 5 chars = 120 units, leaves 480 = 20 more chars.
        assert_eq!(estimate_capacity("hello", &stops(), &opts(), DEFAULT_BUDGET), 20);
    }

    #[test]
    fn uncolored_spaces_cost_one_unit() {
        // "a b" = 2 * 24 + 1 = 49; budget 100 leaves 51 → 2 more chars.
        assert_eq!(estimate_capacity("a b", &stops(), &opts(), 100), 2);
    }

    #[test]
    fn exact_fit_is_included() {
        assert_eq!(estimate_capacity("", &stops(), &opts(), PER_CHAR * 3), 3);
        assert_eq!(estimate_capacity("", &stops(), &opts(), PER_CHAR * 3 - 1), 2);
    }

    #[test]
    fn over_budget_returns_zero() {
        let text = "x".repeat(30);
        assert_eq!(estimate_capacity(&text, &stops(), &opts(), DEFAULT_BUDGET), 0);
    }

    #[test]
    fn zero_budget() {
        assert_eq!(estimate_capacity("", &stops(), &opts(), 0), 0);
    }

    #[test]
    fn capped_at_max_try() {
        assert_eq!(estimate_capacity("", &stops(), &opts(), 1_000_000), MAX_TRY);
    }

    #[test]
    fn sentinel_output_has_constant_length() {
        // With one stop every candidate compiles to the same sentinel.
        let one = [Color::WHITE];
        assert_eq!(
            estimate_capacity("abc", &one, &opts(), INSUFFICIENT_STOPS.len()),
            MAX_TRY
        );
        assert_eq!(
            estimate_capacity("abc", &one, &opts(), INSUFFICIENT_STOPS.len() - 1),
            0
        );
    }

    #[test]
    fn result_is_tight() {
        let budget = 333;
        let k = estimate_capacity("hey there", &stops(), &opts(), budget);
        let fits = format!("hey there{}", "a".repeat(k));
        let over = format!("hey there{}", "a".repeat(k + 1));
        assert!(compile(&fits, &stops(), &opts()).len() <= budget);
        assert!(compile(&over, &stops(), &opts()).len() > budget);
    }
}
