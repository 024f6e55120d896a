//! Glyph generator - weighted pick across disjoint code point ranges
//!
//! Each range is weighted by its size, so every code point in the set is equally
//! likely no matter which script it belongs to.

use serde::{Deserialize, Serialize};

use crate::core::random::rand_below;
use crate::core::{RainError, Result};

const SURROGATES: (u32, u32) = (0xD800, 0xDFFF);

/// Inclusive code point range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphRange {
    pub start: u32,
    pub end: u32,
}

impl GlyphRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    #[inline]
    pub fn contains(&self, code: u32) -> bool {
        code >= self.start && code <= self.end
    }

    fn validate(&self) -> Result<()> {
        let fail = |reason| RainError::InvalidGlyphRange { start: self.start, end: self.end, reason };
        if self.start > self.end {
            return Err(fail("start is after end"));
        }
        if self.end > char::MAX as u32 {
            return Err(fail("beyond the last unicode scalar"));
        }
        if self.start <= SURROGATES.1 && self.end >= SURROGATES.0 {
            return Err(fail("overlaps the surrogate block"));
        }
        Ok(())
    }
}

/// Digits, Arabic-Indic digits, Katakana ア..ン and Old Italic.
pub const DEFAULT_RANGES: [GlyphRange; 4] = [
    GlyphRange::new(48, 57),
    GlyphRange::new(1632, 1641),
    GlyphRange::new(12450, 12531),
    GlyphRange::new(66304, 66330),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSet {
    ranges: Vec<GlyphRange>,
    total: u32,
}

impl Default for GlyphSet {
    fn default() -> Self {
        let ranges = DEFAULT_RANGES.to_vec();
        let total = ranges.iter().map(GlyphRange::len).sum();
        Self { ranges, total }
    }
}

impl GlyphSet {
    pub fn new(ranges: Vec<GlyphRange>) -> Result<Self> {
        if ranges.is_empty() {
            return Err(RainError::InvalidConfig("glyph_ranges must not be empty".into()));
        }
        for (i, range) in ranges.iter().enumerate() {
            range.validate()?;
            if let Some(other) = ranges[..i]
                .iter()
                .find(|o| o.start <= range.end && range.start <= o.end)
            {
                return Err(RainError::InvalidGlyphRange {
                    start: range.start,
                    end: range.end,
                    reason: if other == range { "duplicate range" } else { "overlaps another range" },
                });
            }
        }
        let total = ranges.iter().map(GlyphRange::len).sum();
        Ok(Self { ranges, total })
    }

    pub fn ranges(&self) -> &[GlyphRange] {
        &self.ranges
    }

    /// Number of distinct glyphs the set can produce.
    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn contains(&self, code: u32) -> bool {
        self.ranges.iter().any(|r| r.contains(code))
    }

    /// Draw a code point, weighting each range by its size.
    pub fn next_code(&self, rng: &mut u32) -> u32 {
        let mut k = rand_below(rng, self.total);
        for range in &self.ranges {
            let len = range.len();
            if k < len {
                return range.start + k;
            }
            k -= len;
        }
        // Unreachable while k < total; keep the first glyph as a safe answer.
        self.ranges[0].start
    }

    pub fn next_char(&self, rng: &mut u32) -> char {
        char::from_u32(self.next_code(rng)).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

/// Run `draw` `trials` times and count codes that fall outside `ranges`.
///
/// The draw function is injected so any generator can be checked, not only
/// [`GlyphSet::next_code`].
pub fn count_out_of_range(
    ranges: &[GlyphRange],
    mut draw: impl FnMut() -> u32,
    trials: usize,
) -> usize {
    (0..trials)
        .filter(|_| {
            let code = draw();
            !ranges.iter().any(|r| r.contains(code))
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::seed_state;

    #[test]
    fn default_set_sizes() {
        let set = GlyphSet::default();
        let lens: Vec<u32> = set.ranges().iter().map(GlyphRange::len).collect();
        assert_eq!(lens, vec![10, 10, 82, 27]);
        assert_eq!(set.total(), 129);
    }

    #[test]
    fn ten_thousand_draws_stay_in_range() {
        let set = GlyphSet::default();
        let mut rng = seed_state(12345);
        let failures = count_out_of_range(&DEFAULT_RANGES, || set.next_code(&mut rng), 10_000);
        assert_eq!(failures, 0);
    }

    #[test]
    fn harness_catches_a_bad_generator() {
        let mut n = 0u32;
        let failures = count_out_of_range(
            &DEFAULT_RANGES,
            || {
                n += 1;
                if n % 2 == 0 { 58 } else { 48 }
            },
            100,
        );
        assert_eq!(failures, 50);
    }

    #[test]
    fn every_range_gets_drawn() {
        let set = GlyphSet::default();
        let mut rng = seed_state(42);
        let mut hits = [0usize; 4];
        for _ in 0..20_000 {
            let code = set.next_code(&mut rng);
            let idx = DEFAULT_RANGES.iter().position(|r| r.contains(code)).unwrap();
            hits[idx] += 1;
        }
        assert!(hits.iter().all(|&h| h > 0));
        // Katakana holds 82 of 129 glyphs, so it should dominate.
        assert!(hits[2] > hits[0] + hits[1] + hits[3]);
    }

    #[test]
    fn next_char_matches_code_space() {
        let set = GlyphSet::default();
        let mut rng = seed_state(5);
        for _ in 0..1000 {
            let c = set.next_char(&mut rng);
            assert!(set.contains(c as u32));
        }
    }

    #[test]
    fn single_glyph_set_is_constant() {
        let set = GlyphSet::new(vec![GlyphRange::new(65, 65)]).unwrap();
        let mut rng = seed_state(1);
        assert!((0..100).all(|_| set.next_char(&mut rng) == 'A'));
    }

    #[test]
    fn rejects_bad_ranges() {
        assert!(GlyphSet::new(vec![]).is_err());
        assert!(GlyphSet::new(vec![GlyphRange::new(60, 50)]).is_err());
        assert!(GlyphSet::new(vec![GlyphRange::new(0xD700, 0xD900)]).is_err());
        assert!(GlyphSet::new(vec![GlyphRange::new(0x10FFFF, 0x110000)]).is_err());
        assert!(GlyphSet::new(vec![GlyphRange::new(48, 57), GlyphRange::new(50, 60)]).is_err());
        assert!(GlyphSet::new(vec![GlyphRange::new(48, 57), GlyphRange::new(58, 60)]).is_ok());
    }
}
