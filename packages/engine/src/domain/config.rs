//! Rain settings, loadable from JSON.
//!
//! Every field has a default, so `{}` is a valid config and partial documents only
//! override what they name.

use serde::{Deserialize, Serialize};

use super::glyphs::{GlyphRange, GlyphSet, DEFAULT_RANGES};
use crate::core::{RainError, Result};

/// Inclusive HSL lightness bounds for afterglow cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightnessRange {
    pub min: u8,
    pub max: u8,
}

impl Default for LightnessRange {
    fn default() -> Self {
        Self { min: 10, max: 50 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    pub tick_interval_ms: u32,
    /// Per-column, per-tick probability of spawning a drop
    pub drop_chance: f32,
    /// Per-column, per-tick probability of spawning a drop-clear
    pub clear_chance: f32,
    pub afterglow_lightness: LightnessRange,
    pub afterglow_hue: u16,
    /// Row height as a multiple of the font size
    pub line_height: f32,
    pub glyph_ranges: Vec<GlyphRange>,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u32>,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 300,
            drop_chance: 0.01,
            clear_chance: 0.02,
            afterglow_lightness: LightnessRange::default(),
            afterglow_hue: 120,
            line_height: 1.5,
            glyph_ranges: DEFAULT_RANGES.to_vec(),
            seed: None,
        }
    }
}

impl RainConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RainConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(RainError::InvalidConfig("tick_interval_ms must be positive".into()));
        }
        check_chance("drop_chance", self.drop_chance)?;
        check_chance("clear_chance", self.clear_chance)?;
        let LightnessRange { min, max } = self.afterglow_lightness;
        if min > max || max > 100 {
            return Err(RainError::InvalidConfig(format!(
                "afterglow_lightness must satisfy min <= max <= 100, got {}..={}",
                min, max
            )));
        }
        if self.afterglow_hue >= 360 {
            return Err(RainError::InvalidConfig("afterglow_hue must be below 360".into()));
        }
        if !(self.line_height.is_finite() && self.line_height > 0.0) {
            return Err(RainError::InvalidConfig("line_height must be positive".into()));
        }
        self.glyph_set().map(|_| ())
    }

    pub fn glyph_set(&self) -> Result<GlyphSet> {
        GlyphSet::new(self.glyph_ranges.clone())
    }
}

fn check_chance(name: &str, p: f32) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(RainError::InvalidConfig(format!("{} must be within [0, 1], got {}", name, p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = RainConfig::from_json("{}").unwrap();
        assert_eq!(config, RainConfig::default());
        assert_eq!(config.tick_interval_ms, 300);
        assert_eq!(config.afterglow_lightness, LightnessRange { min: 10, max: 50 });
    }

    #[test]
    fn partial_override() {
        let config = RainConfig::from_json(
            r#"{"drop_chance": 0.5, "seed": 7, "glyph_ranges": [{"start": 65, "end": 90}]}"#,
        )
        .unwrap();
        assert_eq!(config.drop_chance, 0.5);
        assert_eq!(config.clear_chance, 0.02);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.glyph_set().unwrap().total(), 26);
    }

    #[test]
    fn json_round_trips() {
        let mut config = RainConfig::default();
        config.seed = Some(99);
        let back = RainConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn rejects_out_of_range_values() {
        for bad in [
            r#"{"drop_chance": 1.5}"#,
            r#"{"clear_chance": -0.1}"#,
            r#"{"tick_interval_ms": 0}"#,
            r#"{"afterglow_lightness": {"min": 60, "max": 50}}"#,
            r#"{"afterglow_lightness": {"min": 10, "max": 101}}"#,
            r#"{"afterglow_hue": 360}"#,
            r#"{"line_height": 0.0}"#,
            r#"{"glyph_ranges": []}"#,
        ] {
            assert!(
                matches!(RainConfig::from_json(bad), Err(RainError::InvalidConfig(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(RainConfig::from_json("{"), Err(RainError::Json(_))));
        assert!(matches!(
            RainConfig::from_json(r#"{"tick_interval_ms": "fast"}"#),
            Err(RainError::Json(_))
        ));
    }
}
