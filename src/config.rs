//! Tunable timings, palette and message for the greeting.

use crate::error::{GreetingError, GreetingResult};
use crate::logging::LogLevel;

/// Message revealed character by character on the animated-message screen.
pub const LOVE_MESSAGE: &str = "Sayang, makasih sudah jadi bagian penting dalam hidupku. Semoga kita selalu bisa saling jaga dan tetap bareng. Selamat Hari Valentine.";

pub const TYPING_INTERVAL_MS: f64 = 80.0;
pub const PARTICLE_INTERVAL_MS: f64 = 1500.0;
pub const CONFETTI_BURST: usize = 60;
/// Upper bound on `confetti_burst`; one click spawns the whole burst.
pub const MAX_CONFETTI_BURST: usize = 1_000;
pub const CONFETTI_PALETTE: [&str; 4] = ["#e74c3c", "#ff79c6", "#ffffff", "#6a11cb"];
/// Share of confetti pieces rendered as a heart glyph instead of a square.
pub const HEART_CHANCE: f64 = 0.3;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GreetingConfig {
    pub message: String,
    pub typing_interval_ms: f64,
    pub particle_interval_ms: f64,
    pub confetti_burst: usize,
    pub confetti_palette: Vec<String>,
    pub heart_chance: f64,
    pub log_level: LogLevel,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            message: LOVE_MESSAGE.to_string(),
            typing_interval_ms: TYPING_INTERVAL_MS,
            particle_interval_ms: PARTICLE_INTERVAL_MS,
            confetti_burst: CONFETTI_BURST,
            confetti_palette: CONFETTI_PALETTE.iter().map(|c| c.to_string()).collect(),
            heart_chance: HEART_CHANCE,
            log_level: LogLevel::Info,
        }
    }
}

impl GreetingConfig {
    /// Parse a (possibly partial) JSON object; missing keys keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> GreetingResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> GreetingResult<()> {
        if !(self.typing_interval_ms > 0.0) {
            return Err(GreetingError::Config(format!(
                "typing_interval_ms must be positive, got {}",
                self.typing_interval_ms
            )));
        }
        if !(self.particle_interval_ms > 0.0) {
            return Err(GreetingError::Config(format!(
                "particle_interval_ms must be positive, got {}",
                self.particle_interval_ms
            )));
        }
        if self.confetti_burst > MAX_CONFETTI_BURST {
            return Err(GreetingError::Config(format!(
                "confetti_burst must be at most {MAX_CONFETTI_BURST}, got {}",
                self.confetti_burst
            )));
        }
        if self.confetti_palette.is_empty() {
            return Err(GreetingError::Config("confetti_palette is empty".into()));
        }
        if !(0.0..=1.0).contains(&self.heart_chance) {
            return Err(GreetingError::Config(format!(
                "heart_chance must be within [0, 1], got {}",
                self.heart_chance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_built_in_constants() {
        let cfg = GreetingConfig::default();
        assert_eq!(cfg.typing_interval_ms, 80.0);
        assert_eq!(cfg.particle_interval_ms, 1500.0);
        assert_eq!(cfg.confetti_burst, 60);
        assert_eq!(cfg.confetti_palette.len(), 4);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let cfg = GreetingConfig { typing_interval_ms: 0.0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(GreetingError::Config(_))));

        let cfg = GreetingConfig { particle_interval_ms: f64::NAN, ..Default::default() };
        assert!(cfg.validate().is_err());

        let cfg = GreetingConfig { confetti_palette: Vec::new(), ..Default::default() };
        assert!(cfg.validate().is_err());

        let cfg = GreetingConfig { heart_chance: 1.5, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn confetti_burst_is_capped() {
        let cfg = GreetingConfig { confetti_burst: MAX_CONFETTI_BURST, ..Default::default() };
        assert!(cfg.validate().is_ok());

        let cfg = GreetingConfig { confetti_burst: MAX_CONFETTI_BURST + 1, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(GreetingError::Config(_))));
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = GreetingConfig::from_json(r#"{"message":"hi","log_level":"debug"}"#).unwrap();
        assert_eq!(cfg.message, "hi");
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.confetti_burst, 60);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_with_invalid_interval_is_rejected() {
        assert!(GreetingConfig::from_json(r#"{"typing_interval_ms":-1}"#).is_err());
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_with_huge_burst_is_rejected() {
        assert!(GreetingConfig::from_json(r#"{"confetti_burst":1000000000}"#).is_err());
    }
}
