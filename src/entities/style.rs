// Randomised, write-once styles for decorative entities.
use crate::config::{CONFETTI_PALETTE, GreetingConfig, HEART_CHANCE};
use crate::rng::RandomSource;

/// Container an entity lives in while it animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    ParticleBackground,
    Confetti,
    CursorTrail,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityKind {
    BackgroundParticle,
    ConfettiPiece,
    /// Heart left behind the pointer at client coordinates.
    CursorTrailMark { x: f64, y: f64 },
}

impl EntityKind {
    pub fn layer(self) -> Layer {
        match self {
            EntityKind::BackgroundParticle => Layer::ParticleBackground,
            EntityKind::ConfettiPiece => Layer::Confetti,
            EntityKind::CursorTrailMark { .. } => Layer::CursorTrail,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EntityKind::BackgroundParticle => "background particle",
            EntityKind::ConfettiPiece => "confetti piece",
            EntityKind::CursorTrailMark { .. } => "cursor trail mark",
        }
    }
}

pub const HEART_GLYPH: &str = "❤️";

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleStyle {
    pub size_px: f64,     // 2..7
    pub left_vw: f64,     // 0..100
    pub duration_s: f64,  // 10..25
    pub delay_s: f64,     // 0..5
    pub opacity: f64,     // 0.2..0.7
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfettiShape {
    /// Heart glyph on a transparent background.
    Heart { font_size_px: f64 },
    Piece { size_px: f64, round: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiStyle {
    pub color: String,
    pub shape: ConfettiShape,
    pub left_vw: f64,
    pub top_px: f64,
    pub delay_s: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailStyle {
    pub x_px: f64,
    pub y_px: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StyleParams {
    Particle(ParticleStyle),
    Confetti(ConfettiStyle),
    CursorTrail(TrailStyle),
}

impl StyleParams {
    pub fn class_name(&self) -> &'static str {
        match self {
            StyleParams::Particle(_) => "particle",
            StyleParams::Confetti(_) => "confetti",
            StyleParams::CursorTrail(_) => "cursor-heart",
        }
    }
}

/// Pure style sampling; every attribute is an independent uniform draw.
#[derive(Debug, Clone)]
pub struct StyleSampler {
    palette: Vec<String>,
    heart_chance: f64,
}

impl Default for StyleSampler {
    fn default() -> Self {
        Self {
            palette: CONFETTI_PALETTE.iter().map(|c| c.to_string()).collect(),
            heart_chance: HEART_CHANCE,
        }
    }
}

impl StyleSampler {
    pub fn from_config(cfg: &GreetingConfig) -> Self {
        Self {
            palette: cfg.confetti_palette.clone(),
            heart_chance: cfg.heart_chance,
        }
    }

    pub fn sample<R: RandomSource + ?Sized>(&self, kind: EntityKind, rng: &mut R) -> StyleParams {
        match kind {
            EntityKind::BackgroundParticle => StyleParams::Particle(ParticleStyle {
                size_px: rng.range(2.0, 7.0),
                left_vw: rng.range(0.0, 100.0),
                duration_s: rng.range(10.0, 25.0),
                delay_s: rng.range(0.0, 5.0),
                opacity: rng.range(0.2, 0.7),
            }),
            EntityKind::ConfettiPiece => {
                let color = self
                    .palette
                    .get(rng.index(self.palette.len()))
                    .cloned()
                    .unwrap_or_else(|| "#ffffff".to_string());
                let shape = if rng.next_f64() < self.heart_chance {
                    ConfettiShape::Heart { font_size_px: rng.range(10.0, 25.0) }
                } else {
                    ConfettiShape::Piece {
                        size_px: rng.range(4.0, 12.0),
                        round: rng.next_f64() < 0.5,
                    }
                };
                StyleParams::Confetti(ConfettiStyle {
                    color,
                    shape,
                    left_vw: rng.range(0.0, 100.0),
                    top_px: -20.0,
                    delay_s: rng.range(0.0, 0.2),
                })
            }
            EntityKind::CursorTrailMark { x, y } => {
                StyleParams::CursorTrail(TrailStyle { x_px: x, y_px: y })
            }
        }
    }
}
