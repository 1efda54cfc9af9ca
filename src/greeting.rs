//! The whole greeting as one explicit state object.
//!
//! `Greeting` owns the navigator, the typewriter, the surprise controls, the
//! music flag and the decorative entities. Each UI event maps to one method;
//! the renderer reads a [`ViewState`] snapshot back out. Nothing here touches
//! the browser directly, so the full journey runs under native unit tests.

use crate::clock::IntervalClock;
use crate::config::GreetingConfig;
use crate::console_debug;
use crate::entities::{EntityId, EntityKind, EntityManager, EntitySurface, Layer, StyleSampler};
use crate::error::PlaybackError;
use crate::navigator::{Navigator, Screen, Transition};
use crate::playback::{AudioSink, PlayTicket, PlaybackController, PlaybackState};
use crate::rng::RandomSource;
use crate::typing::{TypingStep, Typewriter};

/// Upper bound on background particles spawned in one frame after the page
/// clock jumps (for example when a hidden tab becomes visible again).
pub const MAX_PARTICLE_CATCH_UP: u64 = 4;

/// Visibility of the controls on the surprise screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurpriseState {
    pub trigger_visible: bool,
    pub message_visible: bool,
    pub final_visible: bool,
}

impl Default for SurpriseState {
    fn default() -> Self {
        Self {
            trigger_visible: true,
            message_visible: false,
            final_visible: false,
        }
    }
}

/// Everything the renderer needs, as plain values.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub active: Screen,
    pub typing_text: String,
    pub caret_visible: bool,
    pub next_visible: bool,
    pub surprise: SurpriseState,
    pub music: PlaybackState,
}

/// What a frame tick changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub typed: usize,
    pub particles: usize,
    pub typing_finished: bool,
}

impl TickReport {
    pub fn needs_render(&self) -> bool {
        self.typed > 0
    }
}

pub struct Greeting<S: EntitySurface, A: AudioSink> {
    config: GreetingConfig,
    navigator: Navigator,
    typewriter: Typewriter,
    typing_clock: IntervalClock,
    particle_clock: IntervalClock,
    surprise: SurpriseState,
    playback: PlaybackController,
    audio: A,
    entities: EntityManager<S>,
    rng: Box<dyn RandomSource>,
}

impl<S: EntitySurface, A: AudioSink> Greeting<S, A> {
    pub fn new(
        config: GreetingConfig,
        surface: S,
        audio: A,
        rng: Box<dyn RandomSource>,
        now: f64,
    ) -> Self {
        let sampler = StyleSampler::from_config(&config);
        Self {
            navigator: Navigator::new(),
            typewriter: Typewriter::new(config.message.clone()),
            typing_clock: IntervalClock::new(config.typing_interval_ms, now),
            particle_clock: IntervalClock::new(config.particle_interval_ms, now),
            surprise: SurpriseState::default(),
            playback: PlaybackController::new(),
            audio,
            entities: EntityManager::new(surface, sampler),
            rng,
            config,
        }
    }

    pub fn config(&self) -> &GreetingConfig {
        &self.config
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    pub fn entities(&self) -> &EntityManager<S> {
        &self.entities
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn surprise(&self) -> SurpriseState {
        self.surprise
    }

    fn show(&mut self, screen: Screen) -> Transition {
        let t = self.navigator.transition_to(screen);
        if !t.is_noop() {
            console_debug!("screen {:?} -> {:?}", t.from, t.to);
        }
        t
    }

    /// "Open message": show the animated message, start typing from scratch and
    /// try to start the music.
    pub fn open_message(&mut self, now: f64) -> Transition {
        let t = self.show(Screen::AnimatedMessage);
        self.typewriter.restart();
        self.typing_clock.reset(now);
        self.playback.try_autoplay(&mut self.audio);
        t
    }

    pub fn move_to_letter(&mut self) -> Transition {
        self.show(Screen::LoveLetter)
    }

    pub fn show_surprise(&mut self) -> Transition {
        self.show(Screen::Surprise)
    }

    /// Confetti burst plus reveal of the special message and the final button.
    pub fn trigger_surprise(&mut self) -> Vec<EntityId> {
        let ids = self.entities.spawn_burst(
            EntityKind::ConfettiPiece,
            self.config.confetti_burst,
            self.rng.as_mut(),
        );
        self.surprise = SurpriseState {
            trigger_visible: false,
            message_visible: true,
            final_visible: true,
        };
        console_debug!("surprise triggered, {} confetti", ids.len());
        ids
    }

    pub fn move_to_final(&mut self) -> Transition {
        self.show(Screen::Final)
    }

    /// Back to the opening screen with every transient control reset. Music is
    /// left as it is.
    pub fn restart(&mut self) -> Transition {
        self.surprise = SurpriseState::default();
        self.typewriter.clear();
        self.show(Screen::Opening)
    }

    pub fn toggle_music(&mut self) {
        self.playback.toggle(&mut self.audio);
    }

    pub fn settle_playback(&mut self, ticket: PlayTicket, result: Result<(), PlaybackError>) -> bool {
        self.playback.settle(ticket, result)
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) -> Option<EntityId> {
        self.entities
            .spawn(EntityKind::CursorTrailMark { x, y }, self.rng.as_mut())
    }

    pub fn spawn_particle(&mut self) -> Option<EntityId> {
        self.entities
            .spawn(EntityKind::BackgroundParticle, self.rng.as_mut())
    }

    /// Animation completion for one entity.
    pub fn entity_finished(&mut self, id: EntityId) -> bool {
        self.entities.complete(id)
    }

    pub fn live_entities(&self, layer: Layer) -> usize {
        self.entities.live_in(layer)
    }

    /// Advance the typing and particle timers to page time `now`.
    pub fn tick(&mut self, now: f64) -> TickReport {
        let mut report = TickReport::default();

        for _ in 0..self.typing_clock.due(now) {
            match self.typewriter.tick() {
                TypingStep::Revealed(_) => report.typed += 1,
                TypingStep::Finished(_) => {
                    report.typed += 1;
                    report.typing_finished = true;
                }
                TypingStep::Idle => break,
            }
        }

        let due = self.particle_clock.due(now);
        if due > MAX_PARTICLE_CATCH_UP {
            console_debug!("skipping {} background particles", due - MAX_PARTICLE_CATCH_UP);
        }
        for _ in 0..due.min(MAX_PARTICLE_CATCH_UP) {
            if self.spawn_particle().is_some() {
                report.particles += 1;
            }
        }
        report
    }

    pub fn view(&self) -> ViewState {
        let complete = self.typewriter.is_complete();
        ViewState {
            active: self.navigator.active(),
            typing_text: self.typewriter.text().to_string(),
            caret_visible: !complete,
            next_visible: complete,
            surprise: self.surprise,
            music: self.playback.state(),
        }
    }
}
