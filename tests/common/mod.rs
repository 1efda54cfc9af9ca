// Test doubles shared by the integration tests: a surface that records which
// entities sit in which layer, and an audio sink with a scripted reply.
#![allow(dead_code)]

use std::collections::BTreeMap;

use valentine_greeting::GreetingConfig;
use valentine_greeting::entities::{EntityId, EntitySurface, Layer, StyleParams};
use valentine_greeting::error::{GreetingResult, PlaybackError};
use valentine_greeting::greeting::Greeting;
use valentine_greeting::playback::{AudioSink, PlayOutcome, PlayTicket};
use valentine_greeting::rng::SplitMix64;

#[derive(Default)]
pub struct RecordingSurface {
    layers: BTreeMap<Layer, Vec<(EntityId, StyleParams)>>,
    pub attached: usize,
    pub detached: usize,
}

impl RecordingSurface {
    pub fn in_layer(&self, layer: Layer) -> usize {
        self.layers.get(&layer).map_or(0, |v| v.len())
    }

    pub fn ids(&self, layer: Layer) -> Vec<EntityId> {
        self.layers
            .get(&layer)
            .map(|v| v.iter().map(|(id, _)| *id).collect())
            .unwrap_or_default()
    }

    pub fn styles(&self, layer: Layer) -> Vec<StyleParams> {
        self.layers
            .get(&layer)
            .map(|v| v.iter().map(|(_, s)| s.clone()).collect())
            .unwrap_or_default()
    }
}

impl EntitySurface for RecordingSurface {
    type Handle = (Layer, EntityId);

    fn attach(&mut self, id: EntityId, layer: Layer, style: &StyleParams) -> GreetingResult<(Layer, EntityId)> {
        self.layers.entry(layer).or_default().push((id, style.clone()));
        self.attached += 1;
        Ok((layer, id))
    }

    fn detach(&mut self, (layer, id): (Layer, EntityId)) {
        let nodes = self.layers.get_mut(&layer).expect("detach from unknown layer");
        let before = nodes.len();
        nodes.retain(|(n, _)| *n != id);
        assert_eq!(nodes.len() + 1, before, "entity {id:?} detached twice or never attached");
        self.detached += 1;
    }
}

#[derive(Default)]
pub struct ScriptedAudio {
    pub reply: Option<Result<PlayOutcome, PlaybackError>>,
    pub plays: Vec<PlayTicket>,
    pub pauses: usize,
}

impl ScriptedAudio {
    pub fn replying(reply: Result<PlayOutcome, PlaybackError>) -> Self {
        Self { reply: Some(reply), ..Default::default() }
    }
}

impl AudioSink for ScriptedAudio {
    fn play(&mut self, ticket: PlayTicket) -> Result<PlayOutcome, PlaybackError> {
        self.plays.push(ticket);
        self.reply.clone().unwrap_or(Ok(PlayOutcome::Started))
    }

    fn pause(&mut self) {
        self.pauses += 1;
    }
}

pub type TestGreeting = Greeting<RecordingSurface, ScriptedAudio>;

pub fn greeting() -> TestGreeting {
    greeting_with(GreetingConfig::default(), ScriptedAudio::default())
}

pub fn greeting_with(config: GreetingConfig, audio: ScriptedAudio) -> TestGreeting {
    Greeting::new(
        config,
        RecordingSurface::default(),
        audio,
        Box::new(SplitMix64::new(7)),
        0.0,
    )
}

/// Fire the animation-completion event for every entity currently in `layer`.
pub fn finish_layer(g: &mut TestGreeting, layer: Layer) -> usize {
    let ids = g.entities().surface().ids(layer);
    for id in &ids {
        assert!(g.entity_finished(*id));
    }
    ids.len()
}

/// Step the page clock from `from` to `to` (inclusive) one frame at a time.
pub fn run_frames(g: &mut TestGreeting, from: f64, to: f64, frame_ms: f64) -> usize {
    let mut particles = 0;
    let mut now = from;
    while now < to {
        now = (now + frame_ms).min(to);
        particles += g.tick(now).particles;
    }
    particles
}
