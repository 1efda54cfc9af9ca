//! Ephemeral decorative entities: background particles, confetti and the
//! cursor trail.
//!
//! Every entity is owned by its layer from spawn until its one terminal event,
//! animation completion, at which point [`EntityManager::complete`] detaches it.
//! Nothing about an entity changes after spawn. Spawn rate for particles and
//! trail marks is unbounded, so completion is what keeps the live set bounded.

use std::collections::BTreeMap;

use crate::console_warn;
use crate::error::GreetingResult;
use crate::rng::RandomSource;

mod style;

pub use style::{
    ConfettiShape, ConfettiStyle, EntityKind, HEART_GLYPH, Layer, ParticleStyle, StyleParams,
    StyleSampler, TrailStyle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

/// Rendering surface that hosts entities. `attach` is expected to arrange for
/// the completion of `id` to be reported back to the manager (the browser
/// surface does this with a one-shot `animationend` listener).
pub trait EntitySurface {
    type Handle;

    fn attach(&mut self, id: EntityId, layer: Layer, style: &StyleParams)
    -> GreetingResult<Self::Handle>;
    fn detach(&mut self, handle: Self::Handle);
}

struct LiveEntity<H> {
    layer: Layer,
    handle: H,
}

pub struct EntityManager<S: EntitySurface> {
    surface: S,
    sampler: StyleSampler,
    live: BTreeMap<EntityId, LiveEntity<S::Handle>>,
    next_id: u64,
}

impl<S: EntitySurface> EntityManager<S> {
    pub fn new(surface: S, sampler: StyleSampler) -> Self {
        Self {
            surface,
            sampler,
            live: BTreeMap::new(),
            next_id: 0,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Create one entity with freshly sampled style. Fire-and-forget: a surface
    /// failure is logged and the entity is simply not shown.
    pub fn spawn<R: RandomSource + ?Sized>(&mut self, kind: EntityKind, rng: &mut R) -> Option<EntityId> {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        let layer = kind.layer();
        let style = self.sampler.sample(kind, rng);
        match self.surface.attach(id, layer, &style) {
            Ok(handle) => {
                self.live.insert(id, LiveEntity { layer, handle });
                Some(id)
            }
            Err(e) => {
                console_warn!("could not attach {}: {e}", kind.name());
                None
            }
        }
    }

    pub fn spawn_burst<R: RandomSource + ?Sized>(
        &mut self,
        kind: EntityKind,
        count: usize,
        rng: &mut R,
    ) -> Vec<EntityId> {
        (0..count).filter_map(|_| self.spawn(kind, &mut *rng)).collect()
    }

    /// Terminal event for `id`. Detaches it exactly once; later calls for the
    /// same id (or unknown ids) return false and do nothing.
    pub fn complete(&mut self, id: EntityId) -> bool {
        match self.live.remove(&id) {
            Some(entity) => {
                self.surface.detach(entity.handle);
                true
            }
            None => false,
        }
    }

    pub fn is_live(&self, id: EntityId) -> bool {
        self.live.contains_key(&id)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn live_in(&self, layer: Layer) -> usize {
        self.live.values().filter(|e| e.layer == layer).count()
    }

    pub fn live_ids(&self, layer: Layer) -> Vec<EntityId> {
        self.live
            .iter()
            .filter(|(_, e)| e.layer == layer)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Total ids handed out, including ones whose attach failed.
    pub fn spawned_total(&self) -> u64 {
        self.next_id
    }
}
