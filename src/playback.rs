//! Background music state.
//!
//! The controller owns the single playing / paused flag. Hosts whose `play()`
//! resolves later (browser media promises) report back through
//! [`PlaybackController::settle`] with the ticket of the request; outcomes for
//! a superseded request are dropped.

use crate::console_debug;
use crate::error::PlaybackError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

/// What a sink did with a play request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Started,
    /// Outcome arrives later via `settle`.
    Pending,
}

/// Identifies one play request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayTicket(u32);

pub trait AudioSink {
    fn play(&mut self, ticket: PlayTicket) -> Result<PlayOutcome, PlaybackError>;
    fn pause(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestKind {
    Autoplay,
    Manual,
}

#[derive(Debug, Default)]
pub struct PlaybackController {
    state: PlaybackState,
    next_ticket: u32,
    pending: Option<(PlayTicket, RequestKind)>,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn issue(&mut self, kind: RequestKind) -> PlayTicket {
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let ticket = PlayTicket(self.next_ticket);
        self.pending = Some((ticket, kind));
        ticket
    }

    /// Best-effort start on the first navigation. A refusal leaves the state
    /// paused; the manual toggle recovers.
    pub fn try_autoplay<A: AudioSink>(&mut self, sink: &mut A) {
        if self.is_playing() || self.pending.is_some() {
            return;
        }
        let ticket = self.issue(RequestKind::Autoplay);
        match sink.play(ticket) {
            Ok(PlayOutcome::Started) => {
                self.pending = None;
                self.state = PlaybackState::Playing;
            }
            Ok(PlayOutcome::Pending) => {}
            Err(e) => {
                self.pending = None;
                console_debug!("autoplay refused: {e}");
            }
        }
    }

    /// Manual music toggle. Starting is optimistic: the flag flips right away
    /// and an asynchronous refusal flips it back.
    pub fn toggle<A: AudioSink>(&mut self, sink: &mut A) {
        if self.is_playing() {
            sink.pause();
            self.pending = None;
            self.state = PlaybackState::Paused;
            return;
        }
        let ticket = self.issue(RequestKind::Manual);
        match sink.play(ticket) {
            Ok(PlayOutcome::Started) => {
                self.pending = None;
                self.state = PlaybackState::Playing;
            }
            Ok(PlayOutcome::Pending) => {
                self.state = PlaybackState::Playing;
            }
            Err(e) => {
                self.pending = None;
                console_debug!("play refused: {e}");
            }
        }
    }

    /// Apply the asynchronous outcome of a play request. Returns false when the
    /// ticket is stale and nothing changed.
    pub fn settle(&mut self, ticket: PlayTicket, result: Result<(), PlaybackError>) -> bool {
        let kind = match self.pending {
            Some((current, kind)) if current == ticket => kind,
            _ => return false,
        };
        self.pending = None;
        match result {
            Ok(()) => self.state = PlaybackState::Playing,
            Err(e) => {
                console_debug!("{kind:?} play request refused: {e}");
                self.state = PlaybackState::Paused;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeSink {
        reply: Option<Result<PlayOutcome, PlaybackError>>,
        plays: Vec<PlayTicket>,
        pauses: usize,
    }

    impl AudioSink for FakeSink {
        fn play(&mut self, ticket: PlayTicket) -> Result<PlayOutcome, PlaybackError> {
            self.plays.push(ticket);
            self.reply.clone().unwrap_or(Ok(PlayOutcome::Started))
        }
        fn pause(&mut self) {
            self.pauses += 1;
        }
    }

    #[test]
    fn autoplay_started_sets_playing() {
        let mut ctl = PlaybackController::new();
        let mut sink = FakeSink::default();
        ctl.try_autoplay(&mut sink);
        assert!(ctl.is_playing());
        // Already playing: no second request.
        ctl.try_autoplay(&mut sink);
        assert_eq!(sink.plays.len(), 1);
    }

    #[test]
    fn autoplay_sync_rejection_stays_paused() {
        let mut ctl = PlaybackController::new();
        let mut sink = FakeSink {
            reply: Some(Err(PlaybackError::Rejected("NotAllowedError".into()))),
            ..Default::default()
        };
        ctl.try_autoplay(&mut sink);
        assert_eq!(ctl.state(), PlaybackState::Paused);
        assert!(!ctl.has_pending());
    }

    #[test]
    fn autoplay_async_rejection_stays_paused() {
        let mut ctl = PlaybackController::new();
        let mut sink = FakeSink { reply: Some(Ok(PlayOutcome::Pending)), ..Default::default() };
        ctl.try_autoplay(&mut sink);
        assert!(!ctl.is_playing());
        assert!(ctl.has_pending());
        // A second attempt while pending does nothing.
        ctl.try_autoplay(&mut sink);
        assert_eq!(sink.plays.len(), 1);

        let ticket = sink.plays[0];
        assert!(ctl.settle(ticket, Err(PlaybackError::Rejected("policy".into()))));
        assert_eq!(ctl.state(), PlaybackState::Paused);
        assert!(!ctl.has_pending());
    }

    #[test]
    fn autoplay_async_success_plays() {
        let mut ctl = PlaybackController::new();
        let mut sink = FakeSink { reply: Some(Ok(PlayOutcome::Pending)), ..Default::default() };
        ctl.try_autoplay(&mut sink);
        assert!(ctl.settle(sink.plays[0], Ok(())));
        assert!(ctl.is_playing());
    }

    #[test]
    fn toggle_flips_between_states() {
        let mut ctl = PlaybackController::new();
        let mut sink = FakeSink::default();
        ctl.toggle(&mut sink);
        assert!(ctl.is_playing());
        ctl.toggle(&mut sink);
        assert!(!ctl.is_playing());
        assert_eq!(sink.pauses, 1);
        assert_eq!(sink.plays.len(), 1);
    }

    #[test]
    fn stale_settlement_is_ignored() {
        let mut ctl = PlaybackController::new();
        let mut sink = FakeSink { reply: Some(Ok(PlayOutcome::Pending)), ..Default::default() };
        ctl.toggle(&mut sink); // optimistic playing, pending
        assert!(ctl.is_playing());
        ctl.toggle(&mut sink); // user pauses before the promise settles
        assert!(!ctl.is_playing());
        let first = sink.plays[0];
        assert!(!ctl.settle(first, Ok(())));
        assert!(!ctl.is_playing());
    }

    #[test]
    fn manual_async_rejection_reverts() {
        let mut ctl = PlaybackController::new();
        let mut sink = FakeSink { reply: Some(Ok(PlayOutcome::Pending)), ..Default::default() };
        ctl.toggle(&mut sink);
        assert!(ctl.is_playing());
        assert!(ctl.settle(sink.plays[0], Err(PlaybackError::Unavailable)));
        assert!(!ctl.is_playing());
    }
}
