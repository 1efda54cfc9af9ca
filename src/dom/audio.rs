// AudioSink over the page's <audio> element.
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlAudioElement;

use crate::error::PlaybackError;
use crate::playback::{AudioSink, PlayOutcome, PlayTicket};

pub struct MediaSink {
    audio: HtmlAudioElement,
}

impl MediaSink {
    pub fn new(audio: HtmlAudioElement) -> Self {
        Self { audio }
    }
}

impl AudioSink for MediaSink {
    /// `HTMLMediaElement.play()` answers with a promise; its outcome is fed back
    /// to the greeting once it settles.
    fn play(&mut self, ticket: PlayTicket) -> Result<PlayOutcome, PlaybackError> {
        if self.audio.current_src().is_empty() && self.audio.src().is_empty() {
            return Err(PlaybackError::Unavailable);
        }
        let promise = self
            .audio
            .play()
            .map_err(|e| PlaybackError::Rejected(describe(&e)))?;
        spawn_local(async move {
            let result = JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| PlaybackError::Rejected(describe(&e)));
            super::with_page(|page| {
                if page.greeting.settle_playback(ticket, result) {
                    page.render();
                }
            });
        });
        Ok(PlayOutcome::Pending)
    }

    fn pause(&mut self) {
        if let Err(e) = self.audio.pause() {
            crate::console_warn!("pause failed: {}", describe(&e));
        }
    }
}

fn describe(e: &wasm_bindgen::JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}
