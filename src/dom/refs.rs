// Page elements the greeting reads and writes, resolved once at start.
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAudioElement, HtmlElement};

use crate::entities::Layer;
use crate::error::{GreetingError, GreetingResult};
use crate::navigator::Screen;

pub const OPEN_MESSAGE_BTN: &str = "openMessageBtn";
pub const MOVE_TO_LETTER_BTN: &str = "moveToLetterBtn";
pub const SHOW_SURPRISE_BTN: &str = "showSurpriseBtn";
pub const TRIGGER_SURPRISE_BTN: &str = "triggerSurpriseBtn";
pub const MOVE_TO_FINAL_BTN: &str = "moveToFinalBtn";
pub const RESTART_BTN: &str = "restartBtn";
pub const MUSIC_TOGGLE_BTN: &str = "musicToggle";
pub const BACKGROUND_MUSIC: &str = "backgroundMusic";
pub const CURSOR_TRAIL_CONTAINER: &str = "cursor-trail-container";
pub const CONFETTI_CONTAINER: &str = "confetti-container";
pub const PARTICLE_BG_SELECTOR: &str = ".particle-bg";
pub const TYPING_SELECTOR: &str = ".typing-effect";
pub const SPECIAL_MESSAGE_SELECTOR: &str = ".special-message";

pub struct Buttons {
    pub open_message: HtmlElement,
    pub move_to_letter: HtmlElement,
    pub show_surprise: HtmlElement,
    pub trigger_surprise: HtmlElement,
    pub move_to_final: HtmlElement,
    pub restart: HtmlElement,
    pub music_toggle: HtmlElement,
}

#[derive(Clone)]
pub struct Containers {
    pub particle_bg: HtmlElement,
    pub cursor_trail: HtmlElement,
    pub confetti: HtmlElement,
}

impl Containers {
    pub fn for_layer(&self, layer: Layer) -> &HtmlElement {
        match layer {
            Layer::ParticleBackground => &self.particle_bg,
            Layer::Confetti => &self.confetti,
            Layer::CursorTrail => &self.cursor_trail,
        }
    }
}

pub struct DomRefs {
    pub screens: Vec<(Screen, HtmlElement)>,
    pub buttons: Buttons,
    pub containers: Containers,
    pub typing: HtmlElement,
    pub special_message: HtmlElement,
    pub music_icon: HtmlElement,
    pub audio: HtmlAudioElement,
}

impl DomRefs {
    pub fn resolve(doc: &Document) -> GreetingResult<Self> {
        let screens = Screen::ALL
            .iter()
            .map(|s| -> GreetingResult<(Screen, HtmlElement)> { Ok((*s, by_id(doc, s.element_id())?)) })
            .collect::<GreetingResult<Vec<_>>>()?;
        let buttons = Buttons {
            open_message: by_id(doc, OPEN_MESSAGE_BTN)?,
            move_to_letter: by_id(doc, MOVE_TO_LETTER_BTN)?,
            show_surprise: by_id(doc, SHOW_SURPRISE_BTN)?,
            trigger_surprise: by_id(doc, TRIGGER_SURPRISE_BTN)?,
            move_to_final: by_id(doc, MOVE_TO_FINAL_BTN)?,
            restart: by_id(doc, RESTART_BTN)?,
            music_toggle: by_id(doc, MUSIC_TOGGLE_BTN)?,
        };
        let music_icon = buttons
            .music_toggle
            .query_selector("i")?
            .ok_or_else(|| GreetingError::MissingElement(format!("#{MUSIC_TOGGLE_BTN} i")))
            .and_then(into_html)?;
        let audio = doc
            .get_element_by_id(BACKGROUND_MUSIC)
            .ok_or_else(|| GreetingError::MissingElement(format!("#{BACKGROUND_MUSIC}")))?
            .dyn_into::<HtmlAudioElement>()
            .map_err(|_| GreetingError::JavaScript(format!("#{BACKGROUND_MUSIC} is not <audio>")))?;
        Ok(Self {
            screens,
            containers: Containers {
                particle_bg: by_selector(doc, PARTICLE_BG_SELECTOR)?,
                cursor_trail: by_id(doc, CURSOR_TRAIL_CONTAINER)?,
                confetti: by_id(doc, CONFETTI_CONTAINER)?,
            },
            typing: by_selector(doc, TYPING_SELECTOR)?,
            special_message: by_selector(doc, SPECIAL_MESSAGE_SELECTOR)?,
            buttons,
            music_icon,
            audio,
        })
    }
}

fn into_html(el: Element) -> GreetingResult<HtmlElement> {
    el.dyn_into::<HtmlElement>()
        .map_err(|e| GreetingError::JavaScript(format!("<{}> is not an HTML element", e.tag_name())))
}

fn by_id(doc: &Document, id: &str) -> GreetingResult<HtmlElement> {
    doc.get_element_by_id(id)
        .ok_or_else(|| GreetingError::MissingElement(format!("#{id}")))
        .and_then(into_html)
}

fn by_selector(doc: &Document, selector: &str) -> GreetingResult<HtmlElement> {
    doc.query_selector(selector)?
        .ok_or_else(|| GreetingError::MissingElement(selector.to_string()))
        .and_then(into_html)
}
