// Entities rendered as absolutely positioned <div>s animated by page CSS.
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, HtmlElement};

use super::refs::Containers;
use crate::entities::{
    ConfettiShape, EntityId, EntitySurface, HEART_GLYPH, Layer, StyleParams,
};
use crate::error::{GreetingError, GreetingResult};

/// Called with the id of an entity whose animation has ended.
pub type OnFinished = Rc<dyn Fn(EntityId)>;

pub struct DomSurface {
    doc: Document,
    containers: Containers,
    on_finished: OnFinished,
}

impl DomSurface {
    pub fn new(doc: Document, containers: Containers, on_finished: OnFinished) -> Self {
        Self {
            doc,
            containers,
            on_finished,
        }
    }

    fn create(&self, style: &StyleParams) -> GreetingResult<HtmlElement> {
        let el = self
            .doc
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| GreetingError::JavaScript("created <div> is not an HTML element".into()))?;
        el.set_class_name(style.class_name());
        apply_style(&el, style)?;
        Ok(el)
    }
}

impl EntitySurface for DomSurface {
    type Handle = HtmlElement;

    fn attach(&mut self, id: EntityId, layer: Layer, style: &StyleParams) -> GreetingResult<HtmlElement> {
        let el = self.create(style)?;
        self.containers.for_layer(layer).append_child(&el)?;
        // One-shot: the closure frees itself after its single call.
        let on_finished = Rc::clone(&self.on_finished);
        let on_end = Closure::once_into_js(move || on_finished(id));
        let opts = AddEventListenerOptions::new();
        opts.set_once(true);
        if let Err(e) = el.add_event_listener_with_callback_and_add_event_listener_options(
            "animationend",
            on_end.unchecked_ref(),
            &opts,
        ) {
            el.remove();
            return Err(e.into());
        }
        Ok(el)
    }

    fn detach(&mut self, handle: HtmlElement) {
        handle.remove();
    }
}

fn apply_style(el: &HtmlElement, style: &StyleParams) -> GreetingResult<()> {
    let css = el.style();
    match style {
        StyleParams::Particle(p) => {
            css.set_property("width", &format!("{}px", p.size_px))?;
            css.set_property("height", &format!("{}px", p.size_px))?;
            css.set_property("left", &format!("{}vw", p.left_vw))?;
            css.set_property("animation-duration", &format!("{}s", p.duration_s))?;
            css.set_property("animation-delay", &format!("{}s", p.delay_s))?;
            css.set_property("opacity", &p.opacity.to_string())?;
        }
        StyleParams::Confetti(c) => {
            match c.shape {
                ConfettiShape::Heart { font_size_px } => {
                    el.set_text_content(Some(HEART_GLYPH));
                    css.set_property("background", "transparent")?;
                    css.set_property("font-size", &format!("{font_size_px}px"))?;
                }
                ConfettiShape::Piece { size_px, round } => {
                    css.set_property("background", &c.color)?;
                    css.set_property("width", &format!("{size_px}px"))?;
                    css.set_property("height", &format!("{size_px}px"))?;
                    css.set_property("border-radius", if round { "50%" } else { "0" })?;
                }
            }
            css.set_property("left", &format!("{}vw", c.left_vw))?;
            css.set_property("top", &format!("{}px", c.top_px))?;
            css.set_property("animation-delay", &format!("{}s", c.delay_s))?;
        }
        StyleParams::CursorTrail(t) => {
            el.set_text_content(Some(HEART_GLYPH));
            css.set_property("left", &format!("{}px", t.x_px))?;
            css.set_property("top", &format!("{}px", t.y_px))?;
        }
    }
    Ok(())
}
