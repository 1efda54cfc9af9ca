//! Browser bindings: resolves the page, installs listeners and drives the
//! greeting from a `requestAnimationFrame` loop.
//!
//! The greeting state lives in a single thread-local slot so JS callbacks can
//! reach it. Every callback borrows it, runs to completion and releases it;
//! there is no other shared state.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{EventTarget, window};

use crate::config::GreetingConfig;
use crate::entities::EntityId;
use crate::error::{GreetingError, GreetingResult};
use crate::greeting::Greeting;
use crate::logging;
use crate::rng::SplitMix64;
use crate::{console_error, console_log, console_warn};

mod audio;
mod refs;
mod surface;
mod view;

pub use audio::MediaSink;
pub use refs::{Containers, DomRefs};
pub use surface::{DomSurface, OnFinished};

pub type PageGreeting = Greeting<DomSurface, MediaSink>;

pub(crate) struct Page {
    pub greeting: PageGreeting,
    refs: DomRefs,
}

impl Page {
    pub fn render(&self) {
        if let Err(e) = view::render(&self.greeting.view(), &self.refs) {
            console_error!("render failed: {e}");
        }
    }
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Run `f` against the live page, if the greeting has been started.
pub(crate) fn with_page<R>(f: impl FnOnce(&mut Page) -> R) -> Option<R> {
    PAGE.with(|cell| cell.borrow_mut().as_mut().map(f))
}

pub fn start(config: GreetingConfig) -> GreetingResult<()> {
    config.validate()?;

    if PAGE.with(|cell| cell.borrow().is_some()) {
        console_warn!("greeting already started");
        return Ok(());
    }
    logging::set_max_level(config.log_level);

    let win = window().ok_or_else(|| GreetingError::JavaScript("no window".into()))?;
    let doc = win
        .document()
        .ok_or_else(|| GreetingError::JavaScript("no document".into()))?;
    let refs = DomRefs::resolve(&doc)?;

    let now = crate::performance_now();
    let greeting = Greeting::new(
        config,
        DomSurface::new(
            doc.clone(),
            refs.containers.clone(),
            Rc::new(|id: EntityId| {
                with_page(|p| p.greeting.entity_finished(id));
            }),
        ),
        MediaSink::new(refs.audio.clone()),
        Box::new(SplitMix64::from_host()),
        now,
    );

    on_click(&refs.buttons.open_message, |p| {
        p.greeting.open_message(crate::performance_now());
    })?;
    on_click(&refs.buttons.move_to_letter, |p| {
        p.greeting.move_to_letter();
    })?;
    on_click(&refs.buttons.show_surprise, |p| {
        p.greeting.show_surprise();
    })?;
    on_click(&refs.buttons.trigger_surprise, |p| {
        p.greeting.trigger_surprise();
    })?;
    on_click(&refs.buttons.move_to_final, |p| {
        p.greeting.move_to_final();
    })?;
    on_click(&refs.buttons.restart, |p| {
        p.greeting.restart();
    })?;
    on_click(&refs.buttons.music_toggle, |p| p.greeting.toggle_music())?;

    // Cursor trail
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            with_page(|p| {
                p.greeting
                    .pointer_moved(evt.client_x() as f64, evt.client_y() as f64);
            });
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let page = Page { greeting, refs };
    page.render();
    PAGE.with(|cell| cell.replace(Some(page)));
    start_frame_loop();
    console_log!("greeting started");
    Ok(())
}

/// Page-lifetime click listener that applies `action` and re-renders.
fn on_click(target: &EventTarget, action: fn(&mut Page)) -> GreetingResult<()> {
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
        with_page(|p| {
            action(p);
            p.render();
        });
    }) as Box<dyn FnMut(_)>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        with_page(|p| {
            if p.greeting.tick(ts).needs_render() {
                p.render();
            }
        });
        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn request_frame(cb: &FrameCallback) {
    let Some(w) = window() else { return };
    if let Some(closure) = cb.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(closure.as_ref().unchecked_ref()) {
            console_error!("requestAnimationFrame failed: {e:?}");
        }
    }
}
