// Applies a ViewState snapshot to the page through CSS classes and text.
use web_sys::HtmlElement;

use super::refs::DomRefs;
use crate::error::GreetingResult;
use crate::greeting::ViewState;
use crate::playback::PlaybackState;

const ACTIVE: &str = "active";
const HIDDEN: &str = "hidden";
const CARET: &str = ".15em solid var(--primary-pink)";

fn set_hidden(el: &HtmlElement, hidden: bool) -> GreetingResult<()> {
    el.class_list().toggle_with_force(HIDDEN, hidden)?;
    Ok(())
}

pub fn render(view: &ViewState, refs: &DomRefs) -> GreetingResult<()> {
    for (screen, el) in &refs.screens {
        el.class_list().toggle_with_force(ACTIVE, *screen == view.active)?;
    }

    if refs.typing.text_content().as_deref() != Some(view.typing_text.as_str()) {
        refs.typing.set_text_content(Some(&view.typing_text));
    }
    refs.typing
        .style()
        .set_property("border-right", if view.caret_visible { CARET } else { "none" })?;
    set_hidden(&refs.buttons.move_to_letter, !view.next_visible)?;

    set_hidden(&refs.buttons.trigger_surprise, !view.surprise.trigger_visible)?;
    set_hidden(&refs.special_message, !view.surprise.message_visible)?;
    set_hidden(&refs.buttons.move_to_final, !view.surprise.final_visible)?;

    let playing = view.music == PlaybackState::Playing;
    let icons = refs.music_icon.class_list();
    icons.toggle_with_force("fa-pause", playing)?;
    icons.toggle_with_force("fa-play", !playing)?;
    Ok(())
}
