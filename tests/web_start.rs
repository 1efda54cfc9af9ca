// Browser checks for `dom::start` against a minimal page.
#![cfg(target_arch = "wasm32")]

use valentine_greeting::GreetingConfig;
use valentine_greeting::dom;
use valentine_greeting::logging::{self, LogLevel};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r#"
<div class="particle-bg"></div>
<div id="cursor-trail-container"></div>
<div id="confetti-container"></div>
<section id="openingScreen" class="active"><button id="openMessageBtn"></button></section>
<section id="animatedMessage"><p class="typing-effect"></p><button id="moveToLetterBtn"></button></section>
<section id="loveLetter"><button id="showSurpriseBtn"></button></section>
<section id="surpriseSection">
  <button id="triggerSurpriseBtn"></button>
  <p class="special-message"></p>
  <button id="moveToFinalBtn"></button>
</section>
<section id="finalScene"><button id="restartBtn"></button></section>
<button id="musicToggle"><i class="fas fa-play"></i></button>
<audio id="backgroundMusic"></audio>
"#;

#[wasm_bindgen_test]
fn second_start_leaves_running_page_untouched() {
    let doc = web_sys::window().unwrap().document().unwrap();
    doc.body().unwrap().set_inner_html(PAGE);

    let first = GreetingConfig { log_level: LogLevel::Debug, ..Default::default() };
    dom::start(first).unwrap();
    assert!(logging::enabled(LogLevel::Debug));

    let second = GreetingConfig { log_level: LogLevel::Error, ..Default::default() };
    dom::start(second).unwrap();
    assert!(logging::enabled(LogLevel::Debug));
    assert!(logging::enabled(LogLevel::Info));
}
