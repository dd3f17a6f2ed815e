//! Thin wrapper over the browser SpeechSynthesis API

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance};

fn synth() -> Option<SpeechSynthesis> {
    web_sys::window()?.speech_synthesis().ok()
}

/// Voices load asynchronously; speaking before they arrive is silent in some browsers
pub fn voices_available() -> bool {
    synth().map(|s| s.get_voices().length() > 0).unwrap_or(false)
}

/// Registers `on_change` for the `voiceschanged` event.
///
/// The closure is handed over to JS and lives until [`clear_voices_listener`].
pub fn on_voices_changed(on_change: impl FnMut() + 'static) {
    let Some(synth) = synth() else {
        return;
    };
    let callback = Closure::<dyn FnMut()>::new(on_change).into_js_value();
    synth.set_onvoiceschanged(Some(callback.unchecked_ref()));
}

pub fn clear_voices_listener() {
    if let Some(synth) = synth() {
        synth.set_onvoiceschanged(None);
    }
}

/// Starts reading `text`; `on_finished` runs once when speech ends or fails
pub fn speak(text: &str, on_finished: impl Fn() + Clone + 'static) -> Result<(), JsValue> {
    let synth = synth().ok_or_else(|| JsValue::from_str("speech synthesis unavailable"))?;
    let utterance = SpeechSynthesisUtterance::new_with_text(text)?;

    let on_end = on_finished.clone();
    let end_cb = Closure::once_into_js(move || on_end());
    utterance.set_onend(Some(end_cb.unchecked_ref()));

    let error_cb = Closure::once_into_js(move |event: JsValue| {
        log::error!("SpeechSynthesisUtterance error: {:?}", event);
        on_finished();
    });
    utterance.set_onerror(Some(error_cb.unchecked_ref()));

    synth.speak(&utterance);
    Ok(())
}

pub fn cancel() {
    if let Some(synth) = synth() {
        if synth.speaking() || synth.pending() {
            synth.cancel();
        }
    }
}
