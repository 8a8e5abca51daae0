mod app;
mod dom;
mod logging;
mod render;
mod styles;

pub use dom::BrowserPage;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

/// Module entry point: installs logging, then boots once the document has
/// been parsed.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::init();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() != "loading" {
        return app::boot();
    }
    let on_ready = Closure::once(|| {
        if let Err(err) = app::boot() {
            tracing::error!(?err, "folio failed to start");
        }
    });
    document.add_event_listener_with_callback(
        "DOMContentLoaded",
        on_ready.as_ref().unchecked_ref(),
    )?;
    on_ready.forget();
    Ok(())
}

/// Reveal every element currently in the viewport. Returns the applied
/// commands as JSON.
#[wasm_bindgen(js_name = forceReveal)]
pub fn force_reveal() -> Result<String, JsError> {
    let cmds = app::with_app(app::App::force_reveal)
        .ok_or_else(|| JsError::new("folio is not running"))?;
    serde_json::to_string(&cmds).map_err(|e| JsError::new(&e.to_string()))
}

/// Reveal every tracked element that is still hidden. Returns the commands
/// applied immediately as JSON.
#[wasm_bindgen(js_name = revealAll)]
pub fn reveal_all() -> Result<String, JsError> {
    let cmds = app::with_app(app::App::reveal_all)
        .ok_or_else(|| JsError::new("folio is not running"))?;
    serde_json::to_string(&cmds).map_err(|e| JsError::new(&e.to_string()))
}
