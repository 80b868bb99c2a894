//! Chat App — WASM entry point.
//!
//! Composition root: initializes logging, reads the optional backend
//! override from the page URL, and boots the egui application on the
//! page canvas.

mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const CANVAS_ID: &str = "chat_canvas";

/// Value of the `?endpoint=...` query parameter, if present. Lets a
/// deployment point the client at a different chat backend without a
/// rebuild; anything else falls back to the compiled-in default.
fn endpoint_override() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let query = search.strip_prefix('?')?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == "endpoint" && !value.is_empty()).then(|| value.to_string())
    })
}

/// WASM entry point — called from index.html
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    let endpoint = endpoint_override();
    match &endpoint {
        Some(endpoint) => log::info!("Chat WASM starting (endpoint: {})", endpoint),
        None => log::info!("Chat WASM starting..."),
    }

    let web_options = eframe::WebOptions::default();

    let document = web_sys::window()
        .expect("No window")
        .document()
        .expect("No document");
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .expect("No canvas element with id 'chat_canvas'")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("Element is not a canvas");

    wasm_bindgen_futures::spawn_local(async move {
        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(app::ChatApp::new(cc, endpoint)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
