use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, EventTarget, HtmlDocument, HtmlInputElement, HtmlSelectElement, Location, Window};

use shared::dashboard::{Clipboard, Timer};

pub fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

pub fn get_html_document() -> Option<HtmlDocument> {
    get_document().and_then(|d|d.dyn_into::<HtmlDocument>().ok())
}

fn get_value_from_input(element: JsValue) -> String {
    if let Some(element) = element.dyn_ref::<HtmlSelectElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlInputElement>() {
        element.value()
    } else {
        "".to_string()
    }
}

pub fn get_value_from_target(target: Option<EventTarget>) -> String {
    target.map(|target| get_value_from_input(JsValue::from(target))).unwrap_or_default()
}

pub fn get_location() -> Option<Location> {
    get_window().map(|w|w.location())
}

pub fn get_origin() -> String {
    get_location().and_then(|l| l.origin().ok()).unwrap_or_default()
}

pub fn set_title(text: &str) {
    if let Some(d) = get_document() {
        d.set_title(text);
    }
}

/// Pathname of a full href, as produced by `dominator::routing::url()`.
pub fn url_pathname(href: &str) -> String {
    web_sys::Url::new(href).map(|url| url.pathname()).unwrap_or_default()
}

pub fn js_error_text(err: &JsValue) -> String {
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        String::from(err.message())
    } else {
        err.as_string().unwrap_or_else(|| format!("{err:?}"))
    }
}

// ===

pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    fn write_text(&self, text: &str) {
        let Some(w) = get_window() else {
            return;
        };
        let promise = w.navigator().clipboard().write_text(text);
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::error!("clipboard: {}", js_error_text(&err));
            }
        });
    }
}

pub struct TimeoutTimer;

impl Timer for TimeoutTimer {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        let timer = Timeout::new(delay_ms, callback);
        timer.forget();
    }
}
