use crate::elements::app_root::app_root;

mod elements;
mod utils;
mod constants;
mod state;
mod dialog;
mod connect_fetch;
mod connect_oauth;
mod connect_storage;

pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("formnest starting, api {}", state::CONFIG.api_url);
    dominator::append_dom(&dominator::body(), app_root());
}
