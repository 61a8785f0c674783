use web_sys::Storage;

use shared::session::{SessionStore, StorageArea};
use shared::utils::cookie_value;

use crate::utils::{get_html_document, get_window};

/// `localStorage`, `sessionStorage` and `document.cookie` behind [`SessionStore`].
pub struct BrowserStore;

fn get_storage(area: StorageArea) -> Option<Storage> {
    let w = get_window()?;
    let storage = match area {
        StorageArea::Local => w.local_storage(),
        StorageArea::Session => w.session_storage(),
        StorageArea::Cookie => return None,
    };
    storage.ok().flatten()
}

impl SessionStore for BrowserStore {
    fn get(&self, area: StorageArea, key: &str) -> Option<String> {
        match area {
            StorageArea::Cookie => get_html_document()
                .and_then(|d| d.cookie().ok())
                .and_then(|cookies| cookie_value(&cookies, key)),
            _ => get_storage(area).and_then(|storage| storage.get_item(key).ok().flatten()),
        }
    }

    fn set(&self, area: StorageArea, key: &str, value: &str) {
        match area {
            StorageArea::Cookie => {
                if let Some(d) = get_html_document() {
                    d.set_cookie(&format!("{key}={value}; path=/")).ok();
                }
            }
            _ => {
                if let Some(storage) = get_storage(area) {
                    if let Err(err) = storage.set_item(key, value) {
                        log::error!("storage set {key}: {err:?}");
                    }
                }
            }
        }
    }

    fn remove(&self, area: StorageArea, key: &str) {
        match area {
            StorageArea::Cookie => {
                if let Some(d) = get_html_document() {
                    d.set_cookie(&format!("{key}=; path=/; max-age=0")).ok();
                }
            }
            _ => {
                if let Some(storage) = get_storage(area) {
                    storage.remove_item(key).ok();
                }
            }
        }
    }
}
