use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use web_sys::{UrlSearchParams, Window};

use shared::config::AppConfig;
use shared::constants::OAUTH_AUTHORIZE;
use shared::error::AuthError;
use shared::landing::IdentityProvider;
use shared::types::UserProfile;

use crate::connect_fetch::fetch_profile;
use crate::utils::{get_origin, get_window};

const POPUP_NAME: &str = "formnest-login";
const POPUP_FEATURES: &str = "width=500,height=640";
const POLL_MS: u32 = 250;

/// Google implicit flow in a popup. The popup returns to `redirect_uri`
/// with `#access_token=...` and is polled until it does or gets closed.
pub struct GoogleLogin {
    client_id: String,
    redirect_uri: String,
}

impl GoogleLogin {
    pub fn from_config(config: &AppConfig) -> Self {
        if config.google_client_id.is_empty() {
            log::warn!("FORMNEST_GOOGLE_CLIENT_ID was not set at build time");
        }
        Self {
            client_id: config.google_client_id.clone(),
            redirect_uri: config.redirect_uri_or(&get_origin()),
        }
    }

    fn authorize_url(&self, scopes: &[&str], state: &str) -> Result<String, JsValue> {
        let params = UrlSearchParams::new()?;
        params.append("client_id", &self.client_id);
        params.append("redirect_uri", &self.redirect_uri);
        params.append("response_type", "token");
        params.append("scope", &scopes.join(" "));
        params.append("include_granted_scopes", "true");
        params.append("state", state);
        Ok(format!("{OAUTH_AUTHORIZE}?{}", String::from(params.to_string())))
    }
}

fn new_state() -> String {
    format!("{:08x}", (js_sys::Math::random() * f64::from(u32::MAX)) as u32)
}

/// `None` while the popup is still on the provider's origin or has no fragment yet.
fn read_fragment(popup: &Window) -> Option<String> {
    let hash = popup.location().hash().ok()?;
    let fragment = hash.trim_start_matches('#');
    if fragment.is_empty() {
        None
    } else {
        Some(fragment.to_string())
    }
}

fn parse_fragment(fragment: &str, state: &str) -> Option<Result<String, AuthError>> {
    let params = UrlSearchParams::new_with_str(fragment).ok()?;
    if let Some(err) = params.get("error") {
        return Some(Err(AuthError::Denied(err)));
    }
    let token = params.get("access_token")?;
    if params.get("state").as_deref() != Some(state) {
        return Some(Err(AuthError::StateMismatch));
    }
    Some(Ok(token))
}

impl IdentityProvider for GoogleLogin {
    async fn request_token(&self, scopes: &[&str]) -> Result<String, AuthError> {
        let w = get_window().ok_or(AuthError::Unavailable)?;
        let state = new_state();
        let url = self.authorize_url(scopes, &state).map_err(|_| AuthError::Unavailable)?;

        let popup = w.open_with_url_and_target_and_features(&url, POPUP_NAME, POPUP_FEATURES)
            .ok()
            .flatten()
            .ok_or(AuthError::PopupBlocked)?;
        log::debug!("login popup opened");

        loop {
            TimeoutFuture::new(POLL_MS).await;
            if popup.closed().unwrap_or(true) {
                return Err(AuthError::PopupClosed);
            }
            if let Some(result) = read_fragment(&popup).and_then(|fragment| parse_fragment(&fragment, &state)) {
                popup.close().ok();
                return result;
            }
        }
    }

    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, AuthError> {
        fetch_profile(token).await
    }
}
