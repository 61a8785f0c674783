use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use shared::constants::API_USERINFO;
use shared::dashboard::FormTransport;
use shared::error::{AuthError, GenerateError};
use shared::types::{HttpReply, UserProfile};

use crate::utils::{get_window, js_error_text};

pub struct FetchTransport;

impl FormTransport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, GenerateError> {
        send(url, &body).await.map_err(|err| GenerateError::Transport(js_error_text(&err)))
    }
}

async fn send(url: &str, body: &str) -> Result<HttpReply, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let resp = fetch(&request).await?;
    let text = JsFuture::from(resp.text()?).await?;

    Ok(HttpReply {
        ok: resp.ok(),
        status: resp.status(),
        body: text.as_string().unwrap_or_default(),
    })
}

async fn fetch(request: &Request) -> Result<Response, JsValue> {
    let window = get_window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request)).await?;
    resp_value.dyn_into::<Response>()
}

pub async fn fetch_profile(token: &str) -> Result<UserProfile, AuthError> {
    let profile_error = |err: JsValue| AuthError::Profile(js_error_text(&err));

    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(API_USERINFO, &opts).map_err(profile_error)?;
    request.headers().set("Authorization", &format!("Bearer {token}")).map_err(profile_error)?;

    let resp = fetch(&request).await.map_err(profile_error)?;
    if !resp.ok() {
        return Err(AuthError::Profile(format!("status {}", resp.status())));
    }
    let json = JsFuture::from(resp.json().map_err(profile_error)?).await.map_err(profile_error)?;
    serde_wasm_bindgen::from_value::<UserProfile>(json).map_err(|err| AuthError::Profile(err.to_string()))
}
