//! Semester/subject selection and form-link generation.

use futures_signals::map_ref;
use futures_signals::signal::{Mutable, Signal, SignalExt};

use crate::catalog::Catalog;
use crate::constants::COPIED_RESET_MS;
use crate::error::GenerateError;
use crate::session::{resolve_token, SessionStore};
use crate::types::{ErrorResponse, FormUrl, GenerateRequest, GenerateResponse, HttpReply, Semester, Subject};

/// Sends a JSON body to the form-generation backend.
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, GenerateError>;
}

pub trait Clipboard {
    fn write_text(&self, text: &str);
}

/// Runs `callback` once after `delay_ms`.
pub trait Timer {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
}

#[derive(Debug)]
pub enum Outcome {
    /// Nothing selected, or an attempt is already running.
    Skipped,
    AuthRequired,
    Generated(String),
    Failed(GenerateError),
}

pub struct Dashboard {
    pub semester: Mutable<String>,
    pub subject: Mutable<String>,
    pub form_link: Mutable<String>,
    pub generating: Mutable<bool>,
    pub copied: Mutable<bool>,
    pub auth_error: Mutable<bool>,
    catalog: &'static Catalog,
    api_url: String,
}

struct BusyGuard<'a>(&'a Mutable<bool>);

impl<'a> BusyGuard<'a> {
    fn hold(flag: &'a Mutable<bool>) -> Self {
        flag.set_neq(true);
        Self(flag)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.set_neq(false);
    }
}

impl Dashboard {
    pub fn new(catalog: &'static Catalog, api_url: &str) -> Self {
        Self {
            semester: Mutable::new(String::new()),
            subject: Mutable::new(String::new()),
            form_link: Mutable::new(String::new()),
            generating: Mutable::new(false),
            copied: Mutable::new(false),
            auth_error: Mutable::new(false),
            catalog,
            api_url: api_url.to_string(),
        }
    }

    pub fn semesters(&self) -> &'static [Semester] {
        &self.catalog.semesters
    }

    pub fn subjects(&self) -> Vec<Subject> {
        let semester = self.semester.get_cloned();
        self.catalog.subjects_for(Some(semester.as_str())).into_iter().cloned().collect()
    }

    pub fn subjects_signal(&self) -> impl Signal<Item=Vec<Subject>> {
        let catalog = self.catalog;
        self.semester.signal_cloned().map(move |semester| {
            catalog.subjects_for(Some(semester.as_str())).into_iter().cloned().collect()
        })
    }

    /// Always clears the subject, so a subject from another semester never stays selected.
    pub fn select_semester(&self, id: &str) {
        self.semester.set_neq(id.to_string());
        self.subject.set_neq(String::new());
    }

    /// Ignores subjects that are not offered in the selected semester.
    pub fn select_subject(&self, id: &str) {
        if id.is_empty() {
            self.subject.set_neq(String::new());
            return;
        }
        let semester = self.semester.get_cloned();
        match self.catalog.subject(id) {
            Some(subject) if subject.offered_in(&semester) => self.subject.set_neq(id.to_string()),
            _ => log::debug!("select_subject: {id} is not offered in {semester:?}"),
        }
    }

    pub fn can_generate_signal(&self) -> impl Signal<Item=bool> {
        map_ref! {
            let semester = self.semester.signal_cloned(),
            let subject = self.subject.signal_cloned(),
            let generating = self.generating.signal() =>
            !semester.is_empty() && !subject.is_empty() && !*generating
        }
    }

    pub async fn generate(&self, transport: &impl FormTransport, store: &impl SessionStore) -> Outcome {
        let semester = self.semester.get_cloned();
        let subject = self.subject.get_cloned();
        if semester.is_empty() || subject.is_empty() || self.generating.get() {
            return Outcome::Skipped;
        }

        let Some(token) = resolve_token(store) else {
            log::info!("generate: no token in storage");
            self.auth_error.set_neq(true);
            return Outcome::AuthRequired;
        };

        let _busy = BusyGuard::hold(&self.generating);
        self.form_link.set_neq(String::new());
        self.auth_error.set_neq(false);

        let request = GenerateRequest { sem: semester, subject, token };
        match self.request_link(transport, &request).await {
            Ok(link) => {
                log::info!("generate: form link for {}/{}", request.sem, request.subject);
                self.form_link.set(link.clone());
                Outcome::Generated(link)
            }
            Err(err) => {
                log::error!("Error generating form link: {err}");
                Outcome::Failed(err)
            }
        }
    }

    async fn request_link(&self, transport: &impl FormTransport, request: &GenerateRequest) -> Result<String, GenerateError> {
        let body = serde_json::to_string(request)?;
        let reply = transport.post_json(&self.api_url, body).await?;
        decode_reply(&reply)
    }

    /// Returns false when there is no link to copy.
    pub fn copy_link(&self, clipboard: &impl Clipboard, timer: &impl Timer) -> bool {
        let link = self.form_link.get_cloned();
        if link.is_empty() {
            return false;
        }
        clipboard.write_text(&link);
        self.copied.set_neq(true);
        let copied = self.copied.clone();
        timer.schedule(COPIED_RESET_MS, Box::new(move || copied.set_neq(false)));
        true
    }
}

pub fn decode_reply(reply: &HttpReply) -> Result<String, GenerateError> {
    if !reply.ok {
        let message = serde_json::from_str::<ErrorResponse>(&reply.body)
            .ok()
            .and_then(|data| data.error);
        return Err(GenerateError::server(message));
    }
    let data: GenerateResponse = serde_json::from_str(&reply.body)
        .map_err(|_| GenerateError::InvalidResponse)?;
    data.form_url
        .and_then(FormUrl::into_link)
        .ok_or(GenerateError::InvalidResponse)
}
