use futures_signals::signal::Mutable;

use crate::constants::OAUTH_SCOPES;
use crate::error::AuthError;
use crate::session::{self, SessionStore};
use crate::types::UserProfile;

/// External login capability: an access token first, then the profile behind it.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    async fn request_token(&self, scopes: &[&str]) -> Result<String, AuthError>;
    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, AuthError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [Step; 4] = [
    Step { title: "Create", description: "Design your form with a few clicks" },
    Step { title: "Share", description: "Send your form to students instantly" },
    Step { title: "Collect", description: "Gather responses automatically" },
    Step { title: "Analyze", description: "View insights in Google Forms" },
];

pub struct Landing {
    pub user: Mutable<Option<UserProfile>>,
    pub active_step: Mutable<usize>,
    pub animating: Mutable<bool>,
}

impl Landing {
    pub fn restore(store: &impl SessionStore) -> Self {
        Self {
            user: Mutable::new(session::load_profile(store)),
            active_step: Mutable::new(0),
            animating: Mutable::new(false),
        }
    }

    /// On `Ok` the caller moves on to the dashboard. Failures are only logged.
    pub async fn login(&self, provider: &impl IdentityProvider, store: &impl SessionStore) -> Result<UserProfile, AuthError> {
        let result = self.try_login(provider, store).await;
        match &result {
            Ok(profile) => log::info!("login: signed in as {}", profile.display_name()),
            Err(err) => log::error!("Login Failed: {err}"),
        }
        result
    }

    async fn try_login(&self, provider: &impl IdentityProvider, store: &impl SessionStore) -> Result<UserProfile, AuthError> {
        let token = provider.request_token(&OAUTH_SCOPES).await?;
        session::save_token(store, &token);

        let profile = provider.fetch_profile(&token).await?;
        if let Err(err) = session::save_profile(store, &profile) {
            log::error!("login: profile not stored: {err}");
        }
        self.user.set(Some(profile.clone()));
        Ok(profile)
    }

    pub fn logout(&self, store: &impl SessionStore) {
        session::clear(store);
        self.user.set(None);
    }

    pub fn step(&self) -> Step {
        STEPS[self.active_step.get() % STEPS.len()]
    }

    pub fn begin_step_change(&self) {
        self.animating.set_neq(true);
    }

    pub fn finish_step_change(&self) {
        self.active_step.replace_with(|step| (*step + 1) % STEPS.len());
        self.animating.set_neq(false);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use crate::constants::{STORAGE_TOKEN, STORAGE_USER};
    use crate::session::{MemoryStore, StorageArea};

    use super::*;

    struct StubProvider {
        token: Result<&'static str, &'static str>,
        profile: Result<UserProfile, &'static str>,
        scopes: RefCell<Vec<String>>,
    }

    impl StubProvider {
        fn ok() -> Self {
            Self {
                token: Ok("tok-1"),
                profile: Ok(UserProfile { name: "Ada Lovelace".into(), given_name: Some("Ada".into()), ..UserProfile::default() }),
                scopes: RefCell::new(vec![]),
            }
        }
    }

    impl IdentityProvider for StubProvider {
        async fn request_token(&self, scopes: &[&str]) -> Result<String, AuthError> {
            self.scopes.borrow_mut().extend(scopes.iter().map(|s| s.to_string()));
            self.token.map(str::to_string).map_err(|err| AuthError::Denied(err.to_string()))
        }

        async fn fetch_profile(&self, token: &str) -> Result<UserProfile, AuthError> {
            assert_eq!(token, "tok-1");
            self.profile.clone().map_err(|err| AuthError::Profile(err.to_string()))
        }
    }

    #[test]
    fn login_stores_token_and_profile() {
        let store = MemoryStore::new().with(StorageArea::Local, STORAGE_TOKEN, "stale");
        let landing = Landing::restore(&store);
        let provider = StubProvider::ok();

        let profile = block_on(landing.login(&provider, &store)).unwrap();

        assert_eq!(profile.display_name(), "Ada");
        assert_eq!(store.get(StorageArea::Local, STORAGE_TOKEN).as_deref(), Some("tok-1"));
        assert_eq!(session::load_profile(&store), Some(profile.clone()));
        assert_eq!(landing.user.get_cloned(), Some(profile));
        assert!(provider.scopes.borrow().iter().any(|s| s == "https://www.googleapis.com/auth/forms.body"));
        assert_eq!(provider.scopes.borrow().len(), 6);
    }

    #[test]
    fn denied_login_leaves_session_unset() {
        let store = MemoryStore::new();
        let landing = Landing::restore(&store);
        let provider = StubProvider { token: Err("access_denied"), ..StubProvider::ok() };

        let err = block_on(landing.login(&provider, &store)).unwrap_err();

        assert!(matches!(err, AuthError::Denied(_)));
        assert!(store.is_empty());
        assert_eq!(landing.user.get_cloned(), None);
    }

    #[test]
    fn profile_failure_keeps_token_only() {
        let store = MemoryStore::new();
        let landing = Landing::restore(&store);
        let provider = StubProvider { profile: Err("401"), ..StubProvider::ok() };

        let err = block_on(landing.login(&provider, &store)).unwrap_err();

        assert!(matches!(err, AuthError::Profile(_)));
        assert_eq!(store.get(StorageArea::Local, STORAGE_TOKEN).as_deref(), Some("tok-1"));
        assert_eq!(store.get(StorageArea::Local, STORAGE_USER), None);
        assert_eq!(landing.user.get_cloned(), None);
    }

    #[test]
    fn restore_then_logout() {
        let store = MemoryStore::new();
        session::save_token(&store, "tok-1");
        session::save_profile(&store, &UserProfile { name: "Ada".into(), ..UserProfile::default() }).unwrap();

        let landing = Landing::restore(&store);
        assert!(landing.user.get_cloned().is_some());

        landing.logout(&store);
        assert_eq!(store.get(StorageArea::Local, STORAGE_USER), None);
        assert_eq!(store.get(StorageArea::Local, STORAGE_TOKEN), None);
        assert_eq!(landing.user.get_cloned(), None);
    }

    #[test]
    fn steps_cycle() {
        let landing = Landing::restore(&MemoryStore::new());
        assert_eq!(landing.step().title, "Create");

        landing.begin_step_change();
        assert!(landing.animating.get());
        landing.finish_step_change();
        assert!(!landing.animating.get());
        assert_eq!(landing.step().title, "Share");

        for _ in 0..3 {
            landing.finish_step_change();
        }
        assert_eq!(landing.active_step.get(), 0);
    }
}
