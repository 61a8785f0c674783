use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Semester {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub semesters: Vec<String>,
}

impl Subject {
    pub fn offered_in(&self, semester: &str) -> bool {
        self.semesters.iter().any(|id| id == semester)
    }
}

/// Profile returned by the userinfo endpoint and kept under the `user` key.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default)]
    pub picture: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn display_name(&self) -> &str {
        match self.given_name.as_deref() {
            Some(given) if !given.is_empty() => given,
            _ => self.name.as_str(),
        }
    }

    pub fn initial(&self) -> String {
        self.name.chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string())
    }
}

// ===

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub sem: String,
    pub subject: String,
    pub token: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct GenerateResponse {
    #[serde(rename = "formUrl", default)]
    pub form_url: Option<FormUrl>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum FormUrl {
    Link(String),
    Uris(FormUris),
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct FormUris {
    #[serde(rename = "responderUri", default)]
    pub responder_uri: Option<String>,
    #[serde(rename = "editUri", default)]
    pub edit_uri: Option<String>,
}

impl FormUrl {
    /// Responder link first, edit link otherwise. Empty strings count as absent.
    pub fn into_link(self) -> Option<String> {
        let link = match self {
            FormUrl::Link(link) => Some(link),
            FormUrl::Uris(uris) => uris.responder_uri
                .filter(|uri| !uri.is_empty())
                .or(uris.edit_uri),
        };
        link.filter(|link| !link.is_empty())
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

/// Raw outcome of a POST, before any decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub ok: bool,
    pub status: u16,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_given_name() {
        let mut profile = UserProfile { name: "Ada Lovelace".into(), ..UserProfile::default() };
        assert_eq!(profile.display_name(), "Ada Lovelace");
        profile.given_name = Some("".into());
        assert_eq!(profile.display_name(), "Ada Lovelace");
        profile.given_name = Some("Ada".into());
        assert_eq!(profile.display_name(), "Ada");
    }

    #[test]
    fn initial_falls_back_to_u() {
        assert_eq!(UserProfile::default().initial(), "U");
        let profile = UserProfile { name: "ada".into(), ..UserProfile::default() };
        assert_eq!(profile.initial(), "A");
    }

    #[test]
    fn profile_keeps_unknown_fields() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"name":"Ada","picture":"p.png","sub":"42","locale":"en"}"#,
        ).unwrap();
        assert_eq!(profile.picture, "p.png");
        assert_eq!(profile.extra.get("sub"), Some(&Value::from("42")));

        let json = serde_json::to_string(&profile).unwrap();
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn request_uses_backend_field_names() {
        let req = GenerateRequest { sem: "sem1".into(), subject: "math1".into(), token: "t".into() };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"sem": "sem1", "subject": "math1", "token": "t"})
        );
    }

    #[test]
    fn form_url_object_prefers_responder() {
        let uris = FormUrl::Uris(FormUris { responder_uri: Some("".into()), edit_uri: Some("E".into()) });
        assert_eq!(uris.into_link(), Some("E".to_string()));
        assert_eq!(FormUrl::Link("".into()).into_link(), None);
    }
}
