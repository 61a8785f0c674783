pub const API_GENERATE_FORM: &str = "http://localhost:5000/generate-form";
pub const API_USERINFO: &str = "https://www.googleapis.com/oauth2/v3/userinfo";
pub const OAUTH_AUTHORIZE: &str = "https://accounts.google.com/o/oauth2/v2/auth";

pub const OAUTH_SCOPES: [&str; 6] = [
    "email",
    "profile",
    "https://www.googleapis.com/auth/forms.body",
    "https://www.googleapis.com/auth/drive",
    "https://www.googleapis.com/auth/drive.file",
    "https://www.googleapis.com/auth/drive.resource",
];

pub static STORAGE_TOKEN: &'static str = "token";
pub static STORAGE_USER: &'static str = "user";

pub static PATH_LANDING: &'static str = "/";
pub static PATH_DASHBOARD: &'static str = "/dashboard";

pub static ERROR_GENERATE_DEFAULT: &'static str = "Error generating form link";
pub static ERROR_AUTH_REQUIRED: &'static str = "Authentication required. Please login again.";

/// How long the "copied" acknowledgement stays visible.
pub const COPIED_RESET_MS: u32 = 2_000;

pub const STEP_INTERVAL_MS: u32 = 3_000;
pub const STEP_FADE_MS: u32 = 300;
