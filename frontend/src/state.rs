use once_cell::sync::Lazy;

use shared::config::AppConfig;

pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);
