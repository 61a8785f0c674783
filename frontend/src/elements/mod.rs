pub mod app_dashboard;
pub mod app_header;
pub mod app_landing;
pub mod app_root;
