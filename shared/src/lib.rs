pub mod catalog;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod landing;
pub mod route;
pub mod session;
pub mod types;
pub mod utils;
