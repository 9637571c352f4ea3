pub mod assignments;
pub mod auth;
pub mod common;
pub mod files;
pub mod grades;
pub mod ratings;
pub mod users;
pub mod vendors;

pub use common::{ApiResponse, ErrorCode};
