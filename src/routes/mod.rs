pub mod auth;

pub mod users;

pub mod vendors;

pub mod assignments;

pub mod ratings;

pub mod grades;

pub mod files;

pub mod frontend;

pub use auth::configure_auth_routes;
pub use files::configure_file_routes;
pub use frontend::configure_frontend_routes;
pub use grades::configure_grade_routes;
pub use users::configure_user_routes;
pub use vendors::configure_vendor_routes;
