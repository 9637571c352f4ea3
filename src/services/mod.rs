pub mod assignments;
pub mod auth;
pub mod files;
pub mod grades;
pub mod ratings;
pub mod users;
pub mod vendors;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use files::FileService;
pub use grades::GradeService;
pub use ratings::RatingService;
pub use users::UserService;
pub use vendors::VendorService;
