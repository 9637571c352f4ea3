pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::{User, UserProfile, UserRole, UserStatus};
pub use requests::{CreateUserRequest, UpdateUserRequest, UserListParams, UserListQuery};
pub use responses::{UserListResponse, UserResponse};
