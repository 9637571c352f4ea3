pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::ReviewerAssignment;
pub use requests::CreateAssignmentRequest;
pub use responses::{AssignmentListResponse, AssignmentResponse};
