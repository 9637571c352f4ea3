pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::Rating;
pub use requests::SubmitRatingsRequest;
pub use responses::{SectionRatingsResponse, SubmitRatingsResponse};
