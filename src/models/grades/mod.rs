pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::VendorGrade;
pub use requests::OverrideGradeRequest;
pub use responses::{GradeResponse, RankingEntry, RankingsResponse};
