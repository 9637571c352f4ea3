pub mod entities;
pub mod responses;

pub use entities::File;
pub use responses::FileUploadResponse;
