pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::{
    Vendor, VendorContact, VendorDocument, VendorDocumentView, VendorReference, VendorStatus,
};
pub use requests::{
    ContactItem, CreateVendorRequest, DocumentItem, ReferenceItem, UpdateVendorRequest,
    VendorListParams, VendorListQuery,
};
pub use responses::{VendorDetailResponse, VendorListResponse, VendorResponse};
