//! 预导入模块，方便使用

pub use super::files::{ActiveModel as FileActiveModel, Entity as Files, Model as FileModel};
pub use super::ratings::{ActiveModel as RatingActiveModel, Entity as Ratings, Model as RatingModel};
pub use super::reviewer_assignments::{
    ActiveModel as ReviewerAssignmentActiveModel, Entity as ReviewerAssignments,
    Model as ReviewerAssignmentModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
pub use super::vendor_contacts::{
    ActiveModel as VendorContactActiveModel, Entity as VendorContacts, Model as VendorContactModel,
};
pub use super::vendor_documents::{
    ActiveModel as VendorDocumentActiveModel, Entity as VendorDocuments,
    Model as VendorDocumentModel,
};
pub use super::vendor_grades::{
    ActiveModel as VendorGradeActiveModel, Entity as VendorGrades, Model as VendorGradeModel,
};
pub use super::vendor_references::{
    ActiveModel as VendorReferenceActiveModel, Entity as VendorReferences,
    Model as VendorReferenceModel,
};
pub use super::vendors::{ActiveModel as VendorActiveModel, Entity as Vendors, Model as VendorModel};
