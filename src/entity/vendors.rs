//! 供应商主表单实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vendors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub company_name: String,
    pub legal_status: String,
    pub registration_number: String,
    pub gst_number: String,
    pub pan_number: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address_line1: String,
    pub pin_code: String,
    pub district: String,
    pub state: String,
    pub turnover_fy1: f64,
    pub turnover_fy2: f64,
    pub turnover_fy3: f64,
    pub turnover_fy4: f64,
    pub bank_name: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub branch: String,
    pub completion_percentage: i32,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::vendor_references::Entity")]
    References,
    #[sea_orm(has_many = "super::vendor_contacts::Entity")]
    Contacts,
    #[sea_orm(has_many = "super::vendor_documents::Entity")]
    Documents,
    #[sea_orm(has_many = "super::reviewer_assignments::Entity")]
    ReviewerAssignments,
    #[sea_orm(has_many = "super::ratings::Entity")]
    Ratings,
    #[sea_orm(has_one = "super::vendor_grades::Entity")]
    Grade,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::vendor_references::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::References.def()
    }
}

impl Related<super::vendor_contacts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contacts.def()
    }
}

impl Related<super::vendor_documents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Documents.def()
    }
}

impl Related<super::reviewer_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReviewerAssignments.def()
    }
}

impl Related<super::ratings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ratings.def()
    }
}

impl Related<super::vendor_grades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grade.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_vendor(self) -> crate::models::vendors::entities::Vendor {
        use crate::models::vendors::entities::{Vendor, VendorStatus};
        use chrono::{DateTime, Utc};

        Vendor {
            id: self.id,
            user_id: self.user_id,
            company_name: self.company_name,
            legal_status: self.legal_status,
            registration_number: self.registration_number,
            gst_number: self.gst_number,
            pan_number: self.pan_number,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            address_line1: self.address_line1,
            pin_code: self.pin_code,
            district: self.district,
            state: self.state,
            turnover_fy1: self.turnover_fy1,
            turnover_fy2: self.turnover_fy2,
            turnover_fy3: self.turnover_fy3,
            turnover_fy4: self.turnover_fy4,
            bank_name: self.bank_name,
            account_number: self.account_number,
            ifsc_code: self.ifsc_code,
            branch: self.branch,
            completion_percentage: self.completion_percentage,
            status: self
                .status
                .parse::<VendorStatus>()
                .unwrap_or(VendorStatus::Draft),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
