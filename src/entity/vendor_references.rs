//! 参考业绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vendor_references")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub vendor_id: i64,
    pub company_name: String,
    pub po_date: String,
    pub po_value: Option<f64>,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vendors::Entity",
        from = "Column::VendorId",
        to = "super::vendors::Column::Id"
    )]
    Vendor,
}

impl Related<super::vendors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_reference(self) -> crate::models::vendors::entities::VendorReference {
        use crate::models::vendors::entities::VendorReference;

        VendorReference {
            id: self.id,
            vendor_id: self.vendor_id,
            company_name: self.company_name,
            po_date: self.po_date,
            po_value: self.po_value,
            contact_person: self.contact_person,
            contact_phone: self.contact_phone,
        }
    }
}
