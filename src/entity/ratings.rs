//! 参数评分实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ratings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub vendor_id: i64,
    pub section: String,
    pub parameter_key: String,
    pub reviewer_id: i64,
    pub value: i32,
    pub rated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vendors::Entity",
        from = "Column::VendorId",
        to = "super::vendors::Column::Id"
    )]
    Vendor,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ReviewerId",
        to = "super::users::Column::Id"
    )]
    Reviewer,
}

impl Related<super::vendors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviewer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_rating(self) -> crate::models::ratings::entities::Rating {
        use crate::grading::Section;
        use crate::models::ratings::entities::Rating;
        use chrono::{DateTime, Utc};

        Rating {
            id: self.id,
            vendor_id: self.vendor_id,
            section: self.section.parse::<Section>().unwrap_or(Section::Site),
            parameter_key: self.parameter_key,
            reviewer_id: self.reviewer_id,
            value: self.value,
            rated_at: DateTime::<Utc>::from_timestamp(self.rated_at, 0).unwrap_or_default(),
        }
    }
}
