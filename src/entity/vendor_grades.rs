//! 供应商成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vendor_grades")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub vendor_id: i64,
    pub site_score: f64,
    pub procurement_score: f64,
    pub financial_score: f64,
    pub total_score: f64,
    pub computed_grade: String,
    pub admin_override_grade: Option<String>,
    pub computed_at: i64,
    pub overridden_by: Option<i64>,
    pub overridden_at: Option<i64>,
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
//
// final_grade 在转换时求值：有覆盖用覆盖，否则用计算档位。
impl Model {
    pub fn into_grade(self) -> crate::models::grades::entities::VendorGrade {
        use crate::grading::GradeLetter;
        use crate::models::grades::entities::VendorGrade;
        use chrono::{DateTime, Utc};

        let computed_grade = self
            .computed_grade
            .parse::<GradeLetter>()
            .unwrap_or(GradeLetter::D);
        let admin_override_grade = self
            .admin_override_grade
            .and_then(|s| s.parse::<GradeLetter>().ok());
        let final_grade = admin_override_grade.unwrap_or(computed_grade);

        VendorGrade {
            vendor_id: self.vendor_id,
            site_score: self.site_score,
            procurement_score: self.procurement_score,
            financial_score: self.financial_score,
            total_score: self.total_score,
            computed_grade,
            admin_override_grade,
            final_grade,
            computed_at: DateTime::<Utc>::from_timestamp(self.computed_at, 0).unwrap_or_default(),
            overridden_by: self.overridden_by,
            overridden_at: self
                .overridden_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::GradeLetter;

    fn sample_model() -> Model {
        Model {
            vendor_id: 1,
            site_score: 40.5,
            procurement_score: 27.0,
            financial_score: 20.0,
            total_score: 87.5,
            computed_grade: "A".to_string(),
            admin_override_grade: None,
            computed_at: 1_750_000_000,
            overridden_by: None,
            overridden_at: None,
        }
    }

    #[test]
    fn test_final_grade_without_override_is_computed() {
        let grade = sample_model().into_grade();
        assert_eq!(grade.computed_grade, GradeLetter::A);
        assert_eq!(grade.admin_override_grade, None);
        assert_eq!(grade.final_grade, GradeLetter::A);
    }

    #[test]
    fn test_override_wins_but_computed_fields_survive() {
        let mut model = sample_model();
        model.admin_override_grade = Some("C".to_string());
        model.overridden_by = Some(7);
        model.overridden_at = Some(1_750_000_100);

        let grade = model.into_grade();
        assert_eq!(grade.final_grade, GradeLetter::C);
        // 覆盖只作用于 final_grade，计算结果原样保留
        assert_eq!(grade.computed_grade, GradeLetter::A);
        assert_eq!(grade.total_score, 87.5);
        assert_eq!(grade.overridden_by, Some(7));
    }
}
