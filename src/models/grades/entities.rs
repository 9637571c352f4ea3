use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::grading::GradeLetter;

// 供应商成绩快照
//
// 分数与 computed_grade 由评分重算维护；override 字段只随管理员
// 覆盖操作变化，两组字段互不触碰。final_grade 在读取时取
// override（若有）否则取 computed_grade。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct VendorGrade {
    pub vendor_id: i64,
    pub site_score: f64,
    pub procurement_score: f64,
    pub financial_score: f64,
    pub total_score: f64,
    pub computed_grade: GradeLetter,
    pub admin_override_grade: Option<GradeLetter>,
    pub final_grade: GradeLetter,
    pub computed_at: chrono::DateTime<chrono::Utc>,
    pub overridden_by: Option<i64>,
    pub overridden_at: Option<chrono::DateTime<chrono::Utc>>,
}
