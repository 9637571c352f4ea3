use serde::Serialize;
use ts_rs::TS;

use super::entities::VendorGrade;
use crate::grading::GradeLetter;

// 成绩响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeResponse {
    pub grade: VendorGrade,
}

// 排行榜条目
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct RankingEntry {
    pub vendor_id: i64,
    pub company_name: String,
    pub site_score: f64,
    pub procurement_score: f64,
    pub financial_score: f64,
    pub total_score: f64,
    pub final_grade: GradeLetter,
    pub grade_label: String,
    pub computed_at: chrono::DateTime<chrono::Utc>,
}

// 排行榜响应（按总分降序，同分按最近重算时间优先）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct RankingsResponse {
    pub items: Vec<RankingEntry>,
}
