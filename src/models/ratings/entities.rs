use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::grading::Section;

// 单条参数评分记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rating.ts")]
pub struct Rating {
    pub id: i64,
    pub vendor_id: i64,
    pub section: Section,
    pub parameter_key: String,
    pub reviewer_id: i64,
    // 评分值（1-5）
    pub value: i32,
    pub rated_at: chrono::DateTime<chrono::Utc>,
}
