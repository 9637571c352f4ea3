use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::grading::Section;

// 评审分配记录：某评审员负责某供应商的某个评分板块
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct ReviewerAssignment {
    pub id: i64,
    pub vendor_id: i64,
    pub section: Section,
    // 负责评分的评审员账号
    pub reviewer_id: i64,
    // 创建该分配的管理员账号
    pub assigned_by: i64,
    pub assigned_at: chrono::DateTime<chrono::Utc>,
}
