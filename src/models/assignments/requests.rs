use serde::Deserialize;
use ts_rs::TS;

use crate::grading::Section;

// 评审分配创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub section: Section,
    pub reviewer_id: i64,
}
