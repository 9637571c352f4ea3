use serde::Serialize;
use ts_rs::TS;

use super::entities::ReviewerAssignment;

// 评审分配响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentResponse {
    pub assignment: ReviewerAssignment,
}

// 评审分配列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListResponse {
    pub items: Vec<ReviewerAssignment>,
}
