use std::collections::HashMap;

use serde::Serialize;
use ts_rs::TS;

use crate::grading::Section;
use crate::models::grades::VendorGrade;

// 板块评分快照：每个参数取最新一次评分
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rating.ts")]
pub struct SectionRatingsResponse {
    pub section: Section,
    pub ratings: HashMap<String, i32>,
    // 该板块所有参数均已评分
    pub section_complete: bool,
}

// 评分提交响应：提交成功后返回重算的成绩
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rating.ts")]
pub struct SubmitRatingsResponse {
    pub grade: VendorGrade,
}
