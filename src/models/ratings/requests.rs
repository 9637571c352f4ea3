use std::collections::HashMap;

use serde::Deserialize;
use ts_rs::TS;

// 板块评分提交请求
//
// 键为参数标识，值为评分。整批校验通过后才落库。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rating.ts")]
pub struct SubmitRatingsRequest {
    pub ratings: HashMap<String, i64>,
}
