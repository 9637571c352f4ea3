use serde::Deserialize;
use ts_rs::TS;

// 成绩覆盖请求
//
// grade 为 None 表示清除覆盖，恢复按计算结果展示。
// 字母在服务层解析，以便对非法值返回明确的错误码。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct OverrideGradeRequest {
    pub grade: Option<String>,
}
