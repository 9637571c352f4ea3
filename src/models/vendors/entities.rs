use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::files::File;

// 供应商表单状态
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/vendor.ts")]
pub enum VendorStatus {
    Draft,     // 草稿，供应商可编辑
    Submitted, // 已提交，表单锁定
}

impl VendorStatus {
    pub const DRAFT: &'static str = "draft";
    pub const SUBMITTED: &'static str = "submitted";
}

impl<'de> Deserialize<'de> for VendorStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            VendorStatus::DRAFT => Ok(VendorStatus::Draft),
            VendorStatus::SUBMITTED => Ok(VendorStatus::Submitted),
            _ => Err(serde::de::Error::custom(format!(
                "无效的供应商状态: '{s}'. 支持的状态: draft, submitted"
            ))),
        }
    }
}

impl std::fmt::Display for VendorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VendorStatus::Draft => write!(f, "{}", VendorStatus::DRAFT),
            VendorStatus::Submitted => write!(f, "{}", VendorStatus::SUBMITTED),
        }
    }
}

impl std::str::FromStr for VendorStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(VendorStatus::Draft),
            "submitted" => Ok(VendorStatus::Submitted),
            _ => Err(format!("Invalid vendor status: {s}")),
        }
    }
}

// 供应商主表单
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/vendor.ts")]
pub struct Vendor {
    pub id: i64,
    // 归属的供应商账号
    pub user_id: i64,
    // 公司基本信息
    pub company_name: String,
    pub legal_status: String,
    pub registration_number: String,
    pub gst_number: String,
    pub pan_number: String,
    pub contact_email: String,
    pub contact_phone: String,
    // 注册地址
    pub address_line1: String,
    pub pin_code: String,
    pub district: String,
    pub state: String,
    // 近四个财年营业额（单位：万元）
    pub turnover_fy1: f64,
    pub turnover_fy2: f64,
    pub turnover_fy3: f64,
    pub turnover_fy4: f64,
    // 银行信息
    pub bank_name: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub branch: String,
    // 完成度（0-100，保存时重算，提交后恒为 100）
    pub completion_percentage: i32,
    pub status: VendorStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 参考业绩行
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/vendor.ts")]
pub struct VendorReference {
    pub id: i64,
    pub vendor_id: i64,
    pub company_name: String,
    // PO 日期，表单原样存储的日期文本
    pub po_date: String,
    pub po_value: Option<f64>,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
}

// 联系人行
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/vendor.ts")]
pub struct VendorContact {
    pub id: i64,
    pub vendor_id: i64,
    pub name: String,
    pub designation: Option<String>,
    pub email: String,
    pub phone: Option<String>,
}

// 资质文件条目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/vendor.ts")]
pub struct VendorDocument {
    pub id: i64,
    pub vendor_id: i64,
    // 文件类别（如营业执照、审计报告）
    pub kind: String,
}

// 资质文件条目及其已上传文件
#[derive(Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/vendor.ts")]
pub struct VendorDocumentView {
    pub id: i64,
    pub kind: String,
    pub files: Vec<File>,
}
