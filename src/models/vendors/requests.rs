use super::entities::VendorStatus;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 供应商创建请求（建立空白草稿）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/vendor.ts")]
pub struct CreateVendorRequest {
    pub company_name: String,
}

// 参考业绩行（表单保存）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/vendor.ts")]
pub struct ReferenceItem {
    pub company_name: String,
    pub po_date: String,
    pub po_value: Option<f64>,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
}

// 联系人行（表单保存）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/vendor.ts")]
pub struct ContactItem {
    pub name: String,
    pub designation: Option<String>,
    pub email: String,
    pub phone: Option<String>,
}

// 资质文件条目（表单保存，按类别建档）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/vendor.ts")]
pub struct DocumentItem {
    pub kind: String,
}

// 供应商表单保存请求
//
// 标量字段为 None 表示不修改；子表字段为 Some 时整体替换。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/vendor.ts")]
pub struct UpdateVendorRequest {
    pub company_name: Option<String>,
    pub legal_status: Option<String>,
    pub registration_number: Option<String>,
    pub gst_number: Option<String>,
    pub pan_number: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address_line1: Option<String>,
    pub pin_code: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub turnover_fy1: Option<f64>,
    pub turnover_fy2: Option<f64>,
    pub turnover_fy3: Option<f64>,
    pub turnover_fy4: Option<f64>,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub ifsc_code: Option<String>,
    pub branch: Option<String>,
    pub references: Option<Vec<ReferenceItem>>,
    pub contacts: Option<Vec<ContactItem>>,
    pub documents: Option<Vec<DocumentItem>>,
}

// 供应商列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/vendor.ts")]
pub struct VendorListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<VendorStatus>,
    pub search: Option<String>,
}

// 供应商列表查询参数（用于存储层）
#[derive(Debug, Clone, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/vendor.ts")]
pub struct VendorListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<VendorStatus>,
    pub search: Option<String>,
    // 非空时只返回该账号名下的供应商
    pub owner_user_id: Option<i64>,
}
