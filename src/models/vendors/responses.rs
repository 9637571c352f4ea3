use super::entities::{Vendor, VendorContact, VendorDocumentView, VendorReference};
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 供应商响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/vendor.ts")]
pub struct VendorResponse {
    pub vendor: Vendor,
}

// 供应商详情（含子表）
#[derive(Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/vendor.ts")]
pub struct VendorDetailResponse {
    pub vendor: Vendor,
    pub references: Vec<VendorReference>,
    pub contacts: Vec<VendorContact>,
    pub documents: Vec<VendorDocumentView>,
}

// 供应商列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/vendor.ts")]
pub struct VendorListResponse {
    pub items: Vec<Vendor>,
    pub pagination: PaginationInfo,
}
