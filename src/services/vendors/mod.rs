pub mod create;
pub mod documents;
pub mod get;
pub mod list;
pub mod submit;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use actix_multipart::Multipart;

use crate::models::users::entities::{User, UserRole};
use crate::models::vendors::entities::Vendor;
use crate::models::vendors::requests::{CreateVendorRequest, UpdateVendorRequest, VendorListParams};
use crate::storage::Storage;

pub struct VendorService {
    storage: Option<Arc<dyn Storage>>,
}

impl VendorService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 建立空白草稿表单
    pub async fn create_vendor(
        &self,
        create_request: CreateVendorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_vendor(self, create_request, request).await
    }

    // 获取供应商表单详情（含子表）
    pub async fn get_vendor(
        &self,
        vendor_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::handle_get_vendor(self, vendor_id, request).await
    }

    // 获取当前账号名下的供应商表单
    pub async fn get_my_vendor(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::handle_get_my_vendor(self, request).await
    }

    // 列出供应商
    pub async fn list_vendors(
        &self,
        query: VendorListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_vendors(self, query, request).await
    }

    // 保存表单并重算完成度
    pub async fn update_vendor(
        &self,
        vendor_id: i64,
        update_request: UpdateVendorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update_vendor(self, vendor_id, update_request, request).await
    }

    // 提交表单（锁定，完成度置 100）
    pub async fn submit_vendor(
        &self,
        vendor_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::handle_submit_vendor(self, vendor_id, request).await
    }

    // 上传资质文件并挂接到条目
    pub async fn upload_document_file(
        &self,
        vendor_id: i64,
        document_id: i64,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        documents::handle_upload_document_file(self, vendor_id, document_id, payload, request).await
    }
}

// 供应商本人只能访问自己的表单，评审员和管理员可访问全部
pub(crate) fn can_access_vendor(user: &User, vendor: &Vendor) -> bool {
    user.role != UserRole::Vendor || vendor.user_id == user.id
}

// 只有表单归属人可以编辑
pub(crate) fn is_vendor_owner(user: &User, vendor: &Vendor) -> bool {
    vendor.user_id == user.id
}
