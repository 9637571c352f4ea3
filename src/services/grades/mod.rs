pub mod get;
pub mod override_grade;
pub mod rankings;
pub mod recompute;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::grades::requests::OverrideGradeRequest;
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
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

    // 获取供应商成绩（无快照时按当前评分即时计算）
    pub async fn get_grade(
        &self,
        vendor_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::handle_get_grade(self, vendor_id, request).await
    }

    // 按当前评分重算成绩
    pub async fn recompute_grade(
        &self,
        vendor_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        recompute::handle_recompute_grade(self, vendor_id, request).await
    }

    // 设置或清除管理员成绩覆盖
    pub async fn override_grade(
        &self,
        vendor_id: i64,
        override_request: OverrideGradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        override_grade::handle_override_grade(self, vendor_id, override_request, request).await
    }

    // 排行榜
    pub async fn list_rankings(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        rankings::handle_list_rankings(self, request).await
    }
}
