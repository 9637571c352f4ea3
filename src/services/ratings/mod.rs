pub mod get;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::grading::Section;
use crate::models::ratings::requests::SubmitRatingsRequest;
use crate::storage::Storage;

pub struct RatingService {
    storage: Option<Arc<dyn Storage>>,
}

impl RatingService {
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

    // 整批提交板块评分并重算成绩
    pub async fn submit_ratings(
        &self,
        vendor_id: i64,
        section: Section,
        submit_request: SubmitRatingsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::handle_submit_ratings(self, vendor_id, section, submit_request, request).await
    }

    // 读取板块评分快照
    pub async fn get_section_ratings(
        &self,
        vendor_id: i64,
        section: Section,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::handle_get_section_ratings(self, vendor_id, section, request).await
    }
}
