pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
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

    // 创建评审分配
    pub async fn create_assignment(
        &self,
        vendor_id: i64,
        create_request: CreateAssignmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_assignment(self, vendor_id, create_request, request).await
    }

    // 列出供应商的评审分配
    pub async fn list_assignments(
        &self,
        vendor_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_assignments(self, vendor_id, request).await
    }

    // 删除评审分配
    pub async fn delete_assignment(
        &self,
        vendor_id: i64,
        assignment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete_assignment(self, vendor_id, assignment_id, request).await
    }
}
