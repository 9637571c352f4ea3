use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::services::AssignmentService;
use crate::utils::{SafeAssignmentIdI64, SafeVendorIdI64};

// 懒加载的全局 AssignmentService 实例
//
// 路由挂在 /api/v1/vendors/{vendor_id}/assignments 下，注册在 vendors 路由模块里。
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// 创建评审分配
pub async fn create_assignment(
    req: HttpRequest,
    vendor_id: SafeVendorIdI64,
    body: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(vendor_id.0, body.into_inner(), &req)
        .await
}

// 列出供应商的评审分配
pub async fn list_assignments(
    req: HttpRequest,
    vendor_id: SafeVendorIdI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.list_assignments(vendor_id.0, &req).await
}

// 删除评审分配
pub async fn delete_assignment(
    req: HttpRequest,
    vendor_id: SafeVendorIdI64,
    assignment_id: SafeAssignmentIdI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .delete_assignment(vendor_id.0, assignment_id.0, &req)
        .await
}
