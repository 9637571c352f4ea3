use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::assignments::responses::AssignmentResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_create_assignment(
    service: &AssignmentService,
    vendor_id: i64,
    create_request: CreateAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let admin_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 供应商必须存在
    match storage.get_vendor_by_id(vendor_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::VendorNotFound,
                "供应商不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询供应商失败: {e}"),
                )),
            );
        }
    }

    // 被分配人必须是评审员账号
    match storage.get_user_by_id(create_request.reviewer_id).await {
        Ok(Some(user)) => {
            if user.role != UserRole::Reviewer {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "被分配的账号不是评审员",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "评审员账号不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询评审员失败: {e}"),
                )),
            );
        }
    }

    // 同一评审员在同一供应商同一板块只允许一条分配
    match storage
        .find_assignment(vendor_id, create_request.section, create_request.reviewer_id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AssignmentAlreadyExists,
                "该评审分配已存在",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询评审分配失败: {e}"),
                )),
            );
        }
    }

    match storage
        .create_assignment(
            vendor_id,
            create_request.section,
            create_request.reviewer_id,
            admin_id,
        )
        .await
    {
        Ok(assignment) => {
            tracing::info!(
                "Reviewer {} assigned to vendor {} section {}",
                assignment.reviewer_id,
                assignment.vendor_id,
                assignment.section
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AssignmentResponse { assignment },
                "评审分配创建成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建评审分配失败: {e}"),
            )),
        ),
    }
}
