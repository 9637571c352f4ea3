use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::VendorService;
use crate::middlewares::RequireJWT;
use crate::models::vendors::requests::CreateVendorRequest;
use crate::models::vendors::responses::VendorResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_create_vendor(
    service: &VendorService,
    create_request: CreateVendorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    if create_request.company_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "公司名称不能为空",
        )));
    }

    // 每个供应商账号只允许一份表单
    match storage.get_vendor_by_user_id(user_id).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "该账号已有供应商表单",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询供应商表单失败: {e}"),
                )),
            );
        }
    }

    match storage.create_vendor(user_id, create_request).await {
        Ok(vendor) => {
            tracing::info!("Vendor draft {} created by user {}", vendor.id, user_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                VendorResponse { vendor },
                "供应商草稿创建成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建供应商草稿失败: {e}"),
            )),
        ),
    }
}
