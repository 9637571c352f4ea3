use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{VendorService, is_vendor_owner};
use crate::middlewares::RequireJWT;
use crate::models::vendors::entities::VendorStatus;
use crate::models::vendors::responses::VendorResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_submit_vendor(
    service: &VendorService,
    vendor_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let vendor = match storage.get_vendor_by_id(vendor_id).await {
        Ok(Some(vendor)) => vendor,
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
    };

    if !is_vendor_owner(&current_user, &vendor) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只有表单归属人可以提交",
        )));
    }

    // 重复提交直接拒绝
    if vendor.status == VendorStatus::Submitted {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::VendorAlreadySubmitted,
            "表单已提交，不能重复提交",
        )));
    }

    match storage.submit_vendor(vendor_id).await {
        Ok(Some(vendor)) => {
            tracing::info!("Vendor {} submitted by user {}", vendor.id, current_user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                VendorResponse { vendor },
                "表单提交成功",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::VendorNotFound,
            "供应商不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("提交表单失败: {e}"),
            )),
        ),
    }
}
