use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{VendorService, is_vendor_owner};
use crate::middlewares::RequireJWT;
use crate::models::vendors::entities::VendorStatus;
use crate::models::vendors::requests::UpdateVendorRequest;
use crate::models::vendors::responses::VendorResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_gst_number, validate_ifsc_code, validate_pan_number, validate_pin_code};

pub async fn handle_update_vendor(
    service: &VendorService,
    vendor_id: i64,
    update_request: UpdateVendorRequest,
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
            "只有表单归属人可以编辑",
        )));
    }

    // 已提交的表单锁定，不再接受修改
    if vendor.status != VendorStatus::Draft {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::VendorFormLocked,
            "表单已提交，无法修改",
        )));
    }

    if let Err(response) = validate_form_fields(&update_request) {
        return Ok(response);
    }

    match storage.update_vendor_form(vendor_id, update_request).await {
        Ok(Some(vendor)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            VendorResponse { vendor },
            "表单保存成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::VendorNotFound,
            "供应商不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("保存表单失败: {e}"),
            )),
        ),
    }
}

// 格式类字段非空时才校验，空值交给完成度计算去体现
fn validate_form_fields(update: &UpdateVendorRequest) -> Result<(), HttpResponse> {
    if let Some(ref gst) = update.gst_number
        && !gst.is_empty()
        && let Err(msg) = validate_gst_number(gst)
    {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    if let Some(ref pan) = update.pan_number
        && !pan.is_empty()
        && let Err(msg) = validate_pan_number(pan)
    {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    if let Some(ref ifsc) = update.ifsc_code
        && !ifsc.is_empty()
        && let Err(msg) = validate_ifsc_code(ifsc)
    {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    if let Some(ref pin) = update.pin_code
        && !pin.is_empty()
        && let Err(msg) = validate_pin_code(pin)
    {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    Ok(())
}
