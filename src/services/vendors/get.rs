use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{VendorService, can_access_vendor};
use crate::middlewares::RequireJWT;
use crate::models::vendors::entities::Vendor;
use crate::models::vendors::responses::{VendorDetailResponse, VendorResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub async fn handle_get_vendor(
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

    if !can_access_vendor(&current_user, &vendor) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "无权访问该供应商表单",
        )));
    }

    build_detail_response(&storage, vendor).await
}

pub async fn handle_get_my_vendor(
    service: &VendorService,
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

    match storage.get_vendor_by_user_id(user_id).await {
        Ok(Some(vendor)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            VendorResponse { vendor },
            "供应商表单获取成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::VendorNotFound,
            "该账号尚未创建供应商表单",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询供应商失败: {e}"),
            )),
        ),
    }
}

// 详情响应聚合主表单与三张子表
async fn build_detail_response(
    storage: &std::sync::Arc<dyn Storage>,
    vendor: Vendor,
) -> ActixResult<HttpResponse> {
    let references = match storage.list_vendor_references(vendor.id).await {
        Ok(items) => items,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询参考业绩失败: {e}"),
                )),
            );
        }
    };

    let contacts = match storage.list_vendor_contacts(vendor.id).await {
        Ok(items) => items,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询联系人失败: {e}"),
                )),
            );
        }
    };

    let documents = match storage.list_vendor_documents_with_files(vendor.id).await {
        Ok(items) => items,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询资质文件失败: {e}"),
                )),
            );
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        VendorDetailResponse {
            vendor,
            references,
            contacts,
            documents,
        },
        "供应商详情获取成功",
    )))
}
