use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{VendorService, is_vendor_owner};
use crate::middlewares::RequireJWT;
use crate::models::vendors::entities::VendorStatus;
use crate::models::{ApiResponse, ErrorCode, files::responses::FileUploadResponse};
use crate::services::files::upload::save_multipart_file;

// 上传资质文件并挂接到条目，随后重算表单完成度
pub async fn handle_upload_document_file(
    service: &VendorService,
    vendor_id: i64,
    document_id: i64,
    payload: Multipart,
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
            "只有表单归属人可以上传资质文件",
        )));
    }

    if vendor.status != VendorStatus::Draft {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::VendorFormLocked,
            "表单已提交，无法修改",
        )));
    }

    // 条目必须属于该供应商
    match storage.get_vendor_document(vendor_id, document_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "资质文件条目不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询资质文件条目失败: {e}"),
                )),
            );
        }
    }

    let db_file = match save_multipart_file(&storage, request, payload).await? {
        Ok(file) => file,
        Err(response) => return Ok(response),
    };

    if let Err(e) = storage
        .attach_file_to_document(&db_file.file_token, document_id)
        .await
    {
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("挂接文件失败: {e}"),
            )),
        );
    }

    // 挂接会影响资质文件完成度，立即重算
    if let Err(e) = storage.recompute_vendor_completion(vendor_id).await {
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("重算完成度失败: {e}"),
            )),
        );
    }

    let response = FileUploadResponse {
        file_token: db_file.file_token,
        file_name: db_file.file_name,
        size: db_file.file_size,
        content_type: db_file.file_type,
        uploaded_at: db_file.uploaded_at,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "资质文件上传成功")))
}
