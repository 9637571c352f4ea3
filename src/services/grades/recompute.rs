use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::grades::responses::GradeResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_recompute_grade(
    service: &GradeService,
    vendor_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

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

    match storage.recompute_grade(vendor_id).await {
        Ok(grade) => {
            tracing::info!(
                "Grade recomputed for vendor {}, total {}",
                vendor_id,
                grade.total_score
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(GradeResponse { grade }, "成绩重算成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("成绩重算失败: {e}"),
            )),
        ),
    }
}
