use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::grades::responses::GradeResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_get_grade(
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

    // 还没有成绩快照时按当前评分即时计算一份
    let grade = match storage.get_grade_by_vendor_id(vendor_id).await {
        Ok(Some(grade)) => grade,
        Ok(None) => match storage.recompute_grade(vendor_id).await {
            Ok(grade) => grade,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("成绩计算失败: {e}"),
                    )),
                );
            }
        },
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询成绩失败: {e}"),
                )),
            );
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(GradeResponse { grade }, "成绩获取成功")))
}
