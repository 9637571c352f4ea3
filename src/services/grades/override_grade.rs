use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::str::FromStr;

use super::GradeService;
use crate::grading::GradeLetter;
use crate::middlewares::RequireJWT;
use crate::models::grades::requests::OverrideGradeRequest;
use crate::models::grades::responses::GradeResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_override_grade(
    service: &GradeService,
    vendor_id: i64,
    override_request: OverrideGradeRequest,
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

    // grade 为 None 表示清除覆盖；非法字母在这里挡下
    let grade = match override_request.grade {
        Some(raw) => match GradeLetter::from_str(&raw) {
            Ok(letter) => Some(letter),
            Err(_) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidGrade,
                    format!("无效的成绩等级: '{raw}'. 支持: A, B, C, D"),
                )));
            }
        },
        None => None,
    };

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

    match storage.set_grade_override(vendor_id, grade, admin_id).await {
        Ok(Some(grade)) => {
            tracing::info!(
                "Admin {} set grade override {:?} for vendor {}",
                admin_id,
                grade.admin_override_grade,
                vendor_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(GradeResponse { grade }, "成绩覆盖已更新")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GradeNotFound,
            "成绩快照不存在，请先重算成绩",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("设置成绩覆盖失败: {e}"),
            )),
        ),
    }
}
