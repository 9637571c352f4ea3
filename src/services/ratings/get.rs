use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RatingService;
use crate::grading::{Section, is_section_complete};
use crate::middlewares::RequireJWT;
use crate::models::ratings::responses::SectionRatingsResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_get_section_ratings(
    service: &RatingService,
    vendor_id: i64,
    section: Section,
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

    // 评审员只能查看分配给自己的板块，管理员不受限
    if current_user.role == UserRole::Reviewer {
        match storage
            .find_assignment(vendor_id, section, current_user.id)
            .await
        {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::NotAssigned,
                    "未分配该供应商该板块的评审任务",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询评审分配失败: {e}"),
                    )),
                );
            }
        }
    }

    match storage.latest_section_ratings(vendor_id, section).await {
        Ok(ratings) => {
            // 落库值恒在 1..=5，窄化转换安全
            let snapshot: std::collections::HashMap<String, u8> =
                ratings.iter().map(|(k, &v)| (k.clone(), v as u8)).collect();
            let section_complete = is_section_complete(section, &snapshot);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SectionRatingsResponse {
                    section,
                    ratings,
                    section_complete,
                },
                "板块评分获取成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询板块评分失败: {e}"),
            )),
        ),
    }
}
