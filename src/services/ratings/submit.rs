use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RatingService;
use crate::grading::{RatingBatchError, Section, validate_rating_batch};
use crate::middlewares::RequireJWT;
use crate::models::ratings::requests::SubmitRatingsRequest;
use crate::models::ratings::responses::SubmitRatingsResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_submit_ratings(
    service: &RatingService,
    vendor_id: i64,
    section: Section,
    submit_request: SubmitRatingsRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let reviewer_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
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

    // 没有评审分配就拒绝，不落任何数据
    match storage.find_assignment(vendor_id, section, reviewer_id).await {
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

    // 整批校验，任意一项失败则整批拒绝
    let ratings = match validate_rating_batch(section, &submit_request.ratings) {
        Ok(ratings) => ratings,
        Err(RatingBatchError::UnknownParameter { key }) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::UnknownParameter,
                format!("未知评分参数: {key}"),
            )));
        }
        Err(RatingBatchError::InvalidRatingValue { key, value }) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidRatingValue,
                format!("参数 {key} 的评分 {value} 不合法，允许范围 1-5"),
            )));
        }
    };

    match storage
        .insert_ratings_and_recompute(vendor_id, section, reviewer_id, ratings)
        .await
    {
        Ok(grade) => {
            tracing::info!(
                "Reviewer {} rated vendor {} section {}, total now {}",
                reviewer_id,
                vendor_id,
                section,
                grade.total_score
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SubmitRatingsResponse { grade },
                "评分提交成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("评分落库失败: {e}"),
            )),
        ),
    }
}
