use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ratings::requests::SubmitRatingsRequest;
use crate::services::RatingService;
use crate::utils::{SafeSection, SafeVendorIdI64};

// 懒加载的全局 RatingService 实例
//
// 路由挂在 /api/v1/vendors/{vendor_id}/sections/{section}/ratings 下，
// 注册在 vendors 路由模块里。
static RATING_SERVICE: Lazy<RatingService> = Lazy::new(RatingService::new_lazy);

// 整批提交板块评分
pub async fn submit_ratings(
    req: HttpRequest,
    vendor_id: SafeVendorIdI64,
    section: SafeSection,
    body: web::Json<SubmitRatingsRequest>,
) -> ActixResult<HttpResponse> {
    RATING_SERVICE
        .submit_ratings(vendor_id.0, section.0, body.into_inner(), &req)
        .await
}

// 读取板块评分快照
pub async fn get_section_ratings(
    req: HttpRequest,
    vendor_id: SafeVendorIdI64,
    section: SafeSection,
) -> ActixResult<HttpResponse> {
    RATING_SERVICE
        .get_section_ratings(vendor_id.0, section.0, &req)
        .await
}
