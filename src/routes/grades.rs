use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::grades::requests::OverrideGradeRequest;
use crate::services::GradeService;
use crate::utils::SafeVendorIdI64;

// 懒加载的全局 GradeService 实例
//
// 按供应商的成绩路由挂在 /api/v1/vendors/{vendor_id}/grade 下，
// 注册在 vendors 路由模块里；这里只注册排行榜。
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

// 获取成绩快照（无快照时即时计算）
pub async fn get_grade(req: HttpRequest, vendor_id: SafeVendorIdI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.get_grade(vendor_id.0, &req).await
}

// 按当前评分重算成绩
pub async fn recompute_grade(
    req: HttpRequest,
    vendor_id: SafeVendorIdI64,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.recompute_grade(vendor_id.0, &req).await
}

// 设置或清除管理员成绩覆盖
pub async fn override_grade(
    req: HttpRequest,
    vendor_id: SafeVendorIdI64,
    body: web::Json<OverrideGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .override_grade(vendor_id.0, body.into_inner(), &req)
        .await
}

// 排行榜
pub async fn list_rankings(req: HttpRequest) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_rankings(&req).await
}
// 配置路由
pub fn configure_grade_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grades")
            .wrap(middlewares::RequireJWT)
            .route("/rankings", web::get().to(list_rankings)),
    );
}
