use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::users::entities::UserRole;
use crate::models::vendors::requests::{
    CreateVendorRequest, UpdateVendorRequest, VendorListParams,
};
use crate::services::VendorService;
use crate::utils::{SafeDocumentIdI64, SafeVendorIdI64};

// 懒加载的全局 VendorService 实例
static VENDOR_SERVICE: Lazy<VendorService> = Lazy::new(VendorService::new_lazy);

// 建立空白草稿表单
pub async fn create_vendor(
    req: HttpRequest,
    body: web::Json<CreateVendorRequest>,
) -> ActixResult<HttpResponse> {
    VENDOR_SERVICE.create_vendor(body.into_inner(), &req).await
}

// 列出供应商（供应商角色只会看到自己的表单）
pub async fn list_vendors(
    req: HttpRequest,
    query: web::Query<VendorListParams>,
) -> ActixResult<HttpResponse> {
    VENDOR_SERVICE.list_vendors(query.into_inner(), &req).await
}

// 当前账号名下的表单
pub async fn get_my_vendor(req: HttpRequest) -> ActixResult<HttpResponse> {
    VENDOR_SERVICE.get_my_vendor(&req).await
}

// 表单详情（含参考方、联系人、资质文件条目）
pub async fn get_vendor(req: HttpRequest, vendor_id: SafeVendorIdI64) -> ActixResult<HttpResponse> {
    VENDOR_SERVICE.get_vendor(vendor_id.0, &req).await
}

// 保存表单并重算完成度
pub async fn update_vendor(
    req: HttpRequest,
    vendor_id: SafeVendorIdI64,
    body: web::Json<UpdateVendorRequest>,
) -> ActixResult<HttpResponse> {
    VENDOR_SERVICE
        .update_vendor(vendor_id.0, body.into_inner(), &req)
        .await
}

// 提交表单
pub async fn submit_vendor(
    req: HttpRequest,
    vendor_id: SafeVendorIdI64,
) -> ActixResult<HttpResponse> {
    VENDOR_SERVICE.submit_vendor(vendor_id.0, &req).await
}

// 上传资质文件并挂接到条目
pub async fn upload_document_file(
    req: HttpRequest,
    vendor_id: SafeVendorIdI64,
    document_id: SafeDocumentIdI64,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    VENDOR_SERVICE
        .upload_document_file(vendor_id.0, document_id.0, payload, &req)
        .await
}
// 配置路由
//
// 供应商表单及其下挂的评审分配、板块评分、成绩子资源都在这一个 scope 里，
// 评审分配和评分的处理函数在同级路由模块中。
pub fn configure_vendor_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/vendors")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列表 - 所有登录用户可访问（业务层按角色过滤）
                    .route(web::get().to(list_vendors))
                    // 创建草稿 - 供应商（管理员可代建）
                    .route(
                        web::post()
                            .to(create_vendor)
                            .wrap(middlewares::RequireRole::new_any(UserRole::vendor_roles())),
                    ),
            )
            .service(web::resource("/my").route(web::get().to(get_my_vendor)))
            .service(
                web::resource("/{vendor_id}")
                    // 详情 - 归属校验在业务层
                    .route(web::get().to(get_vendor))
                    // 保存 - 仅表单归属人，业务层校验
                    .route(web::put().to(update_vendor)),
            )
            .service(web::resource("/{vendor_id}/submit").route(web::post().to(submit_vendor)))
            // 评审分配 - 仅管理员
            .service(
                web::resource("/{vendor_id}/assignments")
                    .route(web::post().to(super::assignments::create_assignment))
                    .route(web::get().to(super::assignments::list_assignments))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            )
            .service(
                web::resource("/{vendor_id}/assignments/{assignment_id}")
                    .route(web::delete().to(super::assignments::delete_assignment))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            )
            // 板块评分 - 仅评审员和管理员，提交有限流
            .service(
                web::resource("/{vendor_id}/sections/{section}/ratings")
                    .route(
                        web::put()
                            .to(super::ratings::submit_ratings)
                            .wrap(RateLimit::rating_submit()),
                    )
                    .route(web::get().to(super::ratings::get_section_ratings))
                    .wrap(middlewares::RequireRole::new_any(UserRole::reviewer_roles())),
            )
            // 成绩快照
            .service(
                web::resource("/{vendor_id}/grade").route(web::get().to(super::grades::get_grade)),
            )
            .service(
                web::resource("/{vendor_id}/grade/recompute")
                    .route(web::post().to(super::grades::recompute_grade))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            )
            .service(
                web::resource("/{vendor_id}/grade/override")
                    .route(web::put().to(super::grades::override_grade))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            )
            // 资质文件上传 - 归属校验在业务层
            .service(
                web::resource("/{vendor_id}/documents/{document_id}/files")
                    .route(web::post().to(upload_document_file))
                    .wrap(RateLimit::file_upload()),
            ),
    );
}
