use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::VendorService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::vendors::requests::{VendorListParams, VendorListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_list_vendors(
    service: &VendorService,
    query: VendorListParams,
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

    // 供应商账号只能看到自己的表单
    let owner_user_id = match current_user.role {
        UserRole::Vendor => Some(current_user.id),
        _ => None,
    };

    let list_query = VendorListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        status: query.status,
        search: query.search,
        owner_user_id,
    };

    match storage.list_vendors_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Vendor list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve vendor list: {e}"),
            )),
        ),
    }
}
