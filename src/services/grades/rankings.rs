use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::grades::responses::RankingsResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_list_rankings(
    service: &GradeService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_rankings().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RankingsResponse { items },
            "排行榜获取成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询排行榜失败: {e}"),
            )),
        ),
    }
}
