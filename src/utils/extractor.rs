//! 路径参数安全提取器
//!
//! 在进入 handler 之前完成路径参数的解析与合法性校验，
//! 非法参数直接以统一的 ApiResponse 400 响应返回。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::grading::Section;
use crate::models::{ApiResponse, ErrorCode};

// 令牌形如 "{unix秒}-{uuid}"
static FILE_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\d{1,20}-[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
    )
    .expect("Invalid file token regex")
});

fn bad_request(message: &str) -> actix_web::Error {
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    actix_web::error::InternalError::from_response(message.to_string(), response).into()
}

/// 生成从路径段解析正整数 ID 的提取器
macro_rules! define_safe_id_extractor {
    ($(
        $name:ident($param:literal)
    ),* $(,)?) => {
        $(
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                    let parsed = req
                        .match_info()
                        .get($param)
                        .and_then(|raw| raw.parse::<i64>().ok())
                        .filter(|id| *id > 0);
                    ready(match parsed {
                        Some(id) => Ok($name(id)),
                        None => Err(bad_request(concat!("无效的路径参数: ", $param))),
                    })
                }
            }
        )*
    };
}

define_safe_id_extractor! {
    SafeIDI64("id"),
    SafeVendorIdI64("vendor_id"),
    SafeAssignmentIdI64("assignment_id"),
    SafeDocumentIdI64("document_id"),
}

/// 评分分部路径段，只接受 site / procurement / financial
pub struct SafeSection(pub Section);

impl FromRequest for SafeSection {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = req
            .match_info()
            .get("section")
            .and_then(|raw| raw.parse::<Section>().ok());
        ready(match parsed {
            Some(section) => Ok(SafeSection(section)),
            None => Err(bad_request(
                "无效的评分分部, 支持: site, procurement, financial",
            )),
        })
    }
}

/// 文件下载令牌，必须是 UUID 格式
pub struct SafeFileToken(pub String);

impl FromRequest for SafeFileToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = req
            .match_info()
            .get("token")
            .filter(|raw| FILE_TOKEN_RE.is_match(raw))
            .map(|raw| raw.to_string());
        ready(match token {
            Some(token) => Ok(SafeFileToken(token)),
            None => Err(bad_request("无效的文件令牌")),
        })
    }
}
