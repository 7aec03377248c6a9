//! 路径参数提取器
//!
//! 对路径中的 `{id}` 做安全解析：必须是正整数，
//! 解析失败直接返回 400，避免每个处理函数重复校验。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 安全的 i64 路径 ID，取自 `{id}` 段
pub struct SafeIDI64(pub i64);

fn parse_path_id(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    match req.match_info().get(name).map(str::parse::<i64>) {
        Some(Ok(value)) if value > 0 => Ok(value),
        _ => {
            let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("Invalid {name} in path: must be a positive integer"),
            ));
            Err(InternalError::from_response("Invalid path ID", response).into())
        }
    }
}

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(parse_path_id(req, "id").map(SafeIDI64))
    }
}
