//! 请求参数错误处理器
//!
//! 把 actix-web 的 JSON / 查询参数反序列化错误统一包装成
//! 带错误码的 `ApiResponse`，在 `main` 中通过
//! `JsonConfig::error_handler` / `QueryConfig::error_handler` 挂载。

use actix_web::{HttpRequest, HttpResponse, error};

use crate::models::{ApiResponse, ErrorCode};

pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let message = format!("无效的 JSON 请求体: {err}");
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        message,
    ));
    error::InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    let message = format!("无效的查询参数: {err}");
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        message,
    ));
    error::InternalError::from_response(err, response).into()
}
