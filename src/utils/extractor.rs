//! 路径参数安全提取器
//!
//! 直接使用 `web::Path<i64>` 时，非数字 ID 会以默认错误页返回；
//! 这里统一转换为带错误码的 JSON 响应。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 从路径 `{id}` 提取正整数 ID
///
/// 非法或缺失的 ID 返回 400，而不是 404/500。
pub struct SafeIDI64(pub i64);

fn parse_id(req: &HttpRequest) -> Result<i64, actix_web::Error> {
    let raw = req.match_info().get("id").unwrap_or_default();
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("无效的 ID 参数: '{raw}'"),
            ));
            Err(InternalError::from_response("invalid id", response).into())
        }
    }
}

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(parse_id(req).map(SafeIDI64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_valid_id() {
        let req = TestRequest::default().param("id", "42").to_http_request();
        let id = SafeIDI64::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(id.0, 42);
    }

    #[actix_web::test]
    async fn test_non_numeric_id_rejected() {
        let req = TestRequest::default().param("id", "abc").to_http_request();
        assert!(
            SafeIDI64::from_request(&req, &mut Payload::None)
                .await
                .is_err()
        );
    }

    #[actix_web::test]
    async fn test_non_positive_id_rejected() {
        for raw in ["0", "-1"] {
            let req = TestRequest::default().param("id", raw).to_http_request();
            assert!(
                SafeIDI64::from_request(&req, &mut Payload::None)
                    .await
                    .is_err()
            );
        }
    }
}
