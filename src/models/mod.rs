//! 数据模型定义
//!
//! 按资源划分子模块（entities / requests / responses），
//! 公共部分为统一响应结构、错误码与分页。

pub mod assignments;
pub mod classes;
pub mod common;
pub mod users;

pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 业务错误码
///
/// HTTP 状态只表达大类，具体业务含义由 code 区分，
/// 客户端据此渲染不同的提示文案（如"截止时间已过"与"无权操作"）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 40000,
    ValidationError = 40001,
    Unauthorized = 40100,
    Forbidden = 40300,
    NotFound = 40400,
    RateLimitExceeded = 42900,
    InternalServerError = 50000,

    // 资源错误
    AssignmentNotFound = 40401,
    ClassNotFound = 40402,
    UserNotFound = 40403,
    SubmissionNotFound = 40404,

    // 业务规则错误
    SubmissionPortalClosed = 40010,
    UpstreamFailure = 50010,
}

/// 程序启动时间，用于运行时长统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::SubmissionPortalClosed as i32, 40010);
        assert_eq!(ErrorCode::AssignmentNotFound as i32, 40401);
    }

    #[test]
    fn test_portal_closed_distinct_from_forbidden() {
        // 客户端依赖错误码区分"门户关闭"与"权限不足"
        assert_ne!(
            ErrorCode::SubmissionPortalClosed as i32,
            ErrorCode::Forbidden as i32
        );
    }
}
