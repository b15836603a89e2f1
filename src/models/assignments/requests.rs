use crate::models::common::pagination::PaginationQuery;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

/// 创建作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub class_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub subject: String,
    pub file_url: Option<String>,
    pub deadline: DateTime<Utc>, // ISO 8601 格式，如 "2026-09-01T12:00:00Z"
}

/// 更新作业请求
///
/// 所有字段可缺省，缺省即保留原值；file_url 同样如此，
/// 不会因为请求里没带而被清空。教师归属不可更新。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub file_url: Option<String>,
    pub deadline: Option<DateTime<Utc>>, // ISO 8601 格式
}

/// 提交作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct SubmitAssignmentRequest {
    pub file_url: String,
    pub remarks: Option<String>,
}

/// 作业列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub class_id: Option<i64>,
    pub created_by: Option<i64>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct AssignmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_id: Option<i64>,
    pub created_by: Option<i64>,
}

// 用于存储层的提交数据（submitted_at 由存储层写入）
#[derive(Debug, Clone)]
pub struct UpsertSubmissionData {
    pub file_url: String,
    pub remarks: Option<String>,
}
