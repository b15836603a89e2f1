use crate::models::assignments::entities::{Assignment, PortalStatus, Submission};
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 作业创建者信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentCreator {
    pub id: i64,
    pub name: String,
    pub email: String,
}

// 门户视图信息（供客户端倒计时与提交按钮禁用）
//
// seconds_remaining 仅用于展示；能否提交以 can_submit 为准。
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct PortalInfo {
    pub status: PortalStatus,
    pub can_submit: bool,
    pub seconds_remaining: Option<i64>,
}

// 列表项：作业 + 创建者 + 门户状态 + 当前用户自己的提交
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListItem {
    pub assignment: Assignment,
    pub creator: Option<AssignmentCreator>,
    pub portal: PortalInfo,
    pub my_submission: Option<Submission>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListResponse {
    pub items: Vec<AssignmentListItem>,
    pub pagination: PaginationInfo,
}

// 详情：教师/管理员可见全部提交；学生只带自己的提交
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentDetail {
    pub assignment: Assignment,
    pub creator: Option<AssignmentCreator>,
    pub portal: PortalInfo,
    pub submissions: Vec<Submission>,
    pub my_submission: Option<Submission>,
}
