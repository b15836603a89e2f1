use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 作业实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    // 唯一 ID
    pub id: i64,
    // 投放班级 ID
    pub class_id: i64,
    // 创建教师 ID（创建后不可变更）
    pub teacher_id: i64,
    // 作业标题
    pub title: String,
    // 作业描述
    pub description: Option<String>,
    // 科目（自由文本）
    pub subject: String,
    // 教师提供的资料链接
    pub file_url: Option<String>,
    // 截止时间
    pub deadline: chrono::DateTime<chrono::Utc>,
    // 提交门户手动开关，独立于截止时间
    pub is_portal_open: bool,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 提交记录
//
// `student_id` 始终存在；`student` 仅在教师/管理员视图下填充。
// 比较归属时必须经由 policy::submission_student_id 取规范 ID，
// 不要直接读其中任何一个字段。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<SubmissionStudent>,
    pub file_url: String,
    pub remarks: Option<String>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

// 提交记录中附带的学生信息（教师视图）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct SubmissionStudent {
    pub id: i64,
    pub name: String,
    pub email: String,
}

// 提交门户状态（读取时派生，不落库）
//
// ClosedManual 可通过开关恢复；ClosedExpired 随时间产生，
// 只有显式修改截止时间才可能回到 Open。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum PortalStatus {
    Open,
    ClosedManual,
    ClosedExpired,
}

impl std::fmt::Display for PortalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortalStatus::Open => write!(f, "open"),
            PortalStatus::ClosedManual => write!(f, "closed_manual"),
            PortalStatus::ClosedExpired => write!(f, "closed_expired"),
        }
    }
}
