use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级实体（班级目录，本服务只读）
//
// 作业的投放对象按班级划分；学生通过 `User::class_id` 归属班级。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct Class {
    pub id: i64,
    pub class_name: String,
    pub teacher_id: Option<i64>,
    pub room_number: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
