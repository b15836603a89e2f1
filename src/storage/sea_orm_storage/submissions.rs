//! 提交存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, SMSystemError};
use crate::models::assignments::entities::{Submission, SubmissionStudent};
use crate::models::assignments::requests::UpsertSubmissionData;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 新增或原位覆盖提交
    ///
    /// 同一学生并发重复提交只会命中唯一索引
    /// (assignment_id, student_id) 的冲突分支，单条 SQL 内完成
    /// 覆盖，不存在读-改-写窗口。
    pub async fn upsert_submission_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
        data: UpsertSubmissionData,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            assignment_id: Set(assignment_id),
            student_id: Set(student_id),
            file_url: Set(data.file_url),
            remarks: Set(data.remarks),
            submitted_at: Set(now),
            ..Default::default()
        };

        Submissions::insert(model)
            .on_conflict(
                OnConflict::columns([Column::AssignmentId, Column::StudentId])
                    .update_columns([Column::FileUrl, Column::Remarks, Column::SubmittedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("写入提交失败: {e}")))?;

        self.get_submission_impl(assignment_id, student_id)
            .await?
            .ok_or_else(|| SMSystemError::database_operation("提交写入后读取失败"))
    }

    /// 获取某学生对某作业的提交
    pub async fn get_submission_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 列出作业的全部提交，附学生信息（教师视图）
    pub async fn list_submissions_with_students_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Submission>> {
        let rows = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_asc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询提交列表失败: {e}")))?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        // 批量查询学生信息
        let student_ids: Vec<i64> = rows
            .iter()
            .map(|s| s.student_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        let students: HashMap<i64, SubmissionStudent> = Users::find()
            .filter(UserColumn::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询学生信息失败: {e}")))?
            .into_iter()
            .map(|u| {
                (
                    u.id,
                    SubmissionStudent {
                        id: u.id,
                        name: u.name,
                        email: u.email,
                    },
                )
            })
            .collect();

        Ok(rows
            .into_iter()
            .map(|m| {
                let student = students.get(&m.student_id).cloned();
                let mut submission = m.into_submission();
                submission.student = student;
                submission
            })
            .collect())
    }
}
