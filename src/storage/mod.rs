use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::{Assignment, Submission},
        requests::{
            AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest,
            UpsertSubmissionData,
        },
        responses::AssignmentListResponse,
    },
    classes::entities::Class,
    users::entities::User,
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户目录方法（只读，目录由外部身份系统维护）
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;

    /// 班级目录方法（只读）
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;

    /// 作业管理方法
    // 创建作业，teacher_id 取自请求者且此后不可变更
    async fn create_assignment(
        &self,
        teacher_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    // 分页列出作业，按创建时间倒序；提供 current_user_id 时
    // 同时带出该用户自己的提交
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
        current_user_id: Option<i64>,
    ) -> Result<AssignmentListResponse>;
    // 更新作业（逐字段合并，缺省字段保留原值）
    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 删除作业（连带删除全部提交）
    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool>;
    // 翻转提交门户开关
    async fn toggle_assignment_portal(&self, assignment_id: i64) -> Result<Option<Assignment>>;

    /// 提交管理方法
    // 新增或原位覆盖提交（按 (assignment_id, student_id) 原子 upsert）
    async fn upsert_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        data: UpsertSubmissionData,
    ) -> Result<Submission>;
    // 获取某学生对某作业的提交
    async fn get_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>>;
    // 列出作业的全部提交（附学生信息，教师视图）
    async fn list_submissions_with_students(&self, assignment_id: i64)
    -> Result<Vec<Submission>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
