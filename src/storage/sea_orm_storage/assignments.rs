//! 作业存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions};
use crate::errors::{Result, SMSystemError};
use crate::models::{
    PaginationInfo,
    assignments::{
        entities::{Assignment, Submission},
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::{AssignmentCreator, AssignmentListItem, AssignmentListResponse},
    },
};
use crate::services::assignments::policy;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        teacher_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(req.class_id),
            teacher_id: Set(teacher_id),
            title: Set(req.title),
            description: Set(req.description),
            subject: Set(req.subject),
            file_url: Set(req.file_url),
            deadline: Set(req.deadline.timestamp()),
            is_portal_open: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 分页列出作业（按创建时间倒序）
    pub async fn list_assignments_with_pagination_impl(
        &self,
        query: AssignmentListQuery,
        current_user_id: Option<i64>,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Assignments::find();

        // 班级筛选
        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        // 创建者筛选
        if let Some(created_by) = query.created_by {
            select = select.filter(Column::TeacherId.eq(created_by));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询作业总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询作业页数失败: {e}")))?;

        let assignments: Vec<Assignment> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询作业列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_assignment())
            .collect();

        // 收集所有创建者 ID 并去重
        let creator_ids: Vec<i64> = assignments
            .iter()
            .map(|a| a.teacher_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        // 查询创建者信息
        let mut creator_map: HashMap<i64, AssignmentCreator> = HashMap::new();
        for creator_id in creator_ids {
            if let Ok(Some(user)) = self.get_user_by_id_impl(creator_id).await {
                creator_map.insert(
                    creator_id,
                    AssignmentCreator {
                        id: user.id,
                        name: user.name,
                        email: user.email,
                    },
                );
            }
        }

        // 查询当前用户自己的提交（如果提供了 current_user_id）
        let mut my_submission_map: HashMap<i64, Submission> = HashMap::new();
        if let Some(user_id) = current_user_id {
            let assignment_ids: Vec<i64> = assignments.iter().map(|a| a.id).collect();
            if !assignment_ids.is_empty() {
                let submissions = Submissions::find()
                    .filter(SubmissionColumn::AssignmentId.is_in(assignment_ids))
                    .filter(SubmissionColumn::StudentId.eq(user_id))
                    .all(&self.db)
                    .await
                    .map_err(|e| {
                        SMSystemError::database_operation(format!("查询用户提交失败: {e}"))
                    })?;

                // (assignment_id, student_id) 唯一，直接建映射
                for sub in submissions {
                    my_submission_map.insert(sub.assignment_id, sub.into_submission());
                }
            }
        }

        // 构造带 creator、portal 和 my_submission 的作业列表
        let now = chrono::Utc::now();
        let items: Vec<AssignmentListItem> = assignments
            .into_iter()
            .map(|assignment| {
                let creator = creator_map.get(&assignment.teacher_id).cloned();
                let my_submission = my_submission_map.remove(&assignment.id);
                let portal = policy::portal_info(&assignment, now);
                AssignmentListItem {
                    assignment,
                    creator,
                    portal,
                    my_submission,
                }
            })
            .collect();

        Ok(AssignmentListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新作业
    ///
    /// 逐字段合并：请求中缺省的字段保留原值，file_url 也不例外。
    /// is_portal_open 不在此处变更，开关门户是独立操作。
    pub async fn update_assignment_impl(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        // 先检查作业是否存在
        let existing = self.get_assignment_by_id_impl(assignment_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(assignment_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(subject) = update.subject {
            model.subject = Set(subject);
        }

        if let Some(file_url) = update.file_url {
            model.file_url = Set(Some(file_url));
        }

        if let Some(deadline) = update.deadline {
            model.deadline = Set(deadline.timestamp());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新作业失败: {e}")))?;

        self.get_assignment_by_id_impl(assignment_id).await
    }

    /// 删除作业（提交记录随之删除）
    pub async fn delete_assignment_impl(&self, assignment_id: i64) -> Result<bool> {
        // 先删除提交记录
        Submissions::delete_many()
            .filter(SubmissionColumn::AssignmentId.eq(assignment_id))
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除作业提交失败: {e}")))?;

        let result = Assignments::delete_by_id(assignment_id)
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 翻转提交门户开关
    pub async fn toggle_assignment_portal_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Option<Assignment>> {
        let model = Assignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询作业失败: {e}")))?;

        let Some(model) = model else {
            return Ok(None);
        };

        let active = ActiveModel {
            id: Set(assignment_id),
            is_portal_open: Set(!model.is_portal_open),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        active
            .update(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("切换作业门户失败: {e}")))?;

        self.get_assignment_by_id_impl(assignment_id).await
    }
}
