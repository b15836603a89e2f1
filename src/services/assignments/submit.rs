use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::entities::PortalStatus;
use crate::models::assignments::requests::{SubmitAssignmentRequest, UpsertSubmissionData};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::assignments::policy;
use crate::utils::validate;

pub async fn submit_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
    req: SubmitAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 获取当前用户信息（路由中间件已限定为学生角色）
    let caller = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 提交只存对象存储返回的 URL；上传失败的请求根本到不了这里
    if let Err(msg) = validate::validate_file_url(&req.file_url) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, msg)));
    }

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "作业不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    };

    // 只有作业投放班级的学生可以提交
    if caller.class_id != Some(assignment.class_id) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "该作业不属于您所在的班级，无法提交",
        )));
    }

    // 权威判定：门户开启且未过截止时间
    let now = chrono::Utc::now();
    if !policy::can_submit(&assignment, now) {
        let message = match policy::portal_status(&assignment, now) {
            PortalStatus::ClosedManual => "教师已关闭提交门户",
            _ => "截止时间已过，提交门户已关闭",
        };
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SubmissionPortalClosed,
            message,
        )));
    }

    // 原子 upsert：重复提交原位覆盖，不会产生第二条记录
    let data = UpsertSubmissionData {
        file_url: req.file_url,
        remarks: req.remarks,
    };
    match storage
        .upsert_submission(assignment_id, caller.id, data)
        .await
    {
        Ok(submission) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "作业提交成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("提交作业失败: {e}"),
            )),
        ),
    }
}
