use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::responses::{AssignmentCreator, AssignmentDetail};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::assignments::policy;

pub async fn get_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 获取当前用户信息
    let caller = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => {
            // 可见性：学生只能查看本班作业
            if caller.role == UserRole::Student && caller.class_id != Some(assignment.class_id) {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "该作业不属于您所在的班级，无权查看",
                )));
            }

            // 获取创建者信息
            let creator = match storage.get_user_by_id(assignment.teacher_id).await {
                Ok(Some(user)) => Some(AssignmentCreator {
                    id: user.id,
                    name: user.name,
                    email: user.email,
                }),
                _ => None,
            };

            let portal = policy::portal_info(&assignment, chrono::Utc::now());

            // 提交列表：教师/管理员看到全部提交，学生只带自己的提交
            let (submissions, my_submission) = match caller.role {
                UserRole::Teacher | UserRole::Admin => {
                    match storage.list_submissions_with_students(assignment_id).await {
                        Ok(subs) => (subs, None),
                        Err(e) => {
                            return Ok(HttpResponse::InternalServerError().json(
                                ApiResponse::error_empty(
                                    ErrorCode::InternalServerError,
                                    format!("查询提交列表失败: {e}"),
                                ),
                            ));
                        }
                    }
                }
                UserRole::Student => match storage.get_submission(assignment_id, caller.id).await
                {
                    Ok(my) => (Vec::new(), my),
                    Err(e) => {
                        return Ok(HttpResponse::InternalServerError().json(
                            ApiResponse::error_empty(
                                ErrorCode::InternalServerError,
                                format!("查询提交失败: {e}"),
                            ),
                        ));
                    }
                },
                UserRole::Visitor => (Vec::new(), None),
            };

            let detail = AssignmentDetail {
                assignment,
                creator,
                portal,
                submissions,
                my_submission,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "查询成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "作业不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询作业失败: {e}"),
            )),
        ),
    }
}
