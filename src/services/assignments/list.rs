use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::{AssignmentListParams, AssignmentListQuery};
use crate::models::assignments::responses::AssignmentListResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode, PaginationInfo};

pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    params: AssignmentListParams,
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

    let mut query = AssignmentListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        class_id: params.class_id,
        created_by: params.created_by,
    };

    // 学生只能看到本班作业；其余角色不过滤
    if caller.role == UserRole::Student {
        match caller.class_id {
            Some(class_id) => query.class_id = Some(class_id),
            None => {
                // 未分班的学生得到空列表，而不是报错
                let empty = AssignmentListResponse {
                    items: Vec::new(),
                    pagination: PaginationInfo {
                        page: params.pagination.page,
                        page_size: params.pagination.size,
                        total: 0,
                        total_pages: 0,
                    },
                };
                return Ok(
                    HttpResponse::Ok().json(ApiResponse::success(empty, "获取作业列表成功"))
                );
            }
        }
    }

    match storage
        .list_assignments_with_pagination(query, Some(caller.id))
        .await
    {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp, "获取作业列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取作业列表失败: {e}"),
            )),
        ),
    }
}
