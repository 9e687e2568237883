//! Organization membership handler.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::is_organization_admin;
use quill_shared::ApiResponse;
use quill_shared::dto::AdminStatusResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/users/{user_id}/organizations/{name}/admin
///
/// Unknown organizations report `is_admin: false` rather than 404.
pub async fn admin_status(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
) -> AppResult<HttpResponse> {
    let (user_id, name) = path.into_inner();

    let organization = state.organizations.find_by_name(&name).await?;
    let members = state.organizations.list_member_organizations(user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(AdminStatusResponse {
        is_admin: is_organization_admin(&members, organization.as_ref()),
        organization: name,
    })))
}
