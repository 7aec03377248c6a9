use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::models::ApiResponse;
use crate::utils::jwt;

use super::AuthService;

pub async fn handle_logout(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 令牌对应的用户缓存一并失效
    if let Some(cache) = request.app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>() {
        let token = request
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(|s| s.to_string())
            .or_else(|| jwt::JwtUtils::extract_access_token_from_cookie(request));

        if let Some(token) = token {
            cache.get_ref().remove(&format!("user:{token}")).await;
        }
    }

    // 清空两个会话 cookie
    Ok(HttpResponse::Ok()
        .cookie(jwt::JwtUtils::create_empty_access_token_cookie())
        .cookie(jwt::JwtUtils::create_empty_refresh_token_cookie())
        .json(ApiResponse::success_empty("Logged out")))
}
