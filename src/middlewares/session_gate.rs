/*!
 * 会话门卫中间件
 *
 * 页面路由的访问控制。与 API 路由的 RequireJWT/RequireRole（返回 401/403 JSON）不同，
 * 页面导航失败时浏览器需要的是重定向：
 *
 * - 路径在公开白名单内（登录页、未授权页、认证接口、静态资源）→ 直接放行
 * - 无会话或会话无效 → 302 重定向到 /login
 * - 会话有效但角色与路径前缀不匹配 → 302 重定向到 /unauthorized
 * - 其余情况原样放行，无其他副作用
 *
 * 角色与路径的对应关系是一张静态映射表，不是状态机：
 * /admin → admin，/teacher → teacher，/student → student。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    HttpResponse,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::debug;

use crate::models::users::entities::UserRole;
use crate::utils::jwt::JwtUtils;

const LOGIN_PATH: &str = "/login";
const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// 无需会话即可访问的页面
const PUBLIC_PATHS: &[&str] = &["/login", "/unauthorized", "/favicon.ico"];

/// 无需会话即可访问的路径前缀（认证接口、前端静态资源）
const PUBLIC_PREFIXES: &[&str] = &["/api/v1/auth", "/assets"];

/// 角色与路径前缀的静态映射表
const ROLE_PREFIXES: &[(&str, UserRole)] = &[
    ("/admin", UserRole::Admin),
    ("/teacher", UserRole::Teacher),
    ("/student", UserRole::Student),
];

/// 路径是否在公开白名单内
fn is_public_path(path: &str) -> bool {
    if PUBLIC_PATHS.contains(&path) {
        return true;
    }
    if PUBLIC_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return true;
    }
    // 带扩展名的请求视为静态资源
    path.rsplit('/').next().is_some_and(|seg| seg.contains('.'))
}

/// 查表：路径顶层段要求的角色
fn required_role(path: &str) -> Option<&'static UserRole> {
    ROLE_PREFIXES.iter().find_map(|(prefix, role)| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
            .then_some(role)
    })
}

/// 从请求中读取会话角色：Authorization 头优先，其次 access_token cookie
fn session_role(req: &ServiceRequest) -> Option<UserRole> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.to_string())
        .or_else(|| JwtUtils::extract_access_token_from_cookie(req.request()))?;

    let claims = JwtUtils::verify_access_token(&token).ok()?;
    claims.role.parse::<UserRole>().ok()
}

fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

#[derive(Clone)]
pub struct SessionGate;

impl<S, B> Transform<S, ServiceRequest> for SessionGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionGateMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct SessionGateMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();

        Box::pin(async move {
            let path = req.path().to_string();

            // 白名单路径直接放行
            if is_public_path(&path) {
                let res = srv.call(req).await?.map_into_left_body();
                return Ok(res);
            }

            // 会话校验
            let role = match session_role(&req) {
                Some(role) => role,
                None => {
                    debug!("No valid session for page {}, redirecting to login", path);
                    return Ok(
                        req.into_response(redirect_to(LOGIN_PATH).map_into_right_body())
                    );
                }
            };

            // 角色与路径前缀查表比对
            if let Some(required) = required_role(&path)
                && *required != role
            {
                debug!(
                    "Session role {} does not match {} for page {}, redirecting",
                    role, required, path
                );
                return Ok(
                    req.into_response(redirect_to(UNAUTHORIZED_PATH).map_into_right_body())
                );
            }

            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse as Response, test, web};

    #[::core::prelude::v1::test]
    fn test_public_paths() {
        assert!(is_public_path("/login"));
        assert!(is_public_path("/unauthorized"));
        assert!(is_public_path("/api/v1/auth/login"));
        assert!(is_public_path("/assets/app.js"));
        assert!(is_public_path("/logo.svg"));
        assert!(!is_public_path("/admin"));
        assert!(!is_public_path("/student/grades"));
        assert!(!is_public_path("/"));
    }

    #[::core::prelude::v1::test]
    fn test_role_table() {
        assert_eq!(required_role("/admin"), Some(&UserRole::Admin));
        assert_eq!(required_role("/admin/users"), Some(&UserRole::Admin));
        assert_eq!(required_role("/teacher/classes"), Some(&UserRole::Teacher));
        assert_eq!(required_role("/student"), Some(&UserRole::Student));
        // 前缀必须按路径段匹配
        assert_eq!(required_role("/administrator"), None);
        assert_eq!(required_role("/"), None);
    }

    async fn page() -> Response {
        Response::Ok().body("page")
    }

    macro_rules! gated_app {
        () => {
            test::init_service(App::new().service(
                web::scope("").wrap(SessionGate).route(
                    "/{tail:.*}",
                    web::get().to(page),
                ),
            ))
            .await
        };
    }

    #[actix_web::test]
    async fn test_missing_session_redirects_to_login() {
        let app = gated_app!();

        let req = test::TestRequest::get().uri("/admin/users").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), LOGIN_PATH);
    }

    #[actix_web::test]
    async fn test_wrong_role_redirects_to_unauthorized() {
        let app = gated_app!();

        let token = JwtUtils::generate_access_token(1, "student").expect("token");
        let req = test::TestRequest::get()
            .uri("/admin/users")
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            UNAUTHORIZED_PATH
        );
    }

    #[actix_web::test]
    async fn test_matching_role_passes() {
        let app = gated_app!();

        let token = JwtUtils::generate_access_token(1, "admin").expect("token");
        let req = test::TestRequest::get()
            .uri("/admin/users")
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_public_page_passes_without_session() {
        let app = gated_app!();

        let req = test::TestRequest::get().uri("/login").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
