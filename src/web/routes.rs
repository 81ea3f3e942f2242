use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::{HttpResponse, Responder, get, web};

use crate::web::AppState;

#[get("/healthz")]
pub async fn healthz() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// The site content the server was started with, as JSON.
#[get("/api/content")]
pub async fn site_content(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.content.as_ref())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(healthz).service(site_content);
}

/// Client bundle. Paths without a matching file get `index.html` so the
/// client router can resolve them.
pub fn spa_files(state: &AppState) -> Files {
    let index = state.index_html();

    Files::new("/", state.site_root.clone())
        .index_file("index.html")
        .prefer_utf8(true)
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(&index).await?;
                let res = file.into_response(&req);
                Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
            }
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::middleware::SecurityHeaders;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use aras_web::content::SiteContent;

    fn site_state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<!DOCTYPE html><title>ARAS</title>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('aras');").unwrap();

        let content = SiteContent::embedded().unwrap();
        let state = AppState::new(content, dir.path().to_path_buf());
        (dir, state)
    }

    #[actix_web::test]
    async fn test_healthz_success() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::get().uri("/healthz").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_content_endpoint_serves_site_content() {
        let (_dir, state) = site_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/content").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body["contact"]["whatsapp_number"],
            state.content.contact.whatsapp_number.as_str()
        );
        assert_eq!(body["hero"].as_array().map(Vec::len), Some(state.content.hero.len()));
    }

    #[actix_web::test]
    async fn test_client_routes_fall_back_to_index() {
        let (_dir, state) = site_state();
        let app = test::init_service(
            App::new()
                .configure(configure)
                .service(spa_files(&state)),
        )
        .await;

        let req = test::TestRequest::get().uri("/forum/42").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert!(body.starts_with(b"<!DOCTYPE html>"));

        let req = test::TestRequest::get().uri("/app.js").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(&body[..], b"console.log('aras');");
    }

    #[actix_web::test]
    async fn test_security_headers_present() {
        let app = test::init_service(App::new().wrap(SecurityHeaders).configure(configure)).await;

        let req = test::TestRequest::get().uri("/healthz").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers().get("x-frame-options").unwrap(), "DENY");
        assert!(
            res.headers()
                .get("content-security-policy")
                .and_then(|v| v.to_str().ok())
                .is_some_and(|csp| csp.contains("'wasm-unsafe-eval'"))
        );
    }
}
