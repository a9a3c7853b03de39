use crate::application::SessionController;
use crate::domain::error::{AppError, Result};
use crate::domain::language::LANGUAGES;
use crate::interfaces::state::AppState;
use crate::interfaces::view::SessionView;
use actix_cors::Cors;
use actix_web::{
    delete,
    dev::{RequestHead, Server},
    get,
    http::header::{self, ContentType, HeaderValue},
    post, put, web, App, HttpResponse, HttpServer,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

const INDEX_HTML: &str = include_str!("index.html");

pub struct HttpState {
    pub app_state: Arc<AppState>,
}

#[derive(Deserialize)]
pub struct LanguageRequest {
    pub language: String,
}

#[derive(Deserialize)]
pub struct SourceTextRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct SessionCreated {
    pub id: Uuid,
    pub view: SessionView,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(err: &AppError) -> HttpResponse {
    let body = ErrorBody {
        error: err.to_string(),
    };
    match err {
        AppError::NotFound(_) => HttpResponse::NotFound().json(body),
        AppError::ValidationError(_) => HttpResponse::BadRequest().json(body),
        _ => {
            warn!(error = %err, "Request failed");
            HttpResponse::InternalServerError().json(body)
        }
    }
}

/// Run `apply` against the session's controller and answer with its view.
fn with_session<F>(data: &HttpState, id: &Uuid, apply: F) -> HttpResponse
where
    F: FnOnce(&mut SessionController) -> Result<()>,
{
    let session = match data.app_state.sessions.get(id) {
        Ok(session) => session,
        Err(e) => return error_response(&e),
    };

    let mut controller = session.lock();
    match apply(&mut *controller) {
        Ok(()) => HttpResponse::Ok().json(SessionView::from_state(controller.state())),
        Err(e) => error_response(&e),
    }
}

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

#[get("/languages")]
async fn languages() -> HttpResponse {
    HttpResponse::Ok().json(&LANGUAGES)
}

#[post("/sessions")]
async fn create_session(data: web::Data<HttpState>) -> HttpResponse {
    let (id, session) = data.app_state.sessions.create();
    let view = SessionView::from_state(&session.snapshot());
    HttpResponse::Created().json(SessionCreated { id, view })
}

#[get("/sessions/{id}")]
async fn get_session(data: web::Data<HttpState>, id: web::Path<Uuid>) -> HttpResponse {
    with_session(&data, &id, |_| Ok(()))
}

#[delete("/sessions/{id}")]
async fn delete_session(data: web::Data<HttpState>, id: web::Path<Uuid>) -> HttpResponse {
    if data.app_state.sessions.remove(&id) {
        HttpResponse::NoContent().finish()
    } else {
        error_response(&AppError::NotFound(format!("Session {}", id)))
    }
}

#[put("/sessions/{id}/source-language")]
async fn set_source_language(
    data: web::Data<HttpState>,
    id: web::Path<Uuid>,
    req: web::Json<LanguageRequest>,
) -> HttpResponse {
    with_session(&data, &id, |controller| {
        controller.set_source_language(&req.language)
    })
}

#[put("/sessions/{id}/target-language")]
async fn set_target_language(
    data: web::Data<HttpState>,
    id: web::Path<Uuid>,
    req: web::Json<LanguageRequest>,
) -> HttpResponse {
    with_session(&data, &id, |controller| {
        controller.set_target_language(&req.language)
    })
}

#[post("/sessions/{id}/swap")]
async fn swap_languages(data: web::Data<HttpState>, id: web::Path<Uuid>) -> HttpResponse {
    with_session(&data, &id, |controller| {
        controller.swap_languages();
        Ok(())
    })
}

#[put("/sessions/{id}/source-text")]
async fn update_source_text(
    data: web::Data<HttpState>,
    id: web::Path<Uuid>,
    req: web::Json<SourceTextRequest>,
) -> HttpResponse {
    with_session(&data, &id, |controller| {
        controller.update_source_text(&req.text);
        Ok(())
    })
}

/// Always answers 200 once the session exists; a failed translation shows
/// up in the view's output pane.
#[post("/sessions/{id}/translate")]
async fn translate(data: web::Data<HttpState>, id: web::Path<Uuid>) -> HttpResponse {
    let session = match data.app_state.sessions.get(&id) {
        Ok(session) => session,
        Err(e) => return error_response(&e),
    };

    let state = session
        .request_translate(&data.app_state.translate_use_case)
        .await;

    HttpResponse::Ok().json(SessionView::from_state(&state))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(
        web::scope("/api")
            .service(languages)
            .service(create_session)
            .service(get_session)
            .service(delete_session)
            .service(set_source_language)
            .service(set_target_language)
            .service(swap_languages)
            .service(update_source_text)
            .service(translate),
    );
}

/// Cross-origin callers are rejected; only the page served from this host may
/// drive sessions.
fn is_same_origin(origin: &HeaderValue, req: &RequestHead) -> bool {
    let Some(host) = req.headers().get(header::HOST).and_then(|h| h.to_str().ok()) else {
        return false;
    };
    origin
        .to_str()
        .ok()
        .and_then(|origin| {
            origin
                .strip_prefix("http://")
                .or_else(|| origin.strip_prefix("https://"))
        })
        .is_some_and(|authority| authority.eq_ignore_ascii_case(host))
}

pub fn same_origin_cors() -> Cors {
    Cors::default()
        .allowed_origin_fn(is_same_origin)
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_header(header::CONTENT_TYPE)
}

pub fn start_server(app_state: Arc<AppState>, bind: (String, u16)) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState { app_state });

    info!(host = %bind.0, port = bind.1, "Starting HTTP server");

    let server = HttpServer::new(move || {
        App::new()
            .wrap(same_origin_cors())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind(bind)?
    .run();

    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{SessionRegistry, TranslateUseCase};
    use crate::domain::error::SERVICE_UNAVAILABLE_MESSAGE;
    use crate::domain::llm_config::LLMConfig;
    use crate::infrastructure::llm_clients::testing::StubClient;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};

    fn http_state(client: Arc<StubClient>) -> web::Data<HttpState> {
        web::Data::new(HttpState {
            app_state: Arc::new(AppState {
                translate_use_case: TranslateUseCase::new(
                    client,
                    LLMConfig::for_translation("http://unused", "key"),
                ),
                sessions: SessionRegistry::new(),
            }),
        })
    }

    macro_rules! app {
        ($client:expr) => {
            test::init_service(
                App::new()
                    .app_data(http_state($client))
                    .configure(configure),
            )
            .await
        };
    }

    macro_rules! create {
        ($app:expr) => {{
            let req = test::TestRequest::post().uri("/api/sessions").to_request();
            let resp = test::call_service($app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
            let body: Value = test::read_body_json(resp).await;
            body["id"].as_str().unwrap().to_string()
        }};
    }

    #[actix_web::test]
    async fn test_index_serves_page() {
        let app = app!(Arc::new(StubClient::ok("unused")));
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_languages_endpoint() {
        let app = app!(Arc::new(StubClient::ok("unused")));
        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api/languages").to_request(),
        )
        .await;
        assert_eq!(body.as_array().unwrap().len(), 3);
        assert_eq!(body[1]["identifier"], "Kurdish (Badini)");
    }

    #[actix_web::test]
    async fn test_translate_round_trip() {
        let client = Arc::new(StubClient::ok("مرحبا"));
        let app = app!(client.clone());
        let id = create!(&app);

        for (path, body) in [
            ("source-language", json!({ "language": "English" })),
            ("target-language", json!({ "language": "Arabic" })),
            ("source-text", json!({ "text": "Hello" })),
        ] {
            let req = test::TestRequest::put()
                .uri(&format!("/api/sessions/{}/{}", id, path))
                .set_json(body)
                .to_request();
            assert!(test::call_service(&app, req).await.status().is_success());
        }

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/translate", id))
            .to_request();
        let view: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(view["output"], json!({ "kind": "translated", "text": "مرحبا" }));
        assert_eq!(view["is_loading"], false);
        assert_eq!(view["phase"], "Succeeded");
        assert_eq!(client.calls(), 1);

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/swap", id))
            .to_request();
        let view: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(view["source_language"], "Arabic");
        assert_eq!(view["target_language"], "English");
        assert_eq!(view["source_text"], "مرحبا");
        assert_eq!(view["output"], json!({ "kind": "translated", "text": "Hello" }));
    }

    #[actix_web::test]
    async fn test_translate_failure_is_reported_in_view() {
        let app = app!(Arc::new(StubClient::failing("503 upstream")));
        let id = create!(&app);

        let req = test::TestRequest::put()
            .uri(&format!("/api/sessions/{}/source-text", id))
            .set_json(json!({ "text": "Hello" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/translate", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let view: Value = test::read_body_json(resp).await;
        assert_eq!(
            view["output"],
            json!({ "kind": "error", "text": SERVICE_UNAVAILABLE_MESSAGE })
        );
        assert_eq!(view["translate_enabled"], true);
    }

    #[actix_web::test]
    async fn test_blank_translate_is_noop() {
        let client = Arc::new(StubClient::ok("unused"));
        let app = app!(client.clone());
        let id = create!(&app);

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/translate", id))
            .to_request();
        let view: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(view["output"], json!({ "kind": "placeholder" }));
        assert_eq!(view["translate_enabled"], false);
        assert_eq!(client.calls(), 0);
    }

    #[actix_web::test]
    async fn test_error_statuses() {
        let app = app!(Arc::new(StubClient::ok("unused")));

        let req = test::TestRequest::get()
            .uri(&format!("/api/sessions/{}", Uuid::new_v4()))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let id = create!(&app);
        let req = test::TestRequest::put()
            .uri(&format!("/api/sessions/{}/target-language", id))
            .set_json(json!({ "language": "Klingon" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/sessions/{}", id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/sessions/{}", id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_cross_origin_requests_are_rejected() {
        let client = Arc::new(StubClient::ok("unused"));
        let app = test::init_service(
            App::new()
                .wrap(same_origin_cors())
                .app_data(http_state(client.clone()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/sessions")
            .insert_header((header::HOST, "127.0.0.1:3001"))
            .insert_header((header::ORIGIN, "https://elsewhere.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/sessions")
            .insert_header((header::HOST, "127.0.0.1:3001"))
            .insert_header((header::ORIGIN, "http://127.0.0.1:3001"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::get().uri("/api/languages").to_request();
        assert!(test::call_service(&app, req).await.status().is_success());
    }

    #[actix_web::test]
    async fn test_page_survives_back_forward_cache() {
        let app = app!(Arc::new(StubClient::ok("unused")));
        let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request()).await;
        let page = std::str::from_utf8(&body).unwrap();

        assert!(page.contains("!event.persisted"));
        assert!(page.contains("addEventListener('pageshow'"));
        assert!(page.contains("res.status === 404"));
    }

    #[actix_web::test]
    async fn test_page_serializes_session_mutations() {
        let app = app!(Arc::new(StubClient::ok("unused")));
        let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request()).await;
        let page = std::str::from_utf8(&body).unwrap();

        assert!(page.contains("queue = queue.then("));
        assert!(page.contains("await flushText()"));
        assert!(page.contains("if (ticket !== latest) return;"));
    }

    #[actix_web::test]
    async fn test_deleted_session_answers_not_found_for_mutations() {
        let app = app!(Arc::new(StubClient::ok("unused")));
        let id = create!(&app);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/sessions/{}", id))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/sessions/{}/source-text", id))
            .set_json(json!({ "text": "Hello" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
