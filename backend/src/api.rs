//! Web API Module
//!
//! JSON endpoints plus a minimal HTML form for the Career Guidance service.
//! No authentication (single local user).

use crate::config::AppConfig;
use crate::guidance::{
    catalog, history, matcher, render,
    render::Notice,
    service,
    store::{CareerStore, SqliteStore},
    AcademicScore, GuidanceError, GuidanceResult, Interest, Skill, Submission,
};
use actix_cors::Cors;
use actix_web::{error, web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================
// APPLICATION STATE
// ============================================================

/// Shared application state
pub struct AppState {
    pub store: SqliteStore,
}

impl AppState {
    /// Open the database and seed the catalog if it is empty
    pub fn open(config: &AppConfig) -> GuidanceResult<Self> {
        let store = SqliteStore::open(&config.db_path)?;
        Self::with_store(store)
    }

    pub fn with_store(store: SqliteStore) -> GuidanceResult<Self> {
        catalog::seed_catalog(&store)?;
        Ok(Self { store })
    }
}

// ============================================================
// API REQUEST/RESPONSE TYPES
// ============================================================

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub interest: Interest,
    pub skill: Skill,
    pub score: AcademicScore,
}

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

/// Fields posted by the HTML form
#[derive(Deserialize)]
pub struct RecommendForm {
    pub name: String,
    pub interest: String,
    pub skill: String,
    pub score: String,
}

impl RecommendForm {
    fn into_submission(self) -> GuidanceResult<Submission> {
        // A blank name is reported ahead of any other field error
        if self.name.trim().is_empty() {
            return Err(GuidanceError::EmptyName);
        }

        let raw_score = self.score.trim();
        let score = raw_score
            .parse::<i64>()
            .map_err(|_| GuidanceError::InvalidScore(raw_score.to_string()))
            .and_then(AcademicScore::new)?;

        Ok(Submission {
            name: self.name,
            interest: Interest::parse(&self.interest)?,
            skill: Skill::parse(&self.skill)?,
            score,
        })
    }
}

#[derive(Serialize)]
pub struct OptionsResponse {
    pub interests: Vec<&'static str>,
    pub skills: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: &str) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.to_string()),
        }
    }
}

/// Map a guidance error to its HTTP response
fn error_response(err: &GuidanceError) -> HttpResponse {
    let body = ApiResponse::<()>::error(&err.to_string());
    match err {
        GuidanceError::NoMatch => HttpResponse::NotFound().json(body),
        e if e.is_invalid_input() => HttpResponse::BadRequest().json(body),
        _ => {
            log::error!("Request failed: {}", err);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

// ============================================================
// API HANDLERS
// ============================================================

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "Career Guidance API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// The choices offered for interest and skill
async fn get_options() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success(OptionsResponse {
        interests: Interest::ALL.iter().map(|i| i.as_str()).collect(),
        skills: Skill::ALL.iter().map(|s| s.as_str()).collect(),
    }))
}

/// The whole catalog in tie-break order
async fn get_careers(data: web::Data<Arc<AppState>>) -> impl Responder {
    match data.store.all_careers() {
        Ok(careers) => HttpResponse::Ok().json(ApiResponse::success(careers)),
        Err(e) => error_response(&e),
    }
}

/// Score every career for a triple without recording anything
async fn score_preview(
    data: web::Data<Arc<AppState>>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    match data.store.all_careers() {
        Ok(careers) => {
            let ranked = matcher::rank_catalog(&careers, req.interest, req.skill, req.score);
            HttpResponse::Ok().json(ApiResponse::success(ranked))
        }
        Err(e) => error_response(&e),
    }
}

/// Submit inputs and get a recommendation
async fn recommend(
    data: web::Data<Arc<AppState>>,
    req: web::Json<Submission>,
) -> impl Responder {
    match service::submit(&data.store, &req) {
        Ok(rec) => HttpResponse::Ok().json(ApiResponse::success(rec)),
        Err(e) => error_response(&e),
    }
}

/// Recent submissions, newest first
async fn get_history(
    data: web::Data<Arc<AppState>>,
    query: web::Query<HistoryQuery>,
) -> impl Responder {
    let limit = query.limit.unwrap_or(history::DEFAULT_HISTORY_LIMIT);
    match history::recent_history(&data.store, limit) {
        Ok(entries) => HttpResponse::Ok().json(ApiResponse::success(entries)),
        Err(e) => error_response(&e),
    }
}

/// The input form
async fn index() -> impl Responder {
    html(render::form_page(None, None))
}

/// Form submission, answered with the result card
async fn recommend_form(
    data: web::Data<Arc<AppState>>,
    form: web::Form<RecommendForm>,
) -> impl Responder {
    let outcome = form
        .into_inner()
        .into_submission()
        .and_then(|submission| service::submit(&data.store, &submission));

    match outcome {
        Ok(rec) => {
            let card = render::result_card(&rec);
            html(render::form_page(None, Some(&card)))
        }
        Err(GuidanceError::EmptyName) => {
            let msg = GuidanceError::EmptyName.to_string();
            html(render::form_page(Some(Notice::Warning(&msg)), None))
        }
        Err(e) => {
            let msg = e.to_string();
            let page = render::form_page(Some(Notice::Error(&msg)), None);
            if e.is_invalid_input() || matches!(e, GuidanceError::NoMatch) {
                html(page)
            } else {
                log::error!("Form submission failed: {}", e);
                HttpResponse::InternalServerError()
                    .content_type("text/html; charset=utf-8")
                    .body(page)
            }
        }
    }
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

// ============================================================
// SERVER CONFIGURATION
// ============================================================

/// Register routes and the error envelopes for extractor failures
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        error::InternalError::from_response(err, bad_request_envelope(&message)).into()
    });
    let query_config = web::QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        error::InternalError::from_response(err, bad_request_envelope(&message)).into()
    });
    let form_config = web::FormConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        let page = render::form_page(Some(Notice::Error(&message)), None);
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest()
                .content_type("text/html; charset=utf-8")
                .body(page),
        )
        .into()
    });

    cfg.app_data(json_config)
        .app_data(query_config)
        .app_data(form_config)
        .route("/", web::get().to(index))
        .route("/recommend", web::post().to(recommend_form))
        .route("/health", web::get().to(health_check))
        .route("/api/options", web::get().to(get_options))
        .route("/api/careers", web::get().to(get_careers))
        .route("/api/careers/scores", web::post().to(score_preview))
        .route("/api/recommend", web::post().to(recommend))
        .route("/api/history", web::get().to(get_history));
}

fn bad_request_envelope(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<()>::error(message))
}

/// Configure and run the API server
pub async fn run_server(config: AppConfig, state: AppState) -> std::io::Result<()> {
    let state = Arc::new(state);

    log::info!("Career Guidance API starting at http://{}:{}", config.host, config.port);
    log::info!("Database: {}", config.db_path.display());
    println!("📚 API Endpoints:");
    println!("   GET  /                    - Input form");
    println!("   POST /recommend           - Form submission (HTML card)");
    println!("   GET  /api/options         - Interests and skills");
    println!("   GET  /api/careers         - Career catalog");
    println!("   POST /api/careers/scores  - Score preview");
    println!("   POST /api/recommend       - Get recommendation");
    println!("   GET  /api/history         - Recent submissions");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .configure(configure)
    })
    .workers(config.workers)
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
