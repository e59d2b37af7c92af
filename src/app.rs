use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::{JwtError, TokenService};
use crate::config::{AppConfig, SecurityConfig};
use crate::database::Stores;
use crate::handlers::{protected, public};
use crate::middleware::require_account;
use crate::services::{
    AccountService, FishingReportService, LandingService, ReferenceService, TackleService, UserService,
};

/// Everything a handler can reach, assembled once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tokens: Arc<TokenService>,
    pub stores: Stores,
    pub accounts: AccountService,
    pub users: UserService,
    pub tackle: TackleService,
    pub reference: ReferenceService,
    pub reports: FishingReportService,
    pub landings: LandingService,
}

impl AppState {
    pub fn new(config: AppConfig, stores: Stores) -> Result<Self, JwtError> {
        let tokens = TokenService::new(&config.security)?;
        Ok(Self {
            accounts: AccountService::new(&stores),
            users: UserService::new(&stores),
            tackle: TackleService::new(&stores),
            reference: ReferenceService::new(&stores),
            reports: FishingReportService::new(&stores),
            landings: LandingService::new(&stores),
            config: Arc::new(config),
            tokens: Arc::new(tokens),
            stores,
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();

    let protected = Router::new()
        .merge(tackle_routes())
        .merge(fishing_report_routes())
        .merge(landing_routes())
        .merge(user_routes())
        .merge(reference_routes())
        .route_layer(from_fn_with_state(state.clone(), require_account));

    let mut app = Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .route("/api/auth/token", post(public::token_post))
        .merge(account_routes())
        // Bearer token required
        .merge(protected)
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    if config.security.enable_cors {
        app = app.layer(cors_layer(&config.security));
    }
    if config.api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    app.with_state(state)
}

fn account_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/accounts",
            get(public::account_list).post(public::account_post),
        )
        .route(
            "/api/accounts/:id",
            get(public::account_get)
                .put(public::account_put)
                .delete(public::account_delete),
        )
}

fn tackle_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/tackle",
            get(protected::tackle_list).post(protected::tackle_post),
        )
        .route(
            "/api/tackle/:id",
            get(protected::tackle_get)
                .put(protected::tackle_put)
                .delete(protected::tackle_delete),
        )
}

fn fishing_report_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/fishingreports",
            get(protected::report_list).post(protected::report_post),
        )
        .route(
            "/api/fishingreports/:id",
            get(protected::report_get)
                .put(protected::report_put)
                .delete(protected::report_delete),
        )
}

fn landing_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/fishingreports/:id/landings",
            get(protected::landing_list).post(protected::landing_post),
        )
        .route(
            "/api/fishingreports/:id/landings/:landing_id",
            get(protected::landing_get)
                .put(protected::landing_put)
                .delete(protected::landing_delete),
        )
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(protected::user_list).post(protected::user_post))
        .route(
            "/api/users/:id",
            get(protected::user_get)
                .put(protected::user_put)
                .delete(protected::user_delete),
        )
}

fn reference_routes() -> Router<AppState> {
    Router::new()
        .route("/api/species", get(protected::species_list))
        .route("/api/species/:id", get(protected::species_get))
        .route("/api/locations", get(protected::location_list))
        .route("/api/locations/:id", get(protected::location_get))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .expose_headers([header::LOCATION])
}
