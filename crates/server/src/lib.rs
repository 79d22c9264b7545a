use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::ApiError;
pub use state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root))
        // Link endpoints sit at the root for frontend-widget compatibility.
        .route("/create_link_token", post(routes::link::create_link_token))
        .route(
            "/exchange_public_token",
            post(routes::link::exchange_public_token),
        )
        .route("/transactions", get(routes::link::transactions))
        .route("/api/simulator/simulate", post(routes::simulator::simulate))
        .route("/api/smart-pick/analyze", post(routes::smart_pick::analyze))
        .route(
            "/api/learning/recommendations",
            get(routes::learning::recommendations),
        )
        .route(
            "/api/cards",
            get(routes::cards::list).post(routes::cards::create),
        )
        .route("/api/cards/summary", get(routes::cards::summary))
        .route(
            "/api/cards/{card_id}",
            put(routes::cards::update).delete(routes::cards::remove),
        )
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:5173"),
            HeaderValue::from_static("http://127.0.0.1:5173"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
