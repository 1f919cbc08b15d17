use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        board_game::{
            self, delete_board_game, get_board_games, update_board_game, BOARD_GAMES_PATH,
        },
        domain::{self, delete_domain, get_domains, update_domain, DOMAINS_PATH},
        error::{self, error_test},
        mechanic::{self, delete_mechanic, get_mechanics, update_mechanic, MECHANICS_PATH},
    },
    state::AppState,
};

/// OpenAPI document generated from the handler annotations.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "bglist",
        description = "Board game catalog with paginated, filtered and sorted listings"
    ),
    paths(
        board_game::get_board_games,
        board_game::update_board_game,
        board_game::delete_board_game,
        domain::get_domains,
        domain::update_domain,
        domain::delete_domain,
        mechanic::get_mechanics,
        mechanic::update_mechanic,
        mechanic::delete_mechanic,
        error::error_test
    )
)]
pub struct ApiDoc;

/// `Cache-Control` for listing reads; clients and proxies may reuse them for a minute.
pub const LISTING_CACHE_CONTROL: &str = "public, max-age=60";
/// `Cache-Control` for writes and the error endpoint.
pub const NO_STORE: &str = "no-store";

fn cache_control(value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(header::CACHE_CONTROL, HeaderValue::from_static(value))
}

/// Catalog routes without state or middleware.
///
/// Listing reads are publicly cacheable, every other route is marked `no-store`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            BOARD_GAMES_PATH,
            get(get_board_games)
                .layer(cache_control(LISTING_CACHE_CONTROL))
                .merge(
                    post(update_board_game)
                        .delete(delete_board_game)
                        .layer(cache_control(NO_STORE)),
                ),
        )
        .route(
            DOMAINS_PATH,
            get(get_domains)
                .layer(cache_control(LISTING_CACHE_CONTROL))
                .merge(
                    post(update_domain)
                        .delete(delete_domain)
                        .layer(cache_control(NO_STORE)),
                ),
        )
        .route(
            MECHANICS_PATH,
            get(get_mechanics)
                .layer(cache_control(LISTING_CACHE_CONTROL))
                .merge(
                    post(update_mechanic)
                        .delete(delete_mechanic)
                        .layer(cache_control(NO_STORE)),
                ),
        )
        .route(
            "/error/test",
            get(error_test).layer(cache_control(NO_STORE)),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/openapi.json", ApiDoc::openapi()))
}

/// Complete application: routes, request tracing, permissive CORS and state.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
