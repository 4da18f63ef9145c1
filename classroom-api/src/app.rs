/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use classroom_api::{app::AppState, config::Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let state = AppState::new(config);
/// let app = classroom_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, middleware::basic_auth::require_order_admin};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use classroom_shared::{
    auth::CredentialPair,
    models::{order::Order, product::Product, profile::UserProfile, task::Task, user::User},
    store::{InMemoryRepository, Repository},
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Every collection sits behind an `Arc<dyn Repository<_>>`, so cloning is
/// cheap and the storage backing can be replaced without touching handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<Config>,

    /// Credentials accepted on order creation
    pub order_admin: Arc<CredentialPair>,

    /// Static users
    pub users: Arc<dyn Repository<User>>,

    /// Static product catalog
    pub products: Arc<dyn Repository<Product>>,

    pub tasks: Arc<dyn Repository<Task>>,

    pub orders: Arc<dyn Repository<Order>>,

    pub profiles: Arc<dyn Repository<UserProfile>>,
}

impl AppState {
    /// Creates application state with in-memory collections
    ///
    /// Users and products are seeded; tasks, orders and profiles start empty.
    pub fn new(config: Config) -> Self {
        Self {
            order_admin: Arc::new(config.order_admin()),
            config: Arc::new(config),
            users: Arc::new(InMemoryRepository::seeded(User::seed())),
            products: Arc::new(InMemoryRepository::seeded(Product::catalog())),
            tasks: Arc::new(InMemoryRepository::new()),
            orders: Arc::new(InMemoryRepository::new()),
            profiles: Arc::new(InMemoryRepository::new()),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /ping                          # Liveness, plain text "pong"
/// ├── GET  /health                        # Health JSON
/// ├── GET  /users                         # Paginated static users
/// ├── /tasks
/// │   ├── GET    /                        # List
/// │   ├── POST   /                        # Batch create
/// │   ├── DELETE /                        # Batch delete by ids
/// │   ├── GET    /:id
/// │   └── DELETE /:id
/// ├── GET  /products                      # Filtered catalog
/// ├── /orders
/// │   ├── GET  /                          # Paginated list
/// │   └── POST /                          # Create (Basic auth)
/// └── /profiles
///     ├── POST /                          # Batch create
///     ├── GET  /:id
///     ├── PUT  /:id/personalInfo
///     ├── PUT  /:id/address
///     └── PUT  /:id/preferences
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Basic authentication (order creation only)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let order_routes = get(routes::orders::list_orders).merge(
        post(routes::orders::create_order).route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_order_admin,
        )),
    );

    let cors = if state.config.cors_permissive() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .route("/ping", get(routes::health::ping))
        .route("/health", get(routes::health::health_check))
        .route("/users", get(routes::users::list_users))
        .route(
            "/tasks",
            get(routes::tasks::list_tasks)
                .post(routes::tasks::create_tasks)
                .delete(routes::tasks::delete_tasks),
        )
        .route(
            "/tasks/:id",
            get(routes::tasks::get_task).delete(routes::tasks::delete_task),
        )
        .route("/products", get(routes::products::list_products))
        .route("/orders", order_routes)
        .route("/profiles", post(routes::profiles::create_profiles))
        .route("/profiles/:id", get(routes::profiles::get_profile))
        .route(
            "/profiles/:id/personalInfo",
            put(routes::profiles::update_personal_info),
        )
        .route("/profiles/:id/address", put(routes::profiles::update_address))
        .route(
            "/profiles/:id/preferences",
            put(routes::profiles::update_preferences),
        )
        .fallback(routes::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
