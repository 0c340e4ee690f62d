use std::any::Any;

use crate::config::{CorsSettings, Settings};
use crate::docs::openapi::ApiDoc;
use crate::handlers::error::AppError;
use crate::service::Service;
use crate::{
    handlers,
    middleware::{metrics::record_metrics, trace_root::trace_root},
};
use axum::{
    http::{HeaderValue, Method},
    middleware::from_fn,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{instrument, warn};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

fn todo_routes() -> OpenApiRouter<Service> {
    OpenApiRouter::new()
        .route(
            "/",
            get(handlers::todo::get_all).post(handlers::todo::add),
        )
        .route(
            "/{id}",
            get(handlers::todo::get)
                .put(handlers::todo::update)
                .delete(handlers::todo::delete),
        )
}

fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let origins = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%origin, error = %e, "skipping invalid CORS origin");
                None
            }
        })
        .collect::<Vec<_>>();

    // Credentials rule out wildcard headers, so request headers are mirrored.
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Unexpected(detail).into_response()
}

#[instrument(name = "build_app", skip_all)]
pub fn build_app(service: Service, settings: &Settings) -> Router {
    let app_router = OpenApiRouter::new()
        .nest("/todos", todo_routes())
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(from_fn(record_metrics))
        .layer(from_fn(trace_root))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&settings.cors))
        .with_state(service);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(app_router)
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
