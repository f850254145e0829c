use std::net::SocketAddr;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::AuthError;
use crate::config::AppConfig;
use crate::handlers::{protected, public, tasks};
use crate::middleware::{request_id_middleware, require_bearer};
use crate::state::{AuthState, TaskState};

/// Algorithms service with fresh state built from `config`.
pub fn algorithms_app(config: &AppConfig) -> Result<Router, AuthError> {
    Ok(algorithms_router(AuthState::from_config(config)?, config))
}

/// Task service with fresh state built from `config`.
pub fn tasks_app(config: &AppConfig) -> Router {
    tasks_router(TaskState::from_config(config), config)
}

pub fn algorithms_router(state: AuthState, config: &AppConfig) -> Router {
    let protected_routes = Router::new()
        .route("/protected", get(protected::protected))
        .route("/bubble_sort", post(protected::bubble_sort))
        .route("/binary_search", post(protected::binary_search))
        .route("/filter_even", post(protected::filter_even))
        .route("/sum_elements", post(protected::sum_elements))
        .route("/max_value", post(protected::max_value))
        .route("/min_value", post(protected::min_value))
        .route("/average", post(protected::average))
        .route("/median", post(protected::median))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    let router = Router::new()
        // Public
        .route("/", get(public::algorithms_root))
        .route("/health", get(public::health))
        .route("/register", post(public::register))
        .route("/login", post(public::login))
        // Protected
        .merge(protected_routes)
        .with_state(state);

    with_global_layers(router, config)
}

pub fn tasks_router(state: TaskState, config: &AppConfig) -> Router {
    let router = Router::new()
        .route("/", get(public::tasks_root))
        .route("/health", get(public::health))
        .route(
            "/tasks/",
            get(tasks::list_tasks)
                .post(tasks::create_task)
                .delete(tasks::delete_all_tasks),
        )
        .route(
            "/tasks",
            get(tasks::list_tasks)
                .post(tasks::create_task)
                .delete(tasks::delete_all_tasks),
        )
        .route(
            "/tasks/:id",
            put(tasks::update_task)
                .get(tasks::get_task)
                .delete(tasks::delete_task),
        )
        .with_state(state);

    with_global_layers(router, config)
}

fn with_global_layers(router: Router, config: &AppConfig) -> Router {
    let mut router = router.layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    if config.api.enable_request_logging {
        router = router.layer(middleware::from_fn(request_id_middleware));
    }
    if config.security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve `app` until Ctrl-C or SIGTERM.
pub async fn serve(app: Router, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
