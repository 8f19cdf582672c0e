use rusty_lending_ddd::{
    adapters::memory::{
        InMemoryBookingStore, InMemoryCommentStore, InMemoryItemCatalog,
        InMemoryRequestBoard, InMemoryUserDirectory, MemoryDb,
    },
    adapters::postgres::{
        PostgresBookingStore, PostgresCommentStore, PostgresItemCatalog,
        PostgresRequestBoard, PostgresUserDirectory,
    },
    api::{handlers::AppState, router::create_router},
    application::ServiceDependencies,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// PostgreSQLバックエンドで依存関係を構築する
async fn postgres_dependencies(database_url: &str) -> ServiceDependencies {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .expect("Failed to connect to database");

    ServiceDependencies {
        user_directory: Arc::new(PostgresUserDirectory::new(pool.clone())),
        item_catalog: Arc::new(PostgresItemCatalog::new(pool.clone())),
        booking_store: Arc::new(PostgresBookingStore::new(pool.clone())),
        comment_store: Arc::new(PostgresCommentStore::new(pool.clone())),
        request_board: Arc::new(PostgresRequestBoard::new(pool)),
    }
}

/// インメモリバックエンドで依存関係を構築する
///
/// 全ポート実装が同じ`MemoryDb`を共有する。
fn memory_dependencies() -> ServiceDependencies {
    let db = Arc::new(MemoryDb::new());

    ServiceDependencies {
        user_directory: Arc::new(InMemoryUserDirectory::new(db.clone())),
        item_catalog: Arc::new(InMemoryItemCatalog::new(db.clone())),
        booking_store: Arc::new(InMemoryBookingStore::new(db.clone())),
        comment_store: Arc::new(InMemoryCommentStore::new(db.clone())),
        request_board: Arc::new(InMemoryRequestBoard::new(db)),
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_lending_ddd=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // バックエンドの選択：DATABASE_URLがあればPostgreSQL、なければインメモリ
    let service_deps = match std::env::var("DATABASE_URL") {
        Ok(database_url) => {
            tracing::info!("Using PostgreSQL backend");
            postgres_dependencies(&database_url).await
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, using in-memory backend");
            memory_dependencies()
        }
    };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
