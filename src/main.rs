use article_gateway::application::ports::{ContentResolverPort, WebspaceResolverPort};
use article_gateway::application::services::ApplicationServices;
use article_gateway::config::AppConfig;
use article_gateway::domain::article::{ArticleFilterRepository, ArticleReadRepository, Locale};
use article_gateway::infrastructure::{
    content::RevisionContentResolver, database, repositories::PostgresArticleRepository,
    webspace::HostMappingWebspaceResolver,
};
use article_gateway::presentation::http::{routes::build_router, state::HttpState};
use article_gateway::presentation::render::ArticleListRenderer;
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let default_locale = Locale::new(config.default_locale())?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let article_repo = Arc::new(PostgresArticleRepository::new(pool));
    let read_repo: Arc<dyn ArticleReadRepository> = article_repo.clone();
    let filter_repo: Arc<dyn ArticleFilterRepository> = article_repo;

    let webspace_resolver: Arc<WebspaceResolverPort> = Arc::new(
        HostMappingWebspaceResolver::new(config.webspace_hosts().to_vec()),
    );
    let content_resolver: Arc<ContentResolverPort> = Arc::new(RevisionContentResolver);

    let services = Arc::new(ApplicationServices::new(
        read_repo,
        filter_repo,
        webspace_resolver,
        content_resolver,
        default_locale,
    ));

    let renderer = Arc::new(ArticleListRenderer::new()?);

    let state = HttpState { services, renderer };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
