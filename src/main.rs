use anyhow::Result;
use axum::Router;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use automoveis_api::config::EnvironmentConfig;
use automoveis_api::database::DatabaseConnection;
use automoveis_api::middleware::cors::cors_middleware;
use automoveis_api::routes;
use automoveis_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 API de Inventário de Automóveis");
    info!("==================================");

    // Inicializar banco de dados
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Erro conectando ao banco de dados: {}", e);
            return Err(anyhow::anyhow!("Erro de banco de dados: {}", e));
        }
    };

    if let Err(e) = db_connection.run_migrations().await {
        error!("❌ Erro ao executar migrações: {}", e);
        return Err(e);
    }

    let pool = db_connection.pool().clone();
    let config = EnvironmentConfig::from_env();
    let addr: SocketAddr = config.server_addr().parse()?;

    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .nest(
            "/automoveis",
            routes::automovel_routes::create_automovel_router(),
        )
        .layer(cors_middleware())
        .with_state(app_state);

    info!("🌐 Servidor iniciando em http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("   GET    /automoveis - Listar automóveis");
    info!("   GET    /automoveis/:id - Buscar automóvel por id");
    info!("   POST   /automoveis - Criar automóvel");
    info!("   PUT    /automoveis/:id - Atualizar automóvel");
    info!("   DELETE /automoveis/:id - Deletar automóvel");
    info!("   POST   /automoveis/search - Buscar com filtros");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Sinal de desligamento graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C recebido, desligando servidor...");
        },
        _ = terminate => {
            info!("🛑 Sinal de término recebido, desligando servidor...");
        },
    }
}
