use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use vehicle_registration::config::{DatabaseConfig, EnvironmentConfig};
use vehicle_registration::database::{create_all_tables, create_pool};
use vehicle_registration::models::menu::MenuItem;
use vehicle_registration::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 Vehicle Registration System");
    info!("================================================");
    info!("🌍 Entorno: {}", config.environment);
    info!("🔐 Esquema de contraseñas: {}", config.password_scheme);

    // Inicializar base de datos
    let db_config = DatabaseConfig::from_env(config.database_url.clone())?;
    let pool = match create_pool(&db_config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {:#}", e);
            return Err(e);
        }
    };

    if config.bootstrap_schema {
        create_all_tables(&pool).await?;
    } else {
        info!("⏭️ Bootstrap del schema desactivado");
    }

    let bind_addr = config.server_url();
    let app = create_router(AppState::new(pool, config));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("🌐 Servidor iniciando en http://{}", listener.local_addr()?);
    info!("🔍 Endpoints públicos:");
    info!("   GET  /health");
    info!("   POST /api/auth/login");
    info!("   POST /api/auth/signup");
    info!("📋 Menú (requiere sesión):");
    for item in MenuItem::ALL {
        info!("   {:<4} {:<18} {}", item.method(), item.path(), item.label());
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
