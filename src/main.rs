use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use industry_directory::config::environment::EnvironmentConfig;
use industry_directory::controllers::auth_controller::AuthController;
use industry_directory::database::DatabaseConnection;
use industry_directory::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🏭 Industry Directory - API del directorio de empresas");
    info!("======================================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();
    let config = EnvironmentConfig::default();

    // Admin inicial desde el entorno (si está configurado)
    let auth_controller = AuthController::new(pool.clone());
    if let Err(e) = auth_controller.ensure_bootstrap_admin().await {
        error!("❌ Error creando el admin inicial: {}", e);
    }

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());
    let app = industry_directory::build_router(app_state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🏢 Directorio público:");
    info!("   GET  /api/companies - Buscar empresas");
    info!("   GET  /api/companies/:slug - Perfil de empresa");
    info!("   GET  /api/regions - Regiones con empresas");
    info!("   GET  /api/categories - Categorías de servicio");
    info!("📋 Formularios públicos:");
    info!("   POST /api/quote-requests - Solicitud de presupuesto");
    info!("   POST /api/quote-requests/general - Presupuesto general");
    info!("   POST /api/claim-requests - Reclamar una empresa");
    info!("🔑 Autenticación:");
    info!("   POST /api/company/login - Login empresa (token legacy)");
    info!("   GET  /api/company/verify - Verificar token de empresa");
    info!("   GET  /api/company/quote-requests - Presupuestos de la empresa");
    info!("   POST /api/admin/login - Login admin");
    info!("🛠  Superficie admin:");
    info!("   GET  /api/admin/claim-requests - Listar reclamaciones");
    info!("   POST /api/admin/claim-requests/:id/approve - Aprobar");
    info!("   POST /api/admin/claim-requests/:id/reject - Rechazar");
    info!("   GET  /api/admin/quote-requests - Listar presupuestos");
    info!("   POST /api/admin/companies - Crear empresa");
    info!("   PUT  /api/admin/companies/:id - Actualizar empresa");
    info!("   POST /api/admin/company-users/:id/deactivate - Desactivar usuario");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
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
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
