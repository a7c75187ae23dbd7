use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use gallipark_backend::config::EnvironmentConfig;
use gallipark_backend::database;
use gallipark_backend::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use gallipark_backend::routes;
use gallipark_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    let log_level = if config.is_production() {
        tracing::Level::INFO
    } else {
        tracing::Level::DEBUG
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("🅿️  GalliPark - Micro-Parking Marketplace API");
    info!("=============================================");

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());

    // CORS abierto en desarrollo, restringido a los orígenes configurados
    // en producción
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/booking", routes::booking_routes::create_booking_router())
        .nest("/api/spot", routes::spot_routes::create_spot_router())
        .nest("/api/event", routes::event_routes::create_event_router())
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("📑 Endpoints - Booking:");
    info!("   POST /api/booking - Admitir reserva (precio calculado en servidor)");
    info!("   GET  /api/booking/mine - Reservas del conductor");
    info!("   GET  /api/booking/:id - Obtener reserva");
    info!("   GET  /api/booking/:id/pricing-breakdown - Desglose de precios");
    info!("   POST /api/booking/:id/activate - Activar reserva");
    info!("   POST /api/booking/:id/complete - Completar reserva");
    info!("   POST /api/booking/:id/cancel - Cancelar reserva");
    info!("🅿️  Endpoints - Spot:");
    info!("   POST /api/spot - Crear spot");
    info!("   GET  /api/spot/mine - Spots del dueño");
    info!("   GET  /api/spot/:id - Obtener spot");
    info!("   POST /api/spot/:id/deactivate - Desactivar spot");
    info!("   GET  /api/spot/:id/events - Eventos activos del spot");
    info!("   GET  /api/spot/:id/availability - Disponibilidad por ventana");
    info!("🎉 Endpoints - Utsav Event:");
    info!("   POST /api/event - Declarar evento");
    info!("   GET  /api/event/:id - Obtener evento");

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

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "gallipark",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
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
