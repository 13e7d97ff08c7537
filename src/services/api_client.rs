// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use std::fmt;

use gloo_net::http::Request;

use crate::models::Order;
use crate::utils::constants::BACKEND_URL;

/// Error de una consulta de orden. Distingue "no encontrada" (cualquier
/// status no exitoso, sin mirar el código) de fallos de red o de parseo.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    NotFound { status: u16 },
    Network(String),
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Mensaje fijo: no se expone detalle del servidor
            ApiError::NotFound { .. } => write!(f, "Order not found"),
            // Red y parseo se muestran tal cual, como la página original
            ApiError::Network(msg) => write!(f, "{}", msg),
            ApiError::Parse(msg) => write!(f, "{}", msg),
        }
    }
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    #[cfg(test)]
    fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// URL del recurso de una orden
    pub fn order_url(&self, order_uid: &str) -> String {
        format!("{}/order/{}", self.base_url, order_uid)
    }

    /// Obtener una orden por su identificador
    pub async fn get_order(&self, order_uid: &str) -> Result<Order, ApiError> {
        let url = self.order_url(order_uid);

        log::info!("📦 Consultando orden: {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            log::warn!("⚠️ Orden no encontrada: HTTP {}", response.status());
            return Err(ApiError::NotFound {
                status: response.status(),
            });
        }

        let order = response
            .json::<Order>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        log::info!(
            "✅ Orden obtenida: {} ({} artículos)",
            order.order_uid,
            order.items.len()
        );

        Ok(order)
    }
}
