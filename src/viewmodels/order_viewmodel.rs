// ============================================================================
// ORDER VIEWMODEL - LÓGICA DE BÚSQUEDA DE ORDEN
// ============================================================================
// Lógica de negocio del ciclo de búsqueda - sin DOM.
// Devuelve valores, el controlador (App) actualiza la vista.
// ============================================================================

use crate::models::Order;
use crate::services::{ApiClient, ApiError};

/// Mensaje fijo para un identificador vacío (validación local, sin request)
pub const EMPTY_ORDER_ID_MESSAGE: &str = "Please enter an Order ID";

/// Validar el identificador ingresado por el usuario.
/// Recorta espacios; vacío después del recorte es un error de validación.
pub fn validate_order_id(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(EMPTY_ORDER_ID_MESSAGE)
    } else {
        Ok(trimmed.to_string())
    }
}

/// ViewModel de búsqueda de orden - SOLO lógica de negocio
pub struct OrderViewModel {
    api_client: ApiClient,
}

impl OrderViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Obtener una orden ya validada del backend
    pub async fn fetch_order(&self, order_uid: &str) -> Result<Order, ApiError> {
        log::info!("🔍 Buscando orden: {}", order_uid);

        match self.api_client.get_order(order_uid).await {
            Ok(order) => Ok(order),
            Err(e) => {
                log::error!("❌ Error buscando orden {}: {}", order_uid, e);
                Err(e)
            }
        }
    }
}
