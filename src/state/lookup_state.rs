// ============================================================================
// LOOKUP STATE - Estado etiquetado del ciclo de búsqueda
// ============================================================================
// Un solo enum en lugar de flags de visibilidad independientes: las tres
// superficies (loading / error / panel) nunca pueden ser visibles a la vez.
// ============================================================================

use crate::models::Order;

/// Estado de un ciclo de búsqueda de orden
#[derive(Clone, Debug, PartialEq)]
pub enum LookupState {
    /// Estado inicial: nada visible
    Idle,
    /// Request en vuelo: solo el indicador de carga visible
    Loading,
    /// Orden obtenida y renderizada: solo el panel visible
    Success(Order),
    /// Ciclo terminado en error: solo el mensaje visible
    Failed(String),
}

/// Plan de visibilidad derivado del estado: qué superficie se muestra
#[derive(Clone, Debug, PartialEq)]
pub struct SurfacePlan {
    pub loading: bool,
    pub error: Option<String>,
    pub order_panel: bool,
}

impl LookupState {
    /// Calcular el plan de superficies para este estado.
    /// Invariante: como máximo una superficie visible.
    pub fn surface_plan(&self) -> SurfacePlan {
        match self {
            LookupState::Idle => SurfacePlan {
                loading: false,
                error: None,
                order_panel: false,
            },
            LookupState::Loading => SurfacePlan {
                loading: true,
                error: None,
                order_panel: false,
            },
            LookupState::Success(_) => SurfacePlan {
                loading: false,
                error: None,
                order_panel: true,
            },
            LookupState::Failed(message) => SurfacePlan {
                loading: false,
                error: Some(message.clone()),
                order_panel: false,
            },
        }
    }
}
