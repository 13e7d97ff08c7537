// ============================================================================
// VIEW SLOTS - Capacidad de vista inyectada
// ============================================================================
// El controlador no conoce el DOM: escribe contenido y visibilidad en slots
// con nombre. DomView los mapea a elementos reales; los tests los graban.
// ============================================================================

/// Regiones de la página con identidad estable
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Slot {
    BasicInfo,
    DeliveryInfo,
    PaymentInfo,
    ItemsInfo,
    Loading,
    Error,
    OrderPanel,
}

/// Superficie de render del ciclo de búsqueda
pub trait LookupView {
    /// Valor actual del campo de identificador de orden
    fn order_id_value(&self) -> String;

    /// Reemplazar el contenido de un slot (reemplazo completo, nunca append)
    fn set_content(&self, slot: Slot, content: &str);

    /// Mostrar u ocultar un slot
    fn set_visible(&self, slot: Slot, visible: bool);
}
