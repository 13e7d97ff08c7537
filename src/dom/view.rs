// ============================================================================
// DOM VIEW - LookupView sobre los IDs estables de la página
// ============================================================================
// Implementación real de la capacidad de vista: cada slot es un elemento
// con ID fijo (los mismos IDs de la página original del order-service).
// ============================================================================

use web_sys::Element;

use crate::dom::{get_element_by_id, get_input_by_id, set_display, set_inner_html, set_text_content};
use crate::views::{LookupView, Slot};

/// ID del campo de identificador de orden
pub const ORDER_ID_INPUT: &str = "orderId";
/// ID del botón de búsqueda
pub const SEARCH_BUTTON: &str = "searchBtn";

const ID_BASIC_INFO: &str = "basicInfo";
const ID_DELIVERY_INFO: &str = "deliveryInfo";
const ID_PAYMENT_INFO: &str = "paymentInfo";
const ID_ITEMS_INFO: &str = "itemsInfo";
const ID_LOADING: &str = "loading";
const ID_ERROR: &str = "error";
const ID_ORDER_PANEL: &str = "orderInfo";

/// Vista DOM real de la página de búsqueda
#[derive(Clone)]
pub struct DomView;

impl DomView {
    pub fn new() -> Self {
        Self
    }

    fn element_id(slot: Slot) -> &'static str {
        match slot {
            Slot::BasicInfo => ID_BASIC_INFO,
            Slot::DeliveryInfo => ID_DELIVERY_INFO,
            Slot::PaymentInfo => ID_PAYMENT_INFO,
            Slot::ItemsInfo => ID_ITEMS_INFO,
            Slot::Loading => ID_LOADING,
            Slot::Error => ID_ERROR,
            Slot::OrderPanel => ID_ORDER_PANEL,
        }
    }

    fn element_for(slot: Slot) -> Option<Element> {
        let id = Self::element_id(slot);
        let element = get_element_by_id(id);
        if element.is_none() {
            log::error!("❌ [VIEW] Elemento #{} no encontrado", id);
        }
        element
    }
}

impl LookupView for DomView {
    fn order_id_value(&self) -> String {
        match get_input_by_id(ORDER_ID_INPUT) {
            Some(input) => input.value(),
            None => {
                log::error!("❌ [VIEW] Input #{} no encontrado", ORDER_ID_INPUT);
                String::new()
            }
        }
    }

    fn set_content(&self, slot: Slot, content: &str) {
        if let Some(element) = Self::element_for(slot) {
            // El mensaje de error es texto plano; las regiones del panel son HTML
            if slot == Slot::Error {
                set_text_content(&element, content);
            } else {
                set_inner_html(&element, content);
            }
        }
    }

    fn set_visible(&self, slot: Slot, visible: bool) {
        if let Some(element) = Self::element_for(slot) {
            if let Err(e) = set_display(&element, visible) {
                log::error!("❌ [VIEW] Error cambiando visibilidad de {:?}: {:?}", slot, e);
            }
        }
    }
}
