// ============================================================================
// APP - Controlador del ciclo de búsqueda de orden
// ============================================================================
// Orquesta un ciclo completo: trigger del usuario → validación → fetch →
// estado terminal (Success/Failed). Genérico sobre la vista para poder
// testearlo sin un display real.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{get_element_by_id, on_click, on_enter_key, DomView, ORDER_ID_INPUT, SEARCH_BUTTON};
use crate::models::Order;
use crate::services::ApiError;
use crate::state::LookupState;
use crate::viewmodels::order_viewmodel::validate_order_id;
use crate::viewmodels::OrderViewModel;
use crate::views::{render_order_panel, LookupView, Slot};

/// Aplicación principal: un controlador de búsqueda sobre una vista inyectada
pub struct App<V: LookupView + Clone + 'static> {
    view: V,
    viewmodel: Rc<OrderViewModel>,
    state: Rc<RefCell<LookupState>>,
    // Generación de request: solo la respuesta de la última request emitida
    // puede tocar la vista ("last request wins" determinista).
    generation: Rc<Cell<u64>>,
}

impl<V: LookupView + Clone + 'static> Clone for App<V> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            viewmodel: self.viewmodel.clone(),
            state: self.state.clone(),
            generation: self.generation.clone(),
        }
    }
}

impl App<DomView> {
    /// Montar la aplicación sobre la página: estado inicial + listeners
    pub fn mount() -> Result<Self, JsValue> {
        let app = App::new(DomView::new());
        app.apply_state(LookupState::Idle);
        app.bind_events()?;
        Ok(app)
    }

    /// Registrar los triggers de usuario: click en buscar y Enter en el input
    fn bind_events(&self) -> Result<(), JsValue> {
        let search_btn = get_element_by_id(SEARCH_BUTTON)
            .ok_or_else(|| JsValue::from_str("No #searchBtn element found"))?;
        {
            let app = self.clone();
            on_click(&search_btn, move |_| app.initiate_lookup())?;
        }

        let order_input = get_element_by_id(ORDER_ID_INPUT)
            .ok_or_else(|| JsValue::from_str("No #orderId element found"))?;
        {
            let app = self.clone();
            on_enter_key(&order_input, move || app.initiate_lookup())?;
        }

        Ok(())
    }
}

impl<V: LookupView + Clone + 'static> App<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            viewmodel: Rc::new(OrderViewModel::new()),
            state: Rc::new(RefCell::new(LookupState::Idle)),
            generation: Rc::new(Cell::new(0)),
        }
    }

    /// Iniciar un ciclo de búsqueda con el valor actual del input.
    /// Fire-and-forget: el resultado llega como mutaciones de la vista.
    pub fn initiate_lookup(&self) {
        let raw = self.view.order_id_value();

        // Cada acción del usuario invalida cualquier request en vuelo,
        // también cuando la validación corta sin emitir una nueva.
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let order_uid = match validate_order_id(&raw) {
            Ok(id) => id,
            Err(message) => {
                // Validación local: sin request, directo a Failed
                log::warn!("⚠️ Identificador vacío, no se emite request");
                self.apply_state(LookupState::Failed(message.to_string()));
                return;
            }
        };

        self.apply_state(LookupState::Loading);

        let app = self.clone();
        spawn_local(async move {
            let result = app.viewmodel.fetch_order(&order_uid).await;
            app.complete_lookup(generation, result);
        });
    }

    /// Aplicar el resultado de una request, descartando respuestas viejas
    pub(crate) fn complete_lookup(&self, generation: u64, result: Result<Order, ApiError>) {
        if generation != self.generation.get() {
            log::info!(
                "⏭️ Respuesta obsoleta descartada (gen {} != {})",
                generation,
                self.generation.get()
            );
            return;
        }

        match result {
            Ok(order) => self.finish_success(order),
            Err(e) => self.apply_state(LookupState::Failed(e.to_string())),
        }
    }

    /// Renderizar la orden y pasar a Success, o a Failed si el contenido
    /// es incoherente (RenderFault) - nunca una UI a medio pintar.
    fn finish_success(&self, order: Order) {
        match render_order_panel(&order) {
            Ok(panel) => {
                self.view.set_content(Slot::BasicInfo, &panel.basic_info);
                self.view.set_content(Slot::DeliveryInfo, &panel.delivery_info);
                self.view.set_content(Slot::PaymentInfo, &panel.payment_info);
                self.view.set_content(Slot::ItemsInfo, &panel.items_info);
                self.apply_state(LookupState::Success(order));
            }
            Err(fault) => {
                log::error!("❌ Orden no renderizable: {}", fault);
                self.apply_state(LookupState::Failed(fault.to_string()));
            }
        }
    }

    /// Único punto que cambia la visibilidad de las superficies.
    /// El SurfacePlan garantiza que loading/error/panel sean excluyentes.
    fn apply_state(&self, next: LookupState) {
        let plan = next.surface_plan();

        self.view.set_visible(Slot::Loading, plan.loading);

        match &plan.error {
            Some(message) => {
                self.view.set_content(Slot::Error, message);
                self.view.set_visible(Slot::Error, true);
            }
            None => self.view.set_visible(Slot::Error, false),
        }

        self.view.set_visible(Slot::OrderPanel, plan.order_panel);

        *self.state.borrow_mut() = next;
    }

    pub fn state(&self) -> LookupState {
        self.state.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewmodels::order_viewmodel::EMPTY_ORDER_ID_MESSAGE;
    use std::collections::HashMap;

    /// Vista que graba contenidos y visibilidad, sin DOM
    #[derive(Clone, Default)]
    struct RecordingView {
        input: Rc<RefCell<String>>,
        contents: Rc<RefCell<HashMap<Slot, String>>>,
        visible: Rc<RefCell<HashMap<Slot, bool>>>,
        loading_shown_count: Rc<Cell<u32>>,
    }

    impl RecordingView {
        fn with_input(value: &str) -> Self {
            let view = Self::default();
            *view.input.borrow_mut() = value.to_string();
            view
        }

        fn content(&self, slot: Slot) -> Option<String> {
            self.contents.borrow().get(&slot).cloned()
        }

        fn is_visible(&self, slot: Slot) -> bool {
            self.visible.borrow().get(&slot).copied().unwrap_or(false)
        }
    }

    impl LookupView for RecordingView {
        fn order_id_value(&self) -> String {
            self.input.borrow().clone()
        }

        fn set_content(&self, slot: Slot, content: &str) {
            self.contents.borrow_mut().insert(slot, content.to_string());
        }

        fn set_visible(&self, slot: Slot, visible: bool) {
            if slot == Slot::Loading && visible {
                self.loading_shown_count.set(self.loading_shown_count.get() + 1);
            }
            self.visible.borrow_mut().insert(slot, visible);
        }
    }

    fn test_order() -> Order {
        serde_json::from_value(serde_json::json!({
            "order_uid": "b563feb7b2b84b6test",
            "track_number": "WBILMTESTTRACK",
            "entry": "WBIL",
            "delivery": {
                "name": "Test Testov", "phone": "+9720000000", "zip": "2639809",
                "city": "Kiryat Mozkin", "address": "Ploshad Mira 15",
                "region": "Kraiot", "email": "test@gmail.com"
            },
            "payment": {
                "transaction": "b563feb7b2b84b6test", "currency": "USD",
                "provider": "wbpay", "amount": 1817, "bank": "alpha"
            },
            "items": [{
                "name": "Mascaras", "brand": "Vivienne Sabo",
                "price": 453, "total_price": 453
            }],
            "customer_id": "test",
            "date_created": "2021-11-26T06:22:19Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_input_fails_without_request() {
        let view = RecordingView::with_input("   ");
        let app = App::new(view.clone());

        app.initiate_lookup();

        // Directo a Failed, sin pasar por Loading y sin emitir request
        assert_eq!(
            app.state(),
            LookupState::Failed(EMPTY_ORDER_ID_MESSAGE.to_string())
        );
        assert_eq!(view.loading_shown_count.get(), 0);
        assert_eq!(view.content(Slot::Error).as_deref(), Some(EMPTY_ORDER_ID_MESSAGE));
        assert!(view.is_visible(Slot::Error));
    }

    #[test]
    fn test_not_found_shows_fixed_message() {
        let view = RecordingView::default();
        let app = App::new(view.clone());
        app.generation.set(1);

        app.complete_lookup(1, Err(ApiError::NotFound { status: 500 }));

        assert_eq!(app.state(), LookupState::Failed("Order not found".to_string()));
        assert_eq!(view.content(Slot::Error).as_deref(), Some("Order not found"));
        assert!(!view.is_visible(Slot::Loading));
        assert!(!view.is_visible(Slot::OrderPanel));
    }

    #[test]
    fn test_network_error_message_is_verbatim() {
        let view = RecordingView::default();
        let app = App::new(view.clone());
        app.generation.set(1);

        app.complete_lookup(1, Err(ApiError::Network("Failed to fetch".to_string())));

        assert_eq!(view.content(Slot::Error).as_deref(), Some("Failed to fetch"));
    }

    #[test]
    fn test_success_populates_regions_and_shows_panel() {
        let view = RecordingView::default();
        let app = App::new(view.clone());
        app.generation.set(1);

        app.complete_lookup(1, Ok(test_order()));

        assert!(matches!(app.state(), LookupState::Success(_)));
        for slot in [Slot::BasicInfo, Slot::DeliveryInfo, Slot::PaymentInfo, Slot::ItemsInfo] {
            assert!(view.content(slot).is_some(), "{:?} sin contenido", slot);
        }
        assert!(view.content(Slot::ItemsInfo).unwrap().contains("$4.53"));
        assert!(view.is_visible(Slot::OrderPanel));
        assert!(!view.is_visible(Slot::Loading));
        assert!(!view.is_visible(Slot::Error));
    }

    #[test]
    fn test_success_render_is_idempotent() {
        let view = RecordingView::default();
        let app = App::new(view.clone());
        app.generation.set(1);

        app.complete_lookup(1, Ok(test_order()));
        let first: Vec<Option<String>> = [Slot::BasicInfo, Slot::DeliveryInfo, Slot::PaymentInfo, Slot::ItemsInfo]
            .iter()
            .map(|s| view.content(*s))
            .collect();

        app.complete_lookup(1, Ok(test_order()));
        let second: Vec<Option<String>> = [Slot::BasicInfo, Slot::DeliveryInfo, Slot::PaymentInfo, Slot::ItemsInfo]
            .iter()
            .map(|s| view.content(*s))
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_render_fault_routes_to_failed() {
        let view = RecordingView::default();
        let app = App::new(view.clone());
        app.generation.set(1);

        let mut order = test_order();
        order.items[0].price = 0;
        app.complete_lookup(1, Ok(order));

        assert_eq!(
            app.state(),
            LookupState::Failed("Order item 'Mascaras' has a zero unit price".to_string())
        );
        assert!(!view.is_visible(Slot::OrderPanel));
        assert!(view.is_visible(Slot::Error));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let view = RecordingView::default();
        let app = App::new(view.clone());
        // La request 2 ya fue emitida; llega la respuesta de la 1
        app.generation.set(2);

        app.complete_lookup(1, Ok(test_order()));

        assert_eq!(app.state(), LookupState::Idle);
        assert!(!view.is_visible(Slot::OrderPanel));
        assert!(view.content(Slot::BasicInfo).is_none());
    }

    #[test]
    fn test_empty_input_invalidates_in_flight_request() {
        // Una búsqueda en vuelo (gen 1) no debe pisar el error de validación
        // de una acción posterior del usuario
        let view = RecordingView::with_input("  ");
        let app = App::new(view.clone());
        app.generation.set(1);

        app.initiate_lookup();
        app.complete_lookup(1, Ok(test_order()));

        assert_eq!(
            app.state(),
            LookupState::Failed(EMPTY_ORDER_ID_MESSAGE.to_string())
        );
        assert!(!view.is_visible(Slot::OrderPanel));
        assert_eq!(view.content(Slot::Error).as_deref(), Some(EMPTY_ORDER_ID_MESSAGE));
    }

    #[test]
    fn test_error_message_is_replaced_not_appended() {
        let view = RecordingView::default();
        let app = App::new(view.clone());
        app.generation.set(1);

        app.complete_lookup(1, Err(ApiError::Network("first".to_string())));
        app.complete_lookup(1, Err(ApiError::NotFound { status: 404 }));

        assert_eq!(view.content(Slot::Error).as_deref(), Some("Order not found"));
    }

    #[test]
    fn test_terminal_states_clear_loading() {
        // Success y Failed apagan el indicador; nunca queda prendido
        for result in [
            Ok(test_order()),
            Err(ApiError::NotFound { status: 404 }),
            Err(ApiError::Parse("bad body".to_string())),
        ] {
            let view = RecordingView::default();
            let app = App::new(view.clone());
            app.generation.set(1);

            app.complete_lookup(1, result);
            assert!(!view.is_visible(Slot::Loading));
        }
    }
}
