// ============================================================================
// ORDER VIEWER - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: render puro (Order → HTML) + slots de vista
// - ViewModels: validación y lógica de búsqueda
// - Services: SOLO comunicación API
// - State: estado etiquetado del ciclo de búsqueda
// - Models: estructuras compartidas con el backend
// ============================================================================

mod app;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use console_error_panic_hook;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::dom::DomView;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App<DomView>>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(Config::default());
    log::info!("🚀 Order Viewer - Rust Puro + MVVM");

    // Montar app sobre la página (estado Idle + listeners)
    let app = App::mount()?;

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Función pública WASM para disparar una búsqueda (llamable desde JavaScript)
#[wasm_bindgen]
pub fn get_order() {
    APP.with(|app_cell| {
        if let Some(ref app) = *app_cell.borrow() {
            app.initiate_lookup();
        } else {
            log::error!("❌ App no está inicializada");
        }
    });
}
