/// URL base del backend (order-service)
/// Configurada en tiempo de compilación:
/// - Por defecto: cadena vacía (requests same-origin, igual que la página original)
/// - Despliegue separado: via BACKEND_URL env var (.env, ver build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "",
};
