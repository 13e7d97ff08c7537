// ============================================================================
// FORMAT HELPERS - Importes, cantidades y fechas
// ============================================================================

use chrono::{DateTime, Utc};

/// Formatear un importe en unidades menores como decimal de unidades mayores.
/// 250 → "2.50", 5 → "0.05", 0 → "0.00". El símbolo de moneda lo pone la vista.
pub fn format_amount(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Derivar la cantidad de un artículo como total_price / price.
/// None si el precio unitario es <= 0 o si el total no es múltiplo exacto:
/// ambos casos son datos corruptos, no una cantidad.
pub fn derive_quantity(price: i64, total_price: i64) -> Option<i64> {
    if price <= 0 {
        return None;
    }
    if total_price % price != 0 {
        return None;
    }
    Some(total_price / price)
}

/// Formatear la fecha de creación para el panel de la orden
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y %H:%M:%S").to_string()
}
