// ============================================================================
// ORDER MODELS - Estructuras compartidas con el backend (order-service)
// ============================================================================
// Los nombres de campo son los nombres del wire (JSON del backend).
// Campos que el visor no muestra llevan #[serde(default)]: su ausencia
// no invalida la respuesta. Los campos renderizados son obligatorios.
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Orden completa tal como la devuelve GET /order/{id}
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Order {
    pub order_uid: String,
    pub track_number: String,
    pub entry: String,
    pub delivery: Delivery,
    pub payment: Payment,
    pub items: Vec<Item>,
    pub customer_id: String,
    pub date_created: DateTime<Utc>,

    // Campos del backend que el visor no renderiza
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub internal_signature: String,
    #[serde(default)]
    pub delivery_service: String,
    #[serde(default)]
    pub shardkey: String,
    #[serde(default)]
    pub sm_id: i64,
    #[serde(default)]
    pub oof_shard: String,
}

/// Datos de entrega de una orden
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Delivery {
    pub name: String,
    pub phone: String,
    pub zip: String,
    pub city: String,
    pub address: String,
    pub region: String,
    pub email: String,
}

/// Datos de pago (importes en unidades menores: centavos)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Payment {
    pub transaction: String,
    pub currency: String,
    pub provider: String,
    pub amount: i64,
    pub bank: String,

    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub payment_dt: i64,
    #[serde(default)]
    pub delivery_cost: i64,
    #[serde(default)]
    pub goods_total: i64,
    #[serde(default)]
    pub custom_fee: i64,
}

/// Artículo de una orden (precios en unidades menores)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Item {
    pub name: String,
    pub brand: String,
    pub price: i64,
    pub total_price: i64,

    #[serde(default)]
    pub chrt_id: i64,
    #[serde(default)]
    pub track_number: String,
    #[serde(default)]
    pub rid: String,
    #[serde(default)]
    pub sale: i64,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub nm_id: i64,
    #[serde(default)]
    pub status: i64,
}
