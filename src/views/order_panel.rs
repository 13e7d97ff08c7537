// ============================================================================
// ORDER PANEL VIEW - Render del panel de orden a HTML
// ============================================================================
// Funciones puras: Order → strings HTML para las cuatro regiones.
// Render idéntico para la misma orden (idempotente). La validación de
// contenido (RenderFault) ocurre acá, ANTES de tocar el DOM.
// ============================================================================

use std::fmt;

use crate::models::{Delivery, Item, Order, Payment};
use crate::utils::{derive_quantity, format_amount, format_date};

/// Contenido renderizado de las cuatro regiones del panel
#[derive(Clone, Debug, PartialEq)]
pub struct OrderPanelHtml {
    pub basic_info: String,
    pub delivery_info: String,
    pub payment_info: String,
    pub items_info: String,
}

/// Orden con contenido que no se puede renderizar de forma coherente.
/// Se enruta a Failed en lugar de dejar la UI a medio pintar.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderFault {
    ZeroPrice { item: String },
    NonIntegralQuantity { item: String },
}

impl fmt::Display for RenderFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderFault::ZeroPrice { item } => {
                write!(f, "Order item '{}' has a zero unit price", item)
            }
            RenderFault::NonIntegralQuantity { item } => {
                write!(f, "Order item '{}' has an inconsistent total price", item)
            }
        }
    }
}

/// Renderizar las cuatro regiones de una orden
pub fn render_order_panel(order: &Order) -> Result<OrderPanelHtml, RenderFault> {
    Ok(OrderPanelHtml {
        basic_info: render_basic_info(order),
        delivery_info: render_delivery_info(&order.delivery),
        payment_info: render_payment_info(&order.payment),
        items_info: render_items(&order.items)?,
    })
}

fn render_basic_info(order: &Order) -> String {
    format!(
        "<p><strong>Order UID:</strong> {}</p>\
         <p><strong>Track Number:</strong> {}</p>\
         <p><strong>Entry:</strong> {}</p>\
         <p><strong>Customer ID:</strong> {}</p>\
         <p><strong>Date Created:</strong> {}</p>",
        escape_html(&order.order_uid),
        escape_html(&order.track_number),
        escape_html(&order.entry),
        escape_html(&order.customer_id),
        format_date(&order.date_created),
    )
}

fn render_delivery_info(delivery: &Delivery) -> String {
    format!(
        "<p><strong>Name:</strong> {}</p>\
         <p><strong>Phone:</strong> {}</p>\
         <p><strong>Address:</strong> {}, {}</p>\
         <p><strong>Region:</strong> {}</p>\
         <p><strong>ZIP:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>",
        escape_html(&delivery.name),
        escape_html(&delivery.phone),
        escape_html(&delivery.address),
        escape_html(&delivery.city),
        escape_html(&delivery.region),
        escape_html(&delivery.zip),
        escape_html(&delivery.email),
    )
}

fn render_payment_info(payment: &Payment) -> String {
    format!(
        "<p><strong>Transaction:</strong> {}</p>\
         <p><strong>Amount:</strong> ${}</p>\
         <p><strong>Currency:</strong> {}</p>\
         <p><strong>Provider:</strong> {}</p>\
         <p><strong>Bank:</strong> {}</p>",
        escape_html(&payment.transaction),
        format_amount(payment.amount),
        escape_html(&payment.currency),
        escape_html(&payment.provider),
        escape_html(&payment.bank),
    )
}

// Una lista vacía renderiza una región vacía, igual que la página original
fn render_items(items: &[Item]) -> Result<String, RenderFault> {
    let mut html = String::new();
    for item in items {
        let quantity = derive_quantity(item.price, item.total_price).ok_or_else(|| {
            if item.price <= 0 {
                RenderFault::ZeroPrice {
                    item: item.name.clone(),
                }
            } else {
                RenderFault::NonIntegralQuantity {
                    item: item.name.clone(),
                }
            }
        })?;

        html.push_str(&format!(
            "<div class=\"item\">\
             <p><strong>Name:</strong> {}</p>\
             <p><strong>Brand:</strong> {}</p>\
             <p><strong>Price:</strong> ${}</p>\
             <p><strong>Quantity:</strong> {}</p>\
             <p><strong>Total:</strong> ${}</p>\
             </div>",
            escape_html(&item.name),
            escape_html(&item.brand),
            format_amount(item.price),
            quantity,
            format_amount(item.total_price),
        ));
    }

    Ok(html)
}

/// Escapar texto del backend antes de interpolarlo en HTML
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
