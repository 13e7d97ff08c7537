pub mod order_panel;
pub mod slots;

pub use order_panel::{render_order_panel, OrderPanelHtml, RenderFault};
pub use slots::{LookupView, Slot};
