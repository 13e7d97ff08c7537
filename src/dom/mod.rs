// ============================================================================
// DOM MODULE - Helpers para manipulación DOM
// ============================================================================

pub mod element;
pub mod events;
pub mod view;

pub use element::*;
pub use events::*;
pub use view::*;
