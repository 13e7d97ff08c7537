// ============================================================================
// STATE MODULE - Estado de UI del ciclo de búsqueda
// ============================================================================

pub mod lookup_state;

pub use lookup_state::*;
