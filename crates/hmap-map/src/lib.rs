#![deny(unsafe_code)]

pub mod apply;
pub mod error;
pub mod extract;
pub mod reconcile;

pub use apply::apply_reconciliation;
pub use error::ReconcileError;
pub use extract::extract_json_object;
pub use reconcile::reconcile;
