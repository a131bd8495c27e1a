pub mod compartment;
pub mod tissue;

pub use compartment::{Compartment, ZHL16C_COMPARTMENTS, compartment_at};
pub use tissue::{Tissue, Tissues};
