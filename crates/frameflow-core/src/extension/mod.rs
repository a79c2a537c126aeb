//! Extensiones productoras de datos (`Creator`).
//!
//! Cada nodo expone `fingerprint()` (puro, total) y `create(engine)`, que
//! delega la materialización en el engine inyectado.

pub mod create_data;
pub mod definition;
pub mod load;

pub use create_data::{CreateData, CREATE_DATA_KIND};
pub use definition::{Creator, Extension};
pub use load::{Load, LOAD_KIND};
