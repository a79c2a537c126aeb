//! Modelos neutrales: fingerprint, parámetros, schema y resultados diferidos.

pub mod fingerprint;
pub mod params;
pub mod payload;
pub mod schema;
pub mod yielded;

pub use fingerprint::{Fingerprint, FINGERPRINT_LEN};
pub use params::ParamDict;
pub use payload::{DataDeterminer, Payload};
pub use schema::{ColumnType, Field, Schema};
pub use yielded::{Yielded, YieldedKind};
pub(crate) use yielded::YieldedSource;
