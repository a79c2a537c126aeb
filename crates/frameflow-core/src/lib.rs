//! frameflow-core: identidad y materialización de extensiones.
//!
//! - `model`: `Fingerprint`, `ParamDict`, `Schema`, `Yielded`, `Payload`.
//! - `extension`: contrato `Extension`/`Creator` y los nodos `CreateData` y `Load`.
//! - `engine`: capacidades mínimas que se consumen de un engine.
//! - `cache`: materialización con cache por fingerprint.
pub mod cache;
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod extension;
pub mod hashing;
pub mod model;

pub use cache::{materialize, InMemoryResultCache, Materialized, ResultCache};
pub use config::{FlowConfig, CONFIG};
pub use engine::ExecutionEngine;
pub use errors::{EngineError, ParamError, SchemaError, WorkflowCompileError};
pub use extension::{CreateData, Creator, Extension, Load};
pub use model::{
    ColumnType, DataDeterminer, Field, Fingerprint, ParamDict, Payload, Schema, Yielded,
    YieldedKind,
};
