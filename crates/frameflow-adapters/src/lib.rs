//! frameflow-adapters: engine local sobre `frameflow-core`.
//!
//! - `LocalDataFrame`: dataframe nativo (schema + filas JSON).
//! - `LocalEngine`: `ExecutionEngine` en memoria con lectura/escritura de
//!   archivos `json`/`jsonl`.

pub mod engine;
pub mod frame;
pub mod io;

pub use engine::LocalEngine;
pub use frame::LocalDataFrame;
pub use io::FileFormat;
