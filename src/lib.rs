//! frameflow
//!
//! Fachada del workspace:
//! - Reexporta `frameflow-core` (fingerprints, `Yielded`, `Creator`s, cache).
//! - Reexporta `frameflow-adapters` (engine local de referencia).
//!
//! `run_creator` es el punto de entrada habitual del constructor de grafos:
//! consulta el cache por fingerprint y sólo materializa en caso de miss.

pub use frameflow_adapters;
pub use frameflow_core;

pub use frameflow_adapters::{LocalDataFrame, LocalEngine};
pub use frameflow_core::{
    materialize, CreateData, Creator, EngineError, ExecutionEngine, Extension, Fingerprint,
    FlowConfig, InMemoryResultCache, Load, Materialized, ParamDict, ParamError, ResultCache, Schema,
    SchemaError, WorkflowCompileError, Yielded,
};

use log::info;

/// Materializa `creator` con el engine y cache dados usando la
/// configuración global (`FRAMEFLOW_*`).
pub fn run_creator<E, C, R>(
    creator: &C,
    engine: &E,
    cache: &R,
) -> Result<Materialized<E::DataFrame>, EngineError>
where
    E: ExecutionEngine + ?Sized,
    E::DataFrame: Clone,
    C: Creator<E> + ?Sized,
    R: ResultCache<E::DataFrame> + ?Sized,
{
    let out = materialize(creator, engine, cache, &frameflow_core::CONFIG)?;
    info!(
        "run_creator: kind={} fp={} cached={}",
        creator.kind(),
        out.fingerprint,
        out.from_cache
    );
    Ok(out)
}
