//! Materialización con cache por fingerprint.
//!
//! Los nodos no cachean; esta capa consulta el cache antes de `create` y
//! guarda el resultado después. Los errores nunca se cachean.
use log::{debug, warn};

use super::store::ResultCache;
use crate::config::FlowConfig;
use crate::engine::ExecutionEngine;
use crate::errors::EngineError;
use crate::extension::Creator;
use crate::model::Fingerprint;

/// Resultado de `materialize`.
#[derive(Debug, Clone, PartialEq)]
pub struct Materialized<D> {
    pub fingerprint: Fingerprint,
    pub frame: D,
    pub from_cache: bool,
}

pub fn materialize<E, C, R>(
    creator: &C,
    engine: &E,
    cache: &R,
    config: &FlowConfig,
) -> Result<Materialized<E::DataFrame>, EngineError>
where
    E: ExecutionEngine + ?Sized,
    E::DataFrame: Clone,
    C: Creator<E> + ?Sized,
    R: ResultCache<E::DataFrame> + ?Sized,
{
    let fingerprint = creator.fingerprint();
    if !config.cache_enabled {
        warn!("materialize: cache disabled, running {} fp={fingerprint}", creator.kind());
        let frame = creator.create(engine)?;
        return Ok(Materialized {
            fingerprint,
            frame,
            from_cache: false,
        });
    }

    if let Some(frame) = cache.get(&fingerprint) {
        debug!("materialize: cache hit kind={} fp={fingerprint}", creator.kind());
        return Ok(Materialized {
            fingerprint,
            frame,
            from_cache: true,
        });
    }

    debug!("materialize: cache miss kind={} fp={fingerprint}", creator.kind());
    let frame = creator.create(engine)?;
    cache.put(fingerprint.clone(), frame.clone());
    Ok(Materialized {
        fingerprint,
        frame,
        from_cache: false,
    })
}
