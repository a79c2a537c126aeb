use serde_json::Value;

use crate::constants::FINGERPRINT_VERSION;
use crate::engine::ExecutionEngine;
use crate::errors::EngineError;
use crate::model::{Fingerprint, ParamDict};

/// Unidad de trabajo tipada y parametrizada del grafo.
///
/// Implementaciones deben ser inmutables una vez construidas: `fingerprint`
/// es una función pura de sus campos.
pub trait Extension {
    /// Tag estable del tipo de nodo. Forma parte de la identidad.
    fn kind(&self) -> &'static str;

    /// Parámetros declarados al construir el nodo.
    fn params(&self) -> &ParamDict;

    /// Identidad del tipo de nodo + parámetros, sin contribuciones de datos.
    fn base_fingerprint(&self) -> Fingerprint {
        Fingerprint::combine(&[
            Value::from(FINGERPRINT_VERSION),
            Value::from(self.kind()),
            self.params().to_value(),
        ])
    }

    /// Identificador usado por la capa de cache. Total y sin I/O.
    fn fingerprint(&self) -> Fingerprint {
        self.base_fingerprint()
    }
}

/// Extensión que produce un dataframe en el engine `E`.
///
/// El engine se inyecta en cada llamada; el nodo no guarda estado global ni
/// cachea resultados.
pub trait Creator<E: ExecutionEngine + ?Sized>: Extension {
    fn create(&self, engine: &E) -> Result<E::DataFrame, EngineError>;
}
