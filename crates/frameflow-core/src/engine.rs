//! Contrato mínimo de un engine de ejecución.
//!
//! El core sólo depende de estas dos capacidades. Cualquier otro
//! comportamiento (scheduling, optimización, formatos de almacenamiento) es
//! responsabilidad del engine concreto.
use serde_json::Value;

use crate::errors::EngineError;
use crate::model::{ParamDict, Schema};

pub trait ExecutionEngine {
    /// Representación nativa de un dataframe en este engine.
    type DataFrame;

    /// Lee un dataset desde una ubicación direccionable.
    ///
    /// Falla con `EngineError::DataAccess` si la ubicación no es accesible o
    /// con `EngineError::UnsupportedFormat` si el formato no está soportado.
    fn load_df(
        &self,
        path: &str,
        format_hint: &str,
        columns: Option<&[String]>,
        options: &ParamDict,
    ) -> Result<Self::DataFrame, EngineError>;

    /// Convierte un valor en memoria al dataframe nativo.
    ///
    /// Falla con `EngineError::Conversion` si el valor no encaja con el
    /// schema declarado.
    fn to_df(
        &self,
        data: &Value,
        schema: Option<&Schema>,
        metadata: Option<&ParamDict>,
    ) -> Result<Self::DataFrame, EngineError>;
}
