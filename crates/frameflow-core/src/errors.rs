//! Errores del core.
//!
//! - `WorkflowCompileError`: al construir un nodo, antes de cualquier
//!   interacción con el engine.
//! - `EngineError`: lo que devuelve el engine al resolver un nodo; el core lo
//!   propaga sin tocarlo.

use thiserror::Error;

/// Errores de acceso al `ParamDict`.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParamError {
    #[error("required parameter '{0}' is missing")]
    Missing(String),
    #[error("parameter '{key}' has an invalid type: {reason}")]
    InvalidType { key: String, reason: String },
    #[error("expected a mapping of parameters, found {0}")]
    NotAMapping(String),
}

/// Errores al parsear o validar un `Schema`.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SchemaError {
    #[error("invalid schema field expression '{0}'")]
    InvalidField(String),
    #[error("unknown column type '{0}'")]
    UnknownType(String),
    #[error("duplicated column '{0}'")]
    DuplicateColumn(String),
    #[error("column '{0}' not found in schema")]
    MissingColumn(String),
}

/// Errores detectados al construir el grafo (fail fast).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum WorkflowCompileError {
    #[error("schema and metadata must be None when data is Yielded (schema set: {schema}, metadata set: {metadata})")]
    YieldedWithShape { schema: bool, metadata: bool },
    #[error("invalid extension parameters: {0}")]
    Param(#[from] ParamError),
    #[error("invalid extension schema: {0}")]
    Schema(#[from] SchemaError),
}

/// Errores reportados por un `ExecutionEngine`.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EngineError {
    #[error("cannot access '{path}': {reason}")]
    DataAccess { path: String, reason: String },
    #[error("format '{format}' is not supported (path '{path}')")]
    UnsupportedFormat { path: String, format: String },
    #[error("cannot convert data to dataframe: {0}")]
    Conversion(String),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
