//! `Load`: nodo que siempre delega en `ExecutionEngine::load_df`.
//!
//! Parámetros reconocidos:
//! - `path` (obligatorio, string)
//! - `fmt` (format hint, default `""`)
//! - `columns` (opcional, lista de columnas a proyectar)
//! - `params` (opcional, opciones propias del engine)
//!
//! Se leen al construir, de modo que un `path` ausente falla al armar el
//! grafo y no al ejecutarlo. Los parámetros se normalizan a esas cuatro
//! claves, así que claves desconocidas no alteran el fingerprint.
use log::debug;
use serde_json::Value;

use super::definition::{Creator, Extension};
use crate::engine::ExecutionEngine;
use crate::errors::{EngineError, WorkflowCompileError};
use crate::model::ParamDict;

pub const LOAD_KIND: &str = "load";

#[derive(Debug, Clone, PartialEq)]
pub struct Load {
    path: String,
    format_hint: String,
    columns: Option<Vec<String>>,
    options: ParamDict,
    params: ParamDict,
}

impl Load {
    pub fn new(params: &ParamDict) -> Result<Self, WorkflowCompileError> {
        let path: String = params.get_or_throw("path")?;
        let format_hint: String = params.get_or("fmt", String::new())?;
        let columns: Option<Vec<String>> = params.get_or_none("columns")?;
        let options = ParamDict::from_value(params.get("params").cloned().unwrap_or(Value::Null))?;
        Ok(Self::from_parts(path, format_hint, columns, options))
    }

    /// Construcción directa, sin pasar por un `ParamDict`.
    pub fn from_parts(
        path: impl Into<String>,
        format_hint: impl Into<String>,
        columns: Option<Vec<String>>,
        options: ParamDict,
    ) -> Self {
        let path = path.into();
        let format_hint = format_hint.into();
        let params = ParamDict::new()
            .with("path", path.clone())
            .with("fmt", format_hint.clone())
            .with("columns", columns.clone().map_or(Value::Null, Value::from))
            .with("params", options.to_value());
        Self {
            path,
            format_hint,
            columns,
            options,
            params,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn format_hint(&self) -> &str {
        &self.format_hint
    }

    pub fn columns(&self) -> Option<&[String]> {
        self.columns.as_deref()
    }

    pub fn options(&self) -> &ParamDict {
        &self.options
    }
}

impl Extension for Load {
    fn kind(&self) -> &'static str {
        LOAD_KIND
    }

    fn params(&self) -> &ParamDict {
        &self.params
    }
}

impl<E: ExecutionEngine + ?Sized> Creator<E> for Load {
    fn create(&self, engine: &E) -> Result<E::DataFrame, EngineError> {
        debug!(
            "load: path={} fmt={:?} columns={:?}",
            self.path, self.format_hint, self.columns
        );
        engine.load_df(&self.path, &self.format_hint, self.columns(), &self.options)
    }
}
