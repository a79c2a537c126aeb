//! `LocalEngine`: engine en memoria de referencia.
//!
//! Implementa `ExecutionEngine` sobre `LocalDataFrame` y añade el lado
//! productor de los resultados diferidos (`save_df`, `yield_file`,
//! `yield_dataframe`).
use frameflow_core::{
    EngineError, ExecutionEngine, Fingerprint, FlowConfig, ParamDict, Schema, Yielded,
};
use log::debug;
use serde_json::Value;

use crate::frame::LocalDataFrame;
use crate::io::{read_value, write_frame, FileFormat};

#[derive(Debug, Clone, Default)]
pub struct LocalEngine {
    default_format: String,
}

impl LocalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &FlowConfig) -> Self {
        Self {
            default_format: config.default_format.clone(),
        }
    }

    /// Persiste `frame` (schema incluido) en `path`.
    pub fn save_df(
        &self,
        frame: &LocalDataFrame,
        path: &str,
        format_hint: &str,
    ) -> Result<(), EngineError> {
        let format = FileFormat::resolve(path, format_hint, &self.default_format)?;
        debug!("local_engine: save path={path} format={format:?} rows={}", frame.len());
        write_frame(path, format, frame)
    }

    /// Persiste y entrega un `Yielded::File` para un consumidor posterior.
    pub fn yield_file(
        &self,
        yid: Fingerprint,
        frame: &LocalDataFrame,
        path: &str,
    ) -> Result<Yielded, EngineError> {
        self.save_df(frame, path, "")?;
        Ok(Yielded::file(yid, path))
    }

    /// Entrega el resultado en memoria sin persistirlo.
    pub fn yield_dataframe(&self, yid: Fingerprint, frame: &LocalDataFrame) -> Yielded {
        Yielded::dataframe(yid, frame.to_value())
    }
}

impl ExecutionEngine for LocalEngine {
    type DataFrame = LocalDataFrame;

    /// Opciones reconocidas: `schema` (expresión de schema a imponer).
    fn load_df(
        &self,
        path: &str,
        format_hint: &str,
        columns: Option<&[String]>,
        options: &ParamDict,
    ) -> Result<LocalDataFrame, EngineError> {
        let format = FileFormat::resolve(path, format_hint, &self.default_format)?;
        debug!("local_engine: load path={path} format={format:?} columns={columns:?}");
        let declared = options
            .get_or_none::<String>("schema")
            .map_err(|e| EngineError::Conversion(e.to_string()))?
            .map(|expr| Schema::parse(&expr))
            .transpose()?;
        let data = read_value(path, format)?;
        let frame = LocalDataFrame::from_json(&data, declared.as_ref())?;
        match columns {
            Some(cols) => frame.project(cols),
            None => Ok(frame),
        }
    }

    fn to_df(
        &self,
        data: &Value,
        schema: Option<&Schema>,
        metadata: Option<&ParamDict>,
    ) -> Result<LocalDataFrame, EngineError> {
        Ok(LocalDataFrame::from_json(data, schema)?.with_metadata(metadata.cloned()))
    }
}
