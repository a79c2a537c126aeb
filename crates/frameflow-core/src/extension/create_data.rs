//! `CreateData`: nodo que produce un dataframe a partir de un payload.
//!
//! Fingerprint = `[base, identidad del payload, schema|null, metadata|null]`.
//! La identidad del payload se elige en este orden:
//! 1. resultado del `DataDeterminer`, si existe;
//! 2. identidad del `Yielded` (a dónde apunta);
//! 3. `RAW_PAYLOAD_SENTINEL`.
//!
//! El caso 3 significa que dos payloads crudos con contenido distinto e igual
//! schema/metadata tienen el MISMO fingerprint. Quien necesite que el
//! contenido cuente debe pasar un determiner.
use log::debug;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use super::definition::{Creator, Extension};
use crate::constants::RAW_PAYLOAD_SENTINEL;
use crate::engine::ExecutionEngine;
use crate::errors::{EngineError, WorkflowCompileError};
use crate::model::{DataDeterminer, Fingerprint, ParamDict, Payload, Schema, YieldedSource};

pub const CREATE_DATA_KIND: &str = "create_data";

#[derive(Clone)]
pub struct CreateData {
    payload: Payload,
    schema: Option<Schema>,
    metadata: Option<ParamDict>,
    data_determiner: Option<DataDeterminer>,
    params: ParamDict,
}

impl CreateData {
    /// Construye el nodo validando que un payload `Yielded` no declare
    /// schema ni metadata: su forma ya la fijó el contexto productor.
    pub fn new(
        payload: impl Into<Payload>,
        schema: Option<Schema>,
        metadata: Option<ParamDict>,
    ) -> Result<Self, WorkflowCompileError> {
        let payload = payload.into();
        if payload.is_yielded() && (schema.is_some() || metadata.is_some()) {
            return Err(WorkflowCompileError::YieldedWithShape {
                schema: schema.is_some(),
                metadata: metadata.is_some(),
            });
        }
        Ok(Self {
            payload,
            schema,
            metadata,
            data_determiner: None,
            params: ParamDict::new(),
        })
    }

    /// Atajo para un valor crudo sin schema ni metadata.
    pub fn raw(data: Value) -> Self {
        Self {
            payload: Payload::Raw(data),
            schema: None,
            metadata: None,
            data_determiner: None,
            params: ParamDict::new(),
        }
    }

    /// Reemplaza la identidad por defecto del payload. Ver `DataDeterminer`.
    pub fn with_data_determiner<F>(mut self, determiner: F) -> Self
    where
        F: Fn(&Payload) -> Value + Send + Sync + 'static,
    {
        self.data_determiner = Some(Arc::new(determiner));
        self
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    pub fn metadata(&self) -> Option<&ParamDict> {
        self.metadata.as_ref()
    }

    pub fn has_data_determiner(&self) -> bool {
        self.data_determiner.is_some()
    }

    fn payload_identity(&self) -> Value {
        if let Some(determiner) = &self.data_determiner {
            return determiner(&self.payload);
        }
        match &self.payload {
            Payload::Yielded(y) => y.identity(),
            Payload::Raw(_) => Value::from(RAW_PAYLOAD_SENTINEL),
        }
    }
}

impl Extension for CreateData {
    fn kind(&self) -> &'static str {
        CREATE_DATA_KIND
    }

    fn params(&self) -> &ParamDict {
        &self.params
    }

    fn fingerprint(&self) -> Fingerprint {
        let fp = Fingerprint::combine(&[
            self.base_fingerprint().to_value(),
            self.payload_identity(),
            self.schema.as_ref().map_or(Value::Null, Schema::to_value),
            self.metadata.as_ref().map_or(Value::Null, ParamDict::to_value),
        ]);
        debug!("fingerprint kind={} fp={fp}", CREATE_DATA_KIND);
        fp
    }
}

impl<E: ExecutionEngine + ?Sized> Creator<E> for CreateData {
    fn create(&self, engine: &E) -> Result<E::DataFrame, EngineError> {
        match &self.payload {
            Payload::Yielded(y) => match y.source() {
                YieldedSource::File { path } => {
                    debug!("create_data: loading yielded file path={path}");
                    engine.load_df(path, "", None, &ParamDict::new())
                }
                YieldedSource::Dataframe { result } => {
                    debug!("create_data: converting in-process yielded yid={}", y.yid());
                    engine.to_df(result, None, None)
                }
            },
            Payload::Raw(data) => {
                debug!(
                    "create_data: converting raw payload schema={:?}",
                    self.schema.as_ref().map(|s| s.to_string())
                );
                engine.to_df(data, self.schema.as_ref(), self.metadata.as_ref())
            }
        }
    }
}

impl fmt::Debug for CreateData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateData")
            .field("payload", &self.payload)
            .field("schema", &self.schema)
            .field("metadata", &self.metadata)
            .field("data_determiner", &self.data_determiner.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
