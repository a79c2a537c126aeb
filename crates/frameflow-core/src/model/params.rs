//! `ParamDict`: bolsa ordenada de parámetros `String -> Value`.
//!
//! Lookups tipados vía serde. Un tipo incompatible es siempre error, incluso
//! en las variantes con default: el default sólo cubre la clave ausente.
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ParamError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamDict(IndexMap<String, Value>);

impl ParamDict {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Construye desde un objeto JSON. `null` equivale a un dict vacío.
    pub fn from_value(value: Value) -> Result<Self, ParamError> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(ParamError::NotAMapping(other.to_string())),
        }
    }

    /// Inserta (o reemplaza, conservando la posición) y devuelve `self`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Lookup obligatorio: falla si la clave no existe.
    pub fn get_or_throw<T: DeserializeOwned>(&self, key: &str) -> Result<T, ParamError> {
        let raw = self.0.get(key).ok_or_else(|| ParamError::Missing(key.to_string()))?;
        decode(key, raw)
    }

    /// Lookup con default tipado para la clave ausente.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, ParamError> {
        match self.0.get(key) {
            Some(raw) => decode(key, raw),
            None => Ok(default),
        }
    }

    /// Lookup opcional: clave ausente o `null` devuelven `None`.
    pub fn get_or_none<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ParamError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(raw) => decode(key, raw).map(Some),
        }
    }

    /// Objeto JSON con las entradas en orden de inserción.
    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .0
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Value::Object(map)
    }
}

fn decode<T: DeserializeOwned>(key: &str, raw: &Value) -> Result<T, ParamError> {
    T::deserialize(raw).map_err(|e| ParamError::InvalidType {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

impl FromIterator<(String, Value)> for ParamDict {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
