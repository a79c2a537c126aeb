use serde_json::Value;
use std::sync::Arc;

use super::Yielded;

/// Dato alrededor del cual se construye un `CreateData`.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Valor en memoria, convertido por el engine con `to_df`.
    Raw(Value),
    /// Resultado diferido de otro nodo/ejecución.
    Yielded(Yielded),
}

impl Payload {
    pub fn as_yielded(&self) -> Option<&Yielded> {
        match self {
            Payload::Yielded(y) => Some(y),
            Payload::Raw(_) => None,
        }
    }

    pub fn is_yielded(&self) -> bool {
        self.as_yielded().is_some()
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Raw(value)
    }
}

impl From<Yielded> for Payload {
    fn from(value: Yielded) -> Self {
        Payload::Yielded(value)
    }
}

/// Identidad custom para payloads sin codificación determinista natural.
///
/// Contrato: debe ser pura y determinista. Si devuelve valores distintos para
/// el mismo dato (timestamps, direcciones de memoria, hashing aleatorio) el
/// cache deja de reconocer nodos equivalentes sin ningún error visible; el
/// core no puede verificarlo.
pub type DataDeterminer = Arc<dyn Fn(&Payload) -> Value + Send + Sync>;
