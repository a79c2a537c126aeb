//! Resultados diferidos (`Yielded`).
//!
//! Un `Yielded` representa un dataframe producido por otro nodo (u otra
//! ejecución) que todavía no se trajo a la representación nativa del engine
//! actual. Nunca expone el valor materializado: sólo un `ExecutionEngine`
//! puede resolverlo, a través del `Creator` que lo consume.
//!
//! La identidad de un `Yielded` es *a dónde apunta*, no su contenido:
//! - `File`: discriminador + path.
//! - `Dataframe`: discriminador + `yid` del nodo productor.
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::sync::Arc;

use super::Fingerprint;

/// Discriminador de `Yielded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YieldedKind {
    File,
    Dataframe,
}

impl YieldedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            YieldedKind::File => "file",
            YieldedKind::Dataframe => "dataframe",
        }
    }
}

impl fmt::Display for YieldedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum YieldedSource {
    File { path: String },
    Dataframe { result: Arc<Value> },
}

/// Placeholder inmutable de un resultado diferido.
#[derive(Debug, Clone, PartialEq)]
pub struct Yielded {
    yid: Fingerprint,
    source: YieldedSource,
}

impl Yielded {
    /// Resultado persistido en una ubicación direccionable por el engine.
    pub fn file(yid: Fingerprint, path: impl Into<String>) -> Self {
        Self {
            yid,
            source: YieldedSource::File { path: path.into() },
        }
    }

    /// Resultado retenido en memoria por la ejecución productora.
    pub fn dataframe(yid: Fingerprint, result: impl Into<Arc<Value>>) -> Self {
        Self {
            yid,
            source: YieldedSource::Dataframe {
                result: result.into(),
            },
        }
    }

    pub fn kind(&self) -> YieldedKind {
        match self.source {
            YieldedSource::File { .. } => YieldedKind::File,
            YieldedSource::Dataframe { .. } => YieldedKind::Dataframe,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind() == YieldedKind::File
    }

    /// Fingerprint del nodo que produjo el resultado.
    pub fn yid(&self) -> &Fingerprint {
        &self.yid
    }

    /// Ubicación, sólo para la variante `File`.
    pub fn path(&self) -> Option<&str> {
        match &self.source {
            YieldedSource::File { path } => Some(path),
            YieldedSource::Dataframe { .. } => None,
        }
    }

    pub(crate) fn source(&self) -> &YieldedSource {
        &self.source
    }

    /// Contribución de este resultado al fingerprint de quien lo consume.
    pub fn identity(&self) -> Value {
        match &self.source {
            YieldedSource::File { path } => {
                json!({ "kind": YieldedKind::File.as_str(), "path": path })
            }
            YieldedSource::Dataframe { .. } => {
                json!({ "kind": YieldedKind::Dataframe.as_str(), "yid": self.yid.to_value() })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yid(tag: &str) -> Fingerprint {
        Fingerprint::of(&json!(tag))
    }

    #[test]
    fn file_identity_depends_only_on_path() {
        let a = Yielded::file(yid("producer-1"), "/data/x.parquet");
        let b = Yielded::file(yid("producer-2"), "/data/x.parquet");
        let c = Yielded::file(yid("producer-1"), "/data/y.parquet");
        assert_eq!(a.identity(), b.identity());
        assert_ne!(a.identity(), c.identity());
        assert_eq!(a.path(), Some("/data/x.parquet"));
    }

    #[test]
    fn dataframe_identity_uses_producer() {
        let a = Yielded::dataframe(yid("p1"), json!([[1]]));
        let b = Yielded::dataframe(yid("p1"), json!([[2]]));
        let c = Yielded::dataframe(yid("p2"), json!([[1]]));
        assert_eq!(a.identity(), b.identity());
        assert_ne!(a.identity(), c.identity());
        assert_eq!(a.kind(), YieldedKind::Dataframe);
        assert_eq!(a.path(), None);
    }

    #[test]
    fn discriminator_separates_variants() {
        let f = Yielded::file(yid("p"), "p");
        let d = Yielded::dataframe(yid("p"), json!(null));
        assert_ne!(f.identity(), d.identity());
        assert!(f.is_file());
        assert!(!d.is_file());
    }
}
