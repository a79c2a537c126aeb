//! Identidad determinista de extensiones.
//!
//! Un `Fingerprint` es el hash blake3 (hex, 64 caracteres) de la forma
//! canónica de una lista ordenada de contribuciones. El orden de la lista es
//! parte del formato: `[a, b]` y `[b, a]` producen fingerprints distintos.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::hashing::hash_value;

/// Longitud fija del fingerprint en hex.
pub const FINGERPRINT_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Combina las contribuciones en el orden dado.
    pub fn combine(parts: &[Value]) -> Self {
        Self(hash_value(&Value::Array(parts.to_vec())))
    }

    /// Fingerprint de un único valor (sin envolverlo en lista).
    pub fn of(value: &Value) -> Self {
        Self(hash_value(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Representación usada cuando un fingerprint entra como contribución de otro.
    pub fn to_value(&self) -> Value {
        Value::String(self.0.clone())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn combine_is_fixed_length_hex() {
        let fp = Fingerprint::combine(&[json!("a"), json!(1)]);
        assert_eq!(fp.as_str().len(), FINGERPRINT_LEN);
        assert!(fp.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn combine_is_order_sensitive() {
        let ab = Fingerprint::combine(&[json!("a"), json!("b")]);
        let ba = Fingerprint::combine(&[json!("b"), json!("a")]);
        assert_ne!(ab, ba);
    }

    #[test]
    fn combine_ignores_object_key_order() {
        let x = Fingerprint::combine(&[json!({"a": 1, "b": 2})]);
        let y = Fingerprint::combine(&[json!({"b": 2, "a": 1})]);
        assert_eq!(x, y);
    }

    #[test]
    fn serializes_as_plain_string() {
        let fp = Fingerprint::of(&json!(null));
        assert_eq!(serde_json::to_value(&fp).unwrap(), fp.to_value());
    }
}
