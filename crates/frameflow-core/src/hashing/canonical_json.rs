//! Canonical JSON: claves de objeto ordenadas y sin espacios.
//!
//! Toda contribución a un fingerprint pasa por aquí antes de hashearse, de
//! modo que el orden de inserción de un mapa nunca altera la identidad.

use serde_json::Value;
use std::collections::BTreeMap;

/// Serializa un `Value` a su forma canónica.
pub fn to_canonical_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Display de `Value` ya produce el string escapado.
        Value::String(_) => value.to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(to_canonical_json).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(map) => {
            let tree: BTreeMap<&String, String> =
                map.iter().map(|(k, v)| (k, to_canonical_json(v))).collect();
            let items: Vec<String> = tree
                .into_iter()
                .map(|(k, v)| format!("{}:{}", Value::String(k.clone()), v))
                .collect();
            format!("{{{}}}", items.join(","))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::to_canonical_json;
    use serde_json::json;

    #[test]
    fn primitives() {
        assert_eq!(to_canonical_json(&json!(null)), "null");
        assert_eq!(to_canonical_json(&json!(true)), "true");
        assert_eq!(to_canonical_json(&json!(123)), "123");
        assert_eq!(to_canonical_json(&json!("hola")), "\"hola\"");
    }

    #[test]
    fn arrays_keep_their_order() {
        assert_eq!(to_canonical_json(&json!([3, "a", false])), "[3,\"a\",false]");
        assert_ne!(to_canonical_json(&json!([1, 2])), to_canonical_json(&json!([2, 1])));
    }

    #[test]
    fn nested_objects_sort_keys() {
        let val = json!({ "z": [ { "y": "yes" }, null ], "a": { "x": 10 } });
        assert_eq!(
            to_canonical_json(&val),
            "{\"a\":{\"x\":10},\"z\":[{\"y\":\"yes\"},null]}"
        );
    }

    #[test]
    fn escapes_keys_and_strings() {
        let val = json!({ "k\"ey": "line\nbreak" });
        assert_eq!(to_canonical_json(&val), "{\"k\\\"ey\":\"line\\nbreak\"}");
    }
}
