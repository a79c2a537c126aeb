//! Lectura/escritura de archivos para el engine local.
//!
//! Formatos soportados:
//! - `json`: array de registros o dataframe serializado `{schema, rows}`.
//! - `jsonl`/`ndjson`: un registro por línea, o una línea `{"schema": ...}`
//!   seguida de filas posicionales.
//!
//! Cualquier otro es `UnsupportedFormat`. `write_frame` siempre persiste el
//! schema junto a los datos, de modo que releer un archivo guardado devuelve
//! el mismo dataframe.
use frameflow_core::EngineError;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

use crate::frame::LocalDataFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    JsonLines,
}

impl FileFormat {
    fn parse(path: &str, name: &str) -> Result<Self, EngineError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(FileFormat::Json),
            "jsonl" | "ndjson" => Ok(FileFormat::JsonLines),
            other => Err(EngineError::UnsupportedFormat {
                path: path.to_string(),
                format: other.to_string(),
            }),
        }
    }

    /// Hint explícito > default configurado > extensión del path.
    pub fn resolve(path: &str, hint: &str, default: &str) -> Result<Self, EngineError> {
        if !hint.trim().is_empty() {
            return Self::parse(path, hint);
        }
        if !default.trim().is_empty() {
            return Self::parse(path, default);
        }
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        Self::parse(path, ext)
    }
}

fn access_error(path: &str, reason: impl ToString) -> EngineError {
    EngineError::DataAccess {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

/// Línea de cabecera de jsonl: objeto con una única clave `schema` string.
fn header_schema(value: &Value) -> Option<&str> {
    match value {
        Value::Object(map) if map.len() == 1 => map.get("schema").and_then(Value::as_str),
        _ => None,
    }
}

/// Lee `path` y devuelve un valor aceptado por `LocalDataFrame::from_json`.
pub fn read_value(path: &str, format: FileFormat) -> Result<Value, EngineError> {
    let text = fs::read_to_string(path).map_err(|e| access_error(path, e))?;
    match format {
        FileFormat::Json => serde_json::from_str(&text)
            .map_err(|e| access_error(path, format!("invalid json: {e}"))),
        FileFormat::JsonLines => {
            let mut lines = text
                .lines()
                .enumerate()
                .filter(|(_, l)| !l.trim().is_empty())
                .map(|(n, l)| {
                    serde_json::from_str::<Value>(l)
                        .map_err(|e| access_error(path, format!("line {}: {e}", n + 1)))
                })
                .collect::<Result<Vec<Value>, _>>()?;
            match lines.first().and_then(header_schema).map(str::to_string) {
                Some(schema) => {
                    lines.remove(0);
                    Ok(json!({ "schema": schema, "rows": lines }))
                }
                None => Ok(Value::Array(lines)),
            }
        }
    }
}

/// Escribe `frame` con su schema en `path`, creando directorios intermedios.
pub fn write_frame(
    path: &str,
    format: FileFormat,
    frame: &LocalDataFrame,
) -> Result<(), EngineError> {
    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent).map_err(|e| access_error(path, e))?;
    }
    let text = match format {
        FileFormat::Json => frame.to_value().to_string(),
        FileFormat::JsonLines => {
            let mut out = json!({ "schema": frame.schema().to_string() }).to_string();
            out.push('\n');
            for row in frame.rows() {
                out.push_str(&Value::Array(row.clone()).to_string());
                out.push('\n');
            }
            out
        }
    };
    fs::write(path, text).map_err(|e| access_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_wins_over_extension() {
        let resolve = |path, hint, default| FileFormat::resolve(path, hint, default).unwrap();
        assert_eq!(resolve("/a/b.json", "jsonl", ""), FileFormat::JsonLines);
        assert_eq!(resolve("/a/b.ndjson", "", ""), FileFormat::JsonLines);
        assert_eq!(resolve("/a/b.txt", "", "json"), FileFormat::Json);
    }

    #[test]
    fn unknown_formats_are_rejected() {
        let err = FileFormat::resolve("/data/x.parquet", "", "").unwrap_err();
        assert_eq!(
            err,
            EngineError::UnsupportedFormat {
                path: "/data/x.parquet".into(),
                format: "parquet".into(),
            }
        );
    }

    #[test]
    fn missing_file_is_a_data_access_error() {
        let err = read_value("/definitely/not/here.json", FileFormat::Json).unwrap_err();
        assert!(matches!(err, EngineError::DataAccess { .. }));
    }

    #[test]
    fn header_line_is_recognised() {
        assert_eq!(header_schema(&json!({ "schema": "a:int" })), Some("a:int"));
        assert_eq!(header_schema(&json!({ "schema": "a:int", "b": 1 })), None);
        assert_eq!(header_schema(&json!([1])), None);
    }
}
