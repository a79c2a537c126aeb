//! `LocalDataFrame`: dataframe nativo del engine local.
//!
//! Filas de valores JSON con un `Schema` explícito. Toda construcción valida
//! aridad y tipos; una violación es `EngineError::Conversion`.
use frameflow_core::{ColumnType, EngineError, Field, ParamDict, Schema};
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct LocalDataFrame {
    schema: Schema,
    rows: Vec<Vec<Value>>,
    metadata: Option<ParamDict>,
}

fn conversion(msg: impl Into<String>) -> EngineError {
    EngineError::Conversion(msg.into())
}

impl LocalDataFrame {
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Result<Self, EngineError> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != schema.len() {
                return Err(conversion(format!(
                    "row {i} has {} values, schema '{schema}' expects {}",
                    row.len(),
                    schema.len()
                )));
            }
            for (field, value) in schema.fields().iter().zip(row) {
                if !field.dtype.accepts(value) {
                    return Err(conversion(format!(
                        "row {i}: value {value} is not a valid {} for column '{}'",
                        field.dtype.as_str(),
                        field.name
                    )));
                }
            }
        }
        Ok(Self {
            schema,
            rows,
            metadata: None,
        })
    }

    /// Interpreta un valor JSON como dataframe.
    ///
    /// Formas aceptadas:
    /// - `[[...], ...]`: filas posicionales, requiere `schema`.
    /// - `[{...}, ...]`: registros; sin `schema` se infiere de los datos.
    /// - `{"schema": "...", "rows": [[...]]}`: dataframe serializado
    ///   (ver `to_value`). Un `schema` declarado tiene prioridad.
    pub fn from_json(data: &Value, schema: Option<&Schema>) -> Result<Self, EngineError> {
        match data {
            Value::Array(items) if items.is_empty() => match schema {
                Some(s) => Self::new(s.clone(), vec![]),
                None => Err(conversion("cannot infer a schema from empty data")),
            },
            Value::Array(items) if items.iter().all(Value::is_array) => {
                let schema =
                    schema.ok_or_else(|| conversion("schema is required for positional rows"))?;
                let rows = items.iter().filter_map(|r| r.as_array().cloned()).collect();
                Self::new(schema.clone(), rows)
            }
            Value::Array(items) if items.iter().all(Value::is_object) => {
                let records: Vec<&Map<String, Value>> =
                    items.iter().filter_map(Value::as_object).collect();
                let schema = match schema {
                    Some(s) => s.clone(),
                    None => infer_schema(&records)?,
                };
                let rows = records
                    .iter()
                    .map(|r| {
                        schema
                            .fields()
                            .iter()
                            .map(|f| r.get(&f.name).cloned().unwrap_or(Value::Null))
                            .collect()
                    })
                    .collect();
                Self::new(schema, rows)
            }
            Value::Object(map) if map.contains_key("schema") && map.contains_key("rows") => {
                let schema = match schema {
                    Some(s) => s.clone(),
                    None => {
                        let expr = map
                            .get("schema")
                            .and_then(Value::as_str)
                            .ok_or_else(|| conversion("frame schema must be a string"))?;
                        Schema::parse(expr)?
                    }
                };
                let rows = map
                    .get("rows")
                    .and_then(Value::as_array)
                    .ok_or_else(|| conversion("frame rows must be an array"))?;
                if !rows.iter().all(Value::is_array) {
                    return Err(conversion("frame rows must be arrays"));
                }
                Self::new(schema, rows.iter().filter_map(|r| r.as_array().cloned()).collect())
            }
            other => Err(conversion(format!("unsupported data shape: {}", shape_name(other)))),
        }
    }

    pub fn with_metadata(mut self, metadata: Option<ParamDict>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn metadata(&self) -> Option<&ParamDict> {
        self.metadata.as_ref()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let idx = self.schema.index_of(name)?;
        Some(self.rows.iter().map(|r| &r[idx]).collect())
    }

    /// Proyección de columnas, en el orden pedido.
    pub fn project(&self, columns: &[String]) -> Result<Self, EngineError> {
        let schema = self.schema.project(columns)?;
        let idx: Vec<usize> = schema
            .fields()
            .iter()
            .filter_map(|f| self.schema.index_of(&f.name))
            .collect();
        let rows = self
            .rows
            .iter()
            .map(|r| idx.iter().map(|&i| r[i].clone()).collect())
            .collect();
        Ok(Self {
            schema,
            rows,
            metadata: self.metadata.clone(),
        })
    }

    /// Forma serializada `{schema, rows}`, aceptada de vuelta por `from_json`.
    /// Conserva orden de columnas, tipos declarados y dataframes sin filas.
    pub fn to_value(&self) -> Value {
        let rows: Vec<Value> = self.rows.iter().map(|r| Value::Array(r.clone())).collect();
        json!({ "schema": self.schema.to_string(), "rows": rows })
    }
}

fn infer_schema(records: &[&Map<String, Value>]) -> Result<Schema, EngineError> {
    let mut fields: Vec<(String, Option<ColumnType>)> = Vec::new();
    for record in records {
        for (key, value) in record.iter() {
            let pos = match fields.iter().position(|(n, _)| n == key) {
                Some(p) => p,
                None => {
                    fields.push((key.clone(), None));
                    fields.len() - 1
                }
            };
            if value.is_null() {
                continue;
            }
            let observed = ColumnType::infer(value);
            fields[pos].1 = Some(match fields[pos].1 {
                None => observed,
                Some(prev) => widen(prev, observed),
            });
        }
    }
    let fields = fields
        .into_iter()
        .map(|(n, t)| Field::new(n, t.unwrap_or(ColumnType::Json)))
        .collect();
    Ok(Schema::new(fields)?)
}

fn widen(a: ColumnType, b: ColumnType) -> ColumnType {
    match (a, b) {
        (x, y) if x == y => x,
        (ColumnType::Long, ColumnType::Double) | (ColumnType::Double, ColumnType::Long) => {
            ColumnType::Double
        }
        _ => ColumnType::Json,
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "mixed array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(expr: &str) -> Schema {
        Schema::parse(expr).unwrap()
    }

    fn frame(data: Value, expr: &str) -> LocalDataFrame {
        LocalDataFrame::from_json(&data, Some(&schema(expr))).unwrap()
    }

    #[test]
    fn positional_rows_need_a_schema() {
        let err = LocalDataFrame::from_json(&json!([[1, "a"]]), None).unwrap_err();
        assert!(matches!(err, EngineError::Conversion(_)));

        let df = frame(json!([[1, "a"], [2, null]]), "a:int,b:str");
        assert_eq!(df.len(), 2);
        assert_eq!(df.column("b").unwrap(), vec![&json!("a"), &Value::Null]);
    }

    #[test]
    fn type_mismatch_is_a_conversion_error() {
        let err = LocalDataFrame::from_json(&json!([["x"]]), Some(&schema("a:int"))).unwrap_err();
        assert!(matches!(err, EngineError::Conversion(msg) if msg.contains("column 'a'")));
    }

    #[test]
    fn arity_mismatch_is_a_conversion_error() {
        let err = LocalDataFrame::from_json(&json!([[1, 2]]), Some(&schema("a:int"))).unwrap_err();
        assert!(matches!(err, EngineError::Conversion(_)));
    }

    #[test]
    fn records_infer_and_widen_types() {
        let data = json!([{"a": 1, "b": "x"}, {"a": 2.5, "c": null}]);
        let df = LocalDataFrame::from_json(&data, None).unwrap();
        assert_eq!(df.schema().to_string(), "a:double,b:str,c:json");
        assert_eq!(df.rows()[1], vec![json!(2.5), Value::Null, Value::Null]);
    }

    #[test]
    fn project_reorders_columns() {
        let df = frame(json!([[1, "a", true]]), "a:int,b:str,c:bool");
        let p = df.project(&["c".to_string(), "a".to_string()]).unwrap();
        assert_eq!(p.schema().to_string(), "c:bool,a:int");
        assert_eq!(p.rows()[0], vec![json!(true), json!(1)]);
        assert!(df.project(&["z".to_string()]).is_err());
    }

    #[test]
    fn serialized_form_is_accepted_back() {
        let df = frame(json!([[1, "a"]]), "a:int,b:str");
        let back = LocalDataFrame::from_json(&df.to_value(), None).unwrap();
        assert_eq!(back, df);
    }

    #[test]
    fn serialized_form_keeps_empty_frames_and_column_order() {
        let empty = frame(json!([]), "z:int,a:str");
        let back = LocalDataFrame::from_json(&empty.to_value(), None).unwrap();
        assert_eq!(back, empty);
        assert_eq!(back.schema().to_string(), "z:int,a:str");
    }

    #[test]
    fn scalars_are_rejected() {
        let out = LocalDataFrame::from_json(&json!(3), None);
        assert!(matches!(out, Err(EngineError::Conversion(_))));
    }
}
