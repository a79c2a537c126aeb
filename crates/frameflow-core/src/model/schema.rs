//! Schema mínimo de columnas con sintaxis `"a:int,b:str"`.
//!
//! La representación textual es canónica (sin espacios, tipos en minúscula)
//! y es la que contribuye al fingerprint.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::errors::SchemaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Int,
    Long,
    Double,
    Str,
    Bool,
    /// Cualquier valor JSON.
    Json,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Int => "int",
            ColumnType::Long => "long",
            ColumnType::Double => "double",
            ColumnType::Str => "str",
            ColumnType::Bool => "bool",
            ColumnType::Json => "json",
        }
    }

    /// `null` es aceptado por cualquier tipo.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) | (ColumnType::Json, _) => true,
            (ColumnType::Int, Value::Number(n)) => {
                n.as_i64().is_some_and(|i| i32::try_from(i).is_ok())
            }
            (ColumnType::Long, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (ColumnType::Double, Value::Number(_)) => true,
            (ColumnType::Str, Value::String(_)) => true,
            (ColumnType::Bool, Value::Bool(_)) => true,
            _ => false,
        }
    }

    /// Tipo más específico para un valor observado.
    pub fn infer(value: &Value) -> Self {
        match value {
            Value::Bool(_) => ColumnType::Bool,
            Value::Number(n) if n.is_i64() || n.is_u64() => ColumnType::Long,
            Value::Number(_) => ColumnType::Double,
            Value::String(_) => ColumnType::Str,
            _ => ColumnType::Json,
        }
    }
}

impl FromStr for ColumnType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "int" | "int32" => Ok(ColumnType::Int),
            "long" | "int64" => Ok(ColumnType::Long),
            "double" | "float64" => Ok(ColumnType::Double),
            "str" | "string" => Ok(ColumnType::Str),
            "bool" | "boolean" => Ok(ColumnType::Bool),
            "json" => Ok(ColumnType::Json),
            other => Err(SchemaError::UnknownType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: String,
    pub dtype: ColumnType,
}

impl Field {
    pub fn new(name: impl Into<String>, dtype: ColumnType) -> Self {
        Self { name: name.into(), dtype }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// Construye validando que no haya columnas repetidas.
    pub fn new(fields: Vec<Field>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for f in &fields {
            if !seen.insert(f.name.as_str()) {
                return Err(SchemaError::DuplicateColumn(f.name.clone()));
            }
        }
        Ok(Self { fields })
    }

    pub fn parse(expr: &str) -> Result<Self, SchemaError> {
        expr.parse()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Sub-schema con las columnas pedidas, en el orden pedido.
    pub fn project(&self, columns: &[String]) -> Result<Schema, SchemaError> {
        let fields = columns
            .iter()
            .map(|c| {
                self.index_of(c)
                    .map(|i| self.fields[i].clone())
                    .ok_or_else(|| SchemaError::MissingColumn(c.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Schema::new(fields)
    }

    pub fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl FromStr for Schema {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Schema::new(vec![]);
        }
        let fields = s
            .split(',')
            .map(|part| {
                let invalid = || SchemaError::InvalidField(part.trim().to_string());
                let (name, dtype) = part.split_once(':').ok_or_else(invalid)?;
                let name = name.trim();
                if name.is_empty() {
                    return Err(invalid());
                }
                Ok(Field::new(name, dtype.parse()?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Schema::new(fields)
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|c| format!("{}:{}", c.name, c.dtype.as_str()))
            .collect();
        f.write_str(&parts.join(","))
    }
}

impl TryFrom<String> for Schema {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Schema> for String {
    fn from(value: Schema) -> Self {
        value.to_string()
    }
}
