//! Untyped column store.
//!
//! A [`Frame`] is an ordered set of named, homogeneous columns. It knows
//! nothing about any particular schema; typed tables wrap a frame and check
//! its dtypes on construction.

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Column value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    String,
    Float64,
    Int64,
    Bool,
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DType::String => "string",
            DType::Float64 => "float64",
            DType::Int64 => "int64",
            DType::Bool => "bool",
        };
        write!(f, "{}", name)
    }
}

/// A homogeneous column of values.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    String(Vec<String>),
    Float64(Vec<f64>),
    Int64(Vec<i64>),
    Bool(Vec<bool>),
}

impl Column {
    /// The column's value type
    pub fn dtype(&self) -> DType {
        match self {
            Column::String(_) => DType::String,
            Column::Float64(_) => DType::Float64,
            Column::Int64(_) => DType::Int64,
            Column::Bool(_) => DType::Bool,
        }
    }

    /// Number of values
    pub fn len(&self) -> usize {
        match self {
            Column::String(v) => v.len(),
            Column::Float64(v) => v.len(),
            Column::Int64(v) => v.len(),
            Column::Bool(v) => v.len(),
        }
    }

    /// Whether the column holds no values
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            Column::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_floats(&self) -> Option<&[f64]> {
        match self {
            Column::Float64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ints(&self) -> Option<&[i64]> {
        match self {
            Column::Int64(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Column::String(values)
    }
}

impl From<Vec<&str>> for Column {
    fn from(values: Vec<&str>) -> Self {
        Column::String(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Column::Float64(values)
    }
}

impl From<Vec<i64>> for Column {
    fn from(values: Vec<i64>) -> Self {
        Column::Int64(values)
    }
}

impl From<Vec<bool>> for Column {
    fn from(values: Vec<bool>) -> Self {
        Column::Bool(values)
    }
}

/// An ordered collection of named columns.
///
/// Column names are unique; pushing a name that already exists replaces the
/// earlier column in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<(String, Column)>,
}

impl Frame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Frame::push_column`]
    pub fn with_column(mut self, name: impl Into<String>, column: impl Into<Column>) -> Self {
        self.push_column(name, column);
        self
    }

    /// Add a column, replacing any existing column with the same name
    pub fn push_column(&mut self, name: impl Into<String>, column: impl Into<Column>) {
        let name = name.into();
        let column = column.into();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = column,
            None => self.columns.push((name, column)),
        }
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    /// All columns in insertion order
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(n, c)| (n.as_str(), c))
    }

    /// Consume the frame, yielding its columns in insertion order
    pub fn into_columns(self) -> Vec<(String, Column)> {
        self.columns
    }

    /// Column names and their dtypes, in insertion order
    pub fn dtypes(&self) -> Vec<(&str, DType)> {
        self.columns().map(|(n, c)| (n, c.dtype())).collect()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows, taken from the first column
    pub fn height(&self) -> usize {
        self.columns.first().map(|(_, c)| c.len()).unwrap_or(0)
    }

    /// Parse a frame from a TOML document of column arrays.
    ///
    /// ```toml
    /// bus = ["a", "b"]
    /// voltage = [0.8, 1.5]
    /// connectors = [1, 2]
    /// ```
    ///
    /// Dtypes are inferred from the values: all integers give `int64`, any
    /// float among numbers gives `float64`, strings give `string`. An empty
    /// array is a `string` column.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::InvalidColumn` for values that are not homogeneous arrays.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(contents).map_err(ConfigError::Parse)?;
        let mut frame = Self::new();

        for (name, value) in &table {
            let toml::Value::Array(items) = value else {
                return Err(invalid(name, "expected an array"));
            };
            let cells = items
                .iter()
                .map(|item| match item {
                    toml::Value::String(s) => Ok(Cell::String(s.clone())),
                    toml::Value::Float(x) => Ok(Cell::Float(*x)),
                    toml::Value::Integer(i) => Ok(Cell::Int(*i)),
                    toml::Value::Boolean(b) => Ok(Cell::Bool(*b)),
                    _ => Err(invalid(name, "unsupported value type")),
                })
                .collect::<Result<Vec<_>>>()?;
            frame.push_column(name.clone(), infer_column(name, cells)?);
        }

        debug!(columns = frame.width(), rows = frame.height(), "parsed toml frame");
        Ok(frame)
    }

    /// Parse a frame from a JSON object of column arrays.
    ///
    /// Uses the same inference rules as [`Frame::from_toml_str`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` for malformed JSON and
    /// `ConfigError::InvalidColumn` for values that are not homogeneous arrays.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let object: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(contents).map_err(ConfigError::Json)?;
        let mut frame = Self::new();

        for (name, value) in &object {
            let serde_json::Value::Array(items) = value else {
                return Err(invalid(name, "expected an array"));
            };
            let cells = items
                .iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => Ok(Cell::String(s.clone())),
                    serde_json::Value::Bool(b) => Ok(Cell::Bool(*b)),
                    serde_json::Value::Number(n) if n.is_u64() && n.as_i64().is_none() => {
                        Err(invalid(name, "integer out of range for int64"))
                    }
                    serde_json::Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                        (Some(i), _) => Ok(Cell::Int(i)),
                        (None, Some(x)) => Ok(Cell::Float(x)),
                        (None, None) => Err(invalid(name, "number out of range")),
                    },
                    _ => Err(invalid(name, "unsupported value type")),
                })
                .collect::<Result<Vec<_>>>()?;
            frame.push_column(name.clone(), infer_column(name, cells)?);
        }

        debug!(columns = frame.width(), rows = frame.height(), "parsed json frame");
        Ok(frame)
    }

    /// Load a frame document from disk, choosing the parser by extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedFormat` for extensions other than
    /// `.toml` and `.json`, `ConfigError::ReadFile` if the file cannot be
    /// read, or any parse error from the selected format.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading frame");

        let extension = path.extension().and_then(|e| e.to_str());
        if !matches!(extension, Some("toml") | Some("json")) {
            return Err(ConfigError::UnsupportedFormat(path.to_path_buf()).into());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        match extension {
            Some("json") => Self::from_json_str(&contents),
            _ => Self::from_toml_str(&contents),
        }
    }
}

/// A single parsed document value, before column inference.
enum Cell {
    String(String),
    Float(f64),
    Int(i64),
    Bool(bool),
}

fn infer_column(name: &str, cells: Vec<Cell>) -> Result<Column> {
    let Some(first) = cells.first() else {
        return Ok(Column::String(Vec::new()));
    };

    match first {
        Cell::String(_) => cells
            .into_iter()
            .map(|cell| match cell {
                Cell::String(s) => Ok(s),
                _ => Err(invalid(name, "mixes strings with other values")),
            })
            .collect::<Result<Vec<_>>>()
            .map(Column::String),
        Cell::Bool(_) => cells
            .into_iter()
            .map(|cell| match cell {
                Cell::Bool(b) => Ok(b),
                _ => Err(invalid(name, "mixes booleans with other values")),
            })
            .collect::<Result<Vec<_>>>()
            .map(Column::Bool),
        Cell::Int(_) | Cell::Float(_) => {
            let any_float = cells.iter().any(|cell| matches!(cell, Cell::Float(_)));
            if any_float {
                cells
                    .into_iter()
                    .map(|cell| match cell {
                        Cell::Float(x) => Ok(x),
                        Cell::Int(i) => Ok(i as f64),
                        _ => Err(invalid(name, "mixes numbers with other values")),
                    })
                    .collect::<Result<Vec<_>>>()
                    .map(Column::Float64)
            } else {
                cells
                    .into_iter()
                    .map(|cell| match cell {
                        Cell::Int(i) => Ok(i),
                        _ => Err(invalid(name, "mixes numbers with other values")),
                    })
                    .collect::<Result<Vec<_>>>()
                    .map(Column::Int64)
            }
        }
    }
}

fn invalid(column: &str, reason: &str) -> crate::error::Error {
    ConfigError::InvalidColumn {
        column: column.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
