use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::BarChartError;

/// A single cell of a record.
///
/// `Missing` is what extraction yields when a record has no entry for the
/// requested field, which keeps it distinct from an explicit `Null`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f32),
    Bool(bool),
    Null,
    Missing,
}

impl FieldValue {
    /// Converts one JSON cell.
    ///
    /// Numbers that an `f32` cannot hold exactly, such as integers above 2^24
    /// or values beyond `f32::MAX`, are kept as their JSON text. They still
    /// parse as numbers for the value axis but stay distinct as categories.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => match n.as_f64() {
                Some(wide) if fits_f32(wide) => FieldValue::Number(wide as f32),
                _ => FieldValue::Text(n.to_string()),
            },
            Value::String(s) => FieldValue::Text(s.clone()),
            nested => FieldValue::Text(nested.to_string()),
        }
    }

    /// Numeric interpretation used for the value axis.
    ///
    /// Numbers pass through, strings are parsed, and booleans count as 0 or 1.
    pub fn as_number(&self) -> Option<f32> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse::<f32>().ok(),
            FieldValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            FieldValue::Null | FieldValue::Missing => None,
        }
    }

    /// Band scale key for this value
    pub fn as_category(&self) -> Category {
        match self {
            FieldValue::Text(s) => Category::Label(s.clone()),
            FieldValue::Number(n) => Category::Label(n.to_string()),
            FieldValue::Bool(b) => Category::Label(b.to_string()),
            FieldValue::Null | FieldValue::Missing => Category::Missing,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Null | FieldValue::Missing)
    }
}

/// Whether the shortest `f32` rendering of `value` reads back as `value`
fn fits_f32(value: f64) -> bool {
    let narrow = value as f32;
    narrow.is_finite() && narrow.to_string().parse::<f64>() == Ok(value)
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Null => write!(f, "null"),
            FieldValue::Missing => write!(f, "undefined"),
        }
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Key of a band on the categorical axis. Records whose x value is absent
/// share the `Missing` band.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Label(String),
    Missing,
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Label(label) => write!(f, "{label}"),
            Category::Missing => write!(f, "undefined"),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::Label(value.to_string())
    }
}

/// An ordered mapping from field name to value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Value of `name`, or [`FieldValue::Missing`] when the record lacks it
    pub fn field(&self, name: &str) -> FieldValue {
        self.fields.get(name).cloned().unwrap_or(FieldValue::Missing)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Converts a JSON object into a record, keeping key order
    pub fn from_json(value: Value) -> Result<Self, BarChartError> {
        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(BarChartError::Data(format!(
                    "expected a JSON object for each record, received {other}"
                )));
            }
        };
        Ok(object
            .iter()
            .map(|(name, v)| (name.clone(), FieldValue::from_json(v)))
            .collect())
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Ordered collection of records. Array position is each record's identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parses a JSON array of objects
    pub fn from_json_str(json: &str) -> Result<Self, BarChartError> {
        let rows: Vec<Value> = serde_json::from_str(json)?;
        let records = rows
            .into_iter()
            .map(Record::from_json)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Projects every record onto one field, preserving record order.
///
/// No deduplication or type checks happen here. Records without the field
/// contribute [`FieldValue::Missing`].
pub fn extract_field(dataset: &Dataset, field: &str) -> Vec<FieldValue> {
    dataset.iter().map(|record| record.field(field)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_json_str(
            r#"[
                {"cat": "A", "val": 10},
                {"cat": "B", "val": "20"},
                {"val": true},
                {"cat": null, "val": [1, 2]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_extract_preserves_order_and_missing() {
        let dataset = sample();
        let cats = extract_field(&dataset, "cat");
        assert_eq!(
            cats,
            vec![
                FieldValue::Text("A".to_string()),
                FieldValue::Text("B".to_string()),
                FieldValue::Missing,
                FieldValue::Null,
            ]
        );
        assert_eq!(extract_field(&dataset, "nope").len(), 4);
    }

    #[test]
    fn test_numeric_coercion() {
        let vals: Vec<_> = extract_field(&sample(), "val")
            .iter()
            .map(FieldValue::as_number)
            .collect();
        assert_eq!(vals, vec![Some(10.0), Some(20.0), Some(1.0), None]);
    }

    #[test]
    fn test_categories() {
        assert_eq!(FieldValue::Number(10.0).as_category(), Category::from("10"));
        assert_eq!(FieldValue::Number(2.5).as_category(), Category::from("2.5"));
        assert_eq!(FieldValue::Missing.as_category(), Category::Missing);
        assert_eq!(Category::Missing.to_string(), "undefined");
    }

    #[test]
    fn test_wide_numbers_keep_their_text() {
        let dataset = Dataset::from_json_str(
            r#"[{"id": 16777216, "v": 0.1}, {"id": 16777217, "v": 1e39}]"#,
        )
        .unwrap();
        let ids = extract_field(&dataset, "id");
        assert_eq!(ids[0], FieldValue::Number(16777216.0));
        assert_eq!(ids[1], FieldValue::Text("16777217".to_string()));
        assert_ne!(ids[0].as_category(), ids[1].as_category());
        assert_eq!(ids[1].as_number(), Some(16777216.0));

        let values = extract_field(&dataset, "v");
        assert_eq!(values[0], FieldValue::Number(0.1));
        assert!(values[1].as_number().is_some_and(f32::is_infinite));
    }

    #[test]
    fn test_record_rejects_non_object() {
        let err = Dataset::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, BarChartError::Data(_)));
    }

    #[test]
    fn test_record_keeps_key_order() {
        let record = Record::new().with("z", 1.0_f32).with("a", "x");
        assert_eq!(record.field_names().collect::<Vec<_>>(), vec!["z", "a"]);
    }
}
