//! Form payload construction and the analysis request body

use crate::domain::Domain;
use crate::error::RiskMirrorError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Marker on health-form ids that mirror a finance-form field (`h_age` -> `age`)
pub const SHARED_FIELD_PREFIX: &str = "h_";

/// Strip one leading [`SHARED_FIELD_PREFIX`] from a field id
pub fn strip_field_prefix(id: &str) -> &str {
    id.strip_prefix(SHARED_FIELD_PREFIX).unwrap_or(id)
}

/// Flat field -> value record sent as `data`, keyed in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormPayload {
    fields: Map<String, Value>,
    #[serde(skip)]
    overwritten: Vec<String>,
}

impl FormPayload {
    /// Build a payload from `(element id, value)` pairs in document order.
    ///
    /// Ids are prefix-stripped. When two ids collapse to the same key the
    /// later value wins but the key keeps its first position.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut payload = Self::default();
        for (id, value) in fields {
            payload.insert(id.as_ref(), value.into());
        }
        payload
    }

    fn insert(&mut self, id: &str, value: String) {
        let key = strip_field_prefix(id);
        if let Some(previous) = self.fields.insert(key.to_string(), Value::String(value)) {
            tracing::warn!(
                key,
                field_id = id,
                previous = %previous,
                "form field overwrote an earlier field with the same key"
            );
            self.overwritten.push(key.to_string());
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Keys that were assigned more than once, in the order the later
    /// assignments happened
    pub fn overwritten_keys(&self) -> &[String] {
        &self.overwritten
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// Body of `POST /analyze`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub domain: Domain,
    pub data: FormPayload,
}

impl AnalyzeRequest {
    pub fn new(domain: Domain, data: FormPayload) -> Self {
        Self { domain, data }
    }

    pub fn to_json(&self) -> Result<String, RiskMirrorError> {
        Ok(serde_json::to_string(self)?)
    }
}
