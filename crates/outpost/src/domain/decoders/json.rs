//! Path-tracking accessors over a parsed JSON document

use serde_json::{Map, Value};

use crate::domain::errors::DecodeError;

/// Parse a raw payload; syntax errors are reported at `$`
pub(crate) fn parse(raw: &str) -> Result<Value, DecodeError> {
    serde_json::from_str(raw).map_err(|e| DecodeError::new("$", e.to_string()))
}

/// A JSON object plus the path it was reached by
pub(crate) struct JsonObject<'a> {
    map: &'a Map<String, Value>,
    path: String,
    ignore_case: bool,
}

impl<'a> JsonObject<'a> {
    pub(crate) fn root(doc: &'a Value) -> Result<Self, DecodeError> {
        let map = doc
            .as_object()
            .ok_or_else(|| DecodeError::wrong_type("$", "object"))?;
        Ok(Self {
            map,
            path: String::new(),
            ignore_case: false,
        })
    }

    /// Match property names without regard to ASCII case
    pub(crate) fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    pub(crate) fn path_of(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn lookup(&self, key: &str) -> Option<&'a Value> {
        if let Some(value) = self.map.get(key) {
            return Some(value);
        }
        if !self.ignore_case {
            return None;
        }
        self.map
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value)
    }

    fn require(&self, key: &str) -> Result<&'a Value, DecodeError> {
        self.lookup(key)
            .ok_or_else(|| DecodeError::missing(self.path_of(key)))
    }

    /// Present and non-null value, if any
    pub(crate) fn optional(&self, key: &str) -> Option<&'a Value> {
        self.lookup(key).filter(|v| !v.is_null())
    }

    pub(crate) fn object(&self, key: &str) -> Result<JsonObject<'a>, DecodeError> {
        let path = self.path_of(key);
        let map = self
            .require(key)?
            .as_object()
            .ok_or_else(|| DecodeError::wrong_type(path.clone(), "object"))?;
        Ok(JsonObject {
            map,
            path,
            ignore_case: self.ignore_case,
        })
    }

    pub(crate) fn f64(&self, key: &str) -> Result<f64, DecodeError> {
        self.require(key)?
            .as_f64()
            .ok_or_else(|| DecodeError::wrong_type(self.path_of(key), "number"))
    }

    pub(crate) fn i32(&self, key: &str) -> Result<i32, DecodeError> {
        self.require(key)?
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| DecodeError::wrong_type(self.path_of(key), "32-bit integer"))
    }

    pub(crate) fn string(&self, key: &str) -> Result<String, DecodeError> {
        self.require(key)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| DecodeError::wrong_type(self.path_of(key), "string"))
    }
}
