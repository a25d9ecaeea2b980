use serde_json::{Map, Value};

use crate::{Error, Result};

/// Read-only view over one JSON object in a detail payload
///
/// Tracks the dotted path of the object so every error names the exact field,
/// e.g. `containers[2].lastStatus`. A JSON `null` counts as absent.
pub(crate) struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: String,
}

impl<'a> Fields<'a> {
    /// Wrap the top-level `detail` payload; its keys are named without a prefix
    pub(crate) fn detail(value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                map,
                path: String::new(),
            }),
            _ => Err(Error::mismatch("detail", "object")),
        }
    }

    /// Wrap a value that must be an object
    pub(crate) fn object(value: &'a Value, path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        match value {
            Value::Object(map) => Ok(Self { map, path }),
            _ => Err(Error::mismatch(path, "object")),
        }
    }

    fn path_of(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    pub(crate) fn required_str(&self, key: &str) -> Result<String> {
        self.optional_str(key)?
            .ok_or_else(|| Error::missing(self.path_of(key)))
    }

    pub(crate) fn required_bool(&self, key: &str) -> Result<bool> {
        match self.get(key) {
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(Error::mismatch(self.path_of(key), "boolean")),
            None => Err(Error::missing(self.path_of(key))),
        }
    }

    pub(crate) fn optional_str(&self, key: &str) -> Result<Option<String>> {
        match self.get(key) {
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(Error::mismatch(self.path_of(key), "string")),
            None => Ok(None),
        }
    }

    pub(crate) fn optional_str_list(&self, key: &str) -> Result<Option<Vec<String>>> {
        let Some(items) = self.optional_array(key)? else {
            return Ok(None);
        };

        items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(Error::mismatch(
                    format!("{}[{}]", self.path_of(key), i),
                    "string",
                )),
            })
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    pub(crate) fn optional_array(&self, key: &str) -> Result<Option<&'a Vec<Value>>> {
        match self.get(key) {
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(_) => Err(Error::mismatch(self.path_of(key), "array")),
            None => Ok(None),
        }
    }

    /// Views over each object in an optional array field
    pub(crate) fn objects(&self, key: &str) -> Result<Vec<Fields<'a>>> {
        let Some(items) = self.optional_array(key)? else {
            return Ok(Vec::new());
        };

        items
            .iter()
            .enumerate()
            .map(|(i, item)| Fields::object(item, format!("{}[{}]", self.path_of(key), i)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_counts_as_absent() {
        let value = json!({"reason": null});
        let fields = Fields::object(&value, "").unwrap();
        assert_eq!(fields.optional_str("reason").unwrap(), None);
        assert!(matches!(
            fields.required_str("reason"),
            Err(Error::MissingField { field }) if field == "reason"
        ));
    }

    #[test]
    fn test_nested_paths() {
        let value = json!({"containers": [{"name": "a"}, {"name": 7}]});
        let fields = Fields::object(&value, "").unwrap();
        let entries = fields.objects("containers").unwrap();

        assert_eq!(entries[0].required_str("name").unwrap(), "a");
        let err = entries[1].required_str("name").unwrap_err();
        assert_eq!(err.field(), Some("containers[1].name"));
    }

    #[test]
    fn test_list_element_mismatch() {
        let value = json!({"arns": ["a", 1]});
        let fields = Fields::object(&value, "").unwrap();
        let err = fields.optional_str_list("arns").unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch { ref field, expected: "string" } if field == "arns[1]"
        ));
    }

    #[test]
    fn test_non_object_is_mismatch() {
        let value = json!("text");
        assert!(matches!(
            Fields::object(&value, "detail"),
            Err(Error::TypeMismatch { ref field, expected: "object" }) if field == "detail"
        ));
    }
}
