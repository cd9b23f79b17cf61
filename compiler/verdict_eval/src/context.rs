//! Read-only variable bindings for an evaluation.

use rustc_hash::FxHashMap;
use verdict_ir::{MapKey, Value, WireError};

/// Failure building a [`Context`] from JSON.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("context must be a JSON object, found {0}")]
    NotAnObject(&'static str),
    #[error("invalid context value for '{key}': {source}")]
    Value { key: String, source: WireError },
    #[error("invalid context JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Variables visible to `load`.
///
/// Nested data may be stored either as [`Value::Map`] hierarchies or as
/// flat dotted keys; [`Context::resolve`] handles both and any mix of the
/// two (`{"user.profile": {"age": 30}}` resolves `user.profile.age`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Context {
    values: FxHashMap<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Exact-name lookup, without path resolution.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Resolve a variable or dotted path. Misses yield [`Value::Undefined`].
    ///
    /// Bound prefixes of `path` are tried longest first; the remaining
    /// segments are walked through nested maps, falling back to the next
    /// shorter prefix on a miss. Segments that parse as integers also
    /// match integer map keys.
    pub fn resolve(&self, path: &str) -> Value {
        if let Some(value) = self.values.get(path) {
            return value.clone();
        }

        path.char_indices()
            .rev()
            .filter(|&(_, c)| c == '.')
            .find_map(|(split, _)| {
                let root = self.values.get(&path[..split])?;
                walk_segments(root, &path[split + 1..])
            })
            .cloned()
            .unwrap_or(Value::Undefined)
    }

    /// Build from a JSON object; values use the tagged wire encoding.
    pub fn from_json(json: &serde_json::Value) -> Result<Context, ContextError> {
        let serde_json::Value::Object(entries) = json else {
            return Err(ContextError::NotAnObject(json_kind(json)));
        };
        let mut context = Context::new();
        for (key, value) in entries {
            let value = Value::from_json(value).map_err(|source| ContextError::Value {
                key: key.clone(),
                source,
            })?;
            context.insert(key.clone(), value);
        }
        Ok(context)
    }

    pub fn from_json_str(text: &str) -> Result<Context, ContextError> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Context::from_json(&json)
    }
}

fn walk_segments<'a>(root: &'a Value, rest: &str) -> Option<&'a Value> {
    rest.split('.').try_fold(root, |current, segment| {
        let Value::Map(map) = current else {
            return None;
        };
        map.get(&MapKey::Str(segment.to_string())).or_else(|| {
            segment
                .parse::<i64>()
                .ok()
                .and_then(|i| map.get(&MapKey::Int(i)))
        })
    })
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Context::new();
        context.extend(iter);
        context
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Context {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

#[cfg(test)]
mod tests;
