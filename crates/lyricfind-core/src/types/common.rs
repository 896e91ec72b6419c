//! Common types shared across the models.

use std::sync::Arc;

use serde_json::Value;

/// Raw provider payload a model was decoded from.
///
/// It is kept for escape-hatch access to fields the models do not project.
/// It is never serialized and never takes part in equality, so a model
/// compares equal to its own serialized-then-decoded copy.
#[derive(Debug, Clone, Default)]
pub struct RawSource(Option<Arc<Value>>);

impl RawSource {
    pub fn new(value: Value) -> Self {
        Self(Some(Arc::new(value)))
    }

    pub fn get(&self) -> Option<&Value> {
        self.0.as_deref()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl PartialEq for RawSource {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}
