use crate::output::{PlainFormat, TableFormat};
use std::collections::HashMap;

/// A single key-value pair pulled out of getprop, dumpsys or meminfo output.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Property {
    pub key: String,
    pub value: String,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Flattens a parsed property map into sorted rows.
    pub fn from_map(map: &HashMap<String, String>) -> Vec<Self> {
        let mut props: Vec<Self> = map
            .iter()
            .map(|(k, v)| Self::new(k.clone(), v.clone()))
            .collect();
        props.sort_by(|a, b| a.key.cmp(&b.key));
        props
    }
}

impl TableFormat for Property {
    fn headers() -> Vec<&'static str> {
        vec!["PROPERTY", "VALUE"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.key.clone(), self.value.clone()]
    }
}

impl PlainFormat for Property {
    fn plain(&self) -> String {
        format!("[{}]: [{}]", self.key, self.value)
    }
}
