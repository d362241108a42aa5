use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Names of the fields that fell back to their default during one scrape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorLedger {
    fields: BTreeSet<&'static str>,
}

impl ErrorLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, field: &'static str) {
        if self.fields.insert(field) {
            debug!("Extraction failed for field `{field}`");
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_each_field_once() {
        let mut ledger = ErrorLedger::new();
        ledger.record("snaps");
        ledger.record("name");
        ledger.record("snaps");

        assert_eq!(ledger.len(), 2);
        assert!(ledger.contains("snaps"));
        assert!(!ledger.contains("team"));
        assert_eq!(serde_json::to_string(&ledger).unwrap(), r#"["name","snaps"]"#);
    }
}
