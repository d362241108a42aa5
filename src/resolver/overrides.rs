use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Manual corrections for players whose printed name does not match a roster anchor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideTable {
    /// Full name to the alternate full name used on the roster page.
    #[serde(default)]
    pub player_names: HashMap<String, String>,
    /// Full name to a link fragment relative to the site's base URL.
    #[serde(default)]
    pub player_links: HashMap<String, String>,
}

impl OverrideTable {
    /// Loads the table from a JSON file; a missing file gives an empty table.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No override table at {:?}, using an empty one", path);
            return Ok(Self::default());
        }

        let table: Self = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        info!(
            "Loaded {} name and {} link overrides from {:?}",
            table.player_names.len(),
            table.player_links.len(),
            path
        );
        Ok(table)
    }

    pub fn alternate_name(&self, full_name: &str) -> Option<&str> {
        self.player_names.get(full_name).map(String::as_str)
    }

    pub fn link_fragment(&self, full_name: &str) -> Option<&str> {
        self.player_links.get(full_name).map(String::as_str)
    }
}
