mod loader;

use std::path::Path;

use anyhow::Result;

pub use loader::{load_cancer_tsv, merge_entries};

/// One cancer category: the display name used by survival tables and the
/// short code used for per-cancer model files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancerEntry {
    pub cancer_type: String,
    pub model_code: String,
}

/// Ordered cancer categories. The display names double as the allow-list
/// applied when reading survival tables.
#[derive(Debug, Clone)]
pub struct CancerMap {
    pub version: String,
    pub entries: Vec<CancerEntry>,
}

impl CancerMap {
    pub fn contains(&self, cancer_type: &str) -> bool {
        self.entries.iter().any(|e| e.cancer_type == cancer_type)
    }

    pub fn model_code(&self, cancer_type: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.cancer_type == cancer_type)
            .map(|e| e.model_code.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn load_builtin() -> Result<CancerMap> {
    let entries = loader::load_builtin_v1()?;
    Ok(CancerMap {
        version: "v1".to_string(),
        entries,
    })
}

/// Built-in map overlaid with user entries: matching display names are
/// replaced, new ones appended.
pub fn load_with_user(path: Option<&Path>) -> Result<CancerMap> {
    let mut map = load_builtin()?;
    if let Some(path) = path {
        let user = load_cancer_tsv(path)?;
        map.entries = merge_entries(map.entries, user);
    }
    Ok(map)
}
