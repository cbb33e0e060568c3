//! Registry of stat codes seen during import

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::property::{canonical_code, Property};
use crate::reference::{DISPLAY_TEMPLATES, PER_LEVEL_STATS};

/// One known stat code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservedStat {
    pub code: String,
    pub sample_text: String,
    /// Came from the built-in tables rather than imported data
    pub seeded: bool,
}

/// Thread-safe set of known stat codes
#[derive(Debug, Default)]
pub struct StatRegistry {
    known: Mutex<HashMap<String, ObservedStat>>,
}

impl StatRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-filled with every template and per-level code
    pub fn seeded() -> Self {
        let mut known = HashMap::new();
        for template in DISPLAY_TEMPLATES {
            known.insert(
                template.code.to_string(),
                ObservedStat {
                    code: template.code.to_string(),
                    sample_text: template.template.to_string(),
                    seeded: true,
                },
            );
        }
        for (code, stat_text) in PER_LEVEL_STATS.entries() {
            known.insert(
                (*code).to_string(),
                ObservedStat {
                    code: (*code).to_string(),
                    sample_text: (*stat_text).to_string(),
                    seeded: true,
                },
            );
        }
        Self {
            known: Mutex::new(known),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, ObservedStat>> {
        // Every write is a single insert, so a poisoned map is still consistent
        self.known.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a property's code. Returns true the first time a code is seen.
    pub fn observe(&self, prop: &Property) -> bool {
        if prop.is_raw() || prop.code.is_empty() {
            return false;
        }

        let code = canonical_code(&prop.code);
        let mut known = self.lock();
        if known.contains_key(code) {
            return false;
        }
        known.insert(
            code.to_string(),
            ObservedStat {
                code: code.to_string(),
                sample_text: prop.display_text.clone(),
                seeded: false,
            },
        );
        tracing::info!(code, sample = %prop.display_text, "New stat code observed");
        true
    }

    /// Whether a code (or its alias target) is known
    pub fn is_known(&self, code: &str) -> bool {
        self.lock().contains_key(canonical_code(code))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// All entries sorted by code
    pub fn snapshot(&self) -> Vec<ObservedStat> {
        let mut entries: Vec<ObservedStat> = self.lock().values().cloned().collect();
        entries.sort_by(|a, b| a.code.cmp(&b.code));
        entries
    }

    /// Entries first seen in imported data, sorted by code
    pub fn discovered(&self) -> Vec<ObservedStat> {
        self.snapshot().into_iter().filter(|s| !s.seeded).collect()
    }
}
