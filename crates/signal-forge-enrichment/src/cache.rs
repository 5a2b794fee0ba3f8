// crates/signal-forge-enrichment/src/cache.rs
// ============================================================================
// Module: In-Memory Evidence Cache
// Description: Mutex-backed evidence cache with per-key payload history.
// Purpose: Provide the default in-process cache behind the cache contract.
// Dependencies: signal-forge-core, serde_json
// ============================================================================

//! ## Overview
//! The in-memory cache keeps one live evidence envelope per `(provider,
//! entity, id)` key plus a bounded history of retired payloads, oldest
//! first. Together with the live payload, the history forms the comparison
//! window for anomaly detection on the next refresh. All reads and writes
//! serialize on one mutex, so per-key operations observe a total order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Mutex;

use serde_json::Map;
use serde_json::Value;
use signal_forge_core::CacheError;
use signal_forge_core::CacheKey;
use signal_forge_core::Evidence;
use signal_forge_core::EvidenceCache;

// ============================================================================
// SECTION: Cache Implementation
// ============================================================================

/// Retired payloads kept per key for anomaly detection.
const HISTORY_DEPTH: usize = 32;

/// One cache slot: the live envelope and its retired payloads.
#[derive(Debug, Clone)]
struct CacheSlot {
    /// Live evidence envelope.
    evidence: Evidence,
    /// Retired payloads, oldest first.
    history: Vec<Map<String, Value>>,
}

/// In-process evidence cache with per-key history.
#[derive(Debug, Default)]
pub struct InMemoryEvidenceCache {
    /// Slot map protected by a mutex.
    slots: Mutex<BTreeMap<CacheKey, CacheSlot>>,
}

impl InMemoryEvidenceCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EvidenceCache for InMemoryEvidenceCache {
    fn get(&self, key: &CacheKey) -> Result<Option<Evidence>, CacheError> {
        let guard = self
            .slots
            .lock()
            .map_err(|_| CacheError::Store("cache mutex poisoned".to_string()))?;
        Ok(guard.get(key).map(|slot| slot.evidence.clone()))
    }

    fn put(&self, key: &CacheKey, evidence: &Evidence) -> Result<(), CacheError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|_| CacheError::Store("cache mutex poisoned".to_string()))?;
        match guard.get_mut(key) {
            Some(slot) => {
                slot.history.push(slot.evidence.data.clone());
                if slot.history.len() > HISTORY_DEPTH {
                    slot.history.remove(0);
                }
                slot.evidence = evidence.clone();
            }
            None => {
                guard.insert(
                    key.clone(),
                    CacheSlot {
                        evidence: evidence.clone(),
                        history: Vec::new(),
                    },
                );
            }
        }
        Ok(())
    }

    fn history(&self, key: &CacheKey) -> Result<Vec<Map<String, Value>>, CacheError> {
        let guard = self
            .slots
            .lock()
            .map_err(|_| CacheError::Store("cache mutex poisoned".to_string()))?;
        Ok(guard.get(key).map(|slot| slot.history.clone()).unwrap_or_default())
    }

    fn clear(&self) -> Result<(), CacheError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|_| CacheError::Store("cache mutex poisoned".to_string()))?;
        guard.clear();
        Ok(())
    }
}
