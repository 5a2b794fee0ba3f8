// system-tests/src/lib.rs
// ============================================================================
// Module: Signal Forge System Tests Library
// Description: Shared fixtures for end-to-end scenario suites.
// Purpose: Provide scripted adapters and sources for system-test scenarios.
// Dependencies: signal-forge-core, async-trait, serde_json
// ============================================================================

//! ## Overview
//! This crate hosts the scripted provider adapter and fixture helpers used
//! by the end-to-end scenario suites in `system-tests/tests`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use async_trait::async_trait;
use serde_json::Map;
use serde_json::Value;
use signal_forge_core::AdapterError;
use signal_forge_core::BrandDomain;
use signal_forge_core::Clock;
use signal_forge_core::EntityScope;
use signal_forge_core::Evidence;
use signal_forge_core::ProductId;
use signal_forge_core::ProviderAdapter;
use signal_forge_core::ProviderName;
use signal_forge_core::SourceId;

// ============================================================================
// SECTION: Scripted Adapter
// ============================================================================

/// Brand-scope adapter returning scripted payloads in sequence; the last
/// payload repeats once the script is exhausted.
pub struct ScriptedBrandAdapter {
    /// Registered provider name.
    name: String,
    /// TTL stamped on produced evidence.
    ttl_hours: u32,
    /// Clock stamping retrieval instants.
    clock: Arc<dyn Clock>,
    /// Remaining scripted payloads.
    payloads: Mutex<VecDeque<Map<String, Value>>>,
    /// Number of real adapter invocations.
    calls: AtomicUsize,
}

impl ScriptedBrandAdapter {
    /// Creates an adapter with the given payload script.
    #[must_use]
    pub fn new(
        name: &str,
        ttl_hours: u32,
        clock: Arc<dyn Clock>,
        payloads: Vec<Map<String, Value>>,
    ) -> Self {
        Self {
            name: name.to_string(),
            ttl_hours,
            clock,
            payloads: Mutex::new(payloads.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Returns the number of real adapter invocations.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Produces the next scripted payload.
    fn next_payload(&self) -> Map<String, Value> {
        let mut guard = match self.payloads.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if guard.len() > 1 {
            guard.pop_front().unwrap_or_default()
        } else {
            guard.front().cloned().unwrap_or_default()
        }
    }
}

#[async_trait]
impl ProviderAdapter for ScriptedBrandAdapter {
    fn name(&self) -> ProviderName {
        ProviderName::new(&self.name)
    }

    fn supports(&self, scope: EntityScope) -> bool {
        scope == EntityScope::Brand
    }

    async fn fetch_brand(&self, domain: &BrandDomain) -> Result<Evidence, AdapterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Evidence {
            source: ProviderName::new(&self.name),
            entity: EntityScope::Brand,
            source_id: SourceId::namespaced(&self.name, "domain", domain.as_str()),
            retrieved_at: self.clock.now(),
            evidence_url: format!("https://example.test/{domain}"),
            data: self.next_payload(),
            signature: None,
            ttl_hours: self.ttl_hours,
        })
    }

    async fn fetch_product(&self, _product_id: &ProductId) -> Result<Evidence, AdapterError> {
        Err(AdapterError::Unsupported {
            scope: EntityScope::Product,
        })
    }
}

// ============================================================================
// SECTION: Fixture Helpers
// ============================================================================

/// Builds a payload carrying review metrics.
#[must_use]
pub fn review_metrics_payload(avg_rating: f64, count_total: i64) -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert("avg_rating".to_string(), Value::from(avg_rating));
    payload.insert("count_total".to_string(), Value::from(count_total));
    payload
}
