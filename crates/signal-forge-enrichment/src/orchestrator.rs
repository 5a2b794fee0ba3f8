// crates/signal-forge-enrichment/src/orchestrator.rs
// ============================================================================
// Module: Enrichment Orchestrator
// Description: Concurrent provider fan-out with caching and anomaly flagging.
// Purpose: Produce per-provider evidence maps with partial-failure tolerance.
// Dependencies: signal-forge-core, tokio, crate::{anomaly, audit, credential}
// ============================================================================

//! ## Overview
//! The orchestrator fans out to registered providers concurrently. Per
//! provider it reuses fresh cached evidence, otherwise fetches under a
//! wall-clock timeout, checks the payload against the key's prior payloads
//! (the expiring cached envelope and its retired history) for suspicious
//! metric movement, and stores the result. Unsupported scopes are
//! skipped silently; any other failure is recorded and never blocks the
//! remaining providers. Duplicate concurrent requests for one cache key
//! coalesce onto a single in-flight fetch.
//!
//! The cache is scoped to the orchestrator instance: `new` creates it empty
//! and `close` drains it. Cache writes are synchronous, so a fan-out
//! abandoned at its deadline never leaves a half-written entry behind.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use signal_forge_core::BrandDomain;
use signal_forge_core::CacheError;
use signal_forge_core::CacheKey;
use signal_forge_core::Clock;
use signal_forge_core::EntityScope;
use signal_forge_core::Evidence;
use signal_forge_core::EvidenceCache;
use signal_forge_core::IssuerId;
use signal_forge_core::ProductId;
use signal_forge_core::ProviderAdapter;
use signal_forge_core::ProviderName;
use signal_forge_core::VerifiableCredential;
use tokio::sync::Mutex as AsyncMutex;
use tokio::sync::OnceCell;
use tokio::task::JoinSet;

use crate::anomaly::detect_metric_anomaly;
use crate::audit::AuditSink;
use crate::audit::ENRICHMENT_EVENT;
use crate::audit::EnrichmentEvent;
use crate::audit::ProviderOutcome;
use crate::credential::CredentialError;
use crate::credential::issue_credential;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the enrichment orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct OrchestratorConfig {
    /// Wall-clock timeout per provider call, in milliseconds.
    pub provider_timeout_ms: u64,
    /// Optional deadline for a whole fan-out; pending provider calls past it
    /// are abandoned and partial results returned.
    pub fan_out_deadline_ms: Option<u64>,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            provider_timeout_ms: 10_000,
            fan_out_deadline_ms: None,
        }
    }
}

// ============================================================================
// SECTION: Outcome Types
// ============================================================================

/// One provider failure recorded during a fan-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderFailure {
    /// Provider that failed.
    pub provider: ProviderName,
    /// Failure reason, safe for logs.
    pub reason: String,
}

/// Result of one enrichment fan-out.
///
/// # Invariants
/// - A provider appears in at most one of `evidence`, `skipped`, `failures`.
/// - Iteration order of the evidence map carries no meaning.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EnrichmentOutcome {
    /// Evidence per provider that succeeded.
    pub evidence: BTreeMap<ProviderName, Evidence>,
    /// Providers skipped because the scope is unsupported.
    pub skipped: Vec<ProviderName>,
    /// Providers that failed transiently.
    pub failures: Vec<ProviderFailure>,
}

/// Terminal state of one provider fetch, shared between coalesced callers.
#[derive(Debug, Clone)]
enum FetchReport {
    /// Evidence was produced (freshly fetched or reused from cache).
    Fetched {
        /// The evidence envelope handed to callers.
        evidence: Evidence,
    },
    /// Provider has no data at the requested scope.
    Unsupported,
    /// Provider call failed transiently.
    Failed(String),
}

// ============================================================================
// SECTION: Orchestrator
// ============================================================================

/// Multi-provider enrichment engine with per-key request coalescing.
pub struct EnrichmentOrchestrator {
    /// Registered adapters keyed by provider name.
    providers: BTreeMap<ProviderName, Arc<dyn ProviderAdapter>>,
    /// Shared state handed to spawned provider tasks.
    shared: Arc<SharedState>,
}

/// State shared between the orchestrator and its provider tasks.
struct SharedState {
    /// Evidence cache owning live envelopes and their history.
    cache: Arc<dyn EvidenceCache>,
    /// Clock for freshness checks and event stamps.
    clock: Arc<dyn Clock>,
    /// Audit sink receiving per-provider outcome events.
    audit: Arc<dyn AuditSink>,
    /// Timeout and deadline configuration.
    config: OrchestratorConfig,
    /// In-flight fetches keyed by cache key; joiners await the same cell.
    in_flight: AsyncMutex<BTreeMap<CacheKey, Arc<OnceCell<FetchReport>>>>,
}

impl EnrichmentOrchestrator {
    /// Creates an orchestrator with no registered providers.
    #[must_use]
    pub fn new(
        cache: Arc<dyn EvidenceCache>,
        clock: Arc<dyn Clock>,
        audit: Arc<dyn AuditSink>,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            providers: BTreeMap::new(),
            shared: Arc::new(SharedState {
                cache,
                clock,
                audit,
                config,
                in_flight: AsyncMutex::new(BTreeMap::new()),
            }),
        }
    }

    /// Registers a provider adapter under its own name.
    pub fn register_provider(&mut self, adapter: Arc<dyn ProviderAdapter>) {
        self.providers.insert(adapter.name(), adapter);
    }

    /// Returns the registered provider names.
    #[must_use]
    pub fn provider_names(&self) -> Vec<ProviderName> {
        self.providers.keys().cloned().collect()
    }

    /// Drains the instance cache and any in-flight bookkeeping.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the cache backend fails.
    pub async fn close(&self) -> Result<(), CacheError> {
        self.shared.in_flight.lock().await.clear();
        self.shared.cache.clear()
    }

    /// Enriches a brand from the selected providers, defaulting to every
    /// registered provider. Unknown provider names are ignored.
    pub async fn enrich_brand(
        &self,
        domain: &BrandDomain,
        providers: Option<&[ProviderName]>,
    ) -> EnrichmentOutcome {
        let targets = self.select_providers(providers, EntityScope::Brand);
        self.fan_out(targets, EntityScope::Brand, domain.as_str().to_string()).await
    }

    /// Enriches a product from the selected providers, defaulting to the
    /// registered providers that declare product scope. Unknown provider
    /// names are ignored.
    pub async fn enrich_product(
        &self,
        product_id: &ProductId,
        providers: Option<&[ProviderName]>,
    ) -> EnrichmentOutcome {
        let targets = self.select_providers(providers, EntityScope::Product);
        self.fan_out(targets, EntityScope::Product, product_id.as_str().to_string()).await
    }

    /// Issues a verifiable credential over an evidence payload.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] when the payload cannot be canonicalized.
    pub fn issue_credential(
        &self,
        evidence: &Evidence,
        issuer: &IssuerId,
    ) -> Result<VerifiableCredential, CredentialError> {
        issue_credential(evidence, issuer, self.shared.clock.now())
    }

    /// Resolves the provider set for one fan-out.
    fn select_providers(
        &self,
        filter: Option<&[ProviderName]>,
        scope: EntityScope,
    ) -> Vec<(ProviderName, Arc<dyn ProviderAdapter>)> {
        match filter {
            Some(names) => names
                .iter()
                .filter_map(|name| {
                    self.providers.get(name).map(|adapter| (name.clone(), Arc::clone(adapter)))
                })
                .collect(),
            None => self
                .providers
                .iter()
                .filter(|(_, adapter)| scope == EntityScope::Brand || adapter.supports(scope))
                .map(|(name, adapter)| (name.clone(), Arc::clone(adapter)))
                .collect(),
        }
    }

    /// Runs the concurrent fan-out and assembles the outcome.
    async fn fan_out(
        &self,
        targets: Vec<(ProviderName, Arc<dyn ProviderAdapter>)>,
        scope: EntityScope,
        subject: String,
    ) -> EnrichmentOutcome {
        let collected = Arc::new(AsyncMutex::new(EnrichmentOutcome::default()));
        let mut tasks: JoinSet<()> = JoinSet::new();
        for (name, adapter) in targets {
            let shared = Arc::clone(&self.shared);
            let sink = Arc::clone(&collected);
            let subject = subject.clone();
            tasks.spawn(async move {
                let report = shared.enrich_one(name.clone(), adapter, scope, subject).await;
                let mut outcome = sink.lock().await;
                match report {
                    FetchReport::Fetched { evidence } => {
                        outcome.evidence.insert(name, evidence);
                    }
                    FetchReport::Unsupported => outcome.skipped.push(name),
                    FetchReport::Failed(reason) => outcome.failures.push(ProviderFailure {
                        provider: name,
                        reason,
                    }),
                }
            });
        }

        match self.shared.config.fan_out_deadline_ms {
            Some(deadline_ms) => {
                let deadline = Duration::from_millis(deadline_ms);
                if tokio::time::timeout(deadline, drain_tasks(&mut tasks)).await.is_err() {
                    tasks.abort_all();
                }
            }
            None => drain_tasks(&mut tasks).await,
        }

        let mut guard = collected.lock().await;
        std::mem::take(&mut *guard)
    }
}

impl SharedState {
    /// Resolves one provider: cache reuse, then a coalesced fetch.
    async fn enrich_one(
        &self,
        name: ProviderName,
        adapter: Arc<dyn ProviderAdapter>,
        scope: EntityScope,
        subject: String,
    ) -> FetchReport {
        let key = CacheKey::new(name.clone(), scope, subject.clone());
        let now = self.clock.now();
        if let Ok(Some(evidence)) = self.cache.get(&key)
            && evidence.is_fresh(now)
        {
            self.emit(&name, scope, &subject, ProviderOutcome::CacheHit, None);
            return FetchReport::Fetched {
                evidence,
            };
        }

        let cell = {
            let mut guard = self.in_flight.lock().await;
            Arc::clone(guard.entry(key.clone()).or_insert_with(|| Arc::new(OnceCell::new())))
        };
        let report = cell
            .get_or_init(|| self.fetch_and_store(&name, Arc::clone(&adapter), scope, &key))
            .await
            .clone();
        {
            let mut guard = self.in_flight.lock().await;
            if let Some(existing) = guard.get(&key)
                && Arc::ptr_eq(existing, &cell)
            {
                guard.remove(&key);
            }
        }
        report
    }

    /// Fetches from the adapter under the call timeout, runs anomaly
    /// detection against the key's prior payloads, and stores the result.
    async fn fetch_and_store(
        &self,
        name: &ProviderName,
        adapter: Arc<dyn ProviderAdapter>,
        scope: EntityScope,
        key: &CacheKey,
    ) -> FetchReport {
        let subject = key.subject.clone();
        let timeout = Duration::from_millis(self.config.provider_timeout_ms);
        let fetched = match scope {
            EntityScope::Brand => {
                let domain = BrandDomain::new(subject.clone());
                tokio::time::timeout(timeout, adapter.fetch_brand(&domain)).await
            }
            EntityScope::Product => {
                let product = ProductId::new(subject.clone());
                tokio::time::timeout(timeout, adapter.fetch_product(&product)).await
            }
        };

        match fetched {
            Err(_elapsed) => {
                let reason = "provider call timed out".to_string();
                self.emit(name, scope, &subject, ProviderOutcome::Failed, Some(reason.clone()));
                FetchReport::Failed(reason)
            }
            Ok(Err(err)) if err.is_unsupported() => {
                self.emit(name, scope, &subject, ProviderOutcome::SkippedUnsupported, None);
                FetchReport::Unsupported
            }
            Ok(Err(err)) => {
                let reason = err.to_string();
                self.emit(name, scope, &subject, ProviderOutcome::Failed, Some(reason.clone()));
                FetchReport::Failed(reason)
            }
            Ok(Ok(mut evidence)) => {
                // The detection baseline is the most recent prior payload:
                // the still-cached envelope when one exists, else the last
                // retired history entry.
                let mut history = self.cache.history(key).unwrap_or_default();
                if let Ok(Some(previous)) = self.cache.get(key) {
                    history.push(previous.data);
                }
                let anomalous = detect_metric_anomaly(&evidence.data, &history);
                if anomalous {
                    evidence.flag_anomalous();
                }
                let detail = self
                    .cache
                    .put(key, &evidence)
                    .err()
                    .map(|err| format!("cache write failed: {err}"));
                let outcome = if anomalous {
                    ProviderOutcome::AnomalyFlagged
                } else {
                    ProviderOutcome::Fetched
                };
                self.emit(name, scope, &subject, outcome, detail);
                FetchReport::Fetched {
                    evidence,
                }
            }
        }
    }

    /// Records one audit event.
    fn emit(
        &self,
        provider: &ProviderName,
        entity: EntityScope,
        subject: &str,
        outcome: ProviderOutcome,
        detail: Option<String>,
    ) {
        self.audit.record(&EnrichmentEvent {
            event: ENRICHMENT_EVENT,
            provider: provider.clone(),
            entity,
            subject: subject.to_string(),
            outcome,
            detail,
            timestamp: self.clock.now(),
        });
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Awaits every spawned provider task.
async fn drain_tasks(tasks: &mut JoinSet<()>) {
    while tasks.join_next().await.is_some() {}
}
