//! Filtering pass driven by host lifecycle events.
//!
//! A pass runs once when the host finishes starting and again after every
//! successful data reload. Each pass works on a fresh snapshot and a fresh
//! copy of the rules; nothing carries over between passes.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for a pass:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` and
//! `tracing::warn!()` for internal details.

#![allow(clippy::result_large_err)]

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use advprune_core::errors::{ExError, ExErrorKind};
use advprune_core::invariants::find_dangling_survivors;
use advprune_core::{
    build_graph, compute_plan, log_op_end, log_op_error, log_op_start, AdvancementRegistry,
    ResourceResolver,
};
use advprune_core_types::schema::EVENT_SKIPPED;
use advprune_core_types::RequestId;
use advprune_store::errors::Result;
use advprune_store::RuleStore;
use chrono::Utc;

use crate::report::PassReport;

const OP_FILTER_PASS: &str = "filter_pass";

/// Host lifecycle notifications that may trigger a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The host finished starting and its advancement set is populated
    StartupComplete,
    /// The host finished reloading data
    ReloadComplete { success: bool },
}

impl LifecycleEvent {
    /// Failed reloads leave the previous set in place, so there is nothing to filter
    pub fn should_run(&self) -> bool {
        match self {
            LifecycleEvent::StartupComplete => true,
            LifecycleEvent::ReloadComplete { success } => *success,
        }
    }

    pub fn trigger(&self) -> &'static str {
        match self {
            LifecycleEvent::StartupComplete => "startup",
            LifecycleEvent::ReloadComplete { .. } => "reload",
        }
    }
}

/// What a call to [`Pruner::handle`] did
#[derive(Debug, Clone)]
pub enum PassOutcome {
    /// The event does not trigger a pass
    Skipped,
    /// The pass ran and found nothing to remove
    NoRemovals(PassReport),
    /// The pass removed at least one node
    Applied(PassReport),
    /// The pass failed before applying anything
    Failed(ExError),
}

impl PassOutcome {
    pub fn report(&self) -> Option<&PassReport> {
        match self {
            PassOutcome::NoRemovals(report) | PassOutcome::Applied(report) => Some(report),
            PassOutcome::Skipped | PassOutcome::Failed(_) => None,
        }
    }
}

/// Runs filtering passes against a host, reading rules from `S`
#[derive(Debug, Clone)]
pub struct Pruner<S> {
    store: S,
}

impl<S: RuleStore> Pruner<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// React to a lifecycle event
    ///
    /// Never returns an error and never panics: any failure, including a
    /// panic inside the host's collaborators, is logged once and reported
    /// as [`PassOutcome::Failed`] with the host left untouched.
    pub fn handle<H>(&self, event: LifecycleEvent, host: &mut H) -> PassOutcome
    where
        H: AdvancementRegistry + ResourceResolver,
    {
        if !event.should_run() {
            tracing::info!(
                component = module_path!(),
                op = OP_FILTER_PASS,
                event = EVENT_SKIPPED,
                trigger = event.trigger(),
            );
            return PassOutcome::Skipped;
        }

        let request_id = RequestId::new();
        let started_at = Utc::now();
        log_op_start!(
            OP_FILTER_PASS,
            request_id = %request_id,
            trigger = event.trigger()
        );
        let start = Instant::now();

        let result = panic::catch_unwind(AssertUnwindSafe(|| self.run_pass(host)))
            .unwrap_or_else(|payload| Err(panic_error(payload.as_ref())));

        let pass = match result {
            Ok(pass) => pass,
            Err(err) => {
                let err = err
                    .with_op(OP_FILTER_PASS)
                    .with_request_id(request_id.clone());
                log_op_error!(
                    OP_FILTER_PASS,
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    request_id = %request_id,
                    trigger = event.trigger()
                );
                return PassOutcome::Failed(err);
            }
        };

        let report = PassReport {
            request_id,
            trigger: event.trigger(),
            started_at,
            node_count: pass.node_count,
            removed: pass.removed,
            removal_digest: pass.removal_digest,
            protected_count: pass.protected_count,
            rescued_ancestors: pass.rescued_ancestors,
            closure_scans: pass.closure_scans,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        log_op_end!(
            OP_FILTER_PASS,
            duration_ms = report.duration_ms,
            request_id = %report.request_id,
            trigger = report.trigger,
            node_count = report.node_count,
            removed_count = report.removed_count(),
            protected_count = report.protected_count
        );

        if report.removed.is_empty() {
            PassOutcome::NoRemovals(report)
        } else {
            PassOutcome::Applied(report)
        }
    }

    fn run_pass<H>(&self, host: &mut H) -> Result<PassData>
    where
        H: AdvancementRegistry + ResourceResolver,
    {
        let rules = self.store.load()?.to_rule_set();
        let graph = build_graph(&*host, &*host)?;
        let plan = compute_plan(&graph, &rules);

        for (child, parent) in find_dangling_survivors(&graph, &plan) {
            tracing::warn!(node_id = %child, parent = %parent, "survivor left under a removed parent");
        }

        let removal_digest = plan.removals.digest()?;
        let protected_count = plan.protected.len();
        let removed = plan.removals.into_ids();

        if !removed.is_empty() {
            host.remove_batch(&removed).map_err(|e| {
                ExError::new(ExErrorKind::RemovalFailed)
                    .with_message(format!("host rejected a batch of {} removals", removed.len()))
                    .with_source(e.into())
            })?;

            // the batch is already applied, so a failed notification does not fail the pass
            if let Err(err) = host.notify_dependents() {
                let err = ExError::from(err);
                tracing::warn!(err.code = err.code(), error = %err, "dependent notification failed");
            }
        }

        tracing::debug!(
            removed_count = removed.len(),
            digest = %removal_digest,
            "removal batch applied"
        );

        Ok(PassData {
            node_count: graph.len(),
            removed,
            removal_digest,
            protected_count,
            rescued_ancestors: plan.rescued_ancestors,
            closure_scans: plan.closure_scans,
        })
    }
}

struct PassData {
    node_count: usize,
    removed: Vec<advprune_core::NodeId>,
    removal_digest: String,
    protected_count: usize,
    rescued_ancestors: usize,
    closure_scans: usize,
}

fn panic_error(payload: &(dyn Any + Send)) -> ExError {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());

    ExError::new(ExErrorKind::Internal).with_message(format!("filtering pass panicked: {}", detail))
}
