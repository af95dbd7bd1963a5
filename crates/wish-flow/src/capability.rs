//! Paid-tier capability gate.
//!
//! Pro image and video generation require an externally-confirmed paid-tier
//! capability. The check is a precondition injected into the orchestrator,
//! not an ambient singleton: implementations may prompt an external
//! capability-selection flow at most once, and must be a no-op when the
//! capability is already present.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

/// Precondition check for paid-tier operations.
#[async_trait]
pub trait CapabilityGate: Send + Sync {
    /// Check whether the paid tier is available, prompting the user at most
    /// once if it is not. Returns `true` when the capability is present
    /// after the check.
    async fn ensure_paid_tier(&self) -> bool;
}

/// Gate for environments where the credential is ambient (injected key).
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysGranted;

#[async_trait]
impl CapabilityGate for AlwaysGranted {
    async fn ensure_paid_tier(&self) -> bool {
        true
    }
}

/// Gate that denies every paid-tier request. Useful for free-tier
/// deployments and for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverGranted;

#[async_trait]
impl CapabilityGate for NeverGranted {
    async fn ensure_paid_tier(&self) -> bool {
        false
    }
}

/// External capability store with a side-effecting selection prompt.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CapabilityProbe: Send + Sync {
    /// Whether the paid tier is currently granted.
    async fn has_paid_tier(&self) -> bool;

    /// Open the external capability-selection flow.
    async fn prompt_selection(&self);
}

/// Gate backed by an external probe, prompting at most once per gate.
///
/// When the capability is already present the check is a pure no-op. When
/// it is missing the selection flow is opened once; later checks just
/// re-read the probe.
pub struct PromptOnceGate<P> {
    probe: P,
    prompted: AtomicBool,
}

impl<P> PromptOnceGate<P> {
    pub fn new(probe: P) -> Self {
        Self {
            probe,
            prompted: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl<P: CapabilityProbe> CapabilityGate for PromptOnceGate<P> {
    async fn ensure_paid_tier(&self) -> bool {
        if self.probe.has_paid_tier().await {
            return true;
        }
        if !self.prompted.swap(true, Ordering::SeqCst) {
            self.probe.prompt_selection().await;
            return self.probe.has_paid_tier().await;
        }
        false
    }
}
