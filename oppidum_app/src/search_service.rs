use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;

use oppidum_game::{
    models::catalog::SlotCandidates,
    solver::{self, CombinationResult},
};
use oppidum_types::{
    common::StatLine,
    errors::{AppError, ApplicationError},
    slots::EnabledSlots,
    traits::TraitTable,
};

/// Everything a single search needs, owned so the enumeration can run on a
/// blocking thread. The solver never mutates any of it.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub candidates: SlotCandidates,
    pub enabled: EnabledSlots,
    pub targets: StatLine,
    pub trait_table: TraitTable,
    pub max_results: usize,
}

/// Runs combination searches off the async runtime.
///
/// Submitting a new search supersedes the in-flight one: its cancel flag is
/// raised and its caller gets [`AppError::SearchSuperseded`]. Searches never
/// queue behind each other.
pub struct SearchService {
    active: Mutex<Option<Arc<AtomicBool>>>,
}

impl SearchService {
    pub fn new() -> Self {
        Self {
            active: Mutex::new(None),
        }
    }

    /// Pre-flight cost of a request, for ceiling checks and warnings.
    pub fn estimate(request: &SearchRequest) -> u64 {
        solver::estimate_combinations(&request.candidates, &request.enabled)
    }

    pub async fn submit(
        &self,
        request: SearchRequest,
    ) -> Result<Vec<CombinationResult>, ApplicationError> {
        let cancel = Arc::new(AtomicBool::new(false));
        {
            let mut active = self.active.lock().await;
            if let Some(previous) = active.replace(cancel.clone()) {
                previous.store(true, Ordering::Relaxed);
                tracing::debug!("superseding in-flight search");
            }
        }

        let estimate = Self::estimate(&request);
        tracing::debug!(estimate, max_results = request.max_results, "starting search");

        let flag = cancel.clone();
        let outcome = tokio::task::spawn_blocking(move || {
            solver::search_with_cancel(
                &request.candidates,
                &request.enabled,
                &request.targets,
                &request.trait_table,
                request.max_results,
                &flag,
            )
        })
        .await
        .map_err(|e| ApplicationError::Unknown(e.to_string()))?;

        {
            let mut active = self.active.lock().await;
            if active
                .as_ref()
                .is_some_and(|current| Arc::ptr_eq(current, &cancel))
            {
                *active = None;
            }
        }

        match outcome {
            Some(results) => {
                tracing::debug!(kept = results.len(), "search finished");
                Ok(results)
            }
            None => Err(AppError::SearchSuperseded.into()),
        }
    }

    /// Raises the cancel flag of the in-flight search, if any.
    pub async fn cancel(&self) {
        if let Some(active) = self.active.lock().await.take() {
            active.store(true, Ordering::Relaxed);
        }
    }
}

impl Default for SearchService {
    fn default() -> Self {
        Self::new()
    }
}
