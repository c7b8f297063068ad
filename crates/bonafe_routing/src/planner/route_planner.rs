use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tokio::sync::watch;
use tracing::debug;

use crate::{
    config::PlannerConfig,
    error::RoutingError,
    planner::plan_route::{RoutePlan, RouteRequest, plan_route},
};

/// A plan together with the generation of the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteComputed {
    pub generation: u64,
    pub plan: RoutePlan,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    Computed(Arc<RouteComputed>),
    /// A newer request (or a cancellation) arrived while this one was computing.
    Superseded { generation: u64 },
}

/// The generation reserved for one request, handed out by [`RoutePlanner::reserve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanTicket {
    generation: u64,
}

impl PlanTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Runs route computations off the async executor and publishes only the
/// result of the most recent request.
///
/// Each request reserves a new generation. When a computation finishes after a
/// newer request was reserved, its result is dropped, so subscribers never see
/// an older route replace a newer one.
pub struct RoutePlanner {
    config: PlannerConfig,
    latest_generation: AtomicU64,
    sender: watch::Sender<Option<Arc<RouteComputed>>>,
}

impl RoutePlanner {
    pub fn new(config: PlannerConfig) -> Self {
        let (sender, _) = watch::channel(None);

        Self {
            config,
            latest_generation: AtomicU64::new(0),
            sender,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Receives every published [`RouteComputed`], starting with the latest one if any.
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<RouteComputed>>> {
        self.sender.subscribe()
    }

    pub fn latest(&self) -> Option<Arc<RouteComputed>> {
        self.sender.borrow().clone()
    }

    /// Invalidates every in-flight request.
    pub fn cancel(&self) -> u64 {
        self.latest_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Takes the next generation, superseding every earlier ticket.
    pub fn reserve(&self) -> PlanTicket {
        PlanTicket {
            generation: self.latest_generation.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.latest_generation.load(Ordering::SeqCst) == generation
    }

    pub async fn plan(&self, request: RouteRequest) -> Result<PlanOutcome, RoutingError> {
        let ticket = self.reserve();
        self.plan_with(ticket, request).await
    }

    /// Computes `request` under an already reserved generation.
    pub async fn plan_with(
        &self,
        ticket: PlanTicket,
        request: RouteRequest,
    ) -> Result<PlanOutcome, RoutingError> {
        let generation = ticket.generation;
        let config = self.config;

        let plan = tokio::task::spawn_blocking(move || plan_route(&config, &request))
            .await
            .map_err(|err| RoutingError::Task(err.to_string()))??;

        let computed = Arc::new(RouteComputed { generation, plan });

        // The check runs under the channel's lock so two finishing requests can't interleave.
        let published = self.sender.send_if_modified(|current| {
            if !self.is_current(generation) {
                return false;
            }

            *current = Some(Arc::clone(&computed));
            true
        });

        if published {
            debug!("published route for generation {generation}");
            Ok(PlanOutcome::Computed(computed))
        } else {
            debug!("dropped stale route for generation {generation}");
            Ok(PlanOutcome::Superseded { generation })
        }
    }
}

impl Default for RoutePlanner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
