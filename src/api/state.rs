//! Shared handler state.

use crate::task::{ports::TaskRepository, services::TaskLifecycleService};
use mockable::Clock;

/// State injected into every handler.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Task lifecycle service backing the routes.
    pub service: TaskLifecycleService<R, C>,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Wraps a lifecycle service.
    #[must_use]
    pub const fn new(service: TaskLifecycleService<R, C>) -> Self {
        Self { service }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}
