use std::future::Future;
use std::time::Duration;

/// Delay between successive catalog queries for one title's variants.
pub const QUERY_DELAY: Duration = Duration::from_millis(300);
/// Delay between batches of titles.
pub const BATCH_DELAY: Duration = Duration::from_millis(1500);

/// Pacing strategy for catalog requests.
///
/// IGDB allows 4 requests per second per client; the pipeline inserts
/// these delays to stay under that ceiling. Tests swap in [`NoopPacer`]
/// so the suite is not wall-clock bound.
pub trait Pacer: Send + Sync {
    fn between_queries(&self) -> impl Future<Output = ()> + Send;
    fn between_batches(&self) -> impl Future<Output = ()> + Send;
}

/// Fixed-interval pacing with the default delays.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedPacer;

impl Pacer for FixedPacer {
    async fn between_queries(&self) {
        tokio::time::sleep(QUERY_DELAY).await;
    }

    async fn between_batches(&self) {
        tokio::time::sleep(BATCH_DELAY).await;
    }
}

/// No pacing at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPacer;

impl Pacer for NoopPacer {
    async fn between_queries(&self) {}

    async fn between_batches(&self) {}
}
