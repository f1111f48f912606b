/// Events emitted over the course of an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportEvent {
    /// The library fetch has started.
    FetchStarted,
    /// The library fetch finished; `total` entries will be matched.
    FetchComplete { total: usize },
    /// An entry matched a catalog record.
    EntryMatched {
        index: usize,
        title: String,
        catalog_name: String,
        score: u32,
    },
    /// An entry found no acceptable catalog record.
    EntryUnmatched { index: usize, title: String },
    /// A batch finished; `current` of `total` entries processed so far.
    BatchComplete {
        current: usize,
        total: usize,
        message: String,
    },
    /// The import finished.
    Complete { matched: usize, total: usize },
    /// The import aborted.
    Failed { message: String },
}

/// Coarse phase of the import, derived from the latest event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStage {
    Fetching,
    Matching,
    Complete,
    Failed,
}

impl ImportEvent {
    pub fn stage(&self) -> ImportStage {
        match self {
            Self::FetchStarted => ImportStage::Fetching,
            Self::FetchComplete { .. }
            | Self::EntryMatched { .. }
            | Self::EntryUnmatched { .. }
            | Self::BatchComplete { .. } => ImportStage::Matching,
            Self::Complete { .. } => ImportStage::Complete,
            Self::Failed { .. } => ImportStage::Failed,
        }
    }
}

/// Consumer of import progress events.
///
/// `emit` returns false when the consumer is gone, which the pipeline
/// treats as a cancellation request.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: ImportEvent) -> bool;
}

/// Streams events into a tokio channel, typically rendered by a UI
/// task. Dropping the receiver cancels the import.
pub struct ChannelSink {
    tx: tokio::sync::mpsc::UnboundedSender<ImportEvent>,
}

impl ChannelSink {
    pub fn new(tx: tokio::sync::mpsc::UnboundedSender<ImportEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelSink {
    fn emit(&self, event: ImportEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Writes progress to the log, for headless runs.
pub struct LogSink;

impl ProgressSink for LogSink {
    fn emit(&self, event: ImportEvent) -> bool {
        match &event {
            ImportEvent::FetchStarted => log::info!("Fetching library..."),
            ImportEvent::FetchComplete { total } => {
                log::info!("Library fetched: {} entries", total)
            }
            ImportEvent::EntryMatched {
                title,
                catalog_name,
                score,
                ..
            } => log::info!("Matched {:?} -> {:?} (score {})", title, catalog_name, score),
            ImportEvent::EntryUnmatched { title, .. } => {
                log::info!("No match for {:?}", title)
            }
            ImportEvent::BatchComplete {
                current,
                total,
                message,
            } => log::info!("[{}/{}] {}", current, total, message),
            ImportEvent::Complete { matched, total } => {
                log::info!("Import complete: {}/{} matched", matched, total)
            }
            ImportEvent::Failed { message } => log::warn!("Import failed: {}", message),
        }
        true
    }
}

/// Discards all events.
pub struct SilentSink;

impl ProgressSink for SilentSink {
    fn emit(&self, _event: ImportEvent) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_map_to_stages() {
        assert_eq!(ImportEvent::FetchStarted.stage(), ImportStage::Fetching);
        assert_eq!(
            ImportEvent::FetchComplete { total: 3 }.stage(),
            ImportStage::Matching
        );
        assert_eq!(
            ImportEvent::BatchComplete {
                current: 5,
                total: 12,
                message: String::new(),
            }
            .stage(),
            ImportStage::Matching
        );
        assert_eq!(
            ImportEvent::Complete {
                matched: 1,
                total: 3
            }
            .stage(),
            ImportStage::Complete
        );
        assert_eq!(
            ImportEvent::Failed {
                message: "library unreachable".to_string()
            }
            .stage(),
            ImportStage::Failed
        );
    }
}
