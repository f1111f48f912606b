use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use futures::future::join_all;
use gameshelf_core::{
    best_match, name_variants, CatalogCandidate, EnrichedEntry, LibraryEntry, MatchResult,
    MatchedGame,
};
use gameshelf_igdb::CatalogError;
use gameshelf_steam::{is_non_game, SteamError};
use thiserror::Error;

use crate::cache::MatchCache;
use crate::pacer::Pacer;
use crate::progress::{ImportEvent, ProgressSink};

/// Entries matched concurrently per batch.
pub const BATCH_SIZE: usize = 5;

/// Consecutive catalog failures tolerated before the whole import
/// aborts. Individual failures are absorbed as empty candidate lists;
/// a long unbroken run of them means the service is down.
const CONSECUTIVE_ERROR_LIMIT: u32 = 10;

/// Source of the user's game library.
pub trait LibraryProvider: Send + Sync {
    fn fetch_library(&self) -> impl Future<Output = Result<Vec<LibraryEntry>, SteamError>> + Send;
}

/// Catalog backend queried per name variant.
pub trait CatalogSearch: Send + Sync {
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<CatalogCandidate>, CatalogError>> + Send;
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Library fetch failed: {0}")]
    Library(#[from] SteamError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Catalog unavailable after {0} consecutive failures")]
    CatalogUnavailable(u32),

    #[error("Import cancelled")]
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Cap on the number of entries matched, applied after filtering.
    pub limit: Option<usize>,
    pub batch_size: usize,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            limit: None,
            batch_size: BATCH_SIZE,
        }
    }
}

/// Run a full import: fetch the library, match every entry against the
/// catalog, and return the enriched entries in input order.
///
/// Unmatched entries are tagged, never dropped. Progress streams to
/// `sink` as the import runs; a sink reporting a gone consumer cancels
/// the import.
pub async fn run_import<L, C, P, S>(
    library: &L,
    catalog: &C,
    cache: &MatchCache,
    pacer: &P,
    sink: &S,
    options: &ImportOptions,
) -> Result<Vec<EnrichedEntry>, ImportError>
where
    L: LibraryProvider,
    C: CatalogSearch,
    P: Pacer,
    S: ProgressSink,
{
    let cancelled = AtomicBool::new(false);
    let consecutive_errors = AtomicU32::new(0);

    if !sink.emit(ImportEvent::FetchStarted) {
        return Err(ImportError::Cancelled);
    }

    let mut entries = match library.fetch_library().await {
        Ok(entries) => entries,
        Err(e) => {
            let _ = sink.emit(ImportEvent::Failed {
                message: e.to_string(),
            });
            return Err(e.into());
        }
    };

    entries.retain(|e| !is_non_game(&e.title));
    if let Some(limit) = options.limit {
        entries.truncate(limit);
    }
    let total = entries.len();

    if !sink.emit(ImportEvent::FetchComplete { total }) {
        return Err(ImportError::Cancelled);
    }

    let batch_size = options.batch_size.max(1);
    let mut results: Vec<EnrichedEntry> = Vec::with_capacity(total);

    for (batch_index, batch) in entries.chunks(batch_size).enumerate() {
        if batch_index > 0 {
            pacer.between_batches().await;
        }

        let futures = batch.iter().enumerate().map(|(offset, entry)| {
            match_entry(
                catalog,
                cache,
                pacer,
                sink,
                batch_index * batch_size + offset,
                entry.clone(),
                &cancelled,
                &consecutive_errors,
            )
        });

        for outcome in join_all(futures).await {
            match outcome {
                Ok(enriched) => results.push(enriched),
                Err(ImportError::Cancelled) => return Err(ImportError::Cancelled),
                Err(e) => {
                    let _ = sink.emit(ImportEvent::Failed {
                        message: e.to_string(),
                    });
                    return Err(e);
                }
            }
        }

        if cancelled.load(Ordering::Relaxed) {
            return Err(ImportError::Cancelled);
        }

        let current = results.len();
        let emitted = sink.emit(ImportEvent::BatchComplete {
            current,
            total,
            message: format!("Matched {} of {} games", current, total),
        });
        if !emitted {
            return Err(ImportError::Cancelled);
        }
    }

    let matched = results.iter().filter(|e| e.is_matched()).count();
    let _ = sink.emit(ImportEvent::Complete { matched, total });

    Ok(results)
}

/// Resolve one library entry against the catalog.
///
/// Checks the cache first; on a miss, queries each name variant until
/// one returns candidates, then scores them. Transient search failures
/// count as empty results; auth failures abort the import.
#[allow(clippy::too_many_arguments)]
async fn match_entry<C, P, S>(
    catalog: &C,
    cache: &MatchCache,
    pacer: &P,
    sink: &S,
    index: usize,
    entry: LibraryEntry,
    cancelled: &AtomicBool,
    consecutive_errors: &AtomicU32,
) -> Result<EnrichedEntry, ImportError>
where
    C: CatalogSearch,
    P: Pacer,
    S: ProgressSink,
{
    if cancelled.load(Ordering::Relaxed) {
        return Err(ImportError::Cancelled);
    }

    if let Some(hit) = cache.get(&entry.title).await {
        emit_entry_event(sink, index, &entry.title, Some(&hit), cancelled);
        return Ok(EnrichedEntry {
            entry,
            result: MatchResult::Matched(hit),
        });
    }

    let variants = name_variants(&entry.title);
    let mut candidates: Vec<CatalogCandidate> = Vec::new();

    for (i, variant) in variants.iter().enumerate() {
        if i > 0 {
            pacer.between_queries().await;
        }

        match catalog.search(variant).await {
            Ok(found) => {
                consecutive_errors.store(0, Ordering::Relaxed);
                candidates.extend(found);
                // Later variants are progressively looser; stop as soon
                // as one yields anything to score.
                if !candidates.is_empty() {
                    break;
                }
            }
            Err(e @ CatalogError::InvalidCredentials(_)) => {
                cancelled.store(true, Ordering::Relaxed);
                return Err(e.into());
            }
            Err(e) => {
                log::debug!("Search for {:?} failed: {}", variant, e);
                let run = consecutive_errors.fetch_add(1, Ordering::Relaxed) + 1;
                if run >= CONSECUTIVE_ERROR_LIMIT {
                    cancelled.store(true, Ordering::Relaxed);
                    return Err(ImportError::CatalogUnavailable(run));
                }
            }
        }
    }

    let result = match best_match(&variants, &candidates, None) {
        Some(scored) => {
            let matched = MatchedGame::from_scored(scored.candidate, scored.score);
            cache.insert(entry.title.clone(), matched.clone()).await;
            MatchResult::Matched(matched)
        }
        None => MatchResult::Unmatched,
    };

    emit_entry_event(sink, index, &entry.title, result.matched(), cancelled);
    Ok(EnrichedEntry { entry, result })
}

fn emit_entry_event<S: ProgressSink>(
    sink: &S,
    index: usize,
    title: &str,
    matched: Option<&MatchedGame>,
    cancelled: &AtomicBool,
) {
    let event = match matched {
        Some(game) => ImportEvent::EntryMatched {
            index,
            title: title.to_string(),
            catalog_name: game.candidate.name.clone(),
            score: game.score,
        },
        None => ImportEvent::EntryUnmatched {
            index,
            title: title.to_string(),
        },
    };
    if !sink.emit(event) {
        cancelled.store(true, Ordering::Relaxed);
    }
}
