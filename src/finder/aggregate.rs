//! Multi-query search aggregation
//!
//! Runs every query of a [`QuerySet`] in order, merges the hits by full name,
//! enriches each new record and applies the ranking policy.

use chrono::Utc;
use log::{debug, info, warn};
use std::collections::HashSet;

use crate::finder::config::FinderConfig;
use crate::finder::enrich::enrich;
use crate::finder::progress::{ProgressCallback, ProgressEvent, expected_total};
use crate::finder::provider::RepositoryProvider;
use crate::finder::query::{SUPPORTED_VERSIONS, build_query_set};
use crate::finder::scoring::version_score;
use crate::finder::types::{FinderResult, QuerySet, SearchCriteria, SearchOutput};
use crate::github::SEARCH_RESULT_CEILING;

/// Ordering applied to merged results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ranking {
    /// Keep GitHub's best-match order.
    ProviderOrder,
    /// Score every record against a Java version and sort by
    /// (score, stars) descending.
    VersionScore(String),
}

/// Search pipeline over a [`RepositoryProvider`].
pub struct Aggregator<P> {
    provider: P,
    config: FinderConfig,
    progress: Option<ProgressCallback>,
}

impl<P: RepositoryProvider> Aggregator<P> {
    pub fn new(provider: P, config: FinderConfig) -> Self {
        Self {
            provider,
            config,
            progress: None,
        }
    }

    /// Reports enrichment progress to `callback`.
    #[must_use]
    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.progress = Some(callback);
        self
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    #[must_use]
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Builds the query set for `criteria` and runs it.
    ///
    /// A `version_hint` selects version ranking; otherwise provider order is
    /// kept. An unsupported version produces no queries and an empty output.
    pub async fn search(&self, criteria: &SearchCriteria) -> FinderResult<SearchOutput> {
        criteria.validate()?;

        let queries = build_query_set(criteria);
        let ranking = match &criteria.version_hint {
            Some(version) => {
                if queries.is_empty() {
                    warn!(
                        "Unsupported Java version '{version}', expected one of {}",
                        SUPPORTED_VERSIONS.join(", ")
                    );
                }
                Ranking::VersionScore(version.trim().to_string())
            }
            None => Ranking::ProviderOrder,
        };

        Ok(self.run(queries, criteria.max_results, &ranking).await)
    }

    /// Runs `queries` sequentially and returns at most `cap` records.
    ///
    /// The cap is a single running count of distinct merged records across
    /// all queries: once it is reached, no further hits are consumed from the
    /// current query or any later one. A failing query is logged, reported in
    /// `errors` and skipped.
    pub async fn run(&self, queries: QuerySet, cap: usize, ranking: &Ranking) -> SearchOutput {
        let now = Utc::now();
        let per_page = self.config.api_page_size.clamp(1, 100);
        let mut records = Vec::new();
        let mut seen = HashSet::new();
        let mut errors = Vec::new();

        info!("Running {} search quer(y/ies), cap {cap}", queries.len());
        self.emit(ProgressEvent::Started {
            total: expected_total(cap),
        });

        'queries: for (index, query) in queries.iter().enumerate() {
            if records.len() >= cap {
                debug!("Cap of {cap} reached, skipping remaining queries");
                break;
            }
            info!("Query {}: '{query}'", index + 1);

            let mut page = 1u32;
            loop {
                let hits = match self.provider.search_page(query, page, per_page).await {
                    Ok(hits) => hits,
                    Err(e) => {
                        warn!("Error in query '{query}' (page {page}): {e}");
                        errors.push(format!("query '{query}': {e}"));
                        continue 'queries;
                    }
                };
                if page == 1 {
                    info!(
                        "Query {} matched {} repositories",
                        index + 1,
                        hits.total_count.unwrap_or(0)
                    );
                }

                let received = hits.items.len();
                for hit in hits.items {
                    if records.len() >= cap {
                        break;
                    }
                    if !seen.insert(hit.full_name.clone()) {
                        debug!("Skipping duplicate {}", hit.full_name);
                        continue;
                    }
                    let mut record = enrich(&self.provider, hit, now).await;
                    if let Ranking::VersionScore(version) = ranking {
                        record.version_score = Some(version_score(
                            record.description.as_deref(),
                            &record.topics,
                            version,
                        ));
                        record.target_version = Some(version.clone());
                    }
                    self.emit(ProgressEvent::RecordEnriched {
                        full_name: record.full_name.clone(),
                    });
                    records.push(record);
                }

                let exhausted = received < usize::from(per_page)
                    || page.saturating_mul(u32::from(per_page)) >= SEARCH_RESULT_CEILING;
                if records.len() >= cap || exhausted {
                    break;
                }
                page += 1;
            }
        }

        if matches!(ranking, Ranking::VersionScore(_)) {
            // sort_by is stable: equal (score, stars) keep encounter order
            records.sort_by(|a, b| (b.score(), b.stars).cmp(&(a.score(), a.stars)));
        }
        records.truncate(cap);

        self.emit(ProgressEvent::Finished {
            records: records.len(),
        });
        info!(
            "Search completed: {} repositories, {} failed quer(y/ies)",
            records.len(),
            errors.len()
        );

        SearchOutput {
            count: records.len(),
            results: records,
            queries,
            errors,
        }
    }

    fn emit(&self, event: ProgressEvent) {
        if let Some(callback) = &self.progress {
            callback(event);
        }
    }
}
