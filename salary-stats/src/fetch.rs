use async_stream::stream;
use async_trait::async_trait;
use futures::Stream;

use crate::types::{NormalizedVacancy, Result};

/// One page of search results from a job board.
#[derive(Debug)]
pub struct SearchPage<R> {
    /// Total matching vacancies the board reports for the whole query.
    /// Only the first page's value is meaningful for statistics.
    pub found: u64,
    /// Pagination bound the board reports alongside this page. HeadHunter
    /// reports its total page count here; SuperJob reports a "more pages"
    /// flag whose numeric value gets compared against the page index, same
    /// as the board's own reference client does.
    pub page_limit: u32,
    pub records: Vec<R>,
}

/// A job board search API: fetches raw result pages and knows how to pull
/// the salary data out of its own record shape.
#[async_trait]
pub trait VacancySource: Sync {
    type Record: Send + Sync;

    fn name(&self) -> &'static str;

    async fn fetch_page(&self, language: &str, page: u32) -> Result<SearchPage<Self::Record>>;

    /// Extract currency and salary bounds from a raw record. Records paying
    /// in a foreign currency, or with no salary data at all, are unusable
    /// and yield `None`.
    fn adapt(&self, record: &Self::Record) -> Option<NormalizedVacancy>;
}

/// Walk a board's search results for one language, page by page.
///
/// Pages are requested lazily in order 0, 1, 2, … with the stop bound
/// re-read from every response: the page fetched when `page >= page_limit`
/// is still yielded, then the stream ends. The first error is yielded and
/// terminates the stream; nothing is retried.
pub fn fetch_pages<'a, S>(
    source: &'a S,
    language: &'a str,
) -> impl Stream<Item = Result<SearchPage<S::Record>>> + 'a
where
    S: VacancySource,
{
    stream! {
        for page in 0u32.. {
            match source.fetch_page(language, page).await {
                Ok(result) => {
                    let page_limit = result.page_limit;
                    log::debug!(
                        "{}: fetched page {} ({} records, limit {})",
                        source.name(),
                        page,
                        result.records.len(),
                        page_limit
                    );
                    yield Ok(result);
                    if page >= page_limit {
                        break;
                    }
                }
                Err(e) => {
                    log::error!("{}: fetching page {} failed: {}", source.name(), page, e);
                    yield Err(e);
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::{Error, SalaryBounds};
    use futures::StreamExt;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Serves a fixed page_limit on every page and fails on request, if
    /// asked to, once a given page index is reached.
    struct StaticSource {
        page_limit: u32,
        fail_from: Option<u32>,
        requested: AtomicU32,
    }

    impl StaticSource {
        fn new(page_limit: u32) -> Self {
            Self {
                page_limit,
                fail_from: None,
                requested: AtomicU32::new(0),
            }
        }

        fn failing_from(page_limit: u32, fail_from: u32) -> Self {
            Self {
                page_limit,
                fail_from: Some(fail_from),
                requested: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl VacancySource for StaticSource {
        type Record = ();

        fn name(&self) -> &'static str {
            "static"
        }

        async fn fetch_page(&self, _language: &str, page: u32) -> Result<SearchPage<()>> {
            self.requested.fetch_add(1, Ordering::SeqCst);
            if self.fail_from.map_or(false, |from| page >= from) {
                return Err(Error::RequestNotOk(
                    "http://static.test/vacancies".to_owned(),
                    StatusCode::INTERNAL_SERVER_ERROR,
                ));
            }
            Ok(SearchPage {
                found: 42,
                page_limit: self.page_limit,
                records: vec![],
            })
        }

        fn adapt(&self, _record: &()) -> Option<NormalizedVacancy> {
            Some(NormalizedVacancy {
                currency: "RUR".to_owned(),
                bounds: SalaryBounds::from_reported(None, None),
            })
        }
    }

    #[tokio::test]
    async fn page_count_limit_fetches_through_the_limit_page() {
        let _ = env_logger::try_init();
        // A board reporting pages=3 gets asked for pages 0, 1, 2 and 3.
        let source = StaticSource::new(3);
        let pages: Vec<_> = fetch_pages(&source, "rust").collect().await;
        assert_eq!(pages.len(), 4);
        assert!(pages.iter().all(|p| p.is_ok()));
        assert_eq!(source.requested.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn more_flag_limit_stops_once_index_reaches_it() {
        // A "more" indicator of 2 means pages 0 and 1 have successors,
        // page 2 is the last one requested.
        let source = StaticSource::new(2);
        let pages: Vec<_> = fetch_pages(&source, "rust").collect().await;
        assert_eq!(pages.len(), 3);
        assert_eq!(source.requested.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn zero_limit_fetches_a_single_page() {
        let source = StaticSource::new(0);
        let pages: Vec<_> = fetch_pages(&source, "rust").collect().await;
        assert_eq!(pages.len(), 1);
        assert_eq!(source.requested.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn error_is_yielded_once_and_ends_the_stream() {
        let source = StaticSource::failing_from(5, 1);
        let pages: Vec<_> = fetch_pages(&source, "rust").collect().await;
        assert_eq!(pages.len(), 2);
        assert!(pages[0].is_ok());
        assert!(matches!(pages[1], Err(Error::RequestNotOk(_, _))));
        assert_eq!(source.requested.load(Ordering::SeqCst), 2);
    }
}
