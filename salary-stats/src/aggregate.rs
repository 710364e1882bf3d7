use futures::{pin_mut, Stream, StreamExt};

use crate::estimate::estimate_salary;
use crate::fetch::{fetch_pages, SearchPage, VacancySource};
use crate::types::{Result, Statistics};

/// Fetch every result page for one language from a board and fold it into
/// per-language statistics.
pub async fn language_statistics<S>(source: &S, language: &str) -> Result<Statistics>
where
    S: VacancySource,
{
    let pages = fetch_pages(source, language);
    aggregate(language, pages, source).await
}

/// Fold a page stream into `Statistics`.
///
/// `vacancies_found` is the board's own total, captured from the first
/// page. `vacancies_processed` counts only records that survive adaptation
/// and yield a salary estimate; the two counters are independent. The
/// average is the integer-truncated mean of all estimates, 0 when nothing
/// was processed. The first stream error aborts the whole language, no
/// partial statistics survive.
pub async fn aggregate<S>(
    language: &str,
    pages: impl Stream<Item = Result<SearchPage<S::Record>>>,
    source: &S,
) -> Result<Statistics>
where
    S: VacancySource,
{
    let mut vacancies_found = 0u64;
    let mut vacancies_processed = 0u64;
    let mut total_salary = 0f64;
    let mut first_page = true;

    pin_mut!(pages);
    while let Some(page) = pages.next().await {
        let page = page?;
        if first_page {
            vacancies_found = page.found;
            first_page = false;
        }
        for record in &page.records {
            if let Some(vacancy) = source.adapt(record) {
                if let Some(estimate) = estimate_salary(&vacancy.bounds) {
                    vacancies_processed += 1;
                    total_salary += estimate;
                }
            }
        }
    }

    let average_salary = if vacancies_processed > 0 {
        (total_salary / vacancies_processed as f64) as u64
    } else {
        0
    };
    log::info!(
        "{}: {} — found {}, processed {}, average {}",
        source.name(),
        language,
        vacancies_found,
        vacancies_processed,
        average_salary
    );
    Ok(Statistics {
        language: language.to_owned(),
        vacancies_found,
        vacancies_processed,
        average_salary,
    })
}
