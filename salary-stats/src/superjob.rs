use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT},
    Client,
};
use serde::Deserialize;

use crate::fetch::{SearchPage, VacancySource};
use crate::types::{Error, NormalizedVacancy, Result, SalaryBounds};

const BASE_URL: &str = "https://api.superjob.ru";
const SEARCH_ROLE: &str = "Программист";
const TOWN_MOSCOW: u32 = 4;
const PER_PAGE: u32 = 100;
/// SuperJob's code for the rouble, lower case unlike HeadHunter's.
const TARGET_CURRENCY: &str = "rub";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    total: u64,
    more: bool,
    objects: Vec<Vacancy>,
}

#[derive(Debug, Deserialize)]
pub struct Vacancy {
    payment_from: Option<f64>,
    payment_to: Option<f64>,
    currency: Option<String>,
}

/// The board reports a bare "more pages" flag instead of a page count; its
/// numeric value is what the page loop compares the page index against,
/// matching the reference client behaviour.
fn page_from(search: SearchResponse) -> SearchPage<Vacancy> {
    SearchPage {
        found: search.total,
        page_limit: search.more as u32,
        records: search.objects,
    }
}

pub struct SuperJobClient {
    client: Client,
    base_url: String,
    token: String,
}

impl SuperJobClient {
    pub fn new(token: String) -> Self {
        Self::with_base_url(BASE_URL.to_owned(), token)
    }

    pub fn with_base_url(base_url: String, token: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("curl/7.74.0"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("ru-RU"));
        let client = Client::builder().default_headers(headers).build().unwrap();
        Self {
            client,
            base_url,
            token,
        }
    }
}

#[async_trait]
impl VacancySource for SuperJobClient {
    type Record = Vacancy;

    fn name(&self) -> &'static str {
        "SuperJob"
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<SearchPage<Vacancy>> {
        let url = format!("{}/2.0/vacancies", self.base_url);
        let keyword = format!("{} {}", SEARCH_ROLE, language);
        log::debug!("requesting sj vacancies, language: {}, page: {}", language, page);
        let resp = self
            .client
            .get(&url)
            .header("X-Api-App-Id", &self.token)
            .query(&[("keyword", keyword.as_str())])
            .query(&[("town", TOWN_MOSCOW), ("count", PER_PAGE), ("page", page)])
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            log::error!(
                "sj request not successful, status: {}, body: {}",
                status,
                resp.text().await.unwrap_or("empty".to_owned())
            );
            return Err(Error::RequestNotOk(url, status));
        }
        let body = resp.text().await?;
        let search: SearchResponse = serde_json::from_str(&body)?;
        Ok(page_from(search))
    }

    fn adapt(&self, record: &Vacancy) -> Option<NormalizedVacancy> {
        let currency = record.currency.as_deref()?;
        if currency != TARGET_CURRENCY {
            return None;
        }
        Some(NormalizedVacancy {
            currency: currency.to_owned(),
            bounds: SalaryBounds::from_reported(record.payment_from, record.payment_to),
        })
    }
}
