use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT},
    Client,
};
use serde::Deserialize;

use crate::fetch::{SearchPage, VacancySource};
use crate::types::{Error, NormalizedVacancy, Result, SalaryBounds};

const BASE_URL: &str = "https://api.hh.ru";
const SEARCH_ROLE: &str = "Программист";
const AREA_MOSCOW: u32 = 1;
const PER_PAGE: u32 = 100;
/// HeadHunter's code for the rouble.
const TARGET_CURRENCY: &str = "RUR";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    found: u64,
    pages: u32,
    items: Vec<Vacancy>,
}

#[derive(Debug, Deserialize)]
pub struct Vacancy {
    salary: Option<Salary>,
}

#[derive(Debug, Deserialize)]
struct Salary {
    from: Option<f64>,
    to: Option<f64>,
    currency: Option<String>,
}

pub struct HeadHunterClient {
    client: Client,
    base_url: String,
}

impl HeadHunterClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL.to_owned())
    }

    pub fn with_base_url(base_url: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("curl/7.74.0"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("ru-RU"));
        let client = Client::builder().default_headers(headers).build().unwrap();
        Self { client, base_url }
    }
}

impl Default for HeadHunterClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VacancySource for HeadHunterClient {
    type Record = Vacancy;

    fn name(&self) -> &'static str {
        "HeadHunter"
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<SearchPage<Vacancy>> {
        let url = format!("{}/vacancies", self.base_url);
        let text = format!("{} {}", SEARCH_ROLE, language);
        log::debug!("requesting hh vacancies, language: {}, page: {}", language, page);
        let resp = self
            .client
            .get(&url)
            .query(&[("text", text.as_str())])
            .query(&[("area", AREA_MOSCOW), ("per_page", PER_PAGE), ("page", page)])
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            log::error!(
                "hh request not successful, status: {}, body: {}",
                status,
                resp.text().await.unwrap_or("empty".to_owned())
            );
            return Err(Error::RequestNotOk(url, status));
        }
        let body = resp.text().await?;
        let search: SearchResponse = serde_json::from_str(&body)?;
        Ok(SearchPage {
            found: search.found,
            page_limit: search.pages,
            records: search.items,
        })
    }

    fn adapt(&self, record: &Vacancy) -> Option<NormalizedVacancy> {
        let salary = record.salary.as_ref()?;
        let currency = salary.currency.as_deref()?;
        if currency != TARGET_CURRENCY {
            return None;
        }
        Some(NormalizedVacancy {
            currency: currency.to_owned(),
            bounds: SalaryBounds::from_reported(salary.from, salary.to),
        })
    }
}
