pub mod aggregate;
pub mod estimate;
pub mod fetch;
pub mod headhunter;
pub mod superjob;
pub mod types;

pub use aggregate::{aggregate, language_statistics};
pub use estimate::estimate_salary;
pub use fetch::{fetch_pages, SearchPage, VacancySource};
pub use headhunter::HeadHunterClient;
pub use superjob::SuperJobClient;
pub use types::{Error, NormalizedVacancy, Result, SalaryBounds, Statistics};
