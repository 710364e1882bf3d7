mod report;

use clap::Parser;
use dotenv::dotenv;
use salary_stats::{
    language_statistics, HeadHunterClient, Statistics, SuperJobClient, VacancySource,
};

const DEFAULT_LANGUAGES: [&str; 9] = [
    "Python", "SQL", "javascript", "java", "php", "c#", "c", "c++", "go",
];

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Languages to collect statistics for; defaults to a fixed popular set
    #[clap(long)]
    language: Vec<String>,
}

async fn collect<S>(source: &S, languages: &[String]) -> salary_stats::Result<Vec<Statistics>>
where
    S: VacancySource,
{
    let mut results = Vec::with_capacity(languages.len());
    for language in languages {
        let stats = language_statistics(source, language).await?;
        results.push(stats);
    }
    Ok(results)
}

async fn collect_and_report<S>(source: &S, title: &str, languages: &[String])
where
    S: VacancySource,
{
    match collect(source, languages).await {
        Ok(stats) => println!("{}", report::render_table(title, &stats)),
        Err(e) => log::error!("failed to collect {} statistics: {}", source.name(), e),
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    let languages = if args.language.is_empty() {
        DEFAULT_LANGUAGES.into_iter().map(String::from).collect()
    } else {
        args.language
    };

    let superjob_token = std::env::var("SUPERJOB_TOKEN").expect("SUPERJOB_TOKEN not set");

    let headhunter = HeadHunterClient::new();
    collect_and_report(&headhunter, "HeadHunter Moscow", &languages).await;

    let superjob = SuperJobClient::new(superjob_token);
    collect_and_report(&superjob, "SuperJob Moscow", &languages).await;
}
