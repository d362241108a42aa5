use gridiron_scrape::clients::PageClient;
use gridiron_scrape::config::cli::Command;
use gridiron_scrape::config::Config;
use gridiron_scrape::error::Result;
use gridiron_scrape::scrapers::{guru, pfr, PageScraper};
use scraper::Html;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level()?)
        .with_writer(std::io::stderr)
        .init();

    let client = PageClient::new(config.http_client.clone());

    let output = match &config.args.command {
        Command::GuruPlayer { source } => {
            let document = Html::parse_document(&client.get_page(source).await?);
            serde_json::to_string_pretty(&guru::PlayerPageScraper.scrape(&document))?
        }
        Command::GuruPlayers { source } => {
            let document = Html::parse_document(&client.get_page(source).await?);
            serde_json::to_string_pretty(&guru::PlayerListScraper.player_links(&document))?
        }
        Command::PfrPlayer {
            source,
            year,
            weeks,
        } => {
            let year = year.unwrap_or_else(Config::current_year);
            let source = if source.starts_with("http") {
                pfr::gamelog_url(source, year)
            } else {
                source.clone()
            };
            let document = Html::parse_document(&client.get_page(&source).await?);
            let scraper = pfr::PlayerPageScraper::new(year, weeks.clone());
            serde_json::to_string_pretty(&scraper.scrape(&document))?
        }
        Command::PfrGame { source } => {
            let document = Html::parse_document(&client.get_page(source).await?);
            serde_json::to_string_pretty(&pfr::GamePageScraper.scrape(&document))?
        }
        Command::PfrGames { source, week } => {
            let document = Html::parse_document(&client.get_page(source).await?);
            serde_json::to_string_pretty(&pfr::GameListScraper.week_links(&document, *week))?
        }
        Command::PfrResolve {
            source,
            first,
            last,
        } => {
            let document = Html::parse_document(&client.get_page(source).await?);
            let roster = pfr::PlayerListScraper::new(&config.overrides);
            serde_json::to_string_pretty(&roster.player_link(&document, first, last))?
        }
    };

    println!("{output}");
    info!("Scraping completed successfully!");
    Ok(())
}
