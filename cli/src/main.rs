mod search;

use std::path::PathBuf;

use clap::Parser;
use dotenv::dotenv;
use hh_api::HeadHunterApi;
use persistence::JsonStorage;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path of the JSON file backing the vacancy store
    #[clap(long, default_value = "vacancies.json")]
    file: PathBuf,

    /// Override the hh.ru API base url
    #[clap(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();

    let api = match args.base_url {
        Some(url) => HeadHunterApi::with_base_url(url),
        None => HeadHunterApi::new(),
    };
    let mut storage = JsonStorage::open(args.file).expect("Failed to load vacancy storage");

    search::run(&api, &mut storage).await;
}
