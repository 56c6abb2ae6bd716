use reqwest::Client;
use swap_calldata_rust::config::FetcherConfig;
use swap_calldata_rust::log::init_tracing;
use swap_calldata_rust::routers::one_inch::one_inch::OneInchClient;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_tracing(false);

    let config = FetcherConfig::from_env();
    let client = OneInchClient::new(Client::new(), config.api_key);

    // Failure keeps the default success exit status, matching the tool's
    // interactive, fire-and-inspect usage.
    match client.swap_calldata(&config.swap).await {
        Ok(calldata) => println!("{calldata}"),
        Err(report) => eprintln!("{report:?}"),
    }
}
