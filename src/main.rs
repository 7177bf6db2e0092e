use datacard_sniper::config::{AppConfig, load_config};
use datacard_sniper::model::SearchResult;
use datacard_sniper::notifier::TelegramNotifier;
use datacard_sniper::{search, search_site};
use std::sync::Arc;
use tracing::{error, info, warn};

const CONFIG_PATH: &str = "config.json";

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    // `datacard-sniper <keyword>` runs one search and prints the JSON result.
    if let Some(keyword) = std::env::args().nth(1) {
        let config = match load_config(CONFIG_PATH) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                warn!("Config load error, using default site: {}", e);
                None
            }
        };
        let result = tokio::task::spawn_blocking(move || match config {
            Some(cfg) => search_site(&cfg.site, &keyword, Some(cfg.shop_id.as_str())),
            None => search(&keyword, None),
        })
        .await;
        print_result(result);
        return;
    }

    let config: Arc<AppConfig> = match load_config(CONFIG_PATH) {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let notifier = match TelegramNotifier::new(config.clone()) {
        Ok(n) => Arc::new(n),
        Err(e) => {
            error!("Failed to create Telegram client: {}", e);
            return;
        }
    };

    if let Err(e) = notifier.set_my_commands().await {
        warn!("setMyCommands failed: {}", e);
    }

    if let Some(chat_id) = config.telegram_chat_id {
        info!("Sending startup message...");
        if let Err(e) = notifier.notify_text(chat_id, "🚀 DatacardSniper started!").await {
            warn!("Startup notification failed: {}", e);
        }
    }

    if let Err(e) = TelegramNotifier::spawn_listener(notifier).await {
        error!("Listener task failed: {}", e);
    }
}

fn print_result(result: Result<SearchResult, tokio::task::JoinError>) {
    match result.map(|r| serde_json::to_string_pretty(&r)) {
        Ok(Ok(json)) => println!("{}", json),
        Ok(Err(e)) => error!("Serialization error: {}", e),
        Err(e) => error!("Search task failed: {}", e),
    }
}
