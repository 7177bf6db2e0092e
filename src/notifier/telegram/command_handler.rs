// notifier/telegram/command_handler.rs

use crate::config::{COMMAND_INFO_FOUND, DEFAULT_SHOP_ID};
use crate::notifier::telegram::TelegramNotifier;
use crate::notifier::telegram::format::format_search_result;
use crate::search::search_site;
use tracing::{info, warn};

pub const SEARCH_PREFIX: &str = "流量卡";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Help,
    Ping,
    Uptime,
    Unknown,
}

/// Maps a chat message to a command. Plain chatter yields `None`.
pub fn parse_command(text: &str) -> Option<Command> {
    let text = text.trim();
    let bare = text.strip_prefix('/').unwrap_or(text);

    if let Some(keyword) = bare.strip_prefix(SEARCH_PREFIX) {
        let keyword = keyword.trim();
        return Some(if keyword.is_empty() {
            Command::Help
        } else {
            Command::Search(keyword.to_string())
        });
    }

    if !text.starts_with('/') {
        return None;
    }
    // Group chats address commands as /help@bot_name.
    let name = bare.split_whitespace().next().unwrap_or("");
    let name = name.split('@').next().unwrap_or(name);
    Some(match name {
        "start" | "help" => Command::Help,
        "ping" => Command::Ping,
        "uptime" => Command::Uptime,
        _ => Command::Unknown,
    })
}

pub fn format_uptime(secs: u64) -> String {
    format!(
        "⏱ Uptime: {:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// Handles an incoming message and replies in the same chat.
pub async fn handle_command(text: &str, chat_id: i64, notifier: &TelegramNotifier) {
    let Some(command) = parse_command(text) else {
        return;
    };
    info!("Handling command {:?} from chat {}", command, chat_id);

    let reply = match command {
        Command::Search(keyword) => run_search(keyword, notifier).await,
        Command::Help => format!("📋 {}", COMMAND_INFO_FOUND),
        Command::Ping => "✅ I am online!".to_string(),
        Command::Uptime => format_uptime(notifier.start_time.elapsed().as_secs()),
        Command::Unknown => "🤖 Unknown command. Type /help for usage.".to_string(),
    };

    if let Err(e) = notifier.notify_text(chat_id, &reply).await {
        warn!("Reply to chat {} failed: {}", chat_id, e);
    }
}

async fn run_search(keyword: String, notifier: &TelegramNotifier) -> String {
    let config = notifier.config.clone();
    let task = tokio::task::spawn_blocking(move || {
        let shop_id = if config.shop_id.is_empty() {
            DEFAULT_SHOP_ID
        } else {
            config.shop_id.as_str()
        };
        search_site(&config.site, &keyword, Some(shop_id))
    });

    match task.await {
        Ok(result) => format_search_result(&result),
        Err(e) => {
            warn!("Search task failed: {}", e);
            "❌ 查询失败，请稍后再试".to_string()
        }
    }
}
