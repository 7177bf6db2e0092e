// notifier/telegram/listener.rs

use crate::notifier::telegram::TelegramNotifier;
use crate::notifier::telegram::command_handler::handle_command;
use serde::Deserialize;
use std::sync::atomic::Ordering;
use tokio::time::{Duration, sleep};
use tracing::{debug, warn};

pub const LONG_POLL_SECONDS: u64 = 25;

#[derive(Debug, Deserialize)]
pub(crate) struct TelegramApiResponse {
    pub result: Vec<TelegramUpdate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TelegramUpdate {
    pub update_id: i64,
    pub message: Option<TelegramMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TelegramMessage {
    pub chat: TelegramChat,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TelegramChat {
    pub id: i64,
}

/// Polls for Telegram updates and answers incoming commands.
pub async fn listen_for_commands(notifier: &TelegramNotifier) {
    let url = notifier.api_url("getUpdates");
    let pause = Duration::from_secs(notifier.config.poll_interval_seconds);
    loop {
        let current_offset = notifier.offset.load(Ordering::SeqCst);
        let response = notifier
            .client
            .get(&url)
            .query(&[
                ("offset", current_offset.to_string()),
                ("timeout", LONG_POLL_SECONDS.to_string()),
            ])
            .send()
            .await;

        match response {
            Ok(resp) => match resp.json::<TelegramApiResponse>().await {
                Ok(api_response) => {
                    for update in api_response.result {
                        if let Some(message) = &update.message {
                            dispatch(notifier, message).await;
                        }
                        notifier.offset.store(update.update_id + 1, Ordering::SeqCst);
                    }
                }
                Err(e) => warn!("getUpdates decode error: {}", e),
            },
            Err(e) => warn!("getUpdates request error: {}", e),
        }
        sleep(pause).await;
    }
}

async fn dispatch(notifier: &TelegramNotifier, message: &TelegramMessage) {
    let Some(text) = message.text.as_deref() else {
        return;
    };
    if !notifier.accepts_chat(message.chat.id) {
        debug!("Ignoring message from chat {}", message.chat.id);
        return;
    }
    handle_command(text, message.chat.id, notifier).await;
}
