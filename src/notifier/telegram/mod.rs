pub mod command_handler;
pub mod format;
pub mod listener;
pub mod sender;

use crate::config::AppConfig;
use crate::model::NotifyError;
use reqwest::Client;
use std::sync::Arc;
use std::sync::atomic::AtomicI64;
use std::time::{Duration, Instant};

pub struct TelegramNotifier {
    pub bot_token: String,
    pub client: Client,
    pub offset: Arc<AtomicI64>,
    pub config: Arc<AppConfig>,
    pub start_time: Instant,
}

impl TelegramNotifier {
    pub fn new(config: Arc<AppConfig>) -> Result<Self, NotifyError> {
        // getUpdates long-polls for up to LONG_POLL_SECONDS, so leave headroom.
        let client = Client::builder()
            .timeout(Duration::from_secs(listener::LONG_POLL_SECONDS + 10))
            .build()?;
        Ok(Self {
            bot_token: config.telegram_bot_token.clone(),
            client,
            offset: Arc::new(AtomicI64::new(0)),
            config,
            start_time: Instant::now(),
        })
    }

    pub fn api_url(&self, method: &str) -> String {
        format!("https://api.telegram.org/bot{}/{}", self.bot_token, method)
    }

    /// Whether messages from `chat_id` should be answered.
    pub fn accepts_chat(&self, chat_id: i64) -> bool {
        self.config.telegram_chat_id.is_none_or(|allowed| allowed == chat_id)
    }

    pub async fn notify_text(&self, chat_id: i64, text: &str) -> Result<(), NotifyError> {
        sender::send_text(self, chat_id, text).await
    }

    pub async fn listen_for_commands(&self) {
        listener::listen_for_commands(self).await;
    }

    pub async fn set_my_commands(&self) -> Result<(), NotifyError> {
        let commands = serde_json::json!({
            "commands": [
                { "command": "help", "description": "流量卡查询用法" },
                { "command": "ping", "description": "Check connection" },
                { "command": "uptime", "description": "Service uptime" }
            ]
        });
        self.client
            .post(self.api_url("setMyCommands"))
            .json(&commands)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub fn spawn_listener(notifier: Arc<TelegramNotifier>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            tracing::info!("▶️ Starting Telegram listener...");
            notifier.listen_for_commands().await;
            tracing::info!("🛑 Telegram listener ended.");
        })
    }
}
