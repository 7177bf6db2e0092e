// notifier/telegram/sender.rs

use crate::model::NotifyError;
use crate::notifier::telegram::TelegramNotifier;
use tracing::{debug, warn};

/// Telegram rejects messages longer than this many characters.
pub const MESSAGE_LIMIT: usize = 4096;

/// Sends `text` to `chat_id`, split into as many messages as the length limit requires.
pub async fn send_text(notifier: &TelegramNotifier, chat_id: i64, text: &str) -> Result<(), NotifyError> {
    let url = notifier.api_url("sendMessage");
    for chunk in split_message(text, MESSAGE_LIMIT) {
        let params = [("chat_id", chat_id.to_string()), ("text", chunk)];
        let response = notifier.client.post(&url).form(&params).send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_else(|_| "unknown".into());
        if !status.is_success() {
            warn!("❌ Telegram text error [{}]: {}", status, body);
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        debug!("✅ Telegram text sent [{}]", status);
    }
    Ok(())
}

/// Splits on blank-line block boundaries so one product never straddles two
/// messages; a single oversized block is cut by characters.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for block in text.split("\n\n") {
        let separator = if current.is_empty() { 0 } else { 2 };
        if char_len(&current) + separator + char_len(block) <= limit {
            if separator > 0 {
                current.push_str("\n\n");
            }
            current.push_str(block);
            continue;
        }

        if !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }
        if char_len(block) <= limit {
            current.push_str(block);
        } else {
            let chars: Vec<char> = block.chars().collect();
            for piece in chars.chunks(limit) {
                chunks.push(piece.iter().collect());
            }
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_message() {
        assert_eq!(split_message("a\n\nb", 100), ["a\n\nb"]);
    }

    #[test]
    fn splits_between_blocks() {
        assert_eq!(split_message("aaaa\n\nbbbb\n\ncc", 10), ["aaaa\n\nbbbb", "cc"]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 4 CJK characters are 12 bytes.
        assert_eq!(split_message("流量套餐\n\n流量套餐", 10), ["流量套餐\n\n流量套餐"]);
    }

    #[test]
    fn oversized_block_is_cut() {
        assert_eq!(split_message("abcdefg", 3), ["abc", "def", "g"]);
    }

    #[test]
    fn every_chunk_respects_limit() {
        let text = (0..200)
            .map(|i| format!("产品 {i}\n链接 https://172.lot-ml.com/ProductEn/Detail/{i}"))
            .collect::<Vec<_>>()
            .join("\n\n");
        let chunks = split_message(&text, MESSAGE_LIMIT);
        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.chars().count() <= MESSAGE_LIMIT));
        assert_eq!(chunks.join("\n\n"), text);
    }
}
