//! Prompt construction and chat-completion envelopes.
//!
//! The crate performs no I/O. These helpers produce the request messages a
//! host sends to its model client and pull the generated text back out of
//! the response body.

use serde::{Deserialize, Serialize};

use crate::types::{Preference, UNSPECIFIED};

/// System prompt sent ahead of every generation request.
pub const SYSTEM_PROMPT: &str = "你是旅行规划助手，擅长将用户需求转化为结构化行程。";

const OUTPUT_SCHEMA: &str = r#"{
  "days": [{"date": "YYYY-MM-DD", "items": [{"time": "08:00", "title": "", "description": "", "category": "交通|景点|餐饮|住宿|其他", "cost": 0, "location": "lng,lat"}]}],
  "estimatedBudget": 12345,
  "budgetBreakdown": [{"category": "交通", "amount": 0, "currency": "CNY", "note": ""}]
}"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One message of a chat-completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// The user prompt asking for an itinerary matching `preference`.
pub fn build_prompt(preference: &Preference) -> String {
    let date = |d: Option<chrono::NaiveDate>| {
        d.map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| UNSPECIFIED.to_string())
    };

    format!(
        "你是一位专业旅行规划师，请针对以下需求生成详细行程：\n\
         目的地：{}\n\
         日期：{} 至 {}\n\
         预算：{} {}\n\
         同行人：{}\n\
         偏好：{}\n\
         额外备注：{}\n\n\
         输出 JSON，格式：{}",
        preference.destination,
        date(preference.start_date),
        date(preference.end_date),
        preference.budget,
        preference.currency,
        preference.companions,
        preference.themes.join(", "),
        preference.notes.as_deref().unwrap_or("无"),
        OUTPUT_SCHEMA,
    )
}

/// System and user messages for a generation request.
pub fn chat_messages(preference: &Preference) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(build_prompt(preference)),
    ]
}

#[derive(Debug, Deserialize)]
struct CompletionEnvelope {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: Option<CompletionMessage>,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// Generated text from a chat-completion response body.
///
/// Returns `choices[0].message.content` when `body` is such an envelope, and
/// `None` when the envelope carries no content. Any other non-blank body is
/// returned as is.
pub fn completion_content(body: &str) -> Option<String> {
    match serde_json::from_str::<CompletionEnvelope>(body) {
        Ok(envelope) => envelope
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.trim().is_empty()),
        Err(_) if body.trim().is_empty() => None,
        Err(_) => Some(body.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_prompt_lists_preference() {
        let pref = Preference {
            destination: "杭州".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 4, 5),
            budget: 3000.0,
            companions: "朋友同行".into(),
            themes: vec!["美食".into(), "自然".into()],
            ..Preference::default()
        };
        let prompt = build_prompt(&pref);
        assert!(prompt.contains("目的地：杭州"));
        assert!(prompt.contains("日期：2024-04-05 至 待定"));
        assert!(prompt.contains("预算：3000 CNY"));
        assert!(prompt.contains("偏好：美食, 自然"));
        assert!(prompt.contains("额外备注：无"));
        assert!(prompt.contains("budgetBreakdown"));
    }

    #[test]
    fn test_chat_messages_wire_shape() {
        let messages = chat_messages(&Preference::default());
        let value = serde_json::to_value(&messages).unwrap();
        assert_eq!(value[0]["role"], json!("system"));
        assert_eq!(value[0]["content"], json!(SYSTEM_PROMPT));
        assert_eq!(value[1]["role"], json!("user"));
    }

    #[test]
    fn test_completion_content_from_envelope() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": "{\"days\": []}"}}]}"#;
        assert_eq!(completion_content(body).as_deref(), Some("{\"days\": []}"));
    }

    #[test]
    fn test_completion_content_empty_envelope() {
        assert_eq!(completion_content(r#"{"choices": []}"#), None);
        assert_eq!(
            completion_content(r#"{"choices": [{"message": {"content": null}}]}"#),
            None
        );
    }

    #[test]
    fn test_completion_content_passthrough() {
        let body = r#"{"days": [{"date": "2024-05-01"}]}"#;
        assert_eq!(completion_content(body).as_deref(), Some(body));
        assert_eq!(completion_content("  "), None);
    }
}
