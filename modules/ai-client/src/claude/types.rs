use serde::{Deserialize, Serialize};

// =============================================================================
// Messages
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Role {
    User,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct WireMessage {
    pub role: Role,
    pub content: String,
}

impl WireMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub(crate) enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "tool_use")]
    ToolUse { name: String },
    #[serde(other)]
    Other,
}

impl ContentBlock {
    /// Short label for error messages, e.g. `tool_use (lookup)`.
    pub fn describe(&self) -> String {
        match self {
            ContentBlock::Text { .. } => "text".to_string(),
            ContentBlock::ToolUse { name } => format!("tool_use ({name})"),
            ContentBlock::Other => "an unsupported block type".to_string(),
        }
    }
}

// =============================================================================
// Chat Request
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChatRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<WireMessage>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            max_tokens: 1024,
            messages: Vec::new(),
        }
    }

    pub fn message(mut self, message: WireMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

// =============================================================================
// Chat Response
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Text of the first content block. `None` when the first block is not
    /// text, or there are no blocks at all.
    pub fn first_text(&self) -> Option<&str> {
        match self.content.first()? {
            ContentBlock::Text { text } => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_text_reads_leading_text_block() {
        let response: ChatResponse = serde_json::from_value(serde_json::json!({
            "content": [{"type": "text", "text": "hello"}],
            "stop_reason": "end_turn"
        }))
        .unwrap();
        assert_eq!(response.first_text(), Some("hello"));
    }

    #[test]
    fn first_text_ignores_text_after_non_text_block() {
        let response: ChatResponse = serde_json::from_value(serde_json::json!({
            "content": [
                {"type": "tool_use", "id": "tu_1", "name": "lookup", "input": {}},
                {"type": "text", "text": "late"}
            ]
        }))
        .unwrap();
        assert_eq!(response.first_text(), None);
        assert_eq!(response.content[0].describe(), "tool_use (lookup)");
    }

    #[test]
    fn unknown_block_types_deserialize() {
        let response: ChatResponse = serde_json::from_value(serde_json::json!({
            "content": [{"type": "thinking", "thinking": "..."}]
        }))
        .unwrap();
        assert!(matches!(response.content[0], ContentBlock::Other));
    }

    #[test]
    fn usage_and_stop_reason_deserialize() {
        let response: ChatResponse = serde_json::from_value(serde_json::json!({
            "content": [{"type": "text", "text": "hi"}],
            "stop_reason": "max_tokens",
            "usage": {"input_tokens": 12, "output_tokens": 1024}
        }))
        .unwrap();
        assert_eq!(response.stop_reason.as_deref(), Some("max_tokens"));
        let usage = response.usage.unwrap();
        assert_eq!((usage.input_tokens, usage.output_tokens), (12, 1024));
    }

    #[test]
    fn request_omits_unset_fields() {
        let request = ChatRequest::new("m").message(WireMessage::user("hi"));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["max_tokens"], 1024);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hi");
        assert_eq!(json.as_object().unwrap().len(), 3);
    }
}
