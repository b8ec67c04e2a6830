// Result and metadata shapes shared by every tool

use serde::Serialize;

/// Uniform envelope returned by every tool handler.
///
/// Always carries at least one content block; `isError` is only serialized
/// when set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResult {
    content: Vec<ToolContent>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    is_error: Option<bool>,
}

impl ToolResult {
    /// A successful result with a single text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::text(text)],
            is_error: None,
        }
    }

    /// A failed result with a single text block.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::text(message)],
            is_error: Some(true),
        }
    }

    /// Append another text block.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content.push(ToolContent::text(text));
        self
    }

    pub fn content(&self) -> &[ToolContent] {
        &self.content
    }

    pub fn is_error(&self) -> bool {
        self.is_error.unwrap_or(false)
    }

    /// Text of the first content block.
    pub fn first_text(&self) -> &str {
        match self.content.first() {
            Some(ToolContent::Text { text }) => text,
            None => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// Advisory capability hints. Nothing in the dispatcher enforces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolAnnotations {
    pub read_only_hint: bool,
    pub destructive_hint: bool,
    pub idempotent_hint: bool,
}

impl ToolAnnotations {
    /// Read-only, non-destructive, idempotent.
    pub const fn read_only() -> Self {
        Self {
            read_only_hint: true,
            destructive_hint: false,
            idempotent_hint: true,
        }
    }

    /// Creates remote state; repeating the call creates more.
    pub const fn creates_state() -> Self {
        Self {
            read_only_hint: false,
            destructive_hint: false,
            idempotent_hint: false,
        }
    }
}

/// Entry of the `--list-tools` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolSummary {
    pub id: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape_omits_flag() {
        let result = ToolResult::text("hello");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"content": [{"type": "text", "text": "hello"}]})
        );
        assert!(!result.is_error());
    }

    #[test]
    fn test_error_shape() {
        let result = ToolResult::error("Unknown tool: nope");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"content": [{"type": "text", "text": "Unknown tool: nope"}], "isError": true})
        );
        assert!(result.is_error());
    }

    #[test]
    fn test_blocks_keep_order() {
        let result = ToolResult::text("one").with_text("two");
        assert_eq!(result.content().len(), 2);
        assert_eq!(result.first_text(), "one");
        assert_eq!(result.content()[1], ToolContent::text("two"));
    }

    #[test]
    fn test_annotations_serialize_camel_case() {
        assert_eq!(
            serde_json::to_value(ToolAnnotations::read_only()).unwrap(),
            json!({"readOnlyHint": true, "destructiveHint": false, "idempotentHint": true})
        );
    }
}
