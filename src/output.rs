//! Hook response contract so the host receives the exact `hookSpecificOutput` shape.

use serde::{Deserialize, Serialize};

/// Host event this hook answers.
pub const HOOK_EVENT_NAME: &str = "UserPromptSubmit";

/// Context appended to the conversation when a prompt looks media-related.
pub const MEDIA_CONTEXT: &str = r#"[MEDIA TOOLS AVAILABLE]
Your workspace may have indexed media assets. Use ContextStream media tools:

- **Search media**: `mcp__contextstream__media(action="search", query="your description")`
  - Semantic search across videos, images, audio, documents
  - Returns timestamps, transcripts, and match context

- **Index new media**: `mcp__contextstream__media(action="index", file_path="...", content_type="video|audio|image|document")`

- **Get clip for editing**: `mcp__contextstream__media(action="get_clip", content_id="...", start="1:34", end="2:15", output_format="remotion|ffmpeg|raw")`
  - `output_format="remotion"` returns frame-based props for Remotion Video component

- **List indexed assets**: `mcp__contextstream__media(action="list")`

- **Check status**: `mcp__contextstream__media(action="status", content_id="...")`

TIP: For Remotion projects, search for relevant clips first, then use get_clip with output_format="remotion".
[END MEDIA TOOLS]"#;

/// Top-level document written to stdout on a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: String,
    pub additional_context: String,
}

impl HookOutput {
    pub fn media_context() -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: HOOK_EVENT_NAME.to_string(),
                additional_context: MEDIA_CONTEXT.to_string(),
            },
        }
    }

    /// Compact single-line JSON, without the trailing newline.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn serializes_host_field_names() {
        let line = HookOutput::media_context()
            .to_json_line()
            .expect("serialize");
        let value: Value = serde_json::from_str(&line).expect("parse");
        assert_eq!(
            value,
            json!({
                "hookSpecificOutput": {
                    "hookEventName": "UserPromptSubmit",
                    "additionalContext": MEDIA_CONTEXT,
                }
            })
        );
    }

    #[test]
    fn json_line_has_no_raw_newlines() {
        let line = HookOutput::media_context()
            .to_json_line()
            .expect("serialize");
        assert!(!line.contains('\n'));
        assert!(line.starts_with("{\"hookSpecificOutput\":"));
    }

    #[test]
    fn media_context_is_trimmed_and_framed() {
        assert_eq!(MEDIA_CONTEXT, MEDIA_CONTEXT.trim());
        assert!(MEDIA_CONTEXT.starts_with("[MEDIA TOOLS AVAILABLE]"));
        assert!(MEDIA_CONTEXT.ends_with("[END MEDIA TOOLS]"));
        for action in ["search", "index", "get_clip", "list", "status"] {
            assert!(
                MEDIA_CONTEXT.contains(&format!("action=\"{action}\"")),
                "missing action {action}"
            );
        }
    }
}
