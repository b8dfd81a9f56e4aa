//! Media-aware prompt hook: classify one `UserPromptSubmit` payload and emit media tool context.

pub mod config;
pub mod hook;
pub mod input;
pub mod output;
pub mod patterns;
mod telemetry;

pub use config::HookConfig;
pub use hook::{HookDecision, MediaHook, SilentReason};
pub use input::HookInput;
pub use output::{HookOutput, HOOK_EVENT_NAME, MEDIA_CONTEXT};
pub use patterns::{MediaCategory, MediaPatternSet, PatternHit};
pub use telemetry::init_tracing;
