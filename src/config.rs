//! Hook configuration so the enable toggle and trace logging are read once at startup.

use clap::{ArgAction, Parser};
use std::env;
use std::path::PathBuf;

pub const ENABLED_ENV: &str = "CONTEXTSTREAM_MEDIA_HOOK_ENABLED";
pub const TRACE_LOG_ENV: &str = "MEDIA_HOOK_TRACE_LOG";
const DEFAULT_TRACE_LOG_FILE: &str = "media_aware_hook_trace.jsonl";

#[derive(Debug, Parser, Clone)]
#[command(
    name = "media-aware-hook",
    about = "UserPromptSubmit hook that injects media tool context",
    version
)]
pub struct HookConfig {
    /// Enable toggle; the hook runs only when this is "true" (case-insensitive)
    #[arg(long = "enabled", env = ENABLED_ENV, default_value = "true")]
    pub enabled: String,

    /// Write JSON trace logs to the trace log file
    #[arg(long = "logs", env = "MEDIA_HOOK_LOGS", action = ArgAction::SetTrue)]
    pub logs: bool,

    /// Disable trace logging even when --logs is set
    #[arg(long = "no-logs", env = "MEDIA_HOOK_NO_LOGS", action = ArgAction::SetTrue)]
    pub no_logs: bool,

    /// Trace log path (defaults to the system temp dir)
    #[arg(long = "trace-log", env = TRACE_LOG_ENV)]
    pub trace_log: Option<PathBuf>,
}

impl HookConfig {
    /// Configuration used when argument or env parsing fails: only the enable
    /// toggle is honored and logging stays off.
    pub fn fallback() -> Self {
        let enabled = env::var_os(ENABLED_ENV)
            .map(|value| value.to_string_lossy().into_owned())
            .unwrap_or_else(|| "true".to_string());
        Self {
            enabled,
            logs: false,
            no_logs: false,
            trace_log: None,
        }
    }

    pub fn hook_enabled(&self) -> bool {
        self.enabled.to_lowercase() == "true"
    }

    pub fn tracing_enabled(&self) -> bool {
        self.logs && !self.no_logs
    }

    pub fn trace_log_path(&self) -> PathBuf {
        self.trace_log
            .clone()
            .unwrap_or_else(|| env::temp_dir().join(DEFAULT_TRACE_LOG_FILE))
    }
}
