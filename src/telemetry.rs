//! Optional JSON trace logging so hook decisions can be audited without touching stdout.

use crate::config::HookConfig;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::OnceLock;
use tracing_subscriber::fmt::time::UtcTime;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

fn init_tracing_once(config: &HookConfig, once: &OnceLock<()>) {
    if !config.tracing_enabled() {
        return;
    }

    let _ = once.get_or_init(|| {
        let path = config.trace_log_path();
        let Some(file) = open_trace_log(&path) else {
            return;
        };
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_writer(file)
            .with_max_level(tracing::Level::DEBUG)
            .with_current_span(false)
            .with_span_list(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

fn open_trace_log(path: &Path) -> Option<std::fs::File> {
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Install the file-backed JSON subscriber when logging is enabled.
pub fn init_tracing(config: &HookConfig) {
    init_tracing_once(config, &TRACING_INIT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::env;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_trace_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();
        env::temp_dir().join(format!("media-hook-trace-{suffix}-{nanos}.jsonl"))
    }

    fn config_for(path: &Path, logs: bool, no_logs: bool) -> HookConfig {
        let mut config = HookConfig::parse_from(["telemetry-test"]);
        config.trace_log = Some(path.to_path_buf());
        config.logs = logs;
        config.no_logs = no_logs;
        config
    }

    #[test]
    fn init_tracing_once_creates_file_when_enabled() {
        let path = unique_trace_path("enabled");
        let _ = fs::remove_file(&path);
        init_tracing_once(&config_for(&path, true, false), &OnceLock::new());
        assert!(path.exists(), "enabled config should create trace file");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn init_tracing_once_skips_file_when_disabled() {
        let path = unique_trace_path("disabled");
        let _ = fs::remove_file(&path);
        init_tracing_once(&config_for(&path, true, true), &OnceLock::new());
        init_tracing_once(&config_for(&path, false, false), &OnceLock::new());
        assert!(!path.exists(), "disabled config should not create trace file");
    }

    #[test]
    fn init_tracing_once_runs_initializer_only_once() {
        let first = unique_trace_path("first");
        let second = unique_trace_path("second");
        let once = OnceLock::new();
        init_tracing_once(&config_for(&first, true, false), &once);
        init_tracing_once(&config_for(&second, true, false), &once);
        assert!(first.exists());
        assert!(!second.exists());
        let _ = fs::remove_file(&first);
    }

    #[test]
    fn open_trace_log_fails_for_missing_directory() {
        let path = env::temp_dir()
            .join("media-hook-missing-dir")
            .join("nested")
            .join("trace.jsonl");
        assert!(open_trace_log(&path).is_none());
    }
}
