//! Hook entrypoint: read one payload from stdin, maybe print one record, always exit 0.
//!
//! The host treats a non-zero status as a hook failure, so every error path
//! here is logged (when tracing is enabled) and then swallowed.

use clap::error::ErrorKind;
use clap::Parser;
use media_aware_hook::{init_tracing, HookConfig, HookDecision, MediaHook};
use std::io;
use std::process::ExitCode;

fn load_config() -> Option<HookConfig> {
    match HookConfig::try_parse() {
        Ok(config) => Some(config),
        Err(err) => {
            let _ = err.print();
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
                _ => Some(HookConfig::fallback()),
            }
        }
    }
}

fn log_decision(decision: &HookDecision) {
    match decision {
        HookDecision::Emit(_) => tracing::debug!("media context emitted"),
        HookDecision::Silent(reason) => {
            tracing::debug!(reason = reason.as_str(), "hook stayed silent");
        }
    }
}

fn main() -> ExitCode {
    let Some(config) = load_config() else {
        return ExitCode::SUCCESS;
    };
    init_tracing(&config);

    let hook = match MediaHook::new(config.hook_enabled()) {
        Ok(hook) => hook,
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "failed to build media hook");
            return ExitCode::SUCCESS;
        }
    };

    match hook.run(io::stdin().lock(), io::stdout().lock()) {
        Ok(decision) => log_decision(&decision),
        Err(err) => tracing::warn!(error = %format!("{err:#}"), "failed to emit hook output"),
    }
    ExitCode::SUCCESS
}
