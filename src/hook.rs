//! Prompt decision flow so every input shape ends in either one emitted record or silence.
//!
//! Malformed or missing input never becomes an error: it degrades to a silent
//! decision. Only writing the emitted record can fail.

use anyhow::{Context, Result};
use std::io::{Read, Write};

use crate::input::HookInput;
use crate::output::HookOutput;
use crate::patterns::MediaPatternSet;

/// Why the hook stayed quiet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SilentReason {
    Disabled,
    MalformedInput,
    EmptyPrompt,
    NoMatch,
}

impl SilentReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SilentReason::Disabled => "disabled",
            SilentReason::MalformedInput => "malformed_input",
            SilentReason::EmptyPrompt => "empty_prompt",
            SilentReason::NoMatch => "no_match",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookDecision {
    Emit(HookOutput),
    Silent(SilentReason),
}

/// Media prompt classifier with its enable flag fixed at construction.
#[derive(Debug)]
pub struct MediaHook {
    enabled: bool,
    patterns: MediaPatternSet,
}

impl MediaHook {
    pub fn new(enabled: bool) -> Result<Self> {
        let patterns = MediaPatternSet::compile()?;
        Ok(Self { enabled, patterns })
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Classify one raw payload.
    pub fn decide(&self, raw: &str) -> HookDecision {
        if !self.enabled {
            return HookDecision::Silent(SilentReason::Disabled);
        }
        let input = match HookInput::from_json(raw) {
            Ok(input) => input,
            Err(err) => {
                tracing::debug!(error = %err, "hook payload is not valid JSON");
                return HookDecision::Silent(SilentReason::MalformedInput);
            }
        };
        self.decide_input(&input)
    }

    pub fn decide_input(&self, input: &HookInput) -> HookDecision {
        if !self.enabled {
            return HookDecision::Silent(SilentReason::Disabled);
        }
        let prompt = input.prompt_text();
        if prompt.is_empty() {
            return HookDecision::Silent(SilentReason::EmptyPrompt);
        }
        match self.patterns.first_match(prompt) {
            Some(hit) => {
                tracing::debug!(
                    pattern = hit.index,
                    category = hit.category.as_str(),
                    matched = %hit.matched,
                    "media pattern matched"
                );
                HookDecision::Emit(HookOutput::media_context())
            }
            None => HookDecision::Silent(SilentReason::NoMatch),
        }
    }

    /// Read one payload from `reader` and write the record to `writer` on a match.
    ///
    /// A disabled hook does not touch `reader`.
    pub fn run<R: Read, W: Write>(&self, mut reader: R, mut writer: W) -> Result<HookDecision> {
        if !self.enabled {
            return Ok(HookDecision::Silent(SilentReason::Disabled));
        }
        let mut raw = String::new();
        if let Err(err) = reader.read_to_string(&mut raw) {
            tracing::debug!(error = %err, "failed to read hook payload");
            return Ok(HookDecision::Silent(SilentReason::MalformedInput));
        }
        let decision = self.decide(&raw);
        if let HookDecision::Emit(output) = &decision {
            let line = output
                .to_json_line()
                .context("failed to serialize hook output")?;
            writeln!(writer, "{line}").context("failed to write hook output")?;
            writer.flush().context("failed to flush hook output")?;
        }
        Ok(decision)
    }
}
