//! Media pattern set so prompt classification shares one ordered, case-insensitive policy.
//!
//! Categories only label patterns for diagnostics; every pattern is OR'ed into
//! a single boolean decision.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

/// Theme a pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCategory {
    Video,
    Image,
    Audio,
    Creative,
    /// Request phrasing such as "find a clip" or "show me footage".
    Action,
}

impl MediaCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaCategory::Video => "video",
            MediaCategory::Image => "image",
            MediaCategory::Audio => "audio",
            MediaCategory::Creative => "creative",
            MediaCategory::Action => "action",
        }
    }
}

const MEDIA_PATTERNS: &[(MediaCategory, &str)] = &[
    (
        MediaCategory::Video,
        r"\b(video|videos|clip|clips|footage|keyframe|keyframes)\b",
    ),
    (
        MediaCategory::Video,
        r"\b(remotion|timeline|video\s*edit|movie|film)\b",
    ),
    (
        MediaCategory::Video,
        r"\b(frame|frames|scene|scenes|shot|shots)\b",
    ),
    (
        MediaCategory::Image,
        r"\b(image|images|photo|photos|picture|pictures)\b",
    ),
    (
        MediaCategory::Image,
        r"\b(thumbnail|thumbnails|visual|visuals|graphic|graphics)\b",
    ),
    (
        MediaCategory::Image,
        r"\b(screenshot|screenshots|banner|banners|poster)\b",
    ),
    (
        MediaCategory::Audio,
        r"\b(audio|podcast|transcript|transcription|voice|speech)\b",
    ),
    (
        MediaCategory::Audio,
        r"\b(sound|sounds|music|recording|recordings)\b",
    ),
    (
        MediaCategory::Creative,
        r"\b(media|asset|assets|creative|content\s*library)\b",
    ),
    (
        MediaCategory::Creative,
        r"\b(b-roll|broll|stock|footage\s*library)\b",
    ),
    (
        MediaCategory::Action,
        r"\b(find\s*(a|the|some)?\s*(clip|video|image|audio|footage))\b",
    ),
    (
        MediaCategory::Action,
        r"\b(search\s*(for)?\s*(video|image|audio|media))\b",
    ),
    (
        MediaCategory::Action,
        r"\b(what\s*(video|image|clip|footage))\b",
    ),
    (
        MediaCategory::Action,
        r"\b(show\s*me\s*(video|image|clip|footage|media))\b",
    ),
];

#[derive(Debug)]
struct MediaPattern {
    category: MediaCategory,
    regex: Regex,
}

/// First pattern that matched a prompt, kept for trace diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternHit {
    pub index: usize,
    pub category: MediaCategory,
    pub matched: String,
}

/// Immutable, ordered set of compiled media patterns.
#[derive(Debug)]
pub struct MediaPatternSet {
    patterns: Vec<MediaPattern>,
}

impl MediaPatternSet {
    /// Compile the built-in media patterns.
    pub fn compile() -> Result<Self> {
        let patterns = MEDIA_PATTERNS
            .iter()
            .map(|(category, raw)| {
                let regex = RegexBuilder::new(raw)
                    .case_insensitive(true)
                    .build()
                    .with_context(|| format!("invalid media pattern: {raw}"))?;
                Ok(MediaPattern {
                    category: *category,
                    regex,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True when any pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.regex.is_match(text))
    }

    pub fn first_match(&self, text: &str) -> Option<PatternHit> {
        self.patterns
            .iter()
            .enumerate()
            .find_map(|(index, pattern)| {
                pattern.regex.find(text).map(|found| PatternHit {
                    index,
                    category: pattern.category,
                    matched: found.as_str().to_string(),
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pattern_set() -> MediaPatternSet {
        MediaPatternSet::compile().expect("built-in patterns should compile")
    }

    #[test]
    fn compile_keeps_every_builtin_pattern_in_order() {
        let set = pattern_set();
        assert_eq!(set.len(), 14);
        assert!(!set.is_empty());
        assert_eq!(set.patterns[0].category, MediaCategory::Video);
        assert_eq!(set.patterns[13].category, MediaCategory::Action);
    }

    #[rstest]
    #[case("Can you trim this video for me?")]
    #[case("Podcast notes please")]
    #[case("Find a clip of the sunset")]
    #[case("attach the SCREENSHOT")]
    #[case("update the Remotion timeline")]
    #[case("we need some b-roll")]
    #[case("open the content library")]
    #[case("mix the music track")]
    #[case("what's in this photo?")]
    #[case("grab frames 10 through 20")]
    #[case("search for media about dogs")]
    fn matches_media_prompts(#[case] prompt: &str) {
        assert!(pattern_set().is_match(prompt), "expected match: {prompt}");
    }

    #[rstest]
    #[case("what's the weather")]
    #[case("refactor the parser module")]
    #[case("videogame physics engine")]
    #[case("reframe the argument")]
    #[case("imagery in poetry")]
    #[case("")]
    fn ignores_non_media_prompts(#[case] prompt: &str) {
        assert!(!pattern_set().is_match(prompt), "unexpected match: {prompt}");
    }

    #[test]
    fn first_match_reports_earliest_pattern_in_list_order() {
        let hit = pattern_set()
            .first_match("show me the podcast video")
            .expect("should match");
        assert_eq!(hit.index, 0);
        assert_eq!(hit.category, MediaCategory::Video);
        assert_eq!(hit.matched, "video");
    }

    #[test]
    fn first_match_preserves_original_casing() {
        let hit = pattern_set()
            .first_match("Record a VOICE memo")
            .expect("should match");
        assert_eq!(hit.category, MediaCategory::Audio);
        assert_eq!(hit.matched, "VOICE");
    }

    #[test]
    fn first_match_returns_none_without_media_terms() {
        assert!(pattern_set().first_match("fix the failing build").is_none());
    }

    #[test]
    fn category_labels_are_stable() {
        assert_eq!(MediaCategory::Video.as_str(), "video");
        assert_eq!(MediaCategory::Image.as_str(), "image");
        assert_eq!(MediaCategory::Audio.as_str(), "audio");
        assert_eq!(MediaCategory::Creative.as_str(), "creative");
        assert_eq!(MediaCategory::Action.as_str(), "action");
    }
}
