use serde::Serialize;

use crate::telemetry::LogLevel;

const DEFAULT_SCROLLED_THRESHOLD: f64 = 100.0;
const DEFAULT_SECTION_OFFSET: f64 = 100.0;
const DEFAULT_LAST_SECTION_BOTTOM_SLACK: f64 = 150.0;
const DEFAULT_BACK_TO_TOP_THRESHOLD: f64 = 300.0;
const DEFAULT_ANCHOR_OFFSET: f64 = 80.0;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
const DEFAULT_REVEAL_BOTTOM_MARGIN: f64 = 100.0;
const DEFAULT_STATS_THRESHOLD: f64 = 0.5;
const DEFAULT_COUNTER_DURATION_MS: u64 = 2_000;
const DEFAULT_COUNTER_FRAME_MS: u64 = 16;
const DEFAULT_TYPING_TEXT: &str = "Zarif Haikal";
const DEFAULT_TYPING_STEP_MS: u64 = 100;
const DEFAULT_TYPING_START_DELAY_MS: u64 = 300;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const SCROLLED_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 2_000.0);
const SECTION_OFFSET_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const LAST_SECTION_BOTTOM_SLACK_BOUNDS: (f64, f64) = (0.0, 2_000.0);
const BACK_TO_TOP_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 10_000.0);
const ANCHOR_OFFSET_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const RATIO_BOUNDS: (f64, f64) = (0.0, 1.0);
const REVEAL_BOTTOM_MARGIN_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const COUNTER_DURATION_MS_BOUNDS: (u64, u64) = (100, 60_000);
const COUNTER_FRAME_MS_BOUNDS: (u64, u64) = (1, 1_000);
const TYPING_STEP_MS_BOUNDS: (u64, u64) = (1, 5_000);
const TYPING_START_DELAY_MS_BOUNDS: (u64, u64) = (0, 10_000);

const ENV_PREFIX: &str = "PORTFOLIO_";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionConfig {
    pub scrolled_threshold: f64,
    pub section_offset: f64,
    pub last_section_bottom_slack: f64,
    pub back_to_top_threshold: f64,
    pub anchor_offset: f64,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin: f64,
    pub stats_threshold: f64,
    pub counter_duration_ms: u64,
    pub counter_frame_ms: u64,
    pub typing_text: String,
    pub typing_step_ms: u64,
    pub typing_start_delay_ms: u64,
    pub log_level: LogLevel,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: DEFAULT_SCROLLED_THRESHOLD,
            section_offset: DEFAULT_SECTION_OFFSET,
            last_section_bottom_slack: DEFAULT_LAST_SECTION_BOTTOM_SLACK,
            back_to_top_threshold: DEFAULT_BACK_TO_TOP_THRESHOLD,
            anchor_offset: DEFAULT_ANCHOR_OFFSET,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_bottom_margin: DEFAULT_REVEAL_BOTTOM_MARGIN,
            stats_threshold: DEFAULT_STATS_THRESHOLD,
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            counter_frame_ms: DEFAULT_COUNTER_FRAME_MS,
            typing_text: DEFAULT_TYPING_TEXT.to_string(),
            typing_step_ms: DEFAULT_TYPING_STEP_MS,
            typing_start_delay_ms: DEFAULT_TYPING_START_DELAY_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl InteractionConfig {
    /// Builds the configuration from kebab-case keys such as `scrolled-threshold`.
    /// Missing, unparsable or out-of-bounds values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            scrolled_threshold: parse_f64_with_bounds(
                &lookup,
                "scrolled-threshold",
                DEFAULT_SCROLLED_THRESHOLD,
                SCROLLED_THRESHOLD_BOUNDS,
            ),
            section_offset: parse_f64_with_bounds(
                &lookup,
                "section-offset",
                DEFAULT_SECTION_OFFSET,
                SECTION_OFFSET_BOUNDS,
            ),
            last_section_bottom_slack: parse_f64_with_bounds(
                &lookup,
                "last-section-bottom-slack",
                DEFAULT_LAST_SECTION_BOTTOM_SLACK,
                LAST_SECTION_BOTTOM_SLACK_BOUNDS,
            ),
            back_to_top_threshold: parse_f64_with_bounds(
                &lookup,
                "back-to-top-threshold",
                DEFAULT_BACK_TO_TOP_THRESHOLD,
                BACK_TO_TOP_THRESHOLD_BOUNDS,
            ),
            anchor_offset: parse_f64_with_bounds(
                &lookup,
                "anchor-offset",
                DEFAULT_ANCHOR_OFFSET,
                ANCHOR_OFFSET_BOUNDS,
            ),
            reveal_threshold: parse_f64_with_bounds(
                &lookup,
                "reveal-threshold",
                DEFAULT_REVEAL_THRESHOLD,
                RATIO_BOUNDS,
            ),
            reveal_bottom_margin: parse_f64_with_bounds(
                &lookup,
                "reveal-bottom-margin",
                DEFAULT_REVEAL_BOTTOM_MARGIN,
                REVEAL_BOTTOM_MARGIN_BOUNDS,
            ),
            stats_threshold: parse_f64_with_bounds(
                &lookup,
                "stats-threshold",
                DEFAULT_STATS_THRESHOLD,
                RATIO_BOUNDS,
            ),
            counter_duration_ms: parse_u64_with_bounds(
                &lookup,
                "counter-duration-ms",
                DEFAULT_COUNTER_DURATION_MS,
                COUNTER_DURATION_MS_BOUNDS,
            ),
            counter_frame_ms: parse_u64_with_bounds(
                &lookup,
                "counter-frame-ms",
                DEFAULT_COUNTER_FRAME_MS,
                COUNTER_FRAME_MS_BOUNDS,
            ),
            typing_text: parse_non_empty_string(&lookup, "typing-text")
                .unwrap_or_else(|| DEFAULT_TYPING_TEXT.to_string()),
            typing_step_ms: parse_u64_with_bounds(
                &lookup,
                "typing-step-ms",
                DEFAULT_TYPING_STEP_MS,
                TYPING_STEP_MS_BOUNDS,
            ),
            typing_start_delay_ms: parse_u64_with_bounds(
                &lookup,
                "typing-start-delay-ms",
                DEFAULT_TYPING_START_DELAY_MS,
                TYPING_START_DELAY_MS_BOUNDS,
            ),
            log_level: parse_log_level(&lookup, "log-level", DEFAULT_LOG_LEVEL),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(env_key(key)).ok())
    }
}

pub fn env_key(key: &str) -> String {
    format!("{ENV_PREFIX}{}", key.replace('-', "_").to_ascii_uppercase())
}

fn parse_f64_with_bounds<F>(lookup: &F, key: &str, default: f64, bounds: (f64, f64)) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_u64_with_bounds<F>(lookup: &F, key: &str, default: u64, bounds: (u64, u64)) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level<F>(lookup: &F, key: &str, default: LogLevel) -> LogLevel
where
    F: Fn(&str) -> Option<String>,
{
    parse_non_empty_string(lookup, key)
        .and_then(|value| LogLevel::from_str(&value.to_ascii_lowercase()))
        .unwrap_or(default)
}
