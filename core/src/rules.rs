use crate::gesture::{CLICK_SLOP, DRAG_THRESHOLD};

pub const CURSOR_SPEED_DEFAULT: f32 = 0.15;
pub const CURSOR_TRAIL_RATIO_DEFAULT: f32 = 0.6;
pub const CURSOR_MIN_VIEWPORT_DEFAULT: f32 = 768.0;
pub const COPY_FEEDBACK_MS_DEFAULT: u32 = 2000;
pub const CONTACT_EMAIL_DEFAULT: &str = "avner.adan@gmail.com";

pub const RULE_KEYS: [&str; 8] = [
    "drag_threshold",
    "click_slop",
    "cursor",
    "cursor_speed",
    "cursor_trail_ratio",
    "cursor_min_viewport",
    "copy_feedback_ms",
    "contact_email",
];

#[derive(Clone, Debug, PartialEq)]
pub struct PageRules {
    pub drag_threshold: f32,
    pub click_slop: f32,
    pub cursor_enabled: bool,
    pub cursor_speed: f32,
    pub cursor_trail_ratio: f32,
    pub cursor_min_viewport: f32,
    pub copy_feedback_ms: u32,
    pub contact_email: String,
}

impl Default for PageRules {
    fn default() -> Self {
        Self {
            drag_threshold: DRAG_THRESHOLD,
            click_slop: CLICK_SLOP,
            cursor_enabled: true,
            cursor_speed: CURSOR_SPEED_DEFAULT,
            cursor_trail_ratio: CURSOR_TRAIL_RATIO_DEFAULT,
            cursor_min_viewport: CURSOR_MIN_VIEWPORT_DEFAULT,
            copy_feedback_ms: COPY_FEEDBACK_MS_DEFAULT,
            contact_email: CONTACT_EMAIL_DEFAULT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("unknown setting {0:?}")]
    UnknownKey(String),
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

impl PageRules {
    /// Applies one `key=value` override. Keys accept `-` or `_` separators.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), RuleError> {
        let key = key.trim().to_ascii_lowercase().replace('-', "_");
        let value = value.trim();
        match key.as_str() {
            "drag_threshold" => self.drag_threshold = parse_positive("drag_threshold", value)?,
            "click_slop" => self.click_slop = parse_positive("click_slop", value)?,
            "cursor" => self.cursor_enabled = parse_flag("cursor", value)?,
            "cursor_speed" => self.cursor_speed = parse_ratio("cursor_speed", value)?,
            "cursor_trail_ratio" => {
                self.cursor_trail_ratio = parse_ratio("cursor_trail_ratio", value)?
            }
            "cursor_min_viewport" => {
                self.cursor_min_viewport = parse_positive("cursor_min_viewport", value)?
            }
            "copy_feedback_ms" => {
                self.copy_feedback_ms =
                    value.parse().map_err(|_| invalid("copy_feedback_ms", value))?
            }
            "contact_email" => {
                if !value.contains('@') {
                    return Err(invalid("contact_email", value));
                }
                self.contact_email = value.to_string();
            }
            _ => return Err(RuleError::UnknownKey(key)),
        }
        Ok(())
    }

    pub fn apply_overrides<'a, I>(&mut self, pairs: I) -> Vec<RuleError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs
            .into_iter()
            .filter_map(|(key, value)| self.apply_override(key, value).err())
            .collect()
    }

    pub fn cursor_allowed(&self, viewport_width: f32) -> bool {
        self.cursor_enabled && viewport_width > self.cursor_min_viewport
    }
}

fn invalid(key: &'static str, value: &str) -> RuleError {
    RuleError::InvalidValue {
        key,
        value: value.to_string(),
    }
}

fn parse_positive(key: &'static str, value: &str) -> Result<f32, RuleError> {
    match value.parse::<f32>() {
        Ok(parsed) if parsed.is_finite() && parsed > 0.0 => Ok(parsed),
        _ => Err(invalid(key, value)),
    }
}

fn parse_ratio(key: &'static str, value: &str) -> Result<f32, RuleError> {
    match value.parse::<f32>() {
        Ok(parsed) if parsed > 0.0 && parsed <= 1.0 => Ok(parsed),
        _ => Err(invalid(key, value)),
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, RuleError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}
