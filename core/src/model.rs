use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectId(u32);

impl ProjectId {
    pub fn new(value: u32) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn parse(value: &str) -> Result<Self, ProjectIdError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ProjectIdError::Empty);
        }
        if let Some((index, ch)) = trimmed.char_indices().find(|(_, ch)| !ch.is_ascii_digit()) {
            return Err(ProjectIdError::InvalidCharacter { ch, index });
        }
        let parsed: u32 = trimmed
            .parse()
            .map_err(|_| ProjectIdError::Overflow(trimmed.to_string()))?;
        Self::new(parsed).ok_or(ProjectIdError::Zero)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for ProjectId {
    type Err = ProjectIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectIdError {
    #[error("project id is empty")]
    Empty,
    #[error("invalid character '{ch}' at position {index}")]
    InvalidCharacter { ch: char, index: usize },
    #[error("project id {0} does not fit in 32 bits")]
    Overflow(String),
    #[error("project id must be positive")]
    Zero,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("video") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    pub fn is_video(self) -> bool {
        matches!(self, MediaKind::Video)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub src: String,
    pub alt: Option<String>,
}

impl MediaItem {
    pub fn image(src: impl Into<String>, alt: Option<&str>) -> Self {
        Self {
            kind: MediaKind::Image,
            src: src.into(),
            alt: alt.map(str::to_string),
        }
    }

    pub fn video(src: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            src: src.into(),
            alt: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub subtitle: String,
    pub media: Vec<MediaItem>,
}

impl Project {
    pub fn media_len(&self) -> usize {
        self.media.len()
    }

    pub fn media_at(&self, position: usize) -> Option<&MediaItem> {
        position.checked_sub(1).and_then(|idx| self.media.get(idx))
    }
}
