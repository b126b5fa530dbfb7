use crate::model::{MediaItem, MediaKind};
use crate::sequence::{BoundaryPolicy, IndexedSequence};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Still,
    Play,
    StopAndRewind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaPresentation {
    pub position: usize,
    pub kind: MediaKind,
    pub active: bool,
    pub playback: Playback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlState {
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presentation {
    pub index: usize,
    pub media: Vec<MediaPresentation>,
    pub dots: Vec<bool>,
    pub controls: Option<ControlState>,
}

impl Presentation {
    pub fn active(&self) -> Option<&MediaPresentation> {
        self.media.iter().find(|media| media.active)
    }

    pub fn active_count(&self) -> usize {
        self.media.iter().filter(|media| media.active).count()
    }
}

pub fn plan(sequence: &IndexedSequence, media: &[MediaItem]) -> Presentation {
    let index = sequence.index();
    let media = media
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let position = idx + 1;
            let active = position == index;
            let playback = match (item.kind, active) {
                (MediaKind::Image, _) => Playback::Still,
                (MediaKind::Video, true) => Playback::Play,
                (MediaKind::Video, false) => Playback::StopAndRewind,
            };
            MediaPresentation {
                position,
                kind: item.kind,
                active,
                playback,
            }
        })
        .collect();
    let dots = (1..=sequence.len()).map(|position| position == index).collect();
    let controls = match sequence.policy() {
        BoundaryPolicy::Wrap => None,
        BoundaryPolicy::Clamp => Some(ControlState {
            previous_disabled: !sequence.can_retreat(),
            next_disabled: !sequence.can_advance(),
        }),
    };
    Presentation {
        index,
        media,
        dots,
        controls,
    }
}
