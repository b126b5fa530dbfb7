use std::rc::Rc;

use crate::gallery::Gallery;
use crate::model::{MediaItem, MediaKind, ProjectId};
use crate::presenter::{plan, ControlState};
use crate::registry::Registry;
use crate::sequence::{BoundaryPolicy, IndexedSequence};
use crate::surface::PageSurface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DrawerState {
    Closed,
    Open {
        project: ProjectId,
        sequence: Option<IndexedSequence>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageContent {
    Empty,
    Image { src: String, alt: Option<String> },
    Video { src: String },
}

/// `video_slot` stays set for the rest of an open session once a video
/// has been shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawerStage {
    pub content: StageContent,
    pub video_slot: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawerView {
    pub project: ProjectId,
    pub title: String,
    pub subtitle: String,
    pub index: usize,
    pub len: usize,
    pub stage: DrawerStage,
    pub dots: Vec<bool>,
    pub controls: ControlState,
}

pub struct DrawerController {
    registry: Rc<Registry>,
    state: DrawerState,
    video_slot: bool,
}

impl DrawerController {
    pub fn new(registry: Rc<Registry>) -> Self {
        Self {
            registry,
            state: DrawerState::Closed,
            video_slot: false,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DrawerState::Open { .. })
    }

    pub fn project(&self) -> Option<ProjectId> {
        match self.state {
            DrawerState::Open { project, .. } => Some(project),
            DrawerState::Closed => None,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self.state {
            DrawerState::Open {
                sequence: Some(seq),
                ..
            } => Some(seq.index()),
            _ => None,
        }
    }

    pub fn has_video_slot(&self) -> bool {
        self.video_slot
    }

    pub fn open<S: PageSurface>(&mut self, project: ProjectId, surface: &mut S) -> bool {
        let Some(entry) = self.registry.get(project) else {
            return false;
        };
        let sequence = IndexedSequence::new(entry.media_len(), BoundaryPolicy::Clamp);
        self.state = DrawerState::Open { project, sequence };
        self.video_slot = false;
        self.sync_video_slot();
        surface.pause_all_videos();
        true
    }

    pub fn close<S: PageSurface>(&mut self, gallery: &Gallery, surface: &mut S) -> bool {
        let DrawerState::Open { project, .. } = self.state else {
            return false;
        };
        self.state = DrawerState::Closed;
        if let Some((position, media)) = gallery.active_media(project) {
            if media.kind.is_video() {
                surface.resume_video(project, position);
            }
        }
        true
    }

    pub fn next(&mut self) -> bool {
        self.with_sequence(IndexedSequence::next)
    }

    pub fn previous(&mut self) -> bool {
        self.with_sequence(IndexedSequence::previous)
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        self.with_sequence(|seq| seq.go_to(index))
    }

    pub fn view(&self) -> Option<DrawerView> {
        let DrawerState::Open { project, sequence } = self.state else {
            return None;
        };
        let entry = self.registry.get(project)?;
        let (index, len, dots, controls) = match sequence {
            Some(seq) => {
                let presentation = plan(&seq, &entry.media);
                let controls = presentation.controls.unwrap_or(ControlState {
                    previous_disabled: !seq.can_retreat(),
                    next_disabled: !seq.can_advance(),
                });
                (seq.index(), seq.len(), presentation.dots, controls)
            }
            None => (
                0,
                0,
                Vec::new(),
                ControlState {
                    previous_disabled: true,
                    next_disabled: true,
                },
            ),
        };
        let content = match entry.media_at(index) {
            Some(MediaItem {
                kind: MediaKind::Video,
                src,
                ..
            }) => StageContent::Video { src: src.clone() },
            Some(MediaItem {
                kind: MediaKind::Image,
                src,
                alt,
            }) => StageContent::Image {
                src: src.clone(),
                alt: alt.clone(),
            },
            None => StageContent::Empty,
        };
        Some(DrawerView {
            project,
            title: entry.title.clone(),
            subtitle: entry.subtitle.clone(),
            index,
            len,
            stage: DrawerStage {
                content,
                video_slot: self.video_slot,
            },
            dots,
            controls,
        })
    }

    fn with_sequence<F>(&mut self, step: F) -> bool
    where
        F: FnOnce(&mut IndexedSequence) -> bool,
    {
        let DrawerState::Open {
            sequence: Some(seq),
            ..
        } = &mut self.state
        else {
            return false;
        };
        let changed = step(seq);
        if changed {
            self.sync_video_slot();
        }
        changed
    }

    fn sync_video_slot(&mut self) {
        if self.video_slot {
            return;
        }
        let DrawerState::Open {
            project,
            sequence: Some(seq),
        } = self.state
        else {
            return;
        };
        self.video_slot = self
            .registry
            .get(project)
            .and_then(|entry| entry.media_at(seq.index()))
            .map(|media| media.kind.is_video())
            .unwrap_or(false);
    }
}
