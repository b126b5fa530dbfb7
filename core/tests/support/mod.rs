#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use folio_core::{
    build_registry, GallerySurface, MediaKind, MediaRecord, PageSurface, Playback, Presentation,
    ProjectId, ProjectRecord, Registry,
};

#[derive(Clone, Debug)]
pub struct FakeMedia {
    pub kind: MediaKind,
    pub active: bool,
    pub playing: bool,
    pub time: f32,
}

/// Records what the state machines ask the page to show.
#[derive(Default)]
pub struct FakePage {
    pub media: HashMap<ProjectId, Vec<FakeMedia>>,
    pub dots: HashMap<ProjectId, Vec<bool>>,
    pub dragging: HashSet<ProjectId>,
    pub pause_all_calls: usize,
    pub resumed: Vec<(ProjectId, usize)>,
}

impl FakePage {
    pub fn for_registry(registry: &Registry) -> Self {
        let mut page = Self::default();
        for project in registry.iter() {
            let media = project
                .media
                .iter()
                .enumerate()
                .map(|(idx, item)| FakeMedia {
                    kind: item.kind,
                    active: idx == 0,
                    playing: idx == 0 && item.kind.is_video(),
                    time: 0.0,
                })
                .collect();
            page.media.insert(project.id, media);
        }
        page
    }

    pub fn active_positions(&self, project: ProjectId) -> Vec<usize> {
        self.media
            .get(&project)
            .map(|media| {
                media
                    .iter()
                    .enumerate()
                    .filter(|(_, m)| m.active)
                    .map(|(idx, _)| idx + 1)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn playing_count(&self) -> usize {
        self.media
            .values()
            .flat_map(|media| media.iter())
            .filter(|m| m.playing)
            .count()
    }

    pub fn item(&mut self, project: ProjectId, position: usize) -> &mut FakeMedia {
        &mut self.media.get_mut(&project).expect("known project")[position - 1]
    }
}

impl GallerySurface for FakePage {
    fn present(&mut self, project: ProjectId, presentation: &Presentation) {
        let Some(media) = self.media.get_mut(&project) else {
            return;
        };
        for step in &presentation.media {
            let Some(item) = media.get_mut(step.position - 1) else {
                continue;
            };
            item.active = step.active;
            match step.playback {
                Playback::Still => {}
                Playback::Play => item.playing = true,
                Playback::StopAndRewind => {
                    item.playing = false;
                    item.time = 0.0;
                }
            }
        }
        self.dots.insert(project, presentation.dots.clone());
    }

    fn set_dragging(&mut self, project: ProjectId, dragging: bool) {
        if dragging {
            self.dragging.insert(project);
        } else {
            self.dragging.remove(&project);
        }
    }
}

impl PageSurface for FakePage {
    fn pause_all_videos(&mut self) {
        self.pause_all_calls += 1;
        for item in self.media.values_mut().flat_map(|media| media.iter_mut()) {
            item.playing = false;
        }
    }

    fn resume_video(&mut self, project: ProjectId, position: usize) {
        self.resumed.push((project, position));
        if let Some(item) = self
            .media
            .get_mut(&project)
            .and_then(|media| media.get_mut(position - 1))
        {
            item.playing = true;
        }
    }
}

pub fn id(value: u32) -> ProjectId {
    ProjectId::new(value).expect("non-zero id")
}

pub fn project(id: &str, media: Vec<MediaRecord>) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        title: format!("Project {id}"),
        subtitle: "Case study".to_string(),
        media,
    }
}

/// Project 1: five items, the last one a video. Project 2: three items with a
/// video in the middle. Project 3: no media.
pub fn sample_registry() -> Registry {
    build_registry(vec![
        project(
            "1",
            vec![
                MediaRecord::image("1-1.jpg"),
                MediaRecord::image("1-2.jpg"),
                MediaRecord::image("1-3.jpg"),
                MediaRecord::image("1-4.jpg"),
                MediaRecord::video("1-5.mp4"),
            ],
        ),
        project(
            "2",
            vec![
                MediaRecord::image("2-1.jpg"),
                MediaRecord::video("2-2.mp4"),
                MediaRecord::image("2-3.jpg"),
            ],
        ),
        project("3", Vec::new()),
    ])
    .registry
}
