use std::collections::HashMap;

use crate::model::ProjectId;

pub const DRAG_THRESHOLD: f32 = 50.0;
pub const CLICK_SLOP: f32 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    Advance,
    Retreat,
}

/// Classifies a finished drag. The gesture must be longer than `threshold`
/// and more horizontal than vertical; dragging right reveals the previous
/// item.
pub fn classify_swipe(dx: f32, dy: f32, threshold: f32) -> Option<NavCommand> {
    let distance = (dx * dx + dy * dy).sqrt();
    if distance <= threshold || dx.abs() <= dy.abs() {
        return None;
    }
    if dx > 0.0 {
        Some(NavCommand::Retreat)
    } else {
        Some(NavCommand::Advance)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRelease {
    pub command: Option<NavCommand>,
    pub moved: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    dragging: bool,
    source: PointerSource,
    start: [f32; 2],
    current: [f32; 2],
    threshold: f32,
    click_slop: f32,
}

impl DragState {
    pub fn new(threshold: f32, click_slop: f32) -> Self {
        Self {
            dragging: false,
            source: PointerSource::Mouse,
            start: [0.0, 0.0],
            current: [0.0, 0.0],
            threshold,
            click_slop,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn source(&self) -> PointerSource {
        self.source
    }

    pub fn delta(&self) -> (f32, f32) {
        (
            self.current[0] - self.start[0],
            self.current[1] - self.start[1],
        )
    }

    pub fn begin(&mut self, source: PointerSource, x: f32, y: f32) -> bool {
        let restarted = self.dragging;
        self.dragging = true;
        self.source = source;
        self.start = [x, y];
        self.current = [x, y];
        restarted
    }

    pub fn update(&mut self, x: f32, y: f32) -> bool {
        if !self.dragging {
            return false;
        }
        self.current = [x, y];
        true
    }

    pub fn end(&mut self, point: Option<(f32, f32)>) -> Option<DragRelease> {
        if !self.dragging {
            return None;
        }
        if let Some((x, y)) = point {
            self.current = [x, y];
        }
        self.dragging = false;
        let (dx, dy) = self.delta();
        Some(DragRelease {
            command: classify_swipe(dx, dy, self.threshold),
            moved: dx * dx + dy * dy > self.click_slop * self.click_slop,
        })
    }

    pub fn cancel(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD, CLICK_SLOP)
    }
}

#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    drags: HashMap<ProjectId, DragState>,
    threshold: f32,
    click_slop: f32,
}

impl GestureRecognizer {
    pub fn new(threshold: f32, click_slop: f32) -> Self {
        Self {
            drags: HashMap::new(),
            threshold,
            click_slop,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn state(&self, project: ProjectId) -> Option<&DragState> {
        self.drags.get(&project)
    }

    pub fn is_dragging(&self, project: ProjectId) -> bool {
        self.drags
            .get(&project)
            .map(DragState::is_dragging)
            .unwrap_or(false)
    }

    pub fn begin(&mut self, project: ProjectId, source: PointerSource, x: f32, y: f32) -> bool {
        let (threshold, click_slop) = (self.threshold, self.click_slop);
        self.drags
            .entry(project)
            .or_insert_with(|| DragState::new(threshold, click_slop))
            .begin(source, x, y)
    }

    pub fn update(&mut self, project: ProjectId, x: f32, y: f32) -> bool {
        self.drags
            .get_mut(&project)
            .map(|drag| drag.update(x, y))
            .unwrap_or(false)
    }

    pub fn end(&mut self, project: ProjectId, point: Option<(f32, f32)>) -> Option<DragRelease> {
        self.drags.get_mut(&project).and_then(|drag| drag.end(point))
    }

    pub fn cancel(&mut self, project: ProjectId) -> bool {
        self.drags
            .get_mut(&project)
            .map(DragState::cancel)
            .unwrap_or(false)
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD, CLICK_SLOP)
    }
}
