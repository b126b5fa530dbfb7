use std::collections::HashSet;
use std::rc::Rc;

use crate::gesture::{GestureRecognizer, NavCommand, PointerSource};
use crate::model::{MediaItem, ProjectId};
use crate::navigation::{NavigationError, NavigationStore};
use crate::presenter::plan;
use crate::registry::Registry;
use crate::rules::PageRules;
use crate::sequence::BoundaryPolicy;
use crate::surface::GallerySurface;

pub struct Gallery {
    registry: Rc<Registry>,
    store: NavigationStore,
    gestures: GestureRecognizer,
    suppressed_clicks: HashSet<ProjectId>,
    last_touched: Option<ProjectId>,
}

impl Gallery {
    pub fn new(registry: Rc<Registry>, rules: &PageRules) -> Self {
        let store = NavigationStore::from_registry(&registry, BoundaryPolicy::Wrap);
        Self {
            registry,
            store,
            gestures: GestureRecognizer::new(rules.drag_threshold, rules.click_slop),
            suppressed_clicks: HashSet::new(),
            last_touched: None,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn store(&self) -> &NavigationStore {
        &self.store
    }

    pub fn gestures(&self) -> &GestureRecognizer {
        &self.gestures
    }

    pub fn current_index(&self, project: ProjectId) -> Option<usize> {
        self.store.get(project)
    }

    pub fn active_media(&self, project: ProjectId) -> Option<(usize, &MediaItem)> {
        let index = self.store.get(project)?;
        let media = self.registry.get(project)?.media_at(index)?;
        Some((index, media))
    }

    /// Project that arrow keys navigate: the last card the pointer touched,
    /// otherwise the first card on the page.
    pub fn keyboard_target(&self) -> Option<ProjectId> {
        self.last_touched.or_else(|| self.registry.first_id())
    }

    pub fn present<S: GallerySurface>(
        &mut self,
        project: ProjectId,
        index: usize,
        surface: &mut S,
    ) -> Result<usize, NavigationError> {
        self.store.set(project, index)?;
        self.render(project, surface);
        Ok(index)
    }

    pub fn present_all<S: GallerySurface>(&self, surface: &mut S) {
        for project in self.registry.iter() {
            self.render(project.id, surface);
        }
    }

    pub fn go_to_image<S: GallerySurface>(
        &mut self,
        project: ProjectId,
        index: usize,
        surface: &mut S,
    ) -> bool {
        self.present(project, index, surface).is_ok()
    }

    pub fn next_image<S: GallerySurface>(&mut self, project: ProjectId, surface: &mut S) -> bool {
        let Some(next) = self.store.sequence(project).and_then(|seq| seq.next_index()) else {
            return false;
        };
        self.go_to_image(project, next, surface)
    }

    pub fn previous_image<S: GallerySurface>(
        &mut self,
        project: ProjectId,
        surface: &mut S,
    ) -> bool {
        let Some(previous) = self
            .store
            .sequence(project)
            .and_then(|seq| seq.previous_index())
        else {
            return false;
        };
        self.go_to_image(project, previous, surface)
    }

    pub fn apply_command<S: GallerySurface>(
        &mut self,
        project: ProjectId,
        command: NavCommand,
        surface: &mut S,
    ) -> bool {
        match command {
            NavCommand::Advance => self.next_image(project, surface),
            NavCommand::Retreat => self.previous_image(project, surface),
        }
    }

    pub fn pointer_down<S: GallerySurface>(
        &mut self,
        project: ProjectId,
        source: PointerSource,
        x: f32,
        y: f32,
        surface: &mut S,
    ) -> bool {
        if !self.registry.contains(project) {
            return false;
        }
        self.last_touched = Some(project);
        self.suppressed_clicks.remove(&project);
        self.gestures.begin(project, source, x, y);
        surface.set_dragging(project, true);
        true
    }

    pub fn pointer_move(&mut self, project: ProjectId, x: f32, y: f32) -> bool {
        self.gestures.update(project, x, y)
    }

    pub fn pointer_up<S: GallerySurface>(
        &mut self,
        project: ProjectId,
        point: Option<(f32, f32)>,
        surface: &mut S,
    ) -> Option<NavCommand> {
        let Some(release) = self.gestures.end(project, point) else {
            // A release with no drag belongs to a new click.
            self.suppressed_clicks.remove(&project);
            return None;
        };
        if release.moved {
            self.suppressed_clicks.insert(project);
        }
        if let Some(command) = release.command {
            self.apply_command(project, command, surface);
        }
        surface.set_dragging(project, false);
        release.command
    }

    pub fn pointer_cancel<S: GallerySurface>(&mut self, project: ProjectId, surface: &mut S) {
        if self.gestures.cancel(project) {
            surface.set_dragging(project, false);
        }
    }

    /// Consumes the "last gesture was a drag" mark left by [`Self::pointer_up`].
    pub fn take_click_suppressed(&mut self, project: ProjectId) -> bool {
        self.suppressed_clicks.remove(&project)
    }

    fn render<S: GallerySurface>(&self, project: ProjectId, surface: &mut S) {
        let (Some(seq), Some(entry)) = (self.store.sequence(project), self.registry.get(project))
        else {
            return;
        };
        surface.present(project, &plan(seq, &entry.media));
    }
}
