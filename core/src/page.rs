use std::rc::Rc;

use crate::action::{Dispatch, PageAction};
use crate::drawer::DrawerController;
use crate::gallery::Gallery;
use crate::keyboard::{route_key, KeyAction};
use crate::registry::Registry;
use crate::rules::PageRules;
use crate::surface::{GallerySurface, PageSurface};

pub struct Page {
    rules: PageRules,
    gallery: Gallery,
    drawer: DrawerController,
}

impl Page {
    pub fn new(registry: Registry, rules: PageRules) -> Self {
        let registry = Rc::new(registry);
        Self {
            gallery: Gallery::new(Rc::clone(&registry), &rules),
            drawer: DrawerController::new(registry),
            rules,
        }
    }

    pub fn rules(&self) -> &PageRules {
        &self.rules
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn drawer(&self) -> &DrawerController {
        &self.drawer
    }

    pub fn dispatch<S>(&mut self, action: PageAction, surface: &mut S) -> Dispatch
    where
        S: GallerySurface + PageSurface,
    {
        let mut out = Dispatch::default();
        match action {
            PageAction::PointerDown {
                project,
                source,
                x,
                y,
            } => {
                self.gallery.pointer_down(project, source, x, y, surface);
            }
            PageAction::PointerMove { project, x, y } => {
                out.prevent_default = self.gallery.pointer_move(project, x, y);
            }
            PageAction::PointerUp { project, point } => {
                out.command = self.gallery.pointer_up(project, point, surface);
            }
            PageAction::PointerCancel { project } => {
                self.gallery.pointer_cancel(project, surface);
            }
            PageAction::NextImage { project } => {
                self.gallery.next_image(project, surface);
            }
            PageAction::PreviousImage { project } => {
                self.gallery.previous_image(project, surface);
            }
            PageAction::GoToImage { project, index } => {
                self.gallery.go_to_image(project, index, surface);
            }
            PageAction::ProjectClicked { project } => {
                if !self.gallery.take_click_suppressed(project) {
                    out.drawer_changed = self.drawer.open(project, surface);
                }
            }
            PageAction::OpenDrawer { project } => {
                out.drawer_changed = self.drawer.open(project, surface);
            }
            PageAction::CloseDrawer => {
                out.drawer_changed = self.drawer.close(&self.gallery, surface);
            }
            PageAction::DrawerNext => {
                out.drawer_changed = self.drawer.next();
            }
            PageAction::DrawerPrevious => {
                out.drawer_changed = self.drawer.previous();
            }
            PageAction::DrawerGoTo { index } => {
                out.drawer_changed = self.drawer.go_to(index);
            }
            PageAction::Key { key, focus } => {
                let routed = route_key(
                    &key,
                    focus,
                    self.drawer.is_open(),
                    self.gallery.keyboard_target(),
                );
                let Some(routed) = routed else {
                    return out;
                };
                out.prevent_default = true;
                match routed {
                    KeyAction::CloseDrawer => {
                        out.drawer_changed = self.drawer.close(&self.gallery, surface);
                    }
                    KeyAction::DrawerPrevious => out.drawer_changed = self.drawer.previous(),
                    KeyAction::DrawerNext => out.drawer_changed = self.drawer.next(),
                    KeyAction::GalleryPrevious(project) => {
                        self.gallery.previous_image(project, surface);
                    }
                    KeyAction::GalleryNext(project) => {
                        self.gallery.next_image(project, surface);
                    }
                }
            }
        }
        out
    }
}
