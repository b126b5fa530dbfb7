use crate::model::ProjectId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTarget {
    TextEntry,
    Other,
}

impl FocusTarget {
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea") {
            FocusTarget::TextEntry
        } else {
            FocusTarget::Other
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    CloseDrawer,
    DrawerPrevious,
    DrawerNext,
    GalleryPrevious(ProjectId),
    GalleryNext(ProjectId),
}

/// Maps a `KeyboardEvent.key` to an action. An open drawer consumes the
/// keys; otherwise arrows drive the gallery card in `target`.
pub fn route_key(
    key: &str,
    focus: FocusTarget,
    drawer_open: bool,
    target: Option<ProjectId>,
) -> Option<KeyAction> {
    if focus == FocusTarget::TextEntry {
        return None;
    }
    if drawer_open {
        return match key {
            "Escape" => Some(KeyAction::CloseDrawer),
            "ArrowLeft" => Some(KeyAction::DrawerPrevious),
            "ArrowRight" => Some(KeyAction::DrawerNext),
            _ => None,
        };
    }
    let target = target?;
    match key {
        "ArrowLeft" => Some(KeyAction::GalleryPrevious(target)),
        "ArrowRight" => Some(KeyAction::GalleryNext(target)),
        _ => None,
    }
}
