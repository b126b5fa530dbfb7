use crate::gesture::{NavCommand, PointerSource};
use crate::keyboard::FocusTarget;
use crate::model::ProjectId;

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    PointerDown {
        project: ProjectId,
        source: PointerSource,
        x: f32,
        y: f32,
    },
    PointerMove {
        project: ProjectId,
        x: f32,
        y: f32,
    },
    PointerUp {
        project: ProjectId,
        point: Option<(f32, f32)>,
    },
    PointerCancel {
        project: ProjectId,
    },
    NextImage {
        project: ProjectId,
    },
    PreviousImage {
        project: ProjectId,
    },
    GoToImage {
        project: ProjectId,
        index: usize,
    },
    /// A click on the card; opens the drawer unless it ended a swipe.
    ProjectClicked {
        project: ProjectId,
    },
    OpenDrawer {
        project: ProjectId,
    },
    CloseDrawer,
    DrawerNext,
    DrawerPrevious,
    DrawerGoTo {
        index: usize,
    },
    Key {
        key: String,
        focus: FocusTarget,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dispatch {
    pub prevent_default: bool,
    pub drawer_changed: bool,
    pub command: Option<NavCommand>,
}
