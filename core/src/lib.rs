pub mod action;
pub mod cursor;
pub mod drawer;
pub mod gallery;
pub mod gesture;
pub mod keyboard;
pub mod model;
pub mod navigation;
pub mod page;
pub mod presenter;
pub mod registry;
pub mod rules;
pub mod sequence;
pub mod surface;

pub use action::{Dispatch, PageAction};
pub use cursor::{CursorFrame, CursorTrail};
pub use drawer::{DrawerController, DrawerStage, DrawerView, StageContent};
pub use gallery::Gallery;
pub use gesture::{
    classify_swipe, DragRelease, DragState, GestureRecognizer, NavCommand, PointerSource,
};
pub use keyboard::{route_key, FocusTarget, KeyAction};
pub use model::{MediaItem, MediaKind, Project, ProjectId, ProjectIdError};
pub use navigation::{NavigationError, NavigationStore};
pub use page::Page;
pub use presenter::{plan, ControlState, MediaPresentation, Playback, Presentation};
pub use registry::{
    build_registry, MediaRecord, ProjectRecord, Registry, RegistryBuild, RegistryError,
    RegistryIssue,
};
pub use rules::{PageRules, RuleError, RULE_KEYS};
pub use sequence::{BoundaryPolicy, IndexedSequence};
pub use surface::{GallerySurface, PageSurface};
