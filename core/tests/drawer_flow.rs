mod support;

use folio_core::{FocusTarget, Page, PageAction, PageRules, StageContent};
use support::{id, sample_registry, FakePage};

fn page() -> (Page, FakePage) {
    let registry = sample_registry();
    let surface = FakePage::for_registry(&registry);
    (Page::new(registry, PageRules::default()), surface)
}

fn key(page: &mut Page, surface: &mut FakePage, key: &str) -> bool {
    page.dispatch(
        PageAction::Key {
            key: key.to_string(),
            focus: FocusTarget::Other,
        },
        surface,
    )
    .prevent_default
}

#[test]
fn arrow_right_twice_reaches_clamped_end() {
    let (mut page, mut surface) = page();
    page.dispatch(PageAction::OpenDrawer { project: id(2) }, &mut surface);
    key(&mut page, &mut surface, "ArrowRight");
    key(&mut page, &mut surface, "ArrowRight");

    let view = page.drawer().view().unwrap();
    assert_eq!(view.index, 3);
    assert!(view.controls.next_disabled);
    assert!(!view.controls.previous_disabled);
    assert_eq!(view.dots, vec![false, false, true]);

    let stalled = page.dispatch(PageAction::DrawerNext, &mut surface);
    assert!(!stalled.drawer_changed);
    assert_eq!(page.drawer().index(), Some(3));
}

#[test]
fn drawer_starts_on_first_item_with_previous_disabled() {
    let (mut page, mut surface) = page();
    page.dispatch(PageAction::OpenDrawer { project: id(1) }, &mut surface);
    let view = page.drawer().view().unwrap();
    assert_eq!(view.title, "Project 1");
    assert_eq!(view.subtitle, "Case study");
    assert_eq!((view.index, view.len), (1, 5));
    assert!(view.controls.previous_disabled);
    assert!(!view.controls.next_disabled);
    assert!(!page.dispatch(PageAction::DrawerPrevious, &mut surface).drawer_changed);
}

#[test]
fn reopening_always_resets_index() {
    let (mut page, mut surface) = page();
    page.dispatch(PageAction::OpenDrawer { project: id(1) }, &mut surface);
    page.dispatch(PageAction::DrawerGoTo { index: 4 }, &mut surface);
    page.dispatch(PageAction::CloseDrawer, &mut surface);
    page.dispatch(PageAction::OpenDrawer { project: id(1) }, &mut surface);
    assert_eq!(page.drawer().index(), Some(1));

    page.dispatch(PageAction::DrawerNext, &mut surface);
    page.dispatch(PageAction::OpenDrawer { project: id(2) }, &mut surface);
    assert_eq!(page.drawer().index(), Some(1));
    assert_eq!(page.drawer().project(), Some(id(2)));
}

#[test]
fn drawer_index_is_independent_of_gallery() {
    let (mut page, mut surface) = page();
    page.dispatch(PageAction::GoToImage { project: id(1), index: 4 }, &mut surface);
    page.dispatch(PageAction::OpenDrawer { project: id(1) }, &mut surface);
    assert_eq!(page.drawer().index(), Some(1));
    page.dispatch(PageAction::DrawerNext, &mut surface);
    assert_eq!(page.gallery().current_index(id(1)), Some(4));
}

#[test]
fn open_pauses_every_video_and_close_resumes_gallery_video() {
    let (mut page, mut surface) = page();
    page.dispatch(PageAction::GoToImage { project: id(1), index: 5 }, &mut surface);
    page.dispatch(PageAction::GoToImage { project: id(2), index: 2 }, &mut surface);
    assert_eq!(surface.playing_count(), 2);

    page.dispatch(PageAction::OpenDrawer { project: id(2) }, &mut surface);
    assert_eq!(surface.pause_all_calls, 1);
    assert_eq!(surface.playing_count(), 0);

    let closed = page.dispatch(PageAction::CloseDrawer, &mut surface);
    assert!(closed.drawer_changed);
    assert!(!page.drawer().is_open());
    assert_eq!(surface.resumed, vec![(id(2), 2)]);
    assert!(surface.playing_count() <= 1);
}

#[test]
fn close_skips_resume_when_gallery_shows_a_still() {
    let (mut page, mut surface) = page();
    page.dispatch(PageAction::OpenDrawer { project: id(1) }, &mut surface);
    page.dispatch(PageAction::CloseDrawer, &mut surface);
    assert!(surface.resumed.is_empty());
    assert_eq!(surface.playing_count(), 0);

    let again = page.dispatch(PageAction::CloseDrawer, &mut surface);
    assert!(!again.drawer_changed);
}

#[test]
fn escape_closes_and_keys_are_ignored_while_closed() {
    let (mut page, mut surface) = page();
    assert!(!key(&mut page, &mut surface, "Escape"));
    page.dispatch(PageAction::OpenDrawer { project: id(2) }, &mut surface);
    assert!(key(&mut page, &mut surface, "Escape"));
    assert!(!page.drawer().is_open());
    assert_eq!(page.drawer().view(), None);
}

#[test]
fn drawer_consumes_arrows_instead_of_gallery() {
    let (mut page, mut surface) = page();
    page.dispatch(PageAction::OpenDrawer { project: id(1) }, &mut surface);
    key(&mut page, &mut surface, "ArrowRight");
    assert_eq!(page.drawer().index(), Some(2));
    assert_eq!(page.gallery().current_index(id(1)), Some(1));
}

#[test]
fn video_slot_is_created_once_and_kept() {
    let (mut page, mut surface) = page();
    page.dispatch(PageAction::OpenDrawer { project: id(2) }, &mut surface);
    let first = page.drawer().view().unwrap();
    assert!(!first.stage.video_slot);
    assert!(matches!(first.stage.content, StageContent::Image { .. }));

    page.dispatch(PageAction::DrawerNext, &mut surface);
    let video = page.drawer().view().unwrap();
    assert!(video.stage.video_slot);
    assert_eq!(
        video.stage.content,
        StageContent::Video {
            src: "2-2.mp4".to_string()
        }
    );

    page.dispatch(PageAction::DrawerNext, &mut surface);
    let after = page.drawer().view().unwrap();
    assert!(after.stage.video_slot);
    assert!(matches!(after.stage.content, StageContent::Image { .. }));
}

#[test]
fn reopening_starts_without_video_slot() {
    let (mut page, mut surface) = page();
    page.dispatch(PageAction::OpenDrawer { project: id(2) }, &mut surface);
    page.dispatch(PageAction::DrawerNext, &mut surface);
    assert!(page.drawer().has_video_slot());
    page.dispatch(PageAction::CloseDrawer, &mut surface);

    page.dispatch(PageAction::OpenDrawer { project: id(2) }, &mut surface);
    let reopened = page.drawer().view().unwrap();
    assert_eq!(reopened.index, 1);
    assert!(!reopened.stage.video_slot);

    page.dispatch(PageAction::CloseDrawer, &mut surface);
    page.dispatch(PageAction::OpenDrawer { project: id(1) }, &mut surface);
    assert!(!page.drawer().has_video_slot());
}

#[test]
fn unknown_project_is_rejected_and_empty_project_opens_bare() {
    let (mut page, mut surface) = page();
    let unknown = page.dispatch(PageAction::OpenDrawer { project: id(77) }, &mut surface);
    assert!(!unknown.drawer_changed);
    assert_eq!(surface.pause_all_calls, 0);

    page.dispatch(PageAction::OpenDrawer { project: id(3) }, &mut surface);
    let view = page.drawer().view().unwrap();
    assert_eq!(view.stage.content, StageContent::Empty);
    assert!(view.dots.is_empty());
    assert!(view.controls.previous_disabled && view.controls.next_disabled);
    assert!(!page.dispatch(PageAction::DrawerNext, &mut surface).drawer_changed);
}

#[test]
fn go_to_rejects_out_of_range() {
    let (mut page, mut surface) = page();
    page.dispatch(PageAction::OpenDrawer { project: id(2) }, &mut surface);
    assert!(!page.dispatch(PageAction::DrawerGoTo { index: 0 }, &mut surface).drawer_changed);
    assert!(!page.dispatch(PageAction::DrawerGoTo { index: 4 }, &mut surface).drawer_changed);
    assert!(page.dispatch(PageAction::DrawerGoTo { index: 3 }, &mut surface).drawer_changed);
}
