//! Integration tests for the sheet controller driven like a host would
//!
//! These tests verify that:
//! - Presentation and dragger taps animate through the shared scheduler
//! - Interrupted animations never jump
//! - Content scrolling and sheet dragging hand off within one gesture
//! - Releases pick the right height and animation style

use std::cell::RefCell;
use std::rc::Rc;

use sheetkit::{BottomSheet, DragMode, HeadlessHost, InterruptPolicy, SheetConfig};
use sheetkit_animation::AnimationScheduler;
use sheetkit_core::{GestureOrigin, GesturePhase, PanGesture, TapGesture};

fn scheduler() -> Rc<RefCell<AnimationScheduler>> {
    let scheduler = Rc::new(RefCell::new(AnimationScheduler::new()));
    scheduler.borrow_mut().set_target_fps(60);
    scheduler
}

fn frame(sheet: &mut BottomSheet<HeadlessHost>, scheduler: &Rc<RefCell<AnimationScheduler>>) -> bool {
    scheduler.borrow_mut().step_frame();
    sheet.tick()
}

fn settle(sheet: &mut BottomSheet<HeadlessHost>, scheduler: &Rc<RefCell<AnimationScheduler>>) {
    for _ in 0..600 {
        if !frame(sheet, scheduler) {
            return;
        }
    }
    panic!("sheet animation did not settle");
}

fn pan(phase: GesturePhase, origin: GestureOrigin, translation: f32) -> PanGesture {
    PanGesture::new(phase, origin).translation(translation)
}

fn scrolling_host() -> HeadlessHost {
    HeadlessHost::new().with_content_height(1000.0)
}

/// Presenting with the default height animates smoothly up to it
#[test]
fn test_present_animates_monotonically() {
    let scheduler = scheduler();
    let mut sheet = BottomSheet::new(SheetConfig::default(), HeadlessHost::new())
        .with_scheduler(&scheduler);

    sheet.set_presented(true);
    settle(&mut sheet, &scheduler);

    let offsets = &sheet.host().offsets;
    assert_eq!(offsets.last().copied(), Some(452.0));
    assert!(offsets.windows(2).all(|w| w[0] <= w[1]));

    sheet.set_presented(false);
    settle(&mut sheet, &scheduler);
    assert_eq!(sheet.visible_offset(), 0.0);
}

/// Presentation finishes within its configured duration
#[test]
fn test_presentation_duration() {
    let scheduler = scheduler();
    let mut sheet = BottomSheet::new(SheetConfig::default(), HeadlessHost::new())
        .with_scheduler(&scheduler);

    sheet.set_presented(true);
    // 0.275s at 60fps
    let mut frames = 0;
    while frame(&mut sheet, &scheduler) {
        frames += 1;
    }
    assert!(frames <= 17, "took {frames} frames");
    assert_eq!(sheet.visible_offset(), 452.0);
}

/// A spring release lands within the release snap duration
#[test]
fn test_spring_release_duration() {
    let scheduler = scheduler();
    let mut sheet = BottomSheet::new(
        SheetConfig::with_snap_heights([210.0, 452.0]),
        HeadlessHost::new(),
    );
    sheet.set_presented(true);
    sheet.set_scheduler(&scheduler);

    sheet.handle_pan(pan(GesturePhase::Began, GestureOrigin::Header, 0.0));
    sheet.handle_pan(pan(GesturePhase::Changed, GestureOrigin::Header, -10.0));
    sheet.handle_pan(pan(GesturePhase::Ended, GestureOrigin::Header, -10.0).velocity(-1500.0));
    assert_eq!(sheet.animation_target(), Some(452.0));

    // 0.4s at 60fps
    let mut frames = 0;
    while frame(&mut sheet, &scheduler) {
        frames += 1;
    }
    assert!(frames <= 24, "took {frames} frames");
    assert_eq!(sheet.visible_offset(), 452.0);
}

/// Dismissing halfway through presenting starts from where the sheet is
#[test]
fn test_redirect_mid_animation_has_no_jump() {
    let scheduler = scheduler();
    let mut sheet = BottomSheet::new(SheetConfig::default(), HeadlessHost::new())
        .with_scheduler(&scheduler);

    sheet.set_presented(true);
    for _ in 0..6 {
        frame(&mut sheet, &scheduler);
    }
    let mid = sheet.visible_offset();
    assert!(mid > 0.0 && mid < 452.0);

    sheet.set_presented(false);
    assert_eq!(sheet.visible_offset(), mid);
    assert_eq!(sheet.animation_target(), Some(0.0));

    frame(&mut sheet, &scheduler);
    assert!(sheet.visible_offset() < mid);
    settle(&mut sheet, &scheduler);
    assert_eq!(sheet.visible_offset(), 0.0);
}

/// Under the complete policy an interrupted snap lands first
#[test]
fn test_complete_policy_lands_before_redirect() {
    let scheduler = scheduler();
    let config = SheetConfig {
        interrupt: InterruptPolicy::Complete,
        ..SheetConfig::with_snap_heights([200.0, 452.0])
    };
    let mut sheet = BottomSheet::new(config, HeadlessHost::new()).with_scheduler(&scheduler);

    sheet.set_presented(true);
    frame(&mut sheet, &scheduler);
    sheet.handle_tap(TapGesture::new(GestureOrigin::DraggerBar));

    // The first snap completed at 200, so the tap moved on to 452
    assert!(sheet.host().offsets.contains(&200.0));
    assert_eq!(sheet.animation_target(), Some(452.0));
}

/// Without a scheduler every snap is applied immediately
#[test]
fn test_no_scheduler_snaps_instantly() {
    let mut sheet = BottomSheet::new(
        SheetConfig::with_snap_heights([200.0, 452.0, 700.0]),
        HeadlessHost::new(),
    );

    sheet.set_presented(true);
    assert_eq!(sheet.visible_offset(), 200.0);
    assert!(!sheet.is_animating());

    let tap = TapGesture::new(GestureOrigin::DraggerBar);
    let visited: Vec<f32> = (0..4)
        .map(|_| {
            sheet.handle_tap(tap);
            sheet.visible_offset()
        })
        .collect();
    assert_eq!(visited, vec![452.0, 700.0, 200.0, 452.0]);
}

/// Below the tallest height the content cannot scroll
#[test]
fn test_content_scroll_frozen_below_max() {
    let mut sheet = BottomSheet::new(
        SheetConfig::with_snap_heights([200.0, 452.0]),
        scrolling_host(),
    );
    sheet.set_presented(true);
    assert_eq!(sheet.visible_offset(), 200.0);

    sheet.host_mut().scroll_content_to(50.0);
    sheet.on_content_scrolled();
    assert_eq!(sheet.host().scroll_writes, vec![(0.0, false)]);
    assert_eq!(sheet.frozen_scroll_offset(), 0.0);
}

/// At the tallest height the content scrolls and its offset is remembered
#[test]
fn test_content_scroll_free_at_max() {
    let mut sheet = BottomSheet::new(SheetConfig::default(), scrolling_host());
    sheet.set_presented(true);
    let writes = sheet.host().scroll_writes.len();

    sheet.host_mut().scroll_content_to(120.0);
    sheet.on_content_scrolled();
    assert_eq!(sheet.host().scroll_writes.len(), writes);
    assert_eq!(sheet.frozen_scroll_offset(), 120.0);

    // Drag the sheet down by its header: content is left alone
    sheet.handle_pan(pan(GesturePhase::Began, GestureOrigin::Header, 0.0));
    sheet.handle_pan(pan(GesturePhase::Changed, GestureOrigin::Header, 100.0));
    sheet.on_content_scrolled();
    assert_eq!(sheet.visible_offset(), 352.0);
    assert_eq!(sheet.host().scroll_writes.len(), writes);
}

/// A content drag scrolls the content first, then pulls the sheet down
#[test]
fn test_content_drag_hands_off_to_sheet() {
    let mut sheet = BottomSheet::new(
        SheetConfig::with_snap_heights([200.0, 452.0]),
        scrolling_host(),
    );
    sheet.set_presented(true);
    sheet.handle_tap(TapGesture::new(GestureOrigin::DraggerBar));
    assert_eq!(sheet.visible_offset(), 452.0);
    sheet.host_mut().scroll_content_to(30.0);

    sheet.handle_pan(pan(GesturePhase::Began, GestureOrigin::Content, 0.0));
    assert_eq!(sheet.drag_mode(), DragMode::ContentScrolling);

    // The content absorbs the first 30 points
    sheet.handle_pan(pan(GesturePhase::Changed, GestureOrigin::Content, 30.0));
    assert_eq!(sheet.visible_offset(), 452.0);
    assert_eq!(sheet.drag_state().pending_translation, 30.0);

    sheet.host_mut().scroll_content_to(0.0);
    sheet.handle_pan(pan(GesturePhase::Changed, GestureOrigin::Content, 50.0));
    assert_eq!(sheet.drag_mode(), DragMode::DraggingContent);
    assert_eq!(sheet.visible_offset(), 432.0);

    sheet.handle_pan(pan(GesturePhase::Ended, GestureOrigin::Content, 50.0));
    assert_eq!(sheet.visible_offset(), 452.0);
    assert_eq!(sheet.drag_mode(), DragMode::Idle);
}

/// A content drag that never reaches the sheet does not snap on release
#[test]
fn test_content_only_gesture_does_not_snap() {
    let mut sheet = BottomSheet::new(SheetConfig::default(), scrolling_host());
    sheet.set_presented(true);
    sheet.host_mut().scroll_content_to(200.0);
    let writes = sheet.host().offsets.len();

    sheet.handle_pan(pan(GesturePhase::Began, GestureOrigin::Content, 0.0));
    sheet.handle_pan(pan(GesturePhase::Changed, GestureOrigin::Content, -80.0));
    sheet.handle_pan(pan(GesturePhase::Ended, GestureOrigin::Content, -80.0));

    assert_eq!(sheet.host().offsets.len(), writes);
    assert_eq!(sheet.drag_state().pending_translation, 0.0);
}

/// Fast downward release moves one height down with a spring
#[test]
fn test_fling_down_to_previous_height() {
    let scheduler = scheduler();
    let mut sheet = BottomSheet::new(
        SheetConfig::with_snap_heights([200.0, 452.0]),
        HeadlessHost::new(),
    );
    sheet.set_presented(true);
    sheet.handle_tap(TapGesture::new(GestureOrigin::DraggerBar));
    sheet.set_scheduler(&scheduler);

    sheet.handle_pan(pan(GesturePhase::Began, GestureOrigin::Header, 0.0));
    sheet.handle_pan(pan(GesturePhase::Changed, GestureOrigin::Header, 20.0));
    assert_eq!(sheet.visible_offset(), 432.0);
    sheet.handle_pan(pan(GesturePhase::Ended, GestureOrigin::Header, 20.0).velocity(1500.0));

    assert_eq!(sheet.animation_target(), Some(200.0));
    settle(&mut sheet, &scheduler);
    assert_eq!(sheet.visible_offset(), 200.0);
}

/// Fast upward release moves one height up
#[test]
fn test_fling_up_to_next_height() {
    let scheduler = scheduler();
    let mut sheet = BottomSheet::new(
        SheetConfig::with_snap_heights([200.0, 452.0]),
        HeadlessHost::new(),
    )
    .with_scheduler(&scheduler);
    sheet.set_presented(true);
    settle(&mut sheet, &scheduler);

    sheet.handle_pan(pan(GesturePhase::Began, GestureOrigin::DraggerBar, 0.0));
    sheet.handle_pan(pan(GesturePhase::Changed, GestureOrigin::DraggerBar, -20.0));
    assert_eq!(sheet.visible_offset(), 220.0);
    sheet.handle_pan(pan(GesturePhase::Ended, GestureOrigin::DraggerBar, -20.0).velocity(-1500.0));

    assert_eq!(sheet.animation_target(), Some(452.0));
    settle(&mut sheet, &scheduler);
    assert_eq!(sheet.visible_offset(), 452.0);
}

/// Dragging never takes the sheet past its tallest height or below 0
#[test]
fn test_drag_is_clamped() {
    let mut sheet = BottomSheet::new(SheetConfig::default(), HeadlessHost::new());
    sheet.set_presented(true);

    sheet.handle_pan(pan(GesturePhase::Began, GestureOrigin::Header, 0.0));
    sheet.handle_pan(pan(GesturePhase::Changed, GestureOrigin::Header, -300.0));
    assert_eq!(sheet.visible_offset(), 452.0);
    sheet.handle_pan(pan(GesturePhase::Changed, GestureOrigin::Header, 900.0));
    assert_eq!(sheet.visible_offset(), 0.0);
    sheet.handle_pan(pan(GesturePhase::Cancelled, GestureOrigin::Header, 900.0));
    // Nearest presented height
    assert_eq!(sheet.visible_offset(), 452.0);
}

/// With no heights the sheet stays hidden and ignores drags
#[test]
fn test_empty_heights() {
    let mut sheet = BottomSheet::new(
        SheetConfig::with_snap_heights(Vec::<f32>::new()),
        scrolling_host(),
    );
    sheet.set_presented(true);
    assert_eq!(sheet.visible_offset(), 0.0);

    sheet.handle_pan(pan(GesturePhase::Began, GestureOrigin::Header, 0.0));
    sheet.handle_pan(pan(GesturePhase::Changed, GestureOrigin::Header, -100.0));
    assert_eq!(sheet.visible_offset(), 0.0);
    sheet.handle_pan(pan(GesturePhase::Ended, GestureOrigin::Header, -100.0));

    sheet.handle_pan(pan(GesturePhase::Began, GestureOrigin::Content, 0.0));
    assert_eq!(sheet.drag_mode(), DragMode::ContentScrolling);
    sheet.handle_pan(pan(GesturePhase::Ended, GestureOrigin::Content, 0.0));

    sheet.handle_tap(TapGesture::new(GestureOrigin::DraggerBar));
    assert_eq!(sheet.visible_offset(), 0.0);
}
