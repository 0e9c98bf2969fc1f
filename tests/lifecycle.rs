// SPDX-License-Identifier: MPL-2.0
use iced_toast::config::{PartialConfig, Position};
use iced_toast::diagnostics::DiagnosticEventKind;
use iced_toast::toast::{Manager, Message, RemovalReason, Scheduler, Timeline, ToastId, Variant};
use std::time::{Duration, Instant};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn only_toast(manager: &Manager) -> ToastId {
    let surface = manager.surface().expect("surface exists");
    assert_eq!(surface.len(), 1);
    surface.toasts().next().map(|toast| toast.id()).expect("one toast")
}

fn is_removing(manager: &Manager, id: ToastId) -> bool {
    manager
        .surface()
        .and_then(|surface| surface.get(id))
        .is_some_and(|toast| toast.is_removing())
}

#[test]
fn limit_refuses_creates_beyond_capacity() {
    let mut timeline = Timeline::new(Instant::now());
    let mut manager = Manager::new(PartialConfig::new().with_limit(3));

    for n in 0..3 {
        manager.toaster(&mut timeline).info(format!("toast {n}"));
    }
    manager.toaster(&mut timeline).error("one too many");

    assert_eq!(manager.live_count(), 3);
    assert!(manager
        .surface()
        .expect("surface exists")
        .toasts()
        .all(|toast| toast.variant() == Variant::Info));
    assert!(manager.diagnostics().kinds().any(|kind| matches!(
        kind,
        DiagnosticEventKind::ToastDropped { live: 3, limit: 3, .. }
    )));
}

#[test]
fn zero_limit_accepts_everything() {
    let mut timeline = Timeline::new(Instant::now());
    let mut manager = Manager::new(PartialConfig::new().with_limit(0));

    for n in 0..50 {
        manager.toaster(&mut timeline).neutral(format!("toast {n}"));
    }

    assert_eq!(manager.live_count(), 50);
}

#[test]
fn freed_slot_admits_a_new_toast() {
    let start = Instant::now();
    let mut timeline = Timeline::new(start);
    let mut manager = Manager::new(PartialConfig::new().with_limit(1));

    manager.toaster(&mut timeline).info("first");
    let first = only_toast(&manager);

    manager.handle_message(Message::CloseRequested(first), &mut timeline);
    // Still fading out, so still counted.
    manager.toaster(&mut timeline).info("refused");
    assert_eq!(manager.live_count(), 1);

    manager.pump(&mut timeline, start + ms(300));
    assert_eq!(manager.live_count(), 0);

    manager.toaster(&mut timeline).info("second");
    assert_eq!(manager.live_count(), 1);
}

#[test]
fn click_then_expiry_detaches_once() {
    let start = Instant::now();
    let mut timeline = Timeline::new(start);
    let mut manager = Manager::new(PartialConfig::new().with_close_on_click(true));

    manager.toaster(&mut timeline).success("done");
    let id = only_toast(&manager);
    manager.pump(&mut timeline, start);

    manager.handle_message(Message::Clicked(id), &mut timeline);
    manager.handle_message(Message::CloseRequested(id), &mut timeline);
    manager.pump(&mut timeline, start + ms(5000));

    let detached = manager
        .diagnostics()
        .kinds()
        .filter(|kind| matches!(kind, DiagnosticEventKind::ToastDetached { .. }))
        .count();
    let removals: Vec<_> = manager
        .diagnostics()
        .kinds()
        .filter_map(|kind| match kind {
            DiagnosticEventKind::RemovalStarted { reason, .. } => Some(*reason),
            _ => None,
        })
        .collect();

    assert_eq!(detached, 1);
    assert_eq!(removals, vec![RemovalReason::Click]);
    assert_eq!(manager.live_count(), 0);
}

#[test]
fn click_without_close_on_click_does_nothing() {
    let start = Instant::now();
    let mut timeline = Timeline::new(start);
    let mut manager = Manager::default();

    manager.toaster(&mut timeline).info("sticky to clicks");
    let id = only_toast(&manager);
    manager.handle_message(Message::Clicked(id), &mut timeline);

    assert!(!is_removing(&manager, id));
}

#[test]
fn hover_pause_extends_lifetime_by_paused_time() {
    let start = Instant::now();
    let mut timeline = Timeline::new(start);
    let mut manager = Manager::default();

    manager.toaster(&mut timeline).warning("hover me");
    let id = only_toast(&manager);

    manager.pump(&mut timeline, start + ms(1000));
    manager.handle_message(Message::PointerEntered(id), &mut timeline);

    manager.pump(&mut timeline, start + ms(2500));
    manager.handle_message(Message::PointerLeft(id), &mut timeline);

    // 2000ms were left when the pointer entered at 1000ms.
    manager.pump(&mut timeline, start + ms(4499));
    assert!(!is_removing(&manager, id));

    manager.pump(&mut timeline, start + ms(4500));
    assert!(is_removing(&manager, id));
}

#[test]
fn repeated_enter_and_leave_are_harmless() {
    let start = Instant::now();
    let mut timeline = Timeline::new(start);
    let mut manager = Manager::default();

    manager.toaster(&mut timeline).info("jittery pointer");
    let id = only_toast(&manager);

    manager.handle_message(Message::PointerLeft(id), &mut timeline);
    manager.handle_message(Message::PointerEntered(id), &mut timeline);
    manager.handle_message(Message::PointerEntered(id), &mut timeline);

    // Paused for good: nothing expires.
    manager.pump(&mut timeline, start + ms(60_000));
    assert!(!is_removing(&manager, id));
}

#[test]
fn per_call_position_styles_surface_but_keeps_defaults() {
    let mut timeline = Timeline::new(Instant::now());
    let mut manager = Manager::default();

    manager
        .toaster(&mut timeline)
        .with(PartialConfig::new().with_position(Position::BottomLeft))
        .info("over here");

    let surface = manager.surface().expect("surface exists");
    assert_eq!(surface.position(), Position::BottomLeft);
    assert_eq!(surface.class_name(), "iced-toast-wrapper --bottom-left");
    assert_eq!(manager.defaults().position, Position::TopRight);
}

#[test]
fn error_toast_scenario() {
    let start = Instant::now();
    let mut timeline = Timeline::new(start);
    let mut manager = Manager::new(
        PartialConfig::new()
            .with_auto_close(true)
            .with_close_duration_ms(3000)
            .with_limit(5),
    );

    manager.toaster(&mut timeline).error("X");
    let id = only_toast(&manager);

    {
        let element = manager
            .surface()
            .and_then(|surface| surface.get(id))
            .map(|toast| toast.element())
            .expect("attached");
        assert!(element.has_class("--variant-error"));
        assert_eq!(element.text(), "X");
        assert!(element.progress_bar().is_some());
    }

    manager.pump(&mut timeline, start + ms(2999));
    assert!(!is_removing(&manager, id));

    manager.pump(&mut timeline, start + ms(3000));
    assert!(is_removing(&manager, id));
    assert!(timeline.now() >= start + ms(3000));
}

#[test]
fn auto_close_off_keeps_toast_until_closed() {
    let start = Instant::now();
    let mut timeline = Timeline::new(start);
    let mut manager = Manager::new(PartialConfig::new().with_auto_close(false));

    manager.toaster(&mut timeline).neutral("manual");
    let id = only_toast(&manager);
    manager.pump(&mut timeline, start + ms(120_000));
    assert!(!is_removing(&manager, id));

    manager.handle_message(Message::CloseRequested(id), &mut timeline);
    manager.pump(&mut timeline, start + ms(121_000));
    assert_eq!(manager.live_count(), 0);
}

#[test]
fn stale_messages_for_detached_toasts_are_ignored() {
    let start = Instant::now();
    let mut timeline = Timeline::new(start);
    let mut manager = Manager::default();

    manager.toaster(&mut timeline).info("short lived");
    let id = only_toast(&manager);
    manager.handle_message(Message::CloseRequested(id), &mut timeline);
    manager.pump(&mut timeline, start + ms(1000));
    assert!(!manager.has_toasts());

    manager.handle_message(Message::PointerEntered(id), &mut timeline);
    manager.handle_message(Message::TransitionEnded(id), &mut timeline);

    assert!(matches!(
        manager.diagnostics().last().map(|event| &event.kind),
        Some(DiagnosticEventKind::MessageIgnored { .. })
    ));
}
