use super::{EditorEvent, Invalidation, OverlayState};

#[test]
fn starts_unbuilt_and_ignores_invalidation() {
    let mut state = OverlayState::default();
    assert_eq!(state, OverlayState::Unbuilt);
    assert!(!state.invalidate(Invalidation::ZOOM));
    assert_eq!(state, OverlayState::Unbuilt);
    assert!(!state.has_layers());
}

#[test]
fn built_becomes_dirty_then_built_again() {
    let mut state = OverlayState::default();
    state.layers_built();
    assert_eq!(state, OverlayState::Built);
    assert!(state.invalidate(Invalidation::ZOOM));
    assert_eq!(state.pending(), Invalidation::ZOOM);
    state.finish_rebuild();
    assert_eq!(state, OverlayState::Built);
    assert!(state.pending().is_empty());
}

#[test]
fn dirty_flags_accumulate() {
    let mut state = OverlayState::Built;
    state.invalidate(Invalidation::ZOOM);
    state.invalidate(Invalidation::COLOR);
    assert_eq!(state.pending(), Invalidation::ZOOM | Invalidation::COLOR);
}

#[test]
fn empty_invalidation_does_not_dirty() {
    let mut state = OverlayState::Built;
    assert!(!state.invalidate(Invalidation::empty()));
    assert_eq!(state, OverlayState::Built);
}

#[test]
fn cleared_wakes_only_on_content() {
    let mut state = OverlayState::Built;
    state.clear();
    assert_eq!(state, OverlayState::Cleared);

    assert!(!state.invalidate(Invalidation::ZOOM));
    assert!(!state.invalidate(Invalidation::COLOR));
    assert_eq!(state, OverlayState::Cleared);

    assert!(state.invalidate(Invalidation::CONTENT));
    assert_eq!(state.pending(), Invalidation::all());
}

#[test]
fn clear_from_dirty() {
    let mut state = OverlayState::Dirty(Invalidation::ZOOM);
    state.clear();
    assert_eq!(state, OverlayState::Cleared);
}

#[test]
fn clear_before_build_stays_unbuilt() {
    let mut state = OverlayState::Unbuilt;
    state.clear();
    assert_eq!(state, OverlayState::Unbuilt);
}

#[test]
fn finish_rebuild_leaves_cleared_alone() {
    let mut state = OverlayState::Cleared;
    state.finish_rebuild();
    assert_eq!(state, OverlayState::Cleared);
}

#[test]
fn reset_returns_to_unbuilt() {
    let mut state = OverlayState::Dirty(Invalidation::all());
    state.reset();
    assert_eq!(state, OverlayState::Unbuilt);
}

#[test]
fn event_invalidation_map() {
    assert_eq!(EditorEvent::ViewBuilt.invalidation(), Invalidation::all());
    assert_eq!(EditorEvent::ViewStarted.invalidation(), Invalidation::all());
    assert_eq!(EditorEvent::Scaled.invalidation(), Invalidation::ZOOM);
    assert_eq!(EditorEvent::GlyphChanged.invalidation(), Invalidation::CONTENT);
    assert_eq!(EditorEvent::MetricsChanged.invalidation(), Invalidation::CONTENT);
    assert_eq!(
        EditorEvent::PreferencesChanged.invalidation(),
        Invalidation::COLOR
    );
}

#[test]
fn event_names_are_stable() {
    assert_eq!(EditorEvent::Scaled.name(), "scaled");
    assert_eq!(EditorEvent::PreferencesChanged.name(), "preferences_changed");
}
