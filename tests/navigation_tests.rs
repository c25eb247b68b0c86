//! Tests for the navigator state machine.
//!
//! These tests verify:
//! - Initial state and default selection
//! - Selection clamping at both ends of the list
//! - The list -> detail transition carrying the selected record untouched
//! - Back navigation restoring the list screen

use puptui::{AppMode, AppState, Catalog};

// =============================================================================
// Initial state
// =============================================================================

#[test]
fn test_initial_state_is_list_with_first_record_selected() {
    let state = AppState::new(Catalog::standard());
    assert_eq!(state.mode, AppMode::PuppyList);
    assert_eq!(state.list_selection, 0);
    assert!(state.detail.is_none());
}

#[test]
fn test_default_state_uses_standard_catalog() {
    let state = AppState::default();
    assert_eq!(state.catalog.len(), 10);
    assert!(state.status_message.contains("Welcome"));
    assert!(!state.help_visible);
}

// =============================================================================
// Selection movement
// =============================================================================

#[test]
fn test_selection_clamps_at_top() {
    let mut state = AppState::new(Catalog::standard());
    state.select_previous();
    assert_eq!(state.list_selection, 0);
}

#[test]
fn test_selection_clamps_at_bottom() {
    let mut state = AppState::new(Catalog::standard());
    for _ in 0..50 {
        state.select_next();
    }
    assert_eq!(state.list_selection, state.catalog.len() - 1);
}

#[test]
fn test_selected_record_follows_cursor() {
    let mut state = AppState::new(Catalog::standard());
    state.select_next();
    let record = state.selected_record().expect("selection in bounds");
    assert_eq!(record.breed_name, "Labrador Retriever");
}

// =============================================================================
// List -> detail transition (round-trip identity)
// =============================================================================

#[test]
fn test_open_details_reproduces_every_record_exactly() {
    let catalog = Catalog::standard();

    for index in 0..catalog.len() {
        let mut state = AppState::new(catalog.clone());
        for _ in 0..index {
            state.select_next();
        }

        let expected = catalog.get(index).expect("index in bounds").clone();
        state.open_details();

        assert_eq!(state.mode, AppMode::PuppyDetails);
        let route = state.detail.as_ref().expect("detail route present");
        assert_eq!(route.image, expected.image);
        assert_eq!(route.breed_text(), expected.breed_name);
        assert_eq!(route.age_text(), expected.age);
        assert_eq!(route.gender_text(), expected.gender.to_string());
        assert_eq!(route.details_text(), expected.details);
    }
}

#[test]
fn test_open_details_updates_status_message() {
    let mut state = AppState::new(Catalog::standard());
    state.open_details();
    assert!(state.status_message.contains("Golden Retriever"));
}

// =============================================================================
// Back navigation
// =============================================================================

#[test]
fn test_close_details_returns_to_list_and_clears_route() {
    let mut state = AppState::new(Catalog::standard());
    state.select_next();
    state.select_next();
    state.open_details();
    assert_eq!(state.mode, AppMode::PuppyDetails);

    state.close_details();
    assert_eq!(state.mode, AppMode::PuppyList);
    assert!(state.detail.is_none());
    // Selection is preserved so the cursor lands where the user left it
    assert_eq!(state.list_selection, 2);
}

#[test]
fn test_reopening_after_back_navigation() {
    let mut state = AppState::new(Catalog::standard());
    state.open_details();
    state.close_details();
    state.select_next();
    state.open_details();

    let route = state.detail.as_ref().expect("detail route present");
    assert_eq!(route.breed_text(), "Labrador Retriever");
}
