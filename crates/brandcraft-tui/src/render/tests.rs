//! Full-screen rendering tests

use super::view;
use crate::test_utils::{filled_form_state, result_state, sample_result_state, TestTerminal};
use brandcraft_app::{AlertState, AppState};
use brandcraft_core::{BrandIdentity, Swatch};

fn render_screen(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_initial_screen_shows_form() {
    let term = render_screen(&AppState::new());

    assert!(term.line_contains(1, "BrandCraft"));
    assert!(term.buffer_contains("YOUR VISION"));
    assert!(term.buffer_contains("CRAFT MY IDENTITY"));
    assert!(term.buffer_contains("Modern & Professional"));
    assert!(!term.buffer_contains("VISUAL DNA"));
}

#[test]
fn test_loading_form_shows_progress() {
    let mut state = filled_form_state();
    state.begin_generation();
    let term = render_screen(&state);

    assert!(term.buffer_contains("MANIFESTING..."));
    assert!(term.buffer_contains("A privacy-focused smart home hub"));
}

#[test]
fn test_nestly_result_board() {
    let term = render_screen(&sample_result_state());

    assert!(term.buffer_contains("Nestly"));
    assert!(term.buffer_contains("#private #secure #smart #simple #trusted"));
    assert_eq!(term.count("██████"), 8, "two chip rows per swatch");
    for hex in ["#1A1A2E", "#0F3460", "#E94560", "#F1F1F1"] {
        assert!(term.buffer_contains(hex));
    }
    assert!(term.buffer_contains("Ready to launch?"));
    assert!(!term.buffer_contains("CRAFT MY IDENTITY"));
}

#[test]
fn test_copy_ack_renders_check_for_copied_hex() {
    let mut state = sample_result_state();
    state.acknowledge_copy("#0F3460");
    let term = render_screen(&state);

    let row = term.find_line("#0F3460").expect("hex row");
    assert!(term.line_contains(row, "✓"));
    assert_eq!(term.count("✓"), 1);
}

#[test]
fn test_alert_overlays_form() {
    let mut state = filled_form_state();
    state.alert = Some(AlertState::generation_failed());
    let term = render_screen(&state);

    assert!(term.buffer_contains("Generation Failed"));
    assert!(term.buffer_contains("Please try again."));
}

#[test]
fn test_status_message_in_footer() {
    let mut state = sample_result_state();
    state.set_status("Board saved to ./brandcraft-nestly.md");
    let term = render_screen(&state);

    let footer = term.area().height - 1;
    assert!(term.line_contains(footer, "Board saved to"));
}

#[test]
fn test_short_palette_still_renders() {
    let identity = BrandIdentity {
        name: "Tiny".to_string(),
        tagline: "Small.".to_string(),
        colors: vec![Swatch::new("#000000", "Ink")],
        description: "d".to_string(),
        voice: "v".to_string(),
        keywords: vec!["one".to_string()],
    };
    let term = render_screen(&result_state(identity));

    assert!(term.buffer_contains("INK"));
    assert!(term.buffer_contains("#one"));
    assert_eq!(term.count("██████"), 2);
}

#[test]
fn test_compact_terminal_renders_without_panic() {
    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &sample_result_state()));
    assert!(term.buffer_contains("Nestly"));

    let mut tiny = TestTerminal::with_size(10, 4);
    tiny.draw_with(|frame| view(frame, &AppState::new()));
}
