use super::*;

fn core() -> CarouselCore {
    CarouselCore::new(10, false).expect("ten cards")
}

// =============================================================
// Cursor
// =============================================================

#[test]
fn cursor_requires_at_least_one_card() {
    assert!(Cursor::new(0).is_none());
    assert!(CarouselCore::new(0, false).is_none());
}

#[test]
fn single_card_cursor_wraps_onto_itself() {
    let mut cursor = Cursor::new(1).expect("one card");
    assert_eq!(cursor.step(Direction::Next), 0);
    assert_eq!(cursor.step(Direction::Previous), 0);
}

#[test]
fn next_from_last_card_wraps_to_first() {
    let mut cursor = Cursor::new(10).expect("ten cards");
    for _ in 0..9 {
        cursor.step(Direction::Next);
    }
    assert_eq!(cursor.index(), 9);
    assert_eq!(cursor.step(Direction::Next), 0);
}

#[test]
fn previous_from_first_card_wraps_to_last() {
    let mut cursor = Cursor::new(10).expect("ten cards");
    assert_eq!(cursor.step(Direction::Previous), 9);
    assert_eq!(cursor.count(), 10);
}

#[test]
fn forward_then_backward_round_trips() {
    for len in 1..=12 {
        for start in 0..len {
            for n in 0..(3 * len) {
                let mut cursor = Cursor::new(len).expect("non-empty");
                for _ in 0..start {
                    cursor.step(Direction::Next);
                }
                for _ in 0..n {
                    cursor.step(Direction::Next);
                }
                for _ in 0..n {
                    cursor.step(Direction::Previous);
                }
                assert_eq!(cursor.index(), start, "len={len} start={start} n={n}");
            }
        }
    }
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn arrow_keys_map_to_directions() {
    assert_eq!(direction_for_key("ArrowRight"), Some(Direction::Next));
    assert_eq!(direction_for_key("ArrowDown"), Some(Direction::Next));
    assert_eq!(direction_for_key("ArrowLeft"), Some(Direction::Previous));
    assert_eq!(direction_for_key("ArrowUp"), Some(Direction::Previous));
    assert_eq!(direction_for_key("Enter"), None);
}

// =============================================================
// Autoplay
// =============================================================

#[test]
fn autoplay_starts_unless_reduced_motion() {
    assert_eq!(core().start(), TimerCommand::Start);
    let reduced = CarouselCore::new(10, true).expect("ten cards");
    assert_eq!(reduced.autoplay(), Autoplay::Disabled);
    assert_eq!(reduced.start(), TimerCommand::Keep);
}

#[test]
fn reduced_motion_never_creates_a_timer() {
    let mut carousel = CarouselCore::new(10, true).expect("ten cards");
    let commands = [
        carousel.start(),
        carousel.hover_enter(),
        carousel.hover_leave(),
        carousel.navigate(Direction::Next).1,
        carousel.hover_leave(),
    ];
    assert!(commands.iter().all(|c| *c != TimerCommand::Start));
    assert_eq!(carousel.tick(), None);
}

#[test]
fn ticks_advance_while_running() {
    let mut carousel = core();
    assert_eq!(carousel.tick(), Some(1));
    assert_eq!(carousel.tick(), Some(2));
    assert_eq!(carousel.index(), 2);
}

#[test]
fn hover_pauses_and_leave_resumes_from_last_index() {
    let mut carousel = core();
    carousel.tick();
    carousel.tick();
    carousel.tick();
    assert_eq!(carousel.hover_enter(), TimerCommand::Stop);
    assert_eq!(carousel.autoplay(), Autoplay::PausedByHover);
    assert_eq!(carousel.tick(), None);
    assert_eq!(carousel.hover_leave(), TimerCommand::Start);
    assert_eq!(carousel.autoplay(), Autoplay::Running);
    assert_eq!(carousel.tick(), Some(4));
}

#[test]
fn repeated_hover_enter_only_stops_once() {
    let mut carousel = core();
    assert_eq!(carousel.hover_enter(), TimerCommand::Stop);
    assert_eq!(carousel.hover_enter(), TimerCommand::Keep);
}

#[test]
fn leaving_a_nested_button_keeps_the_pause() {
    let mut carousel = core();
    assert_eq!(carousel.hover_enter(), TimerCommand::Stop);
    // Button inside the container: enter it, then step back out.
    assert_eq!(carousel.hover_enter(), TimerCommand::Keep);
    assert_eq!(carousel.hover_leave(), TimerCommand::Keep);
    assert!(carousel.is_hovered());
    assert_eq!(carousel.autoplay(), Autoplay::PausedByHover);
    assert_eq!(carousel.tick(), None);

    assert_eq!(carousel.hover_leave(), TimerCommand::Start);
    assert!(!carousel.is_hovered());
    assert_eq!(carousel.tick(), Some(1));
}

#[test]
fn unmatched_leave_is_ignored() {
    let mut carousel = core();
    assert_eq!(carousel.hover_leave(), TimerCommand::Keep);
    assert!(!carousel.is_hovered());
    assert_eq!(carousel.hover_enter(), TimerCommand::Stop);
    assert_eq!(carousel.hover_leave(), TimerCommand::Start);
}

#[test]
fn manual_navigation_stops_autoplay_for_good() {
    let mut carousel = core();
    carousel.hover_enter();
    let (index, command) = carousel.navigate(Direction::Next);
    assert_eq!(index, 1);
    assert_eq!(command, TimerCommand::Stop);
    assert_eq!(carousel.autoplay(), Autoplay::StoppedByInteraction);

    assert_eq!(carousel.hover_leave(), TimerCommand::Keep);
    assert_eq!(carousel.hover_enter(), TimerCommand::Keep);
    assert_eq!(carousel.hover_leave(), TimerCommand::Keep);
    assert_eq!(carousel.tick(), None);
    assert_eq!(carousel.index(), 1);
}

#[test]
fn keyboard_navigation_without_hover_also_stops_autoplay() {
    let mut carousel = core();
    let (index, command) = carousel.navigate(Direction::Previous);
    assert_eq!(index, 9);
    assert_eq!(command, TimerCommand::Stop);
    assert_eq!(carousel.navigate(Direction::Next), (0, TimerCommand::Keep));
}

#[test]
fn autoplay_wraps_past_the_last_card() {
    let mut carousel = core();
    for _ in 0..9 {
        carousel.tick();
    }
    assert_eq!(carousel.index(), 9);
    assert_eq!(carousel.tick(), Some(0));
}
