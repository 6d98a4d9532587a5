//! Tests for participant color assignment.

use slotwise_core::ColorAssigner;

#[test]
fn current_user_is_always_blue() {
    let mut colors = ColorAssigner::new();

    assert_eq!(colors.color_for("me@example.com", true, false), "#0078d4");

    // Still blue after others have claimed palette slots, and never cached.
    colors.color_for("a@example.com", false, false);
    colors.color_for("b@example.com", false, false);
    assert_eq!(colors.color_for("me@example.com", true, false), "#0078d4");
    assert!(!colors.assignments().contains_key("me@example.com"));
}

#[test]
fn resources_are_always_green() {
    let mut colors = ColorAssigner::new();

    assert_eq!(colors.color_for("room-4a@example.com", false, true), "#107c10");
    assert!(!colors.assignments().contains_key("room-4a@example.com"));
}

#[test]
fn first_member_skips_the_current_user_color() {
    let mut colors = ColorAssigner::new();

    // Palette index 0 is the current user's blue; others start at index 1.
    assert_eq!(colors.color_for("a@example.com", false, false), "#d83b01");
}

#[test]
fn assignment_is_stable_per_email() {
    let mut colors = ColorAssigner::new();

    let first = colors.color_for("a@example.com", false, false);
    colors.color_for("b@example.com", false, false);
    colors.color_for("c@example.com", false, false);

    assert_eq!(colors.color_for("a@example.com", false, false), first);
}

#[test]
fn members_receive_distinct_palette_colors_in_order() {
    let mut colors = ColorAssigner::new();

    let got: Vec<&str> = ["a", "b", "c", "d", "e"]
        .iter()
        .map(|name| colors.color_for(&format!("{name}@example.com"), false, false))
        .collect();

    assert_eq!(got, vec!["#d83b01", "#8764b8", "#00b7c3", "#8cbd18", "#e3008c"]);
}

#[test]
fn palette_wraps_after_nineteen_members() {
    let mut colors = ColorAssigner::new();

    for i in 0..19 {
        colors.color_for(&format!("member{i}@example.com"), false, false);
    }

    // The twentieth member wraps onto index 0 and shares the user's blue.
    assert_eq!(colors.color_for("member19@example.com", false, false), "#0078d4");
}

#[test]
fn reset_forgets_assignments() {
    let mut colors = ColorAssigner::new();

    colors.color_for("a@example.com", false, false);
    colors.color_for("b@example.com", false, false);
    colors.reset();

    assert!(colors.assignments().is_empty());
    // After a reset the order of first sight decides again.
    assert_eq!(colors.color_for("b@example.com", false, false), "#d83b01");
}

#[test]
fn instances_do_not_share_state() {
    let mut first = ColorAssigner::new();
    let mut second = ColorAssigner::new();

    first.color_for("a@example.com", false, false);
    assert_eq!(second.color_for("b@example.com", false, false), "#d83b01");
}
