//! Property-based invariant tests for the tab strip.
//!
//! 1. Append/remove/move keep the count and every tab's identity.
//! 2. The current tab stays valid through removals.
//! 3. `tab_at_point` is the exact inverse of the layout cache.
//! 4. Hidden tabs are never hit and take no width.
//! 5. `ensure_tab_visible` leaves the tab fully inside the strip.
//! 6. A close rect exists iff the policy makes the tab eligible.
//! 7. The window start always sits on a visible tab.

use proptest::prelude::*;
use tabstrip::{
    Arrow, CloseButtonPolicy, Point, Sides, Size, TabAlignment, TabBar, TabBarTheme,
};
use tabstrip_text::CellShaper;

// ── Helpers ─────────────────────────────────────────────────────────────

fn bar(width: i32, alignment: TabAlignment, arrows: i32) -> TabBar {
    let theme = TabBarTheme::default()
        .tab_padding(Sides::default())
        .h_separation(0)
        .arrows(Size::new(arrows, arrows));
    let mut bar = TabBar::new()
        .with_shaper(CellShaper::new(10, 16))
        .with_theme(theme)
        .with_size(Size::new(width, 20));
    bar.set_alignment(alignment);
    bar
}

fn alignment() -> impl Strategy<Value = TabAlignment> {
    prop_oneof![
        Just(TabAlignment::Left),
        Just(TabAlignment::Center),
        Just(TabAlignment::Right),
    ]
}

fn policy() -> impl Strategy<Value = CloseButtonPolicy> {
    prop_oneof![
        Just(CloseButtonPolicy::Never),
        Just(CloseButtonPolicy::ActiveOnly),
        Just(CloseButtonPolicy::Always),
    ]
}

fn label_lengths() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(1usize..=5, 1..=12)
}

#[derive(Debug, Clone)]
enum Op {
    Add,
    Remove(usize),
    Move(usize, usize),
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(
        prop_oneof![
            3 => Just(Op::Add),
            2 => any::<usize>().prop_map(Op::Remove),
            2 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::Move(a, b)),
        ],
        0..40,
    )
}

fn labels(bar: &TabBar) -> Vec<String> {
    bar.tabs().iter().map(|t| t.text().to_string()).collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1 + 2. Collection bookkeeping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn collection_matches_model(ops in ops()) {
        let mut bar = bar(300, TabAlignment::Left, 16);
        let mut model: Vec<String> = Vec::new();
        let mut next_id = 0usize;
        let mut appends = 0usize;
        let mut removes = 0usize;

        for op in ops {
            match op {
                Op::Add => {
                    let label = format!("t{next_id}");
                    next_id += 1;
                    appends += 1;
                    bar.add_tab(label.clone(), None);
                    model.push(label);
                }
                Op::Remove(raw) => {
                    if model.is_empty() {
                        prop_assert!(bar.remove_tab(raw).is_err());
                        continue;
                    }
                    let index = raw % model.len();
                    let was_current = bar.current_tab() == Some(index);
                    let removed = bar.remove_tab(index).unwrap();
                    let expected = model.remove(index);
                    prop_assert_eq!(removed.text(), expected.as_str());
                    removes += 1;
                    if was_current && !model.is_empty() {
                        prop_assert_eq!(bar.current_tab(), Some(index.min(model.len() - 1)));
                    }
                }
                Op::Move(a, b) => {
                    if model.is_empty() {
                        continue;
                    }
                    let from = a % model.len();
                    let to = b % model.len();
                    let current_label = bar.current_tab().map(|c| model[c].clone());
                    bar.move_tab(from, to).unwrap();
                    let tab = model.remove(from);
                    model.insert(to, tab);
                    let now = bar.current_tab().map(|c| model[c].clone());
                    prop_assert_eq!(now, current_label);
                }
            }

            prop_assert_eq!(bar.tab_count(), model.len());
            match bar.current_tab() {
                Some(current) => prop_assert!(current < model.len()),
                None => prop_assert!(model.is_empty()),
            }
            if let Some(previous) = bar.previous_tab() {
                prop_assert!(previous < model.len());
            }
        }

        prop_assert_eq!(bar.tab_count(), appends - removes);
        prop_assert_eq!(labels(&bar), model);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Hit test inverts the layout cache
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn tab_at_point_inverts_cache(
        lengths in label_lengths(),
        width in 40i32..400,
        align in alignment(),
        steps in 0usize..4,
    ) {
        let mut bar = bar(width, align, 8);
        for (i, len) in lengths.iter().enumerate() {
            bar.add_tab(format!("{i}").repeat(*len), None);
        }
        for _ in 0..steps {
            bar.scroll_by_arrow(Arrow::Increment);
        }
        let mid = bar.size().height / 2;
        for (index, tab) in bar.tabs().iter().enumerate() {
            let layout = tab.layout();
            if !layout.drawn {
                continue;
            }
            prop_assert_eq!(bar.tab_at_point(Point::new(layout.offset + 1, mid)), Some(index));
            let beyond = bar.tab_at_point(Point::new(layout.offset + layout.width + 1, mid));
            prop_assert_ne!(beyond, Some(index));
        }
        for x in -5..width + 5 {
            if let Some(index) = bar.tab_at_point(Point::new(x, mid)) {
                let layout = bar.tabs()[index].layout();
                prop_assert!(layout.drawn);
                prop_assert!(x >= layout.offset && x < layout.offset + layout.width);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Hidden tabs
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hidden_tabs_are_absent(
        lengths in label_lengths(),
        hidden in proptest::collection::vec(any::<bool>(), 12),
        align in alignment(),
        slack in 0.0f64..1.0,
    ) {
        let visible_width: i32 = lengths
            .iter()
            .zip(&hidden)
            .filter(|(_, h)| !**h)
            .map(|(len, _)| *len as i32 * 10)
            .sum();
        let hidden_width: i32 = lengths
            .iter()
            .zip(&hidden)
            .filter(|(_, h)| **h)
            .map(|(len, _)| *len as i32 * 10)
            .sum();
        prop_assume!(visible_width > 0);
        // Wide enough for the visible run, too narrow to also hold the
        // hidden tabs, so the alignment origin depends on what is counted.
        let width = visible_width + (f64::from(hidden_width) * slack) as i32;

        let mut with_hidden = bar(width, align, 8);
        let mut without = bar(width, align, 8);
        for (i, len) in lengths.iter().enumerate() {
            let label = format!("{i}").repeat(*len);
            with_hidden.add_tab(label.clone(), None);
            if hidden[i] {
                with_hidden.set_tab_hidden(i, true).unwrap();
            } else {
                without.add_tab(label, None);
            }
        }
        prop_assert!(!without.offset_buttons_visible());
        prop_assert_eq!(
            with_hidden.offset_buttons_visible(),
            without.offset_buttons_visible()
        );

        let layout_hidden: Vec<(bool, i32, i32)> = with_hidden
            .tabs()
            .iter()
            .filter(|t| !t.is_hidden())
            .map(|t| (t.layout().drawn, t.layout().offset, t.layout().width))
            .collect();
        let layout_plain: Vec<(bool, i32, i32)> = without
            .tabs()
            .iter()
            .map(|t| (t.layout().drawn, t.layout().offset, t.layout().width))
            .collect();
        prop_assert_eq!(layout_hidden, layout_plain);

        for tab in with_hidden.tabs().iter().filter(|t| t.is_hidden()) {
            prop_assert!(!tab.layout().drawn);
            prop_assert_eq!(tab.layout().width, 0);
        }
        let mid = 10;
        for x in -5..width + 5 {
            if let Some(index) = with_hidden.tab_at_point(Point::new(x, mid)) {
                prop_assert!(!with_hidden.tabs()[index].is_hidden());
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. ensure_tab_visible
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ensure_visible_fits_tab(
        lengths in label_lengths(),
        align in alignment(),
        steps in proptest::collection::vec(any::<bool>(), 0..8),
        target in any::<usize>(),
    ) {
        let width = 100;
        let mut bar = bar(width, align, 16);
        bar.set_scroll_to_selected(false);
        for (i, len) in lengths.iter().enumerate() {
            bar.add_tab(format!("{i}").repeat(*len), None);
        }
        for forward in steps {
            let arrow = if forward { Arrow::Increment } else { Arrow::Decrement };
            bar.scroll_by_arrow(arrow);
        }
        let target = target % lengths.len();
        bar.ensure_tab_visible(target).unwrap();

        let rect = bar.tab_rect(target).unwrap();
        prop_assert!(!rect.is_empty());
        prop_assert!(rect.x >= 0);
        prop_assert!(rect.right() <= width);
        if let Some(arrow) = bar.arrow_rect(Arrow::Decrement) {
            prop_assert!(rect.right() <= arrow.x);
        }
        prop_assert!(bar.first_visible_tab() <= target);
        prop_assert!(bar.last_drawn_tab().is_some_and(|last| target <= last));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Close button eligibility
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn close_rect_follows_policy(
        lengths in label_lengths(),
        policy in policy(),
        current in any::<usize>(),
    ) {
        let mut bar = bar(10_000, TabAlignment::Left, 8);
        for (i, len) in lengths.iter().enumerate() {
            bar.add_tab(format!("{i}").repeat(*len), None);
        }
        bar.set_close_button_policy(policy);
        let current = current % lengths.len();
        bar.set_current_tab(current).unwrap();
        for index in 0..bar.tab_count() {
            let eligible = match policy {
                CloseButtonPolicy::Never => false,
                CloseButtonPolicy::ActiveOnly => index == current,
                CloseButtonPolicy::Always => true,
            };
            prop_assert_eq!(!bar.tab_close_rect(index).unwrap().is_empty(), eligible);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Window start on a visible tab
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn window_start_is_visible(
        lengths in label_lengths(),
        toggles in proptest::collection::vec((any::<usize>(), any::<bool>()), 0..20),
        steps in 0usize..6,
    ) {
        let mut bar = bar(90, TabAlignment::Left, 8);
        for (i, len) in lengths.iter().enumerate() {
            bar.add_tab(format!("{i}").repeat(*len), None);
        }
        for _ in 0..steps {
            bar.scroll_by_arrow(Arrow::Increment);
        }
        for (raw, hidden) in toggles {
            let index = raw % lengths.len();
            bar.set_tab_hidden(index, hidden).unwrap();
            let any_visible = bar.tabs().iter().any(|t| !t.is_hidden());
            let start = bar.first_visible_tab();
            if any_visible {
                prop_assert!(!bar.tabs()[start].is_hidden());
            } else {
                prop_assert_eq!(start, 0);
                prop_assert_eq!(bar.last_drawn_tab(), None);
            }
        }
    }
}
