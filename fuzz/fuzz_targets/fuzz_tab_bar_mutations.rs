#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tabstrip::{
    Arrow, CloseButtonPolicy, Point, PointerButton, PointerEvent, PointerEventKind, Size,
    TabAlignment, TabBar, TabBarEvent,
};
use tabstrip_text::CellShaper;

#[derive(Debug, Arbitrary)]
enum Op {
    Add(u8),
    Remove(u8),
    Move(u8, u8),
    Select(u8),
    Hide(u8, bool),
    Disable(u8, bool),
    Retitle(u8, u8),
    SetCount(u8),
    Resize(u16),
    Align(u8),
    Policy(u8),
    Clip(bool),
    Scrolling(bool),
    MaxWidth(u8),
    Arrow(bool),
    Ensure(u8),
    Pointer(u8, i16, i16),
}

fn index(raw: u8, len: usize) -> usize {
    if len == 0 { usize::from(raw) } else { usize::from(raw) % (len + 1) }
}

fn pointer(kind: u8, x: i16, y: i16) -> PointerEvent {
    let (x, y) = (i32::from(x), i32::from(y));
    let kind = match kind % 10 {
        0 => PointerEventKind::Moved,
        1 => PointerEventKind::Down(PointerButton::Left),
        2 => PointerEventKind::Up(PointerButton::Left),
        3 => PointerEventKind::Drag(PointerButton::Left),
        4 => PointerEventKind::Down(PointerButton::Right),
        5 => PointerEventKind::Up(PointerButton::Right),
        6 => PointerEventKind::ScrollUp,
        7 => PointerEventKind::ScrollDown,
        8 => PointerEventKind::Down(PointerButton::Middle),
        _ => PointerEventKind::Exited,
    };
    PointerEvent::new(kind, x, y)
}

fn apply(bar: &mut TabBar, op: Op) {
    let len = bar.tab_count();
    match op {
        Op::Add(n) => {
            bar.add_tab("x".repeat(usize::from(n % 12)), None);
        }
        Op::Remove(i) => {
            let _ = bar.remove_tab(index(i, len));
        }
        Op::Move(a, b) => {
            let _ = bar.move_tab(index(a, len), index(b, len));
        }
        Op::Select(i) => {
            let _ = bar.set_current_tab(index(i, len));
        }
        Op::Hide(i, hidden) => {
            let _ = bar.set_tab_hidden(index(i, len), hidden);
        }
        Op::Disable(i, disabled) => {
            let _ = bar.set_tab_disabled(index(i, len), disabled);
        }
        Op::Retitle(i, n) => {
            let _ = bar.set_tab_title(index(i, len), "y".repeat(usize::from(n % 16)));
        }
        Op::SetCount(n) => bar.set_tab_count(usize::from(n % 24)),
        Op::Resize(w) => bar.set_size(Size::new(i32::from(w % 1024), 24)),
        Op::Align(a) => bar.set_alignment(match a % 3 {
            0 => TabAlignment::Left,
            1 => TabAlignment::Center,
            _ => TabAlignment::Right,
        }),
        Op::Policy(p) => bar.set_close_button_policy(match p % 3 {
            0 => CloseButtonPolicy::Never,
            1 => CloseButtonPolicy::ActiveOnly,
            _ => CloseButtonPolicy::Always,
        }),
        Op::Clip(clip) => bar.set_clip_tabs(clip),
        Op::Scrolling(on) => bar.set_scrolling_enabled(on),
        Op::MaxWidth(w) => bar.set_max_tab_width(i32::from(w)),
        Op::Arrow(forward) => {
            bar.scroll_by_arrow(if forward { Arrow::Increment } else { Arrow::Decrement });
        }
        Op::Ensure(i) => {
            let _ = bar.ensure_tab_visible(index(i, len));
        }
        Op::Pointer(kind, x, y) => {
            bar.handle_pointer(&pointer(kind, x, y));
        }
    }
}

fn check(bar: &TabBar) {
    let len = bar.tab_count();
    match bar.current_tab() {
        Some(current) => assert!(current < len, "current out of range"),
        None => assert_eq!(len, 0, "no selection with tabs present"),
    }
    if let Some(previous) = bar.previous_tab() {
        assert!(previous < len, "previous out of range");
    }
    if let Some(hovered) = bar.hovered_tab() {
        assert!(hovered < len, "hover out of range");
    }

    let start = bar.first_visible_tab();
    let any_visible = bar.tabs().iter().any(|t| !t.is_hidden());
    if any_visible {
        assert!(!bar.tabs()[start].is_hidden(), "window starts on hidden tab");
    } else {
        assert_eq!(start, 0);
        assert_eq!(bar.last_drawn_tab(), None);
    }
    if let Some(last) = bar.last_drawn_tab() {
        assert!(start <= last && last < len, "bad draw window");
    }

    for (i, tab) in bar.tabs().iter().enumerate() {
        let layout = tab.layout();
        if tab.is_hidden() {
            assert!(!layout.drawn && layout.width == 0, "hidden tab laid out");
        }
        if layout.drawn {
            let mid = bar.size().height / 2;
            if layout.width > 1 && bar.size().height > 0 {
                assert_eq!(bar.tab_at_point(Point::new(layout.offset, mid)), Some(i));
            }
        }
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut bar = TabBar::new()
        .with_shaper(CellShaper::new(8, 16))
        .with_size(Size::new(320, 24));
    bar.set_drag_rearrange(true);
    for op in ops.into_iter().take(256) {
        apply(&mut bar, op);
        check(&bar);
        for event in bar.drain_events() {
            if let TabBarEvent::DragReleased { payload, .. } = event {
                assert!(payload.tab_index < bar.tab_count());
            }
        }
    }
});
