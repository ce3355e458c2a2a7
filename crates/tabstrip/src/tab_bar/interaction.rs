#![forbid(unsafe_code)]

//! Pointer state machine.
//!
//! ```text
//!            motion                 left press             release on same target
//! Idle ──────────────▶ Hover* ─────────────────▶ Press* ─────────────────────────▶ action
//!                        │                         │ release elsewhere
//!                        │ press on tab body       └──────────────────────────────▶ (aborted)
//!                        ▼
//!                   select + arm drag ── moved past threshold ──▶ Dragging ── release ──▶ drop
//! ```
//!
//! Leaving the strip clears hover and press state. A drag in flight
//! survives the exit so it can be released over another strip.

use super::TabBar;
use crate::event::{Arrow, HitTarget, InteractionState, PointerResult, TabBarEvent};
use tabstrip_core::event::{PointerButton, PointerEvent, PointerEventKind};
use tabstrip_core::geometry::{Point, Rect};
use tabstrip_core::gesture::{DragProgress, DragTracker};

impl TabBar {
    /// Feed one pointer event.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> PointerResult {
        let point = event.position();
        match event.kind {
            PointerEventKind::Moved | PointerEventKind::Drag(_) => self.on_motion(point),
            PointerEventKind::Down(button) => self.on_press(point, button),
            PointerEventKind::Up(button) => self.on_release(point, button),
            PointerEventKind::Exited => self.on_exit(),
            PointerEventKind::ScrollUp | PointerEventKind::ScrollLeft => {
                self.on_wheel(Arrow::Decrement)
            }
            PointerEventKind::ScrollDown | PointerEventKind::ScrollRight => {
                self.on_wheel(Arrow::Increment)
            }
        }
    }

    fn contains(&self, point: Point) -> bool {
        Rect::from_size(self.size).contains(point)
    }

    /// Re-run the hit test and update hover, arrow highlight, and the hover
    /// sub-state.
    fn update_hover(&mut self, point: Point) {
        let target = self.hit_test(point);
        let hover = target.and_then(HitTarget::tab_index);
        if hover != self.hover {
            self.hover = hover;
            self.notify(TabBarEvent::Hovered { index: hover });
        }
        self.highlight_arrow = match target {
            Some(HitTarget::Arrow(arrow)) => Some(arrow),
            _ => None,
        };
        if !self.state.is_latched() {
            self.state = InteractionState::hovering(target);
        }
    }

    fn on_motion(&mut self, point: Point) -> PointerResult {
        if let Some((index, tracker)) = &mut self.pending_drag
            && tracker.update(point, &self.gesture) == DragProgress::Started
        {
            let index = *index;
            self.pending_drag = None;
            self.begin_drag(index);
        }
        self.update_hover(point);
        if self.state.is_dragging() || self.contains(point) {
            PointerResult::Consumed
        } else {
            PointerResult::Ignored
        }
    }

    fn begin_drag(&mut self, index: usize) {
        let Some(payload) = self.payload_for(index) else {
            return;
        };
        self.state = InteractionState::Dragging { index };
        self.drag_payload = Some(payload.clone());
        self.notify(TabBarEvent::DragStarted(payload));
    }

    fn on_press(&mut self, point: Point, button: PointerButton) -> PointerResult {
        if self.state.is_dragging() {
            return PointerResult::Consumed;
        }
        self.update_hover(point);
        match (self.state, button) {
            (InteractionState::HoverArrow(arrow), PointerButton::Left) => {
                self.state = InteractionState::PressArrow(arrow);
            }
            (InteractionState::HoverExtraButton(index), PointerButton::Left) => {
                self.state = InteractionState::PressExtraButton(index);
            }
            (InteractionState::HoverCloseButton(index), PointerButton::Left) => {
                self.state = InteractionState::PressCloseButton(index);
            }
            (
                InteractionState::HoverTab(index)
                | InteractionState::HoverExtraButton(index)
                | InteractionState::HoverCloseButton(index),
                _,
            ) => self.press_tab(index, point, button),
            _ => return PointerResult::Ignored,
        }
        PointerResult::Consumed
    }

    fn press_tab(&mut self, index: usize, point: Point, button: PointerButton) {
        if self.tabs[index].disabled {
            return;
        }
        match button {
            PointerButton::Left => {
                self.select_index(index);
                if self.drag_rearrange {
                    self.pending_drag = Some((index, DragTracker::new(point, button)));
                }
            }
            PointerButton::Right => {
                if self.select_with_secondary {
                    self.select_index(index);
                }
            }
            PointerButton::Middle => {}
        }
        self.notify(TabBarEvent::TabClicked { index, button });
    }

    fn on_release(&mut self, point: Point, button: PointerButton) -> PointerResult {
        if button != PointerButton::Left {
            return if self.contains(point) {
                PointerResult::Consumed
            } else {
                PointerResult::Ignored
            };
        }
        let armed = self.pending_drag.take().is_some();
        let pressed = self.state;
        let target = self.hit_test(point);
        let result = match pressed {
            InteractionState::PressArrow(arrow) => {
                if target == Some(HitTarget::Arrow(arrow)) {
                    self.scroll_by_arrow(arrow);
                }
                PointerResult::Consumed
            }
            InteractionState::PressExtraButton(index) => {
                if target == Some(HitTarget::ExtraButton(index)) {
                    self.notify(TabBarEvent::ExtraButtonClicked { index });
                }
                PointerResult::Consumed
            }
            InteractionState::PressCloseButton(index) => {
                if target == Some(HitTarget::CloseButton(index)) {
                    self.notify(TabBarEvent::CloseRequested { index });
                }
                PointerResult::Consumed
            }
            InteractionState::Dragging { .. } => {
                if let Some(payload) = self.drag_payload.take() {
                    if self.contains(point) {
                        self.drop_within(&payload, point);
                    } else {
                        self.notify(TabBarEvent::DragReleased {
                            payload,
                            position: point,
                        });
                    }
                }
                PointerResult::Consumed
            }
            _ if armed => PointerResult::Consumed,
            _ => PointerResult::Ignored,
        };
        self.state = InteractionState::Idle;
        self.drag_payload = None;
        if self.contains(point) {
            self.update_hover(point);
        } else {
            self.clear_hover();
        }
        result
    }

    fn clear_hover(&mut self) {
        if self.hover.take().is_some() {
            self.notify(TabBarEvent::Hovered { index: None });
        }
        self.highlight_arrow = None;
    }

    fn on_exit(&mut self) -> PointerResult {
        self.clear_hover();
        self.pending_drag = None;
        if !self.state.is_dragging() {
            self.state = InteractionState::Idle;
        }
        PointerResult::Consumed
    }

    fn on_wheel(&mut self, arrow: Arrow) -> PointerResult {
        if !self.scrolling_enabled || !self.buttons_visible {
            return PointerResult::Ignored;
        }
        self.scroll_by_arrow(arrow);
        PointerResult::Consumed
    }
}
