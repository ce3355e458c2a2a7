#![forbid(unsafe_code)]

//! The tab strip widget.
//!
//! The implementation is split by concern:
//!
//! - `collection`: insert, remove, move, per-tab setters, selection.
//! - `layout`: tab measurement and the per-tab cache.
//! - `scroll`: scroll window, overflow arrows, ensure-visible.
//! - `hit_test`: point to tab and sub-element.
//! - `interaction`: pointer state machine.
//! - `rearrange`: drag payloads and drops.
//! - `persist`: saved selection and scroll position.
//!
//! Every mutating call finishes with a full recompute of the cache, so hit
//! tests and reads never observe stale geometry.

mod collection;
mod interaction;
mod layout;
mod persist;
mod rearrange;
mod scroll;

pub use persist::TabBarPersistState;

use crate::drag::{DragPayload, TabBarId};
use crate::error::{Result, TabBarError};
use crate::event::{Arrow, InteractionState, TabBarEvent};
use crate::tab::Tab;
use crate::theme::TabBarTheme;
use std::fmt;
use tabstrip_core::geometry::Size;
use tabstrip_core::gesture::{DragTracker, GestureConfig};
use tabstrip_text::{CachedShaper, CellShaper, IdentityLocalizer, Localizer, TextShaper};

/// Capacity of the default shaping cache.
const DEFAULT_SHAPING_CACHE: usize = 256;

/// Horizontal placement of the visible tab run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// When tabs show a close button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CloseButtonPolicy {
    #[default]
    Never,
    /// Only the selected tab.
    ActiveOnly,
    Always,
}

/// Headless horizontal tab strip.
pub struct TabBar {
    id: TabBarId,
    tabs: Vec<Tab>,
    current: Option<usize>,
    previous: Option<usize>,

    // Scroll window and derived layout state.
    offset: usize,
    last_drawn: Option<usize>,
    missing_right: bool,
    buttons_visible: bool,
    undrawable_overflow: bool,
    size: Size,

    alignment: TabAlignment,
    close_policy: CloseButtonPolicy,
    clip_tabs: bool,
    scrolling_enabled: bool,
    scroll_to_selected: bool,
    select_with_secondary: bool,
    drag_rearrange: bool,
    rearrange_group: Option<u32>,
    max_tab_width: i32,

    theme: TabBarTheme,
    gesture: GestureConfig,
    shaper: Box<dyn TextShaper>,
    localizer: Box<dyn Localizer>,

    // Pointer interaction.
    state: InteractionState,
    hover: Option<usize>,
    highlight_arrow: Option<Arrow>,
    pending_drag: Option<(usize, DragTracker)>,
    drag_payload: Option<DragPayload>,

    events: Vec<TabBarEvent>,
}

impl Default for TabBar {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TabBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabBar")
            .field("id", &self.id)
            .field("tabs", &self.tabs.len())
            .field("current", &self.current)
            .field("previous", &self.previous)
            .field("offset", &self.offset)
            .field("last_drawn", &self.last_drawn)
            .field("buttons_visible", &self.buttons_visible)
            .field("size", &self.size)
            .field("state", &self.state)
            .field("pending_events", &self.events.len())
            .finish_non_exhaustive()
    }
}

impl TabBar {
    /// Create an empty strip with the default theme and a cached cell shaper.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: TabBarId::next(),
            tabs: Vec::new(),
            current: None,
            previous: None,
            offset: 0,
            last_drawn: None,
            missing_right: false,
            buttons_visible: false,
            undrawable_overflow: false,
            size: Size::ZERO,
            alignment: TabAlignment::default(),
            close_policy: CloseButtonPolicy::default(),
            clip_tabs: true,
            scrolling_enabled: true,
            scroll_to_selected: true,
            select_with_secondary: false,
            drag_rearrange: false,
            rearrange_group: None,
            max_tab_width: 0,
            theme: TabBarTheme::default(),
            gesture: GestureConfig::default(),
            shaper: Box::new(CachedShaper::new(
                CellShaper::default(),
                DEFAULT_SHAPING_CACHE,
            )),
            localizer: Box::new(IdentityLocalizer),
            state: InteractionState::Idle,
            hover: None,
            highlight_arrow: None,
            pending_drag: None,
            drag_payload: None,
            events: Vec::new(),
        }
    }

    /// Use the given theme metrics.
    #[must_use]
    pub fn with_theme(mut self, theme: TabBarTheme) -> Self {
        self.set_theme(theme);
        self
    }

    /// Use the given text shaping backend.
    #[must_use]
    pub fn with_shaper(mut self, shaper: impl TextShaper + 'static) -> Self {
        self.set_shaper(Box::new(shaper));
        self
    }

    /// Set the strip size.
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.set_size(size);
        self
    }

    /// Process-unique identity of this strip.
    #[must_use]
    pub const fn id(&self) -> TabBarId {
        self.id
    }

    /// Take every queued notification, oldest first.
    pub fn drain_events(&mut self) -> Vec<TabBarEvent> {
        std::mem::take(&mut self.events)
    }

    /// Queued notifications, oldest first.
    #[must_use]
    pub fn pending_events(&self) -> &[TabBarEvent] {
        &self.events
    }

    // --- geometry & collaborators ---

    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Host geometry change.
    pub fn set_size(&mut self, size: Size) {
        if self.size == size {
            return;
        }
        self.size = size;
        self.refresh();
        self.follow_current();
    }

    #[must_use]
    pub const fn theme(&self) -> &TabBarTheme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: TabBarTheme) {
        self.theme = theme;
        self.refresh();
    }

    /// Replace the text shaping backend. Every tab is re-shaped.
    pub fn set_shaper(&mut self, shaper: Box<dyn TextShaper>) {
        self.shaper = shaper;
        for tab in &mut self.tabs {
            tab.shaped = None;
        }
        self.refresh();
    }

    /// Replace the localizer. Every label is re-derived and re-shaped.
    pub fn set_localizer(&mut self, localizer: Box<dyn Localizer>) {
        self.localizer = localizer;
        for tab in &mut self.tabs {
            tab.relocalize(&*self.localizer);
        }
        self.refresh();
    }

    #[must_use]
    pub const fn gesture_config(&self) -> GestureConfig {
        self.gesture
    }

    pub fn set_gesture_config(&mut self, gesture: GestureConfig) {
        self.gesture = gesture;
    }

    // --- behaviour flags ---

    #[must_use]
    pub const fn alignment(&self) -> TabAlignment {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: TabAlignment) {
        self.alignment = alignment;
        self.refresh();
    }

    #[must_use]
    pub const fn close_button_policy(&self) -> CloseButtonPolicy {
        self.close_policy
    }

    pub fn set_close_button_policy(&mut self, policy: CloseButtonPolicy) {
        self.close_policy = policy;
        self.refresh();
    }

    #[must_use]
    pub const fn clip_tabs(&self) -> bool {
        self.clip_tabs
    }

    /// With clipping off every visible tab from the window start is laid out,
    /// even past the strip's edge.
    pub fn set_clip_tabs(&mut self, clip: bool) {
        self.clip_tabs = clip;
        self.refresh();
    }

    #[must_use]
    pub const fn scrolling_enabled(&self) -> bool {
        self.scrolling_enabled
    }

    pub fn set_scrolling_enabled(&mut self, enabled: bool) {
        self.scrolling_enabled = enabled;
        self.refresh();
    }

    #[must_use]
    pub const fn scroll_to_selected(&self) -> bool {
        self.scroll_to_selected
    }

    pub fn set_scroll_to_selected(&mut self, enabled: bool) {
        self.scroll_to_selected = enabled;
        self.follow_current();
    }

    #[must_use]
    pub const fn select_with_secondary(&self) -> bool {
        self.select_with_secondary
    }

    pub fn set_select_with_secondary(&mut self, enabled: bool) {
        self.select_with_secondary = enabled;
    }

    #[must_use]
    pub const fn drag_rearrange(&self) -> bool {
        self.drag_rearrange
    }

    pub fn set_drag_rearrange(&mut self, enabled: bool) {
        self.drag_rearrange = enabled;
        if !enabled {
            self.pending_drag = None;
        }
    }

    #[must_use]
    pub const fn rearrange_group(&self) -> Option<u32> {
        self.rearrange_group
    }

    /// Strips sharing a group accept each other's tabs.
    pub fn set_rearrange_group(&mut self, group: Option<u32>) {
        self.rearrange_group = group;
    }

    #[must_use]
    pub const fn max_tab_width(&self) -> i32 {
        self.max_tab_width
    }

    /// Upper bound for a tab's width; `0` means unbounded.
    pub fn set_max_tab_width(&mut self, width: i32) {
        self.max_tab_width = width.max(0);
        self.refresh();
    }

    // --- selection ---

    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    #[must_use]
    pub const fn current_tab(&self) -> Option<usize> {
        self.current
    }

    #[must_use]
    pub const fn previous_tab(&self) -> Option<usize> {
        self.previous
    }

    #[must_use]
    pub fn tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    // --- interaction state ---

    #[must_use]
    pub const fn hovered_tab(&self) -> Option<usize> {
        self.hover
    }

    #[must_use]
    pub const fn highlighted_arrow(&self) -> Option<Arrow> {
        self.highlight_arrow
    }

    #[must_use]
    pub const fn interaction_state(&self) -> InteractionState {
        self.state
    }

    /// Payload of the drag in flight, if any.
    #[must_use]
    pub fn active_drag(&self) -> Option<&DragPayload> {
        self.drag_payload.as_ref()
    }

    // --- internals ---

    pub(crate) fn check_index(&self, operation: &'static str, index: usize) -> Result<()> {
        let len = self.tabs.len();
        if index < len {
            return Ok(());
        }
        #[cfg(feature = "tracing")]
        tracing::warn!(message = "tab_bar.precondition", operation, index, len);
        Err(TabBarError::IndexOutOfRange {
            operation,
            index,
            len,
        })
    }

    pub(crate) fn notify(&mut self, event: TabBarEvent) {
        self.events.push(event);
    }

    /// Recompute the cache and pull back any over-scroll.
    pub(crate) fn refresh(&mut self) {
        self.update_cache();
        self.ensure_no_over_offset();
    }

    /// Bring the current tab into view when scroll-to-selected is on.
    pub(crate) fn follow_current(&mut self) {
        if self.scroll_to_selected
            && let Some(current) = self.current
        {
            self.scroll_into_view(current);
        }
    }

    /// Drop hover, press, and drag state.
    ///
    /// A cleared hover is reported like any other hover change.
    pub(crate) fn reset_interaction(&mut self) {
        self.state = InteractionState::Idle;
        if self.hover.take().is_some() {
            self.notify(TabBarEvent::Hovered { index: None });
        }
        self.highlight_arrow = None;
        self.pending_drag = None;
        self.drag_payload = None;
    }

    pub(crate) fn next_visible(&self, after: usize) -> Option<usize> {
        (after + 1..self.tabs.len()).find(|&i| !self.tabs[i].hidden)
    }

    pub(crate) fn prev_visible(&self, before: usize) -> Option<usize> {
        (0..before.min(self.tabs.len()))
            .rev()
            .find(|&i| !self.tabs[i].hidden)
    }

    pub(crate) fn close_eligible(&self, index: usize) -> bool {
        !self.tabs[index].hidden
            && match self.close_policy {
                CloseButtonPolicy::Never => false,
                CloseButtonPolicy::ActiveOnly => self.current == Some(index),
                CloseButtonPolicy::Always => true,
            }
    }
}
