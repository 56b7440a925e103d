//! Sidebar open/width state and the drag-resize state machine.
//!
//! Pointer positions are tracked in pixel units; terminal cells are coarse,
//! so one cell maps to [`PX_PER_CELL`] pixels and the snap thresholds get
//! real hysteresis instead of jumping whole columns.

/// Width the panel opens at, and resets to when a drag closes it.
pub const DEFAULT_WIDTH: u16 = 320;

/// Sticky floor: while open the panel never renders narrower than this.
pub const COLLAPSE_THRESHOLD: u16 = 240;

/// Dragging past this point (half the collapse threshold) closes the panel.
pub const TRIGGER_CLOSE: u16 = COLLAPSE_THRESHOLD / 2;

/// Maximum panel width.
pub const MAX_WIDTH: u16 = 600;

/// Approximate pixels per terminal cell, used to map mouse columns onto the
/// pixel-based thresholds.
pub const PX_PER_CELL: u16 = 8;

/// Sidebar tabs (original layout: history, knowledge base, settings).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarTab {
    History,
    Knowledge,
    Settings,
}

impl SidebarTab {
    pub fn title(self) -> &'static str {
        match self {
            SidebarTab::History => "History",
            SidebarTab::Knowledge => "Knowledge",
            SidebarTab::Settings => "Settings",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SidebarTab::History => SidebarTab::Knowledge,
            SidebarTab::Knowledge => SidebarTab::Settings,
            SidebarTab::Settings => SidebarTab::History,
        }
    }
}

/// Sidebar state: open/width/dragging triple plus the active tab and list
/// selection. Only input handlers touch this; no async completion does.
#[derive(Debug)]
pub struct SidebarState {
    pub is_open: bool,
    /// Panel width in pixels. Meaningful only while open.
    pub width: u16,
    pub is_dragging: bool,
    pub active_tab: SidebarTab,
    /// Selected row in the tab's list (sessions or documents).
    pub selected: usize,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarState {
    pub fn new() -> Self {
        Self {
            is_open: true,
            width: DEFAULT_WIDTH,
            is_dragging: false,
            active_tab: SidebarTab::History,
            selected: 0,
        }
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Press on the divider: arm the drag. Edge-triggered once per gesture.
    pub fn start_drag(&mut self) {
        if self.is_open {
            self.is_dragging = true;
        }
    }

    /// Release: disarm the drag.
    pub fn stop_drag(&mut self) {
        self.is_dragging = false;
    }

    /// Feed one horizontal pointer position (pixels). Pure function of the
    /// position and the open/dragging flags; idempotent under repeated
    /// identical input.
    pub fn drag_to(&mut self, x: u16) {
        if !self.is_dragging {
            return;
        }

        if x < TRIGGER_CLOSE {
            self.is_open = false;
            self.is_dragging = false;
            // Next open starts full-size rather than at the collapse point.
            self.width = DEFAULT_WIDTH;
        } else if x < COLLAPSE_THRESHOLD {
            self.width = COLLAPSE_THRESHOLD;
        } else if x > MAX_WIDTH {
            self.width = MAX_WIDTH;
        } else {
            self.width = x;
        }
    }

    /// Feed a pointer position given as a terminal column.
    pub fn drag_to_column(&mut self, column: u16) {
        self.drag_to(column.saturating_mul(PX_PER_CELL));
    }

    /// Rendered width in terminal cells (0 while closed).
    pub fn cell_width(&self) -> u16 {
        if self.is_open {
            self.width / PX_PER_CELL
        } else {
            0
        }
    }

    /// Whether a terminal column sits on the divider between the sidebar and
    /// the chat area.
    pub fn is_divider_column(&self, column: u16) -> bool {
        self.is_open && column == self.cell_width().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dragging() -> SidebarState {
        let mut state = SidebarState::new();
        state.start_drag();
        state
    }

    #[test]
    fn test_drag_below_close_trigger_closes_and_resets_width() {
        let mut state = dragging();
        state.width = 400;

        state.drag_to(10);

        assert!(!state.is_open);
        assert!(!state.is_dragging);
        assert_eq!(state.width, DEFAULT_WIDTH);
        assert_eq!(state.cell_width(), 0);
    }

    #[test]
    fn test_drag_just_under_close_trigger_closes() {
        let mut state = dragging();
        state.drag_to(TRIGGER_CLOSE - 1);
        assert!(!state.is_open);
    }

    #[test]
    fn test_drag_between_trigger_and_threshold_sticks_at_threshold() {
        for x in [TRIGGER_CLOSE, 150, 200, COLLAPSE_THRESHOLD - 1] {
            let mut state = dragging();
            state.drag_to(x);
            assert!(state.is_open);
            assert_eq!(state.width, COLLAPSE_THRESHOLD, "x = {x}");
        }
    }

    #[test]
    fn test_drag_in_normal_range_tracks_pointer() {
        for x in [COLLAPSE_THRESHOLD, 320, 500, MAX_WIDTH] {
            let mut state = dragging();
            state.drag_to(x);
            assert!(state.is_open);
            assert_eq!(state.width, x, "x = {x}");
        }
    }

    #[test]
    fn test_drag_past_max_clamps() {
        let mut state = dragging();
        state.drag_to(650);
        assert_eq!(state.width, MAX_WIDTH);
    }

    #[test]
    fn test_drag_ignored_when_not_dragging() {
        let mut state = SidebarState::new();
        state.drag_to(500);
        assert_eq!(state.width, DEFAULT_WIDTH);
    }

    #[test]
    fn test_reopen_after_drag_close_starts_full_size() {
        let mut state = dragging();
        state.drag_to(10);
        state.toggle();
        assert!(state.is_open);
        assert_eq!(state.width, DEFAULT_WIDTH);
    }

    #[test]
    fn test_tab_cycle_covers_all_tabs() {
        let tab = SidebarTab::History;
        assert_eq!(tab.next(), SidebarTab::Knowledge);
        assert_eq!(tab.next().next(), SidebarTab::Settings);
        assert_eq!(tab.next().next().next(), SidebarTab::History);
    }

    proptest! {
        /// Feeding the same position twice never changes the outcome.
        #[test]
        fn test_drag_is_idempotent(x in 0u16..1000) {
            let mut once = dragging();
            once.drag_to(x);

            let mut twice = dragging();
            twice.drag_to(x);
            twice.drag_to(x);

            prop_assert_eq!(once.is_open, twice.is_open);
            prop_assert_eq!(once.width, twice.width);
            prop_assert_eq!(once.is_dragging, twice.is_dragging);
        }

        /// While open the width never leaves its legal band.
        #[test]
        fn test_width_stays_in_band(positions in proptest::collection::vec(0u16..1000, 1..20)) {
            let mut state = dragging();
            for x in positions {
                state.drag_to(x);
                if state.is_open {
                    prop_assert!(state.width >= COLLAPSE_THRESHOLD);
                    prop_assert!(state.width <= MAX_WIDTH);
                } else {
                    prop_assert_eq!(state.width, DEFAULT_WIDTH);
                }
            }
        }
    }
}
