use crate::ui::mvi::UiState;

pub const DEFAULT_SCROLL_THRESHOLD: u32 = 50;

/// Header flags. `menu_open` and `scrolled` are independent; every
/// combination is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    /// `offset > threshold`. An offset equal to the threshold is not scrolled.
    pub scrolled: bool,
    pub threshold: u32,
    /// Focused drawer link, wraps within `link_count`.
    pub selected_link: usize,
    pub link_count: usize,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD, 0)
    }
}

impl UiState for NavState {}

impl NavState {
    pub fn new(threshold: u32, link_count: usize) -> Self {
        Self {
            menu_open: false,
            scrolled: false,
            threshold,
            selected_link: 0,
            link_count,
        }
    }

    pub fn is_scrolled_at(&self, offset: u32) -> bool {
        offset > self.threshold
    }
}
