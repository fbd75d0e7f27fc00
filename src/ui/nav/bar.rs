use crate::content::NavLink;
use crate::scroll::{ScrollSignal, ScrollSubscription};
use crate::ui::mvi::dispatch;

use super::intent::NavIntent;
use super::reducer::NavReducer;
use super::state::NavState;

/// Mounted navigation header.
///
/// Holds the scroll subscription for as long as it is mounted; dropping the
/// bar or calling [`NavBar::unmount`] releases it.
#[derive(Debug)]
pub struct NavBar {
    links: Vec<NavLink>,
    state: NavState,
    subscription: Option<ScrollSubscription>,
}

impl NavBar {
    pub fn mount(signal: &dyn ScrollSignal, links: Vec<NavLink>, threshold: u32) -> Self {
        let mut bar = Self {
            state: NavState::new(threshold, links.len()),
            links,
            subscription: Some(signal.subscribe()),
        };
        bar.sync_scroll();
        tracing::debug!(threshold, "Nav bar mounted");
        bar
    }

    /// Applies the newest scroll offset, if any. Returns true on change.
    pub fn sync_scroll(&mut self) -> bool {
        let Some(offset) = self.subscription.as_mut().and_then(|sub| sub.poll()) else {
            return false;
        };
        self.on_scroll(offset)
    }

    /// Applies `offset` directly.
    pub fn on_scroll(&mut self, offset: u32) -> bool {
        let changed = dispatch::<NavReducer>(&mut self.state, NavIntent::Scrolled { offset });
        if changed {
            tracing::trace!(offset, scrolled = self.state.scrolled, "Header style changed");
        }
        changed
    }

    pub fn toggle_menu(&mut self) {
        dispatch::<NavReducer>(&mut self.state, NavIntent::ToggleMenu);
    }

    pub fn close_menu(&mut self) {
        dispatch::<NavReducer>(&mut self.state, NavIntent::CloseMenu);
    }

    pub fn backdrop_click(&mut self) {
        dispatch::<NavReducer>(&mut self.state, NavIntent::BackdropClicked);
    }

    pub fn move_up(&mut self) {
        dispatch::<NavReducer>(&mut self.state, NavIntent::MoveUp);
    }

    pub fn move_down(&mut self) {
        dispatch::<NavReducer>(&mut self.state, NavIntent::MoveDown);
    }

    /// Activates link `index`. The drawer is closed whatever the outcome.
    pub fn activate_link(&mut self, index: usize) -> Option<NavLink> {
        dispatch::<NavReducer>(&mut self.state, NavIntent::LinkActivated);
        let link = self.links.get(index).cloned();
        if let Some(link) = &link {
            tracing::debug!(path = %link.path, "Nav link activated");
        }
        link
    }

    pub fn activate_selected(&mut self) -> Option<NavLink> {
        self.activate_link(self.state.selected_link)
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Releases the scroll subscription. Idempotent.
    pub fn unmount(&mut self) {
        if self.subscription.take().is_some() {
            tracing::debug!("Nav bar unmounted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::ScrollBus;

    fn links() -> Vec<NavLink> {
        vec![NavLink::new("Home", "/"), NavLink::new("About", "/about")]
    }

    #[test]
    fn mount_reads_current_offset() {
        let bus = ScrollBus::new();
        bus.publish(80);
        let bar = NavBar::mount(&bus, links(), 50);
        assert!(bar.state().scrolled);
    }

    #[test]
    fn activate_out_of_range_still_closes() {
        let bus = ScrollBus::new();
        let mut bar = NavBar::mount(&bus, links(), 50);
        bar.toggle_menu();
        assert!(bar.activate_link(9).is_none());
        assert!(!bar.state().menu_open);
    }

    #[test]
    fn unmount_releases_subscription() {
        let bus = ScrollBus::new();
        let mut bar = NavBar::mount(&bus, links(), 50);
        assert_eq!(bus.subscriber_count(), 1);
        bar.unmount();
        bar.unmount();
        assert_eq!(bus.subscriber_count(), 0);
        assert!(!bar.is_mounted());
        bus.publish(500);
        assert!(!bar.sync_scroll());
        assert!(!bar.state().scrolled);
    }
}
