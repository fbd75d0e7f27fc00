use crate::config::Config;
use crate::contact::{ContactError, ContactSubmitter};
use crate::content::{Page, PageKind, SiteCatalog};
use crate::scroll::{ScrollBus, SectionRevealer, Viewport, VisibilityObserver};
use crate::slideshow::{channel_sink, Slideshow, SlideshowEvent};
use crate::ui::contact_form::{ContactFormIntent, ContactFormReducer, ContactFormState};
use crate::ui::events::AppEvent;
use crate::ui::go_top;
use crate::ui::layout::{body_regions, body_rect};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavBar, NavState};
use crate::ui::page::PageLayout;
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Whole-site state: one shared layout, one page in the body slot.
pub struct App {
    should_quit: bool,
    config: Config,
    catalog: SiteCatalog,
    page: Page,
    /// Terminal size as last reported.
    size: (u16, u16),
    scroll: ScrollBus,
    /// Body scroll position in rows.
    scroll_row: u16,
    nav: NavBar,
    hero: Option<Slideshow>,
    layout: PageLayout,
    revealer: SectionRevealer,
    contact_form: ContactFormState,
    submitter: Arc<dyn ContactSubmitter>,
    events: mpsc::UnboundedSender<AppEvent>,
}

impl App {
    pub fn new(
        config: Config,
        catalog: SiteCatalog,
        submitter: Arc<dyn ContactSubmitter>,
        events: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        let scroll = ScrollBus::new();
        let nav = NavBar::mount(
            &scroll,
            catalog.nav_links().to_vec(),
            config.header.scroll_threshold,
        );
        let page = catalog.page_or_not_found("/").clone();
        let ratio = config.page.reveal_ratio;
        let mut app = Self {
            should_quit: false,
            config,
            catalog,
            page,
            size: (80, 24),
            scroll,
            scroll_row: 0,
            nav,
            hero: None,
            layout: PageLayout::default(),
            revealer: SectionRevealer::new(Vec::new(), ratio),
            contact_form: ContactFormState::default(),
            submitter,
            events,
        };
        app.mount_page();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn catalog(&self) -> &SiteCatalog {
        &self.catalog
    }

    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    pub fn nav_state(&self) -> &NavState {
        self.nav.state()
    }

    pub fn hero(&self) -> Option<&Slideshow> {
        self.hero.as_ref()
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn contact_form(&self) -> &ContactFormState {
        &self.contact_form
    }

    pub fn is_contact_page(&self) -> bool {
        self.page.kind == PageKind::Contact
    }

    pub fn scroll_row(&self) -> u16 {
        self.scroll_row
    }

    /// Scroll position in offset units, as published on the scroll signal.
    pub fn scroll_offset(&self) -> u32 {
        self.scroll.offset()
    }

    pub fn scroll_subscribers(&self) -> usize {
        self.scroll.subscriber_count()
    }

    pub fn is_revealed(&self, section: usize) -> bool {
        self.revealer.is_revealed(section)
    }

    pub fn go_top_visible(&self) -> bool {
        go_top::is_visible(self.scroll_offset(), self.config.page.go_top_threshold)
    }

    /// Navigates to `path`. Unknown paths show the not-found page.
    pub fn navigate(&mut self, path: &str) {
        self.nav.close_menu();
        let page = self.catalog.page_or_not_found(path).clone();
        if page.kind == PageKind::NotFound {
            tracing::warn!(path, "No page for path");
        } else {
            tracing::info!(path = %page.path, "Navigating");
        }
        self.page = page;
        self.mount_page();
    }

    fn mount_page(&mut self) {
        // Dropping the old slideshow cancels its timers before the new one starts.
        if let Some(mut old) = self.hero.take() {
            old.teardown();
        }
        self.hero = self.mount_hero();
        self.scroll_row = 0;
        self.publish_scroll();
        self.relayout(false);
    }

    fn mount_hero(&self) -> Option<Slideshow> {
        if !self.page.has_hero() {
            return None;
        }
        let sink = channel_sink(self.events.clone(), AppEvent::Slideshow);
        let transition = Duration::from_millis(self.config.slideshow.transition_ms);
        let mut slideshow = Slideshow::new(sink, transition);
        let interval = Duration::from_millis(self.config.slideshow.interval_ms);
        match slideshow.start(self.page.hero.clone(), interval) {
            Ok(()) => Some(slideshow),
            Err(err) => {
                tracing::warn!(path = %self.page.path, "Hero not started: {}", err);
                None
            }
        }
    }

    fn body_regions(&self) -> (Rect, Rect, Rect) {
        let (cols, rows) = self.size;
        let body = body_rect(Rect::new(0, 0, cols, rows));
        body_regions(body, self.hero.is_some(), self.is_contact_page())
    }

    /// Rows available to page text.
    pub fn content_height(&self) -> u16 {
        self.body_regions().1.height
    }

    /// Rebuilds the body layout. `same_page` keeps sections already revealed.
    fn relayout(&mut self, same_page: bool) {
        let (_, content, _) = self.body_regions();
        self.layout = PageLayout::build(&self.page, content.width.saturating_sub(2));
        let mut revealer = SectionRevealer::new(
            self.layout.extents().to_vec(),
            self.config.page.reveal_ratio,
        );
        if same_page {
            revealer.carry_over(&self.revealer);
        }
        self.revealer = revealer;
        self.clamp_scroll();
        self.observe_sections();
    }

    fn max_scroll_row(&self) -> u16 {
        let lines = u16::try_from(self.layout.line_count()).unwrap_or(u16::MAX);
        lines.saturating_sub(self.content_height())
    }

    fn clamp_scroll(&mut self) {
        let max = self.max_scroll_row();
        if self.scroll_row > max {
            self.scroll_row = max;
            self.publish_scroll();
        }
    }

    fn publish_scroll(&mut self) {
        let offset = u32::from(self.scroll_row).saturating_mul(self.config.page.scroll_step);
        self.scroll.publish(offset);
        self.nav.sync_scroll();
    }

    fn observe_sections(&mut self) {
        self.revealer.observe(Viewport {
            offset: u32::from(self.scroll_row),
            height: u32::from(self.content_height()),
        });
    }

    pub fn scroll_by(&mut self, rows: i32) {
        let max = i32::from(self.max_scroll_row());
        let next = (i32::from(self.scroll_row) + rows).clamp(0, max) as u16;
        if next == self.scroll_row {
            return;
        }
        self.scroll_row = next;
        self.publish_scroll();
        self.observe_sections();
    }

    pub fn page_down(&mut self) {
        let step = i32::from(self.content_height().max(1));
        self.scroll_by(step);
    }

    pub fn page_up(&mut self) {
        let step = i32::from(self.content_height().max(1));
        self.scroll_by(-step);
    }

    pub fn scroll_to_top(&mut self) {
        if self.scroll_row == 0 {
            return;
        }
        self.scroll_row = 0;
        self.publish_scroll();
        self.observe_sections();
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
        self.relayout(true);
    }

    pub fn on_tick(&mut self) {
        self.nav.sync_scroll();
    }

    pub fn on_slideshow_event(&mut self, event: SlideshowEvent) -> bool {
        match self.hero.as_mut() {
            Some(hero) => hero.handle(event),
            None => false,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.nav.toggle_menu();
    }

    pub fn close_menu(&mut self) {
        self.nav.backdrop_click();
    }

    pub fn menu_up(&mut self) {
        self.nav.move_up();
    }

    pub fn menu_down(&mut self) {
        self.nav.move_down();
    }

    /// Follows the focused drawer link. The drawer is closed afterwards.
    pub fn activate_menu_selection(&mut self) {
        if let Some(link) = self.nav.activate_selected() {
            self.navigate(&link.path);
        }
    }

    pub fn activate_nav_link(&mut self, index: usize) {
        if let Some(link) = self.nav.activate_link(index) {
            self.navigate(&link.path);
        }
    }

    pub fn next_slide(&mut self) {
        if let Some(hero) = self.hero.as_mut() {
            hero.next();
        }
    }

    pub fn previous_slide(&mut self) {
        if let Some(hero) = self.hero.as_mut() {
            hero.previous();
        }
    }

    pub fn toggle_slideshow(&mut self) {
        if let Some(hero) = self.hero.as_mut() {
            hero.toggle_pause();
        }
    }

    pub fn go_to_slide(&mut self, index: usize) {
        if let Some(hero) = self.hero.as_mut() {
            if let Err(err) = hero.go_to(index) {
                tracing::debug!("Ignoring slide jump: {}", err);
            }
        }
    }

    /// Follows the current slide's call to action, if it has one.
    pub fn activate_call_to_action(&mut self) {
        let target = self
            .hero
            .as_ref()
            .and_then(|hero| hero.current_slide())
            .and_then(|slide| slide.call_to_action.as_ref())
            .map(|cta| cta.target.clone());
        if let Some(target) = target {
            self.navigate(&target);
        }
    }

    pub fn form_input(&mut self, ch: char) {
        dispatch_mvi!(self, contact_form, ContactFormReducer, ContactFormIntent::Input(ch));
    }

    pub fn form_backspace(&mut self) {
        dispatch_mvi!(self, contact_form, ContactFormReducer, ContactFormIntent::Backspace);
    }

    pub fn form_next_field(&mut self) {
        dispatch_mvi!(self, contact_form, ContactFormReducer, ContactFormIntent::NextField);
    }

    pub fn form_prev_field(&mut self) {
        dispatch_mvi!(self, contact_form, ContactFormReducer, ContactFormIntent::PrevField);
    }

    pub fn submit_contact(&mut self) {
        let request = self.contact_form.request();
        let intent = match self.submitter.submit(&request) {
            Ok(receipt) => ContactFormIntent::Sent(receipt.id),
            Err(ContactError::MissingField(field)) => ContactFormIntent::ValidationFailed(field),
            Err(err) => {
                tracing::error!("Contact submission failed: {}", err);
                ContactFormIntent::Failed(err.to_string())
            }
        };
        dispatch_mvi!(self, contact_form, ContactFormReducer, intent);
    }

    /// Releases timers and the scroll subscription.
    pub fn teardown(&mut self) {
        if let Some(mut hero) = self.hero.take() {
            hero.teardown();
        }
        self.nav.unmount();
    }
}
