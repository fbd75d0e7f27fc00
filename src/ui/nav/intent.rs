use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// New scroll offset from the scroll signal.
    Scrolled { offset: u32 },
    /// Hamburger button.
    ToggleMenu,
    CloseMenu,
    /// Click outside the drawer.
    BackdropClicked,
    /// A navigation link was activated. Always closes the drawer.
    LinkActivated,
    MoveUp,
    MoveDown,
}

impl Intent for NavIntent {}
