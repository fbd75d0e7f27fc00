pub mod app;
pub mod carousel;
pub mod contact_form;
pub mod drawer;
pub mod events;
pub mod footer;
pub mod go_top;
pub mod header;
pub mod hero;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod nav;
pub mod page;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::{run, RunOptions};
