//! Contact page form.

mod intent;
mod reducer;
mod state;

pub use intent::ContactFormIntent;
pub use reducer::ContactFormReducer;
pub use state::{ContactFormState, FormStatus};
