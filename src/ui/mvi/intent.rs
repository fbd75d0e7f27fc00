//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is either a viewer gesture (key press, link activation) or a
/// system event (timer tick, scroll offset change).
pub trait Intent: Send + 'static {}
