//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// States are plain values: cloned to produce the next state, compared to
/// detect whether a dispatch changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
