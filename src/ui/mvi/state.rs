//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Cheap to clone (the reducer takes ownership and returns a new value)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
