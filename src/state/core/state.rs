//! Base trait for slice states.

/// Marker trait for slice state objects.
///
/// Slice states should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq for detecting changes)
/// - Defaulted (Default is the state before any action arrives)
pub trait SliceState: Clone + PartialEq + Default + Send + 'static {}
