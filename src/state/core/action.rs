//! Base trait for actions consumed by reducers.

/// Trait for action objects.
///
/// Actions describe:
/// - User actions (search input, filter toggles, modal selection)
/// - API results (fetched mentor or student collections)
///
/// Actions are processed by reducers to produce new slice states.
/// Each action family is a closed enum, so an unknown discriminator is
/// unrepresentable.
pub trait Action: Send + 'static {
    /// Short stable name of the action variant, for dispatch logging.
    fn kind(&self) -> &'static str;
}
