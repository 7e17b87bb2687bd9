//! Change notifications from the controller to the rendering layer.

/// What the rendering layer must re-measure and redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    /// The whole list was replaced (load applied, success or failure).
    Reloaded,
    /// Only the row at this index changed (expanded in place).
    RowChanged(usize),
}

/// Receives list changes. Implemented by the rendering layer.
///
/// Called synchronously on the controller's thread, after the state change
/// is complete. Implementations use interior mutability for their own state.
pub trait ListObserver {
    /// The list changed as described by `change`.
    fn list_changed(&self, change: ListChange);
}
