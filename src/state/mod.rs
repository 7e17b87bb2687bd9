//! List state (pure core plus the render-side adapter).
//!
//! The controller owns rows, expansion and load phase; the adapter answers
//! per-index geometry questions and routes taps back as expansions.

pub mod adapter;
pub mod controller;
pub mod observer;

// Re-export for convenience
pub use adapter::RowAdapter;
pub use controller::{
    LoadOutcome, LoadPhase, LoadResponse, LoadTicket, PendingLoad, ReviewsController,
};
pub use observer::{ListChange, ListObserver};
