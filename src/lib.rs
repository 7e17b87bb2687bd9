//! Review feed core.
//!
//! Geometry and list state for a scrolling feed of user reviews: turns raw
//! review records into styled rows, computes every row's element rectangles
//! and height for a given width, and owns which rows are expanded.
//!
//! Follows a Pure Core / Impure Shell split: `model`, `style`, `layout` and
//! `state` are deterministic and I/O free; `source`, `config` and `logging`
//! touch the outside world.

pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod style;
