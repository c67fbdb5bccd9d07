//! Record shapes: the stored Hero row, its views, and the partial-update wrapper.

mod hero;
mod patch;

pub use hero::*;
pub use patch::Patch;
