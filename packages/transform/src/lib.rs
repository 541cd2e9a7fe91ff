//! # Scribe Transform
//!
//! Document deltas for the Scribe editor state: steps, the position maps
//! they produce, and transforms that chain them.
//!
//! Steps never mutate their input. A transform keeps the document it was
//! built against so it can be replayed elsewhere with [`Transform::apply_to`].

mod error;
mod map;
mod step;
mod transform;

pub use error::{TransformError, TransformResult};
pub use map::{Assoc, MapRange, Mapping, StepMap};
pub use step::Step;
pub use transform::Transform;
