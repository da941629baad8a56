//! Prelude for the float-ext crate.
//!
//! ```
//! use float_ext::prelude::*;
//!
//! let range = FloatRange::new(0.0f64, 1.0);
//! let y = denormalize(0.25, range, 0.5, false);
//! assert!((y - 0.25).abs() < 1e-12);
//! ```

pub use crate::error::{FloatExtError, FloatExtResult};
pub use crate::ext::FloatExt;
pub use crate::float::TaperFloat;
pub use crate::map::{clamp, linear_map};
pub use crate::range::FloatRange;
pub use crate::round::{round, trailing_digits, truncate};
pub use crate::taper::{TaperCurve, denormalize, normalize};
