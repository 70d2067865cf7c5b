//! # Algorithms
//!
//! - `codec`: the packed wire/storage layout (sole definition of it)
//! - `transition`: `add_tile` and `slide`
//! - `score`: score and max tile derived from a board

pub mod codec;
pub mod score;
pub mod transition;

pub use codec::{pack, try_pack, unpack};
pub use score::{max_exponent, score};
pub use transition::{add_tile, slide};
