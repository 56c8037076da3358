//! Root-system data for the kagome crystal stack
//!
//! Foundation types shared by every crate above this one:
//! - [`CartanType`]: the untwisted affine series `A_n^(1)` (index sets,
//!   marks and comarks, Cartan matrix entries)
//! - [`Weight`]: integral weights in the fundamental-weight basis, the
//!   key type for every Epsilon/Phi lookup table

pub mod cartan;
pub mod weight;

pub use cartan::CartanType;
pub use weight::Weight;
