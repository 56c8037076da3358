//! Crystal combinatorics for the kagome stack
//!
//! Three layers, bottom up:
//! - [`crystal`]: the capability traits ([`Crystal`], [`PerfectCrystal`])
//!   through which everything downstream consumes a crystal
//! - [`kirillov_reshetikhin`]: the concrete perfect crystals `B^{r,s}`
//!   of type `A_n^(1)` (single columns and single rows)
//! - [`tensor`]: the signature rule locating where `e_i`/`f_i` act on a
//!   tensor product

pub mod crystal;
pub mod kirillov_reshetikhin;
pub mod tensor;

pub use crystal::{Crystal, PerfectCrystal};
pub use kirillov_reshetikhin::{KirillovReshetikhinCrystal, KrShape, KrTableau, UnsupportedShape};
