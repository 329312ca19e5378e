#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod auxiliary;
pub mod error;
pub mod projects;
pub mod traits_and_structs;

pub use error::BoardError;
pub use projects::life::Board;
pub use traits_and_structs::{Cell, CellAutomata};
