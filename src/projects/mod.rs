pub mod life;
pub use life::Board;
