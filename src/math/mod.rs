pub mod matrix;
pub mod random;
