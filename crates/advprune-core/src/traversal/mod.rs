pub mod ancestors;

pub use ancestors::{ancestors, Ancestors};
