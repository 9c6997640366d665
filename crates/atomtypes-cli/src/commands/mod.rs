pub mod ancestors;
pub mod check;
pub mod common;
pub mod dump;
pub mod is_a;
pub mod loader;
