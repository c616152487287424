pub mod engine;

pub use engine::{classify, Classification, INVALID, OUT_OF_RANGE};
