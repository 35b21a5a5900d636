#![doc = include_str!("../README.md")]

mod card;
mod error;
mod pool;
mod sampler;
pub mod tex;

pub use card::{Card, CardSpec};
pub use error::BingoError;
pub use pool::EntryPool;
pub use sampler::{generate, sample_entries, Cards};
