pub mod catalog;
pub mod parser;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, ResultOrder};
