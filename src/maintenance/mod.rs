//! Background sweeping of expired cache entries.
//!
//! Expired entries are otherwise only dropped when their key is read again;
//! [`CacheSweeper`] bounds how long dead entries occupy capacity.

pub mod sweeper;

#[cfg(test)]
mod tests;

pub use sweeper::CacheSweeper;
