#![doc = include_str!("../README.md")]

mod filter;
mod handle;
#[cfg(feature = "serde")]
mod ser;
mod strategy;
mod view;

pub mod iter;

pub use filter::{All, Filter};
pub use handle::{Handle, HandleMut};
pub use strategy::{Strategy, Unvalidated, Validated};
pub use view::{RefView, view, view_filtered, view_unvalidated};
