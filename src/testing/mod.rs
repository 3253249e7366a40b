//! Headless testing framework: Pilot, fixture builders.
//!
//! Use [`fixtures::build_select`] to lay out a marked select subtree and the
//! [`Pilot`] to drive a [`Page`](crate::page::Page) over it without a host.

pub mod fixtures;
pub mod pilot;

pub use fixtures::{build_select, SelectFixture};
pub use pilot::Pilot;
