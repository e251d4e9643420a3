//! Human value objects with greetings, populated from fake data.
//!
//! This crate models a [`Human`] with a handful of identity fields and a
//! greeting, plus a factory that fills humans with random names, titles, and
//! countries drawn from an injected [`FakeDataProvider`].
//!
//! # Overview
//!
//! - [`Human`] is immutable after construction; its formal name is derived
//!   from the title and last name.
//! - [`FakeProvider`] supplies values from the `fake` crate, either seeded
//!   for reproducible output or seeded from entropy.
//! - [`random_new_human`] wires four provider values into a new [`Human`].
//! - [`cli`] holds the parsing and rendering used by the `barking-mad`
//!   binary.
//!
//! # Example
//!
//! ```
//! use barking_mad::{FakeProvider, Human, HumanOptions, random_new_human};
//!
//! let bob = Human::new(HumanOptions::default().with_first_name("Bob"));
//! let mut provider = FakeProvider::seeded(42);
//! let stranger = random_new_human(&mut provider);
//!
//! let greeting = stranger.greet(Some(&bob));
//! assert!(greeting.starts_with("Hi Bob, my name is "));
//! assert!(greeting.ends_with(stranger.formal_name()));
//! ```

pub mod cli;
mod factory;
mod human;
mod provider;

pub use factory::{POTATO, potato, random_email_line, random_name_line, random_new_human};
pub use human::{Human, HumanOptions};
pub use provider::{FakeDataProvider, FakeProvider};
