//! Fake-data provider capability.
//!
//! Random values are obtained through the [`FakeDataProvider`] trait so
//! callers can swap the production [`FakeProvider`] for a fixed-sequence
//! implementation in tests.

use fake::Fake;
use fake::faker::address::raw::CountryName;
use fake::faker::internet::raw::SafeEmail;
use fake::faker::name::raw::{FirstName, LastName, Name, Title};
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Source of random, realistic-looking personal data.
///
/// Each call consumes entropy from the provider. Implementations are not
/// expected to fail; a panicking provider propagates to the caller.
pub trait FakeDataProvider {
    /// Returns a random first name.
    fn first_name(&mut self) -> String;

    /// Returns a random last name.
    fn last_name(&mut self) -> String;

    /// Returns a random honorific such as `Mr.` or `Dr.`.
    fn title(&mut self) -> String;

    /// Returns a random country name.
    fn country(&mut self) -> String;

    /// Returns a random full name.
    fn full_name(&mut self) -> String;

    /// Returns a random email address.
    fn email(&mut self) -> String;
}

impl<P: FakeDataProvider + ?Sized> FakeDataProvider for &mut P {
    fn first_name(&mut self) -> String {
        (**self).first_name()
    }

    fn last_name(&mut self) -> String {
        (**self).last_name()
    }

    fn title(&mut self) -> String {
        (**self).title()
    }

    fn country(&mut self) -> String {
        (**self).country()
    }

    fn full_name(&mut self) -> String {
        (**self).full_name()
    }

    fn email(&mut self) -> String {
        (**self).email()
    }
}

impl<P: FakeDataProvider + ?Sized> FakeDataProvider for Box<P> {
    fn first_name(&mut self) -> String {
        (**self).first_name()
    }

    fn last_name(&mut self) -> String {
        (**self).last_name()
    }

    fn title(&mut self) -> String {
        (**self).title()
    }

    fn country(&mut self) -> String {
        (**self).country()
    }

    fn full_name(&mut self) -> String {
        (**self).full_name()
    }

    fn email(&mut self) -> String {
        (**self).email()
    }
}

/// Provider backed by the `fake` crate's English locale.
///
/// The same seed always produces the same sequence of values.
///
/// # Example
///
/// ```
/// use barking_mad::{FakeDataProvider, FakeProvider};
///
/// let mut first = FakeProvider::seeded(42);
/// let mut second = FakeProvider::seeded(42);
///
/// assert_eq!(first.full_name(), second.full_name());
/// assert_eq!(first.seed(), 42);
/// ```
#[derive(Debug, Clone)]
pub struct FakeProvider {
    seed: u64,
    rng: ChaCha8Rng,
}

impl FakeProvider {
    /// Creates a deterministic provider from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a provider seeded from the thread-local RNG.
    ///
    /// The chosen seed is logged at debug level and available through
    /// [`FakeProvider::seed`] so a run can be reproduced.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        debug!(seed, "seeded fake-data provider from entropy");
        Self::seeded(seed)
    }

    /// Returns the seed this provider was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl FakeDataProvider for FakeProvider {
    fn first_name(&mut self) -> String {
        FirstName(EN).fake_with_rng(&mut self.rng)
    }

    fn last_name(&mut self) -> String {
        LastName(EN).fake_with_rng(&mut self.rng)
    }

    fn title(&mut self) -> String {
        Title(EN).fake_with_rng(&mut self.rng)
    }

    fn country(&mut self) -> String {
        CountryName(EN).fake_with_rng(&mut self.rng)
    }

    fn full_name(&mut self) -> String {
        Name(EN).fake_with_rng(&mut self.rng)
    }

    fn email(&mut self) -> String {
        SafeEmail(EN).fake_with_rng(&mut self.rng)
    }
}
