//! Random human generation and report lines.

use tracing::debug;

use crate::human::{Human, HumanOptions};
use crate::provider::FakeDataProvider;

/// Fixed marker printed first by the command-line report.
pub const POTATO: &str = "potato!";

/// Returns the fixed marker string.
///
/// # Example
///
/// ```
/// assert_eq!(barking_mad::potato(), "potato!");
/// ```
#[must_use]
pub const fn potato() -> &'static str {
    POTATO
}

/// Builds a [`Human`] from four values drawn from `provider`.
///
/// Values are drawn in the order first name, last name, title, country and
/// wired into the matching fields. The provider's output is used as-is.
///
/// # Example
///
/// ```
/// use barking_mad::{FakeProvider, random_new_human};
///
/// let mut provider = FakeProvider::seeded(42);
/// let human = random_new_human(&mut provider);
///
/// assert!(!human.first_name().is_empty());
/// assert_eq!(
///     human.formal_name(),
///     format!("{} {}", human.title(), human.last_name())
/// );
/// ```
pub fn random_new_human<P>(provider: &mut P) -> Human
where
    P: FakeDataProvider + ?Sized,
{
    let first_name = provider.first_name();
    let last_name = provider.last_name();
    let title = provider.title();
    let country = provider.country();

    let human = Human::new(HumanOptions {
        first_name: Some(first_name),
        last_name: Some(last_name),
        title: Some(title),
        country: Some(country),
    });
    debug!(formal_name = human.formal_name(), "generated random human");
    human
}

/// Formats a random full name into the report sentence.
pub fn random_name_line<P>(provider: &mut P) -> String
where
    P: FakeDataProvider + ?Sized,
{
    format!("Random name: {}", provider.full_name())
}

/// Formats a random email address into the report sentence.
pub fn random_email_line<P>(provider: &mut P) -> String
where
    P: FakeDataProvider + ?Sized,
{
    format!("Random email: {}", provider.email())
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rstest::rstest;

    use super::*;
    use crate::provider::FakeProvider;

    /// Provider that replays a fixed queue of values regardless of kind.
    struct QueueProvider {
        values: VecDeque<String>,
    }

    impl QueueProvider {
        fn new(values: &[&str]) -> Self {
            Self {
                values: values.iter().map(|value| (*value).to_owned()).collect(),
            }
        }

        fn next(&mut self) -> String {
            self.values.pop_front().expect("queue should not be exhausted")
        }
    }

    impl FakeDataProvider for QueueProvider {
        fn first_name(&mut self) -> String {
            self.next()
        }

        fn last_name(&mut self) -> String {
            self.next()
        }

        fn title(&mut self) -> String {
            self.next()
        }

        fn country(&mut self) -> String {
            self.next()
        }

        fn full_name(&mut self) -> String {
            self.next()
        }

        fn email(&mut self) -> String {
            self.next()
        }
    }

    #[test]
    fn potato_is_constant() {
        for _ in 0..3 {
            assert_eq!(potato(), "potato!");
        }
    }

    #[test]
    fn wires_values_in_constructor_order() {
        let mut provider = QueueProvider::new(&["Ada", "Lovelace", "Countess", "UK"]);

        let human = random_new_human(&mut provider);

        assert_eq!(human.first_name(), "Ada");
        assert_eq!(human.last_name(), "Lovelace");
        assert_eq!(human.title(), "Countess");
        assert_eq!(human.country(), "UK");
        assert_eq!(human.formal_name(), "Countess Lovelace");
        assert!(provider.values.is_empty());
    }

    #[test]
    fn passes_empty_provider_values_through() {
        let mut provider = QueueProvider::new(&["", "", "", ""]);

        let human = random_new_human(&mut provider);

        assert_eq!(human.formal_name(), " ");
    }

    #[rstest]
    #[case(1)]
    #[case(2026)]
    fn random_humans_have_non_empty_fields(#[case] seed: u64) {
        let mut provider = FakeProvider::seeded(seed);

        for _ in 0..100 {
            let human = random_new_human(&mut provider);
            assert!(!human.first_name().is_empty());
            assert!(!human.last_name().is_empty());
            assert!(!human.title().is_empty());
            assert!(!human.country().is_empty());
        }
    }

    #[test]
    fn random_humans_are_reproducible_from_seed() {
        let mut first = FakeProvider::seeded(99);
        let mut second = FakeProvider::seeded(99);

        assert_eq!(random_new_human(&mut first), random_new_human(&mut second));
    }

    #[test]
    fn report_lines_wrap_provider_values() {
        let mut provider = QueueProvider::new(&["Grace Hopper", "grace@example.com"]);

        assert_eq!(random_name_line(&mut provider), "Random name: Grace Hopper");
        assert_eq!(
            random_email_line(&mut provider),
            "Random email: grace@example.com"
        );
    }
}
