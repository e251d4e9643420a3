//! The `Human` value object and its construction options.
//!
//! A [`Human`] is built once from [`HumanOptions`] and never mutated. The
//! formal name is derived at construction time from the title and last name
//! and is not independently settable.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Named, optional fields used to construct a [`Human`].
///
/// Absent fields become empty strings on construction. No field is
/// validated.
///
/// # Example
///
/// ```
/// use barking_mad::{Human, HumanOptions};
///
/// let options = HumanOptions::default()
///     .with_title("Dr")
///     .with_last_name("Smith");
/// let human = Human::new(options);
///
/// assert_eq!(human.formal_name(), "Dr Smith");
/// assert_eq!(human.first_name(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanOptions {
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Honorific, for example `Dr` or `Mrs.`.
    pub title: Option<String>,
    /// Country name.
    pub country: Option<String>,
}

impl HumanOptions {
    /// Sets the first name.
    #[must_use]
    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    /// Sets the last name.
    #[must_use]
    pub fn with_last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }

    /// Sets the country.
    #[must_use]
    pub fn with_country(mut self, value: impl Into<String>) -> Self {
        self.country = Some(value.into());
        self
    }
}

/// A person's display identity.
///
/// Serializes with camelCase keys including the derived `formalName`.
/// Deserialization goes through [`HumanOptions`], so a supplied
/// `formalName` is ignored and recomputed.
///
/// # Example
///
/// ```
/// use barking_mad::{Human, HumanOptions};
///
/// let ada = Human::new(
///     HumanOptions::default()
///         .with_first_name("Ada")
///         .with_last_name("Lovelace")
///         .with_title("Countess")
///         .with_country("UK"),
/// );
///
/// assert_eq!(ada.formal_name(), "Countess Lovelace");
/// assert_eq!(ada.greet(None), "Hi, my name is Countess Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "HumanOptions")]
pub struct Human {
    first_name: String,
    last_name: String,
    title: String,
    country: String,
    formal_name: String,
}

impl Human {
    /// Builds a human from the supplied options.
    ///
    /// The formal name is the title and last name joined by a single space.
    /// Empty parts are kept as-is, so a human with neither title nor last
    /// name has a formal name of `" "`.
    #[must_use]
    pub fn new(options: HumanOptions) -> Self {
        let HumanOptions {
            first_name,
            last_name,
            title,
            country,
        } = options;
        let resolved_last_name = last_name.unwrap_or_default();
        let resolved_title = title.unwrap_or_default();
        let formal_name = format!("{resolved_title} {resolved_last_name}");

        Self {
            first_name: first_name.unwrap_or_default(),
            last_name: resolved_last_name,
            title: resolved_title,
            country: country.unwrap_or_default(),
            formal_name,
        }
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the country.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Returns the formal name computed at construction.
    #[must_use]
    pub fn formal_name(&self) -> &str {
        &self.formal_name
    }

    /// Formats a greeting, addressing `other` by first name when supplied.
    ///
    /// # Example
    ///
    /// ```
    /// use barking_mad::{Human, HumanOptions};
    ///
    /// let bob = Human::new(HumanOptions::default().with_first_name("Bob"));
    /// let lee = Human::new(HumanOptions::default().with_title("Dr").with_last_name("Lee"));
    ///
    /// assert_eq!(lee.greet(Some(&bob)), "Hi Bob, my name is Dr Lee");
    /// ```
    #[must_use]
    pub fn greet(&self, other: Option<&Self>) -> String {
        other.map_or_else(
            || format!("Hi, my name is {}", self.formal_name),
            |other_human| {
                format!(
                    "Hi {}, my name is {}",
                    other_human.first_name, self.formal_name
                )
            },
        )
    }
}

impl From<HumanOptions> for Human {
    fn from(options: HumanOptions) -> Self {
        Self::new(options)
    }
}

impl fmt::Display for Human {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formal_name)
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn ada() -> Human {
        Human::new(
            HumanOptions::default()
                .with_first_name("Ada")
                .with_last_name("Lovelace")
                .with_title("Countess")
                .with_country("UK"),
        )
    }

    #[rstest]
    fn exposes_supplied_fields_unchanged(ada: Human) {
        assert_eq!(ada.first_name(), "Ada");
        assert_eq!(ada.last_name(), "Lovelace");
        assert_eq!(ada.title(), "Countess");
        assert_eq!(ada.country(), "UK");
        assert_eq!(ada.formal_name(), "Countess Lovelace");
    }

    #[rstest]
    #[case("Dr", "Smith", "Dr Smith")]
    #[case("Mrs.", "O'Brien", "Mrs. O'Brien")]
    #[case("", "Smith", " Smith")]
    #[case("Dr", "", "Dr ")]
    #[case("", "", " ")]
    #[case("  Sir", "Lancelot  ", "  Sir Lancelot  ")]
    fn formal_name_joins_title_and_last_name(
        #[case] title: &str,
        #[case] last_name: &str,
        #[case] expected: &str,
    ) {
        let human = Human::new(
            HumanOptions::default()
                .with_title(title)
                .with_last_name(last_name),
        );

        assert_eq!(human.formal_name(), expected);
    }

    #[test]
    fn absent_options_become_empty_fields() {
        let human = Human::new(HumanOptions::default());

        assert_eq!(human.first_name(), "");
        assert_eq!(human.last_name(), "");
        assert_eq!(human.title(), "");
        assert_eq!(human.country(), "");
        assert_eq!(human.formal_name(), " ");
        assert_eq!(human.greet(None), "Hi, my name is  ");
    }

    #[rstest]
    fn greets_without_other_human(ada: Human) {
        assert_eq!(ada.greet(None), "Hi, my name is Countess Lovelace");
    }

    #[rstest]
    fn greets_other_human_by_first_name(ada: Human) {
        let bob = Human::new(HumanOptions::default().with_first_name("Bob"));

        assert_eq!(
            ada.greet(Some(&bob)),
            "Hi Bob, my name is Countess Lovelace"
        );
    }

    #[rstest]
    fn greeting_self_uses_own_first_name(ada: Human) {
        assert_eq!(
            ada.greet(Some(&ada)),
            "Hi Ada, my name is Countess Lovelace"
        );
    }

    #[rstest]
    fn display_renders_formal_name(ada: Human) {
        assert_eq!(ada.to_string(), "Countess Lovelace");
    }

    #[rstest]
    fn serializes_to_camel_case(ada: Human) {
        let json = serde_json::to_value(&ada).expect("serialize");

        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["title"], "Countess");
        assert_eq!(json["country"], "UK");
        assert_eq!(json["formalName"], "Countess Lovelace");
    }

    #[test]
    fn deserialization_recomputes_formal_name() {
        let json = r#"{
            "firstName": "Grace",
            "lastName": "Hopper",
            "title": "Rear Admiral",
            "formalName": "Someone Else"
        }"#;

        let human: Human = serde_json::from_str(json).expect("deserialize");

        assert_eq!(human.formal_name(), "Rear Admiral Hopper");
        assert_eq!(human.country(), "");
    }
}
