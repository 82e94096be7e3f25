// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Compound property values shared by the entities.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::semantic::parse_mailbox;

/// Ordered list of custom `X-` properties.
///
/// Keys must start with `X-` (any case). Keys and values are rendered
/// verbatim in insertion order, so neither may contain a line break.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XProperties(Vec<(String, String)>);

impl XProperties {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a list from key/value pairs, validating every key.
    ///
    /// # Errors
    ///
    /// Returns an error if a key is not an `X-` name.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut x = Self::new();
        for (key, value) in pairs {
            x.push(key, value)?;
        }
        Ok(x)
    }

    /// Append a property.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is not an `X-` name, or if either part
    /// contains a line break.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let key = key.into();
        let value = value.into();
        validate_x_name(&key)?;
        reject_line_breaks("x", &value)?;
        self.0.push((key, value));
        Ok(())
    }

    /// Iterate over the properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy the pairs out, as stored in the structured representation.
    #[must_use]
    pub fn to_vec(&self) -> Vec<(String, String)> {
        self.0.clone()
    }
}

fn validate_x_name(key: &str) -> Result<()> {
    if !key.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("X-")) {
        return Err(Error::invalid(
            "x",
            format!("`{key}` is not a custom property name starting with `X-`"),
        ));
    }
    reject_line_breaks("x", key)
}

/// Reject values written to the output without escaping that contain CR or LF.
pub(crate) fn reject_line_breaks(field: &'static str, value: &str) -> Result<()> {
    if value.contains(['\r', '\n']) {
        return Err(Error::invalid(
            field,
            format!("{value:?} must not contain line breaks"),
        ));
    }
    Ok(())
}

/// Organizer of an event (RFC 5545 Section 3.8.4.3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organizer {
    /// Common name, written as `CN`
    pub name: String,

    /// E-mail address
    pub email: String,

    /// Address written after `mailto:` instead of `email`; `email` then goes
    /// into an `EMAIL` parameter
    #[serde(default)]
    pub mailto: Option<String>,

    /// Address of the user acting on behalf of the organizer
    #[serde(default)]
    pub sent_by: Option<String>,
}

impl Organizer {
    /// Create an organizer from a name and an e-mail address.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            mailto: None,
            sent_by: None,
        }
    }

    /// Check that name and e-mail are both present and that no address
    /// spans lines.
    ///
    /// # Errors
    ///
    /// Returns an error naming the bad field.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::missing("organizer", "name"));
        }
        if self.email.trim().is_empty() {
            return Err(Error::missing("organizer", "email"));
        }
        let addresses = [Some(&self.email), self.mailto.as_ref(), self.sent_by.as_ref()];
        for address in addresses.into_iter().flatten() {
            reject_line_breaks("organizer", address)?;
        }
        Ok(())
    }
}

impl FromStr for Organizer {
    type Err = Error;

    /// Parse `Name <email>`.
    fn from_str(s: &str) -> Result<Self> {
        let mailbox = parse_mailbox("organizer", s)?;
        Ok(Self::new(mailbox.name, mailbox.email))
    }
}

/// Geographic position (RFC 5545 Section 3.8.1.6).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    /// Latitude, -90 to 90
    pub lat: f64,
    /// Longitude, -180 to 180
    pub lon: f64,
}

impl Geo {
    /// Check that both coordinates are finite and in range.
    ///
    /// # Errors
    ///
    /// Returns an error describing the bad coordinate.
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(Error::invalid(
                "geo",
                format!("latitude `{}` is not between -90 and 90", self.lat),
            ));
        }
        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Err(Error::invalid(
                "geo",
                format!("longitude `{}` is not between -180 and 180", self.lon),
            ));
        }
        Ok(())
    }
}

/// Location of an event.
///
/// With `radius` and `geo` both set, the location is also written as an
/// Apple structured location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Name of the place
    pub title: String,

    /// Postal address, appended to the title on its own line
    #[serde(default)]
    pub address: Option<String>,

    /// Radius around `geo` in meters
    #[serde(default)]
    pub radius: Option<f64>,

    /// Coordinates, also written as `GEO`
    #[serde(default)]
    pub geo: Option<Geo>,
}

impl Location {
    /// Check title, radius and coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the title is empty, the radius is negative or not
    /// finite, or the coordinates are out of range.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(Error::missing("location", "title"));
        }
        if let Some(radius) = self.radius
            && (!radius.is_finite() || radius < 0.0)
        {
            return Err(Error::invalid(
                "location",
                format!("radius `{radius}` must be a finite non-negative number"),
            ));
        }
        if let Some(geo) = &self.geo {
            geo.validate()?;
        }
        Ok(())
    }
}

impl From<&str> for Location {
    fn from(title: &str) -> Self {
        Self::from(title.to_owned())
    }
}

impl From<String> for Location {
    fn from(title: String) -> Self {
        Self {
            title,
            address: None,
            radius: None,
            geo: None,
        }
    }
}

/// Description of an event, as plain text and optionally as HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    /// Plain text, written as `DESCRIPTION`
    pub plain: String,
    /// HTML, written as `X-ALT-DESC`
    #[serde(default)]
    pub html: Option<String>,
}

impl From<&str> for Description {
    fn from(plain: &str) -> Self {
        Self::from(plain.to_owned())
    }
}

impl From<String> for Description {
    fn from(plain: String) -> Self {
        Self { plain, html: None }
    }
}

/// Product identifier of a calendar, `//company//product//LANG`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductId {
    /// Vendor of the producing software
    pub company: String,
    /// Name of the producing software
    pub product: String,
    /// Language, one to four uppercase letters
    pub language: String,
}

impl ProductId {
    /// Create a product identifier, uppercasing the language.
    pub fn new(
        company: impl Into<String>,
        product: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            product: product.into(),
            language: language.into().to_ascii_uppercase(),
        }
    }

    /// Check that every part is present and the language is well formed.
    ///
    /// # Errors
    ///
    /// Returns an error describing the malformed part.
    pub fn validate(&self) -> Result<()> {
        if self.company.is_empty() {
            return Err(Error::missing("prodId", "company"));
        }
        if self.product.is_empty() {
            return Err(Error::missing("prodId", "product"));
        }
        reject_line_breaks("prodId", &self.company)?;
        reject_line_breaks("prodId", &self.product)?;
        let language_ok = (1..=4).contains(&self.language.len())
            && self.language.chars().all(|c| c.is_ascii_uppercase());
        if !language_ok {
            return Err(Error::invalid(
                "prodId",
                format!(
                    "language `{}` must be one to four uppercase letters",
                    self.language
                ),
            ));
        }
        Ok(())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new("yzx9.xyz", "icsgen", "EN")
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "//{}//{}//{}", self.company, self.product, self.language)
    }
}

impl FromStr for ProductId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || {
            Error::invalid(
                "prodId",
                format!("`{s}` does not match `//company//product//LANG`"),
            )
        };
        let rest = s.strip_prefix("//").ok_or_else(malformed)?;
        let (rest, language) = rest.rsplit_once("//").ok_or_else(malformed)?;
        let (company, product) = rest.split_once("//").ok_or_else(malformed)?;

        let prod_id = Self {
            company: company.to_owned(),
            product: product.to_owned(),
            language: language.to_owned(),
        };
        prod_id.validate().map_err(|_| malformed())?;
        Ok(prod_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_properties_keep_insertion_order() {
        let x = XProperties::from_pairs([("X-FOO", "1"), ("x-bar", "2"), ("X-FOO", "3")]).unwrap();
        let pairs: Vec<_> = x.iter().collect();
        assert_eq!(pairs, [("X-FOO", "1"), ("x-bar", "2"), ("X-FOO", "3")]);
    }

    #[test]
    fn x_properties_reject_other_names() {
        let mut x = XProperties::new();
        for key in ["FOO", "", "Y-FOO", "X-FOO\r\nMETHOD"] {
            let err = x.push(key, "value").unwrap_err();
            assert!(err.to_string().contains("`x`"), "key = {key:?}");
        }
        assert!(x.push("X-FOO", "a\nMETHOD:CANCEL").is_err());
        assert!(x.is_empty());

        x.push("X-APPLE-STRUCTURED-LOCATION;VALUE=URI", "geo:1,2")
            .unwrap();
        assert_eq!(x.len(), 1);
    }

    #[test]
    fn parses_organizer_mailbox() {
        let organizer: Organizer = "Jane Doe <mail@example.com>".parse().unwrap();
        assert_eq!(organizer, Organizer::new("Jane Doe", "mail@example.com"));
        assert!("mail@example.com".parse::<Organizer>().is_err());

        let mut organizer = Organizer::new("Jane Doe", "mail@example.com");
        organizer.sent_by = Some("boss@example.com\nMETHOD:CANCEL".to_owned());
        assert!(organizer.validate().is_err());
    }

    #[test]
    fn validates_location() {
        let mut location = Location::from("Office");
        location.radius = Some(40.0);
        location.geo = Some(Geo {
            lat: 52.503_630,
            lon: 13.340_190,
        });
        location.validate().unwrap();

        location.geo = Some(Geo {
            lat: 91.0,
            lon: 0.0,
        });
        assert!(location.validate().is_err());

        location.geo = None;
        location.radius = Some(f64::NAN);
        assert!(location.validate().is_err());

        let err = Location::from("").validate().unwrap_err();
        assert!(err.to_string().contains("`title`"));
    }

    #[test]
    fn parses_product_id() {
        let prod_id: ProductId = "//acme.example//planner//EN".parse().unwrap();
        assert_eq!(prod_id.company, "acme.example");
        assert_eq!(prod_id.product, "planner");
        assert_eq!(prod_id.language, "EN");
        assert_eq!(prod_id.to_string(), "//acme.example//planner//EN");

        #[rustfmt::skip]
        let bad = [
            "acme.example//planner//EN",
            "//acme.example//EN",
            "//acme.example//planner//english",
            "//acme.example//planner//en",
            "////planner//EN",
            "//acme.example\r\nMETHOD:CANCEL//planner//EN",
        ];
        for src in bad {
            assert!(src.parse::<ProductId>().is_err(), "src = {src:?}");
        }
    }

    #[test]
    fn product_id_from_parts_uppercases_language() {
        let prod_id = ProductId::new("acme", "planner", "de");
        assert_eq!(prod_id.to_string(), "//acme//planner//DE");
        prod_id.validate().unwrap();
    }
}
