//! Jeep catalogue data model.
//!
//! [`Jeep`] records are read-only: the catalogue store is seeded ahead of
//! time and the service never mutates it. [`JeepQuery`] is the validated
//! form of a lookup request and is the only way to reach the catalogue.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Maximum number of characters accepted for a trim level.
pub const TRIM_MAX_LENGTH: usize = 30;

/// Validation failures raised while building catalogue values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JeepValidationError {
    /// No model was supplied.
    #[error("model is required")]
    MissingModel,
    /// The model is not one of the catalogue models.
    #[error("model '{value}' is not a known Jeep model")]
    UnknownModel {
        /// Rejected input.
        value: String,
    },
    /// No trim was supplied.
    #[error("trim is required")]
    MissingTrim,
    /// The trim was empty.
    #[error("trim must not be empty")]
    EmptyTrim,
    /// The trim exceeded [`TRIM_MAX_LENGTH`].
    #[error("trim must be at most {max} characters")]
    TrimTooLong {
        /// Permitted maximum.
        max: usize,
    },
    /// The trim contained something other than letters, digits or spaces.
    #[error("trim may only contain letters, numbers, or spaces")]
    TrimInvalidCharacters,
    /// Door count was not positive.
    #[error("number of doors must be positive, got {value}")]
    InvalidDoorCount {
        /// Rejected input.
        value: i32,
    },
    /// Wheel size was not positive.
    #[error("wheel size must be positive, got {value}")]
    InvalidWheelSize {
        /// Rejected input.
        value: i32,
    },
    /// Base price was negative.
    #[error("base price must not be negative")]
    NegativeBasePrice,
}

/// Jeep model line.
///
/// Wire and storage names are the upper snake case identifiers returned by
/// [`JeepModel::as_str`]; parsing is exact.
///
/// # Examples
/// ```
/// use jeep_sales::domain::JeepModel;
///
/// let model: JeepModel = "GRAND_CHEROKEE".parse().unwrap();
/// assert_eq!(model, JeepModel::GrandCherokee);
/// assert!("wrangler".parse::<JeepModel>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum JeepModel {
    Renegade,
    Compass,
    Cherokee,
    GrandCherokee,
    Wrangler,
    Wrangler4xe,
    Gladiator,
    Wagoneer,
    GrandWagoneer,
}

impl JeepModel {
    /// Every catalogue model, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Renegade,
        Self::Compass,
        Self::Cherokee,
        Self::GrandCherokee,
        Self::Wrangler,
        Self::Wrangler4xe,
        Self::Gladiator,
        Self::Wagoneer,
        Self::GrandWagoneer,
    ];

    /// Stable identifier used on the wire and in storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Renegade => "RENEGADE",
            Self::Compass => "COMPASS",
            Self::Cherokee => "CHEROKEE",
            Self::GrandCherokee => "GRAND_CHEROKEE",
            Self::Wrangler => "WRANGLER",
            Self::Wrangler4xe => "WRANGLER_4XE",
            Self::Gladiator => "GLADIATOR",
            Self::Wagoneer => "WAGONEER",
            Self::GrandWagoneer => "GRAND_WAGONEER",
        }
    }
}

impl fmt::Display for JeepModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JeepModel {
    type Err = JeepValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| JeepValidationError::UnknownModel {
                value: s.to_owned(),
            })
    }
}

impl TryFrom<String> for JeepModel {
    type Error = JeepValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<JeepModel> for &'static str {
    fn from(value: JeepModel) -> Self {
        value.as_str()
    }
}

/// Named configuration variant of a model, e.g. `Sport` or `Rubicon`.
///
/// ## Invariants
/// - 1 to [`TRIM_MAX_LENGTH`] characters.
/// - ASCII letters, digits and spaces only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrimLevel(String);

impl TrimLevel {
    /// Validate and construct a [`TrimLevel`].
    pub fn new(trim: impl Into<String>) -> Result<Self, JeepValidationError> {
        Self::from_owned(trim.into())
    }

    fn from_owned(trim: String) -> Result<Self, JeepValidationError> {
        if trim.is_empty() {
            return Err(JeepValidationError::EmptyTrim);
        }
        // Length is measured in characters, not bytes.
        if trim.chars().count() > TRIM_MAX_LENGTH {
            return Err(JeepValidationError::TrimTooLong {
                max: TRIM_MAX_LENGTH,
            });
        }
        if !trim.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ') {
            return Err(JeepValidationError::TrimInvalidCharacters);
        }
        Ok(Self(trim))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for TrimLevel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TrimLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TrimLevel> for String {
    fn from(value: TrimLevel) -> Self {
        value.0
    }
}

impl TryFrom<String> for TrimLevel {
    type Error = JeepValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Field values for constructing a [`Jeep`].
#[derive(Debug, Clone)]
pub struct JeepDraft {
    pub model: JeepModel,
    pub trim_level: String,
    pub num_doors: i32,
    pub wheel_size: i32,
    pub base_price: Decimal,
}

/// A catalogue entry: one model, trim and door configuration with its price.
///
/// Serialises as
/// `{"model", "trimLevel", "numDoors", "wheelSize", "basePrice"}` with
/// `basePrice` as a JSON number.
///
/// # Examples
/// ```
/// use jeep_sales::domain::{Jeep, JeepDraft, JeepModel};
/// use rust_decimal::Decimal;
///
/// let jeep = Jeep::new(JeepDraft {
///     model: JeepModel::Wrangler,
///     trim_level: "Sport".to_owned(),
///     num_doors: 2,
///     wheel_size: 17,
///     base_price: Decimal::new(2_847_500, 2),
/// })
/// .unwrap();
/// assert_eq!(jeep.trim_level().as_str(), "Sport");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "JeepDto", into = "JeepDto")]
pub struct Jeep {
    model: JeepModel,
    trim_level: TrimLevel,
    num_doors: i32,
    wheel_size: i32,
    base_price: Decimal,
}

impl Jeep {
    /// Validate a draft and build the record.
    pub fn new(draft: JeepDraft) -> Result<Self, JeepValidationError> {
        let JeepDraft {
            model,
            trim_level,
            num_doors,
            wheel_size,
            base_price,
        } = draft;
        if num_doors <= 0 {
            return Err(JeepValidationError::InvalidDoorCount { value: num_doors });
        }
        if wheel_size <= 0 {
            return Err(JeepValidationError::InvalidWheelSize { value: wheel_size });
        }
        if base_price < Decimal::ZERO {
            return Err(JeepValidationError::NegativeBasePrice);
        }
        Ok(Self {
            model,
            trim_level: TrimLevel::new(trim_level)?,
            num_doors,
            wheel_size,
            base_price,
        })
    }

    pub fn model(&self) -> JeepModel {
        self.model
    }

    pub fn trim_level(&self) -> &TrimLevel {
        &self.trim_level
    }

    pub fn num_doors(&self) -> i32 {
        self.num_doors
    }

    /// Wheel diameter in inches.
    pub fn wheel_size(&self) -> i32 {
        self.wheel_size
    }

    /// Manufacturer's base price in US dollars.
    pub fn base_price(&self) -> Decimal {
        self.base_price
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct JeepDto {
    model: JeepModel,
    trim_level: String,
    num_doors: i32,
    wheel_size: i32,
    #[serde(with = "rust_decimal::serde::float")]
    base_price: Decimal,
}

impl From<Jeep> for JeepDto {
    fn from(value: Jeep) -> Self {
        Self {
            model: value.model,
            trim_level: value.trim_level.into(),
            num_doors: value.num_doors,
            wheel_size: value.wheel_size,
            base_price: value.base_price,
        }
    }
}

impl TryFrom<JeepDto> for Jeep {
    type Error = JeepValidationError;

    fn try_from(value: JeepDto) -> Result<Self, Self::Error> {
        Self::new(JeepDraft {
            model: value.model,
            trim_level: value.trim_level,
            num_doors: value.num_doors,
            wheel_size: value.wheel_size,
            base_price: value.base_price,
        })
    }
}

/// Validated catalogue lookup: one model and one trim level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JeepQuery {
    model: JeepModel,
    trim: TrimLevel,
}

impl JeepQuery {
    /// Validate raw request input.
    ///
    /// The model is checked before the trim, so a request with both wrong
    /// reports the model.
    ///
    /// # Examples
    /// ```
    /// use jeep_sales::domain::{JeepModel, JeepQuery, JeepValidationError};
    ///
    /// let query = JeepQuery::new(Some("WRANGLER"), Some("Sport")).unwrap();
    /// assert_eq!(query.model(), JeepModel::Wrangler);
    ///
    /// let err = JeepQuery::new(Some("WRANGLER"), Some("$%#$#@")).unwrap_err();
    /// assert_eq!(err, JeepValidationError::TrimInvalidCharacters);
    /// ```
    pub fn new(model: Option<&str>, trim: Option<&str>) -> Result<Self, JeepValidationError> {
        let model = model
            .ok_or(JeepValidationError::MissingModel)?
            .parse::<JeepModel>()?;
        let trim = TrimLevel::new(trim.ok_or(JeepValidationError::MissingTrim)?)?;
        Ok(Self { model, trim })
    }

    pub fn model(&self) -> JeepModel {
        self.model
    }

    pub fn trim(&self) -> &TrimLevel {
        &self.trim
    }
}
