use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use wayfarer_core::ClientError;

/// Destination categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Places to stay.
    Accommodation,
    /// Places to eat.
    Restaurant,
    /// Activities and sights.
    Enjoyment,
    /// Everything else.
    Etc,
}

impl Category {
    /// Returns the stable numeric id for this category.
    #[must_use]
    pub fn id(self) -> u8 {
        match self {
            Self::Accommodation => 1,
            Self::Restaurant => 2,
            Self::Enjoyment => 3,
            Self::Etc => 4,
        }
    }

    /// Returns the wire token for this category.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accommodation => "ACCOMMODATION",
            Self::Restaurant => "RESTAURANT",
            Self::Enjoyment => "ENJOYMENT",
            Self::Etc => "ETC",
        }
    }

    /// Returns the display label for this category.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Accommodation => "Accommodation",
            Self::Restaurant => "Restaurant",
            Self::Enjoyment => "Attractions",
            Self::Etc => "Others",
        }
    }

    /// Returns the display color hint used for category tags.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Self::Accommodation => "red",
            Self::Restaurant => "green",
            Self::Enjoyment => "purple",
            Self::Etc => "blue",
        }
    }

    /// Returns all known categories in id order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Category] = &[
            Category::Accommodation,
            Category::Restaurant,
            Category::Enjoyment,
            Category::Etc,
        ];

        ALL
    }
}

impl fmt::Display for Category {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ClientError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ACCOMMODATION" => Ok(Self::Accommodation),
            "RESTAURANT" => Ok(Self::Restaurant),
            "ENJOYMENT" => Ok(Self::Enjoyment),
            "ETC" => Ok(Self::Etc),
            _ => Err(ClientError::Validation(format!(
                "unknown category value '{value}'"
            ))),
        }
    }
}
