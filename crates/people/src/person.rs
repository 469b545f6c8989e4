use core::str::FromStr;

use serde::{Deserialize, Serialize};

use identikit_core::{DomainError, Identifiable};

/// National identity number, the person's identifier.
///
/// Any integer is accepted, negatives included.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NationalId(pub i64);

impl NationalId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for NationalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for NationalId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<NationalId> for i64 {
    fn from(value: NationalId) -> Self {
        value.0
    }
}

impl FromStr for NationalId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = i64::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("NationalId: {e}")))?;
        Ok(Self(id))
    }
}

/// Entity: a person, identified by their national ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    last_name: String,
    national_id: NationalId,
    first_name: String,
}

impl Person {
    /// Create a person. Accepts any values as-is.
    pub fn new(
        last_name: impl Into<String>,
        national_id: NationalId,
        first_name: impl Into<String>,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            national_id,
            first_name: first_name.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn national_id(&self) -> NationalId {
        self.national_id
    }

    /// Full name: first name and last name separated by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Identifiable for Person {
    type Id = NationalId;

    fn id(&self) -> &Self::Id {
        &self.national_id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.national_id = id;
    }
}

impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Person {{ last_name: {}, national_id: {}, first_name: {} }}",
            self.last_name, self.national_id, self.first_name
        )
    }
}
