//! User profile models and filter types.
//!
//! Profiles carry no status field. The `userType` filter is accepted and
//! validated but does not narrow the result.

use std::{fmt, str::FromStr};

use serde::Serialize;

/// A user profile as served by `GET /api/users`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    /// Unique within the dataset
    pub id: u32,
    pub name: &'static str,
    pub username: &'static str,
    pub email: &'static str,
    pub address: Address,
    pub phone: &'static str,
    pub website: &'static str,
    pub company: Company,
}

/// Postal address of a user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    pub street: &'static str,
    pub suite: &'static str,
    pub city: &'static str,
    pub zipcode: &'static str,
    pub geo: Geo,
}

/// Coordinates are kept as strings, exactly as published.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geo {
    pub lat: &'static str,
    pub lng: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: &'static str,
    pub catch_phrase: &'static str,
    pub bs: &'static str,
}

/// Accepted values of the `userType` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserType {
    Active,
    Inactive,
}

impl UserType {
    pub const ALL: [UserType; 2] = [UserType::Active, UserType::Inactive];

    pub fn as_str(self) -> &'static str {
        match self {
            UserType::Active => "ACTIVE",
            UserType::Inactive => "INACTIVE",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown user type: {0}")]
pub struct UnknownUserType(pub String);

impl FromStr for UserType {
    type Err = UnknownUserType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownUserType(s.to_string()))
    }
}
