use serde::{Deserialize, Serialize};
use std::fmt;

/// Every field the wizard collects, across both data bags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Username,
    Password,
    PasswordConfirmation,
    ParticipationType,
    CompanyName,
    AddressLine,
    City,
    Region,
    Country,
    YearEstablished,
    Website,
    Brochure,
    BrochurePath,
}

impl Field {
    pub const ALL: [Field; 16] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Username,
        Field::Password,
        Field::PasswordConfirmation,
        Field::ParticipationType,
        Field::CompanyName,
        Field::AddressLine,
        Field::City,
        Field::Region,
        Field::Country,
        Field::YearEstablished,
        Field::Website,
        Field::Brochure,
        Field::BrochurePath,
    ];

    /// Wizard-side (camelCase) name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Username => "username",
            Self::Password => "password",
            Self::PasswordConfirmation => "passwordConfirmation",
            Self::ParticipationType => "participationType",
            Self::CompanyName => "companyName",
            Self::AddressLine => "addressLine",
            Self::City => "city",
            Self::Region => "region",
            Self::Country => "country",
            Self::YearEstablished => "yearEstablished",
            Self::Website => "website",
            Self::Brochure => "brochure",
            Self::BrochurePath => "brochurePath",
        }
    }

    /// Backend-side (snake_case) name of the field
    pub fn snake_case(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Username => "username",
            Self::Password => "password",
            Self::PasswordConfirmation => "password_confirmation",
            Self::ParticipationType => "participation_type",
            Self::CompanyName => "company_name",
            Self::AddressLine => "address_line",
            Self::City => "city",
            Self::Region => "region",
            Self::Country => "country",
            Self::YearEstablished => "year_established",
            Self::Website => "website",
            Self::Brochure => "brochure",
            Self::BrochurePath => "brochure_path",
        }
    }

    /// Content step (1 = account, 2 = company) that owns this field
    pub fn step(&self) -> u8 {
        match self {
            Self::FirstName
            | Self::LastName
            | Self::Email
            | Self::Username
            | Self::Password
            | Self::PasswordConfirmation
            | Self::ParticipationType => 1,
            _ => 2,
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s || field.snake_case() == s)
            .ok_or_else(|| format!("Unknown registration field: {s}"))
    }
}
