//! Filtering and pagination inputs for user listings.

use super::UserDomainError;
use std::collections::BTreeMap;
use std::fmt;

/// Transport key carrying the page number.
pub const PAGE_KEY: &str = "page";

/// Transport key carrying the page size.
pub const PAGE_SIZE_KEY: &str = "pageSize";

/// User columns that may be matched by equality filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserFilterField {
    /// Store-assigned identifier.
    Id,
    /// Passport number string.
    PassportNumber,
    /// Surname.
    Surname,
    /// Given name.
    Name,
    /// Patronymic.
    Patronymic,
    /// Postal address.
    Address,
}

impl UserFilterField {
    /// Every filterable field.
    pub const ALL: [Self; 6] = [
        Self::Id,
        Self::PassportNumber,
        Self::Surname,
        Self::Name,
        Self::Patronymic,
        Self::Address,
    ];

    /// Returns the column name used as the filter key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::PassportNumber => "passport_number",
            Self::Surname => "surname",
            Self::Name => "name",
            Self::Patronymic => "patronymic",
            Self::Address => "address",
        }
    }
}

impl TryFrom<&str> for UserFilterField {
    type Error = UserDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == value)
            .ok_or_else(|| UserDomainError::UnknownFilterField(value.to_owned()))
    }
}

impl fmt::Display for UserFilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-name to exact-value mapping applied as equality predicates.
///
/// Keys are not validated here; the store decides what an unknown key means.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilters(BTreeMap<String, String>);

impl UserFilters {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a filter.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Removes the pagination-control keys, which are transport concerns.
    #[must_use]
    pub fn without_pagination_keys(mut self) -> Self {
        self.0.remove(PAGE_KEY);
        self.0.remove(PAGE_SIZE_KEY);
        self
    }

    /// Returns the filter value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Returns the number of filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no filter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for UserFilters {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    page_size: u32,
}

impl Pagination {
    /// Creates a page selection.
    ///
    /// A page of zero selects the same rows as page one.
    #[must_use]
    pub const fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Returns the one-based page number.
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(self) -> u32 {
        self.page_size
    }

    /// Rows skipped before the page: `(page - 1) * page_size`.
    #[must_use]
    pub fn offset(self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Maximum rows returned.
    #[must_use]
    pub fn limit(self) -> u64 {
        u64::from(self.page_size)
    }
}
