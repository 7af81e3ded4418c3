//! Query allow-lists for the dynamic parts of catalog SQL
//!
//! Caller-supplied field and order names never reach SQL text directly;
//! they resolve through these closed enumerations first, and every filter
//! value is parameter-bound.

use std::str::FromStr;

use shopfront_core::errors::CatalogError;

/// Mutable columns reachable through `update`
///
/// The surrogate key is not a member, so it cannot be targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateField {
    Name,
    Address,
    Category,
    ImagePath,
    Contact,
}

impl UpdateField {
    /// Column name in the stores table
    pub fn column(&self) -> &'static str {
        match self {
            UpdateField::Name => "name",
            UpdateField::Address => "address",
            UpdateField::Category => "category",
            UpdateField::ImagePath => "image_path",
            UpdateField::Contact => "contact",
        }
    }
}

impl FromStr for UpdateField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(UpdateField::Name),
            "address" => Ok(UpdateField::Address),
            "category" => Ok(UpdateField::Category),
            "image_path" => Ok(UpdateField::ImagePath),
            "contact" => Ok(UpdateField::Contact),
            other => Err(CatalogError::InvalidField {
                field: other.to_string(),
            }),
        }
    }
}

/// Columns the substring filter may target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterColumn {
    Name,
    Address,
    Category,
    Contact,
}

impl FilterColumn {
    /// Column name in the stores table
    pub fn column(&self) -> &'static str {
        match self {
            FilterColumn::Name => "name",
            FilterColumn::Address => "address",
            FilterColumn::Category => "category",
            FilterColumn::Contact => "contact",
        }
    }
}

impl FromStr for FilterColumn {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FilterColumn::Name),
            "address" => Ok(FilterColumn::Address),
            "category" => Ok(FilterColumn::Category),
            "contact" => Ok(FilterColumn::Contact),
            other => Err(CatalogError::InvalidField {
                field: other.to_string(),
            }),
        }
    }
}

/// Result ordering for filtered reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
    Random,
}

impl SortOrder {
    /// ORDER BY fragment; ascending and descending order by id
    pub fn order_by(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "id ASC",
            SortOrder::Descending => "id DESC",
            SortOrder::Random => "RANDOM()",
        }
    }
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Ascending)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Descending)
        } else if s.eq_ignore_ascii_case("random") {
            Ok(SortOrder::Random)
        } else {
            Err(CatalogError::InvalidOrder {
                order: s.to_string(),
            })
        }
    }
}
