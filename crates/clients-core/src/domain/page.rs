//! Paging and sorting primitives shared by the repository port and the API.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u64 = 12;

/// Field clients are ordered by when the caller does not ask for one.
pub const DEFAULT_SORT_FIELD: SortField = SortField::Name;

/// Client attributes a page can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    Name,
    Cpf,
    Income,
    BirthDate,
    Children,
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "name" => Ok(SortField::Name),
            "cpf" => Ok(SortField::Cpf),
            "income" => Ok(SortField::Income),
            "birthDate" | "birth_date" => Ok(SortField::BirthDate),
            "children" => Ok(SortField::Children),
            other => Err(DomainError::Validation(format!(
                "Unknown sort field: {other}"
            ))),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    #[serde(alias = "asc")]
    Asc,
    #[serde(alias = "desc")]
    Desc,
}

impl FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Direction::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Direction::Desc)
        } else {
            Err(DomainError::Validation(format!("Unknown direction: {s}")))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: SortField,
    pub direction: Direction,
}

impl Sort {
    pub fn new(field: SortField, direction: Direction) -> Self {
        Self { field, direction }
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self::new(DEFAULT_SORT_FIELD, Direction::Asc)
    }
}

/// A request for one zero-based page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    size: u64,
    sort: Sort,
}

impl PageRequest {
    /// Build a page request. `size` must be positive and the last row the
    /// page can cover must fit a signed 64-bit SQL offset.
    pub fn new(page: u64, size: u64, sort: Sort) -> DomainResult<Self> {
        if size == 0 {
            return Err(DomainError::Validation(
                "Page size must be greater than zero".to_string(),
            ));
        }
        let in_range = page
            .checked_mul(size)
            .and_then(|offset| offset.checked_add(size))
            .is_some_and(|end| end <= i64::MAX as u64);
        if !in_range {
            return Err(DomainError::Validation("Page is out of range".to_string()));
        }
        Ok(Self { page, size, sort })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn sort(&self) -> Sort {
        self.sort
    }

    /// Number of elements preceding this page.
    pub fn offset(&self) -> u64 {
        self.page * self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Sort::default(),
        }
    }
}

/// One page of results plus the metadata needed to walk the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    /// Zero-based page number.
    pub number: u64,
    pub size: u64,
    pub number_of_elements: u64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
    pub sort: Sort,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let size = request.size();
        let total_pages = total_elements.div_ceil(size);
        let number = request.page();

        Self {
            number_of_elements: content.len() as u64,
            empty: content.is_empty(),
            first: number == 0,
            last: number.saturating_add(1) >= total_pages,
            content,
            total_elements,
            total_pages,
            number,
            size,
            sort: request.sort(),
        }
    }

    /// Wrap an already complete result set as a single page.
    pub fn of(content: Vec<T>) -> Self {
        let total = content.len() as u64;
        let request = PageRequest {
            size: total.max(1),
            ..PageRequest::default()
        };
        Self::new(content, &request, total)
    }

    /// Convert every element, keeping the paging metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
            empty: self.empty,
            sort: self.sort,
        }
    }
}
