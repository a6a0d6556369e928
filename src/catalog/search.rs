//! Search filters, sorting and pagination.
//!
//! # Design Decisions
//! - Every filter is optional; present filters combine with AND semantics
//! - Text matching is a case-insensitive substring test, no ranking
//! - Sorting is stable, so ties keep dataset order
//! - Out-of-range pages are empty, never an error

use serde::Serialize;
use std::cmp::Ordering;
use std::str::FromStr;

use crate::catalog::model::{Category, Region, University};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// A category or region picked by the client. Values naming no known
/// variant still filter, and match nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<T> {
    Known(T),
    Unknown(String),
}

impl<T: FromStr> Selection<T> {
    pub fn parse(raw: &str) -> Self {
        raw.parse()
            .map(Selection::Known)
            .unwrap_or_else(|_| Selection::Unknown(raw.to_string()))
    }
}

impl<T: PartialEq> Selection<T> {
    fn admits(&self, value: &T) -> bool {
        matches!(self, Selection::Known(selected) if selected == value)
    }
}

impl<T> From<T> for Selection<T> {
    fn from(value: T) -> Self {
        Selection::Known(value)
    }
}

/// Composite search filter. `None` means "do not filter on this field".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    pub category: Option<Selection<Category>>,
    pub region: Option<Selection<Region>>,
    /// Exclude universities whose maximum fee exceeds this ceiling.
    pub max_fees: Option<i64>,
    /// Exclude universities whose minimum admission grade exceeds this ceiling.
    pub max_grade: Option<i64>,
    /// Matched as given; only the empty string disables text matching.
    pub query: Option<String>,
}

impl SearchFilter {
    /// Returns true if the university satisfies every present predicate.
    pub fn matches(&self, uni: &University) -> bool {
        if self.category.as_ref().is_some_and(|c| !c.admits(&uni.category)) {
            return false;
        }
        if self.region.as_ref().is_some_and(|r| !r.admits(&uni.region)) {
            return false;
        }
        if self
            .max_fees
            .is_some_and(|ceiling| i64::try_from(uni.fees.max).map_or(true, |max| max > ceiling))
        {
            return false;
        }
        if self
            .max_grade
            .is_some_and(|ceiling| i64::from(uni.min_grade) > ceiling)
        {
            return false;
        }
        match self.normalized_query() {
            Some(query) => matches_text(uni, &query),
            None => true,
        }
    }

    /// Lowercased query, or `None` when empty.
    fn normalized_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}

fn matches_text(uni: &University, query: &str) -> bool {
    [
        &uni.name,
        &uni.name_en,
        &uni.location,
        &uni.location_en,
        &uni.description,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query))
}

/// Field to order search results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Rating,
    /// Fee range midpoint.
    Fees,
    /// English name.
    Name,
    Established,
    Students,
    MinGrade,
    /// English location.
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(SortKey::Rating),
            "fees" => Ok(SortKey::Fees),
            "name" => Ok(SortKey::Name),
            "established" => Ok(SortKey::Established),
            "studentsCount" | "students" => Ok(SortKey::Students),
            "minGrade" => Ok(SortKey::MinGrade),
            "location" => Ok(SortKey::Location),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Sort {
    fn compare(&self, a: &University, b: &University) -> Ordering {
        let ordering = match self.key {
            SortKey::Rating => a.rating.total_cmp(&b.rating),
            SortKey::Fees => a.fees.midpoint().total_cmp(&b.fees.midpoint()),
            SortKey::Name => a.name_en.cmp(&b.name_en),
            SortKey::Established => a.established.cmp(&b.established),
            SortKey::Students => a.students.cmp(&b.students),
            SortKey::MinGrade => a.min_grade.cmp(&b.min_grade),
            SortKey::Location => a.location_en.cmp(&b.location_en),
        };
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    /// Stable in-place sort.
    pub fn apply(&self, items: &mut [&University]) {
        items.sort_by(|a, b| self.compare(a, b));
    }
}

/// Requested page. Accessors never report a zero page or page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Normalize raw client values: page defaults to 1 and page size to 20
    /// when missing, zero or negative.
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        let positive = |v: Option<i64>| v.filter(|v| *v > 0).and_then(|v| usize::try_from(v).ok());
        Self {
            page: positive(page).unwrap_or(DEFAULT_PAGE),
            page_size: positive(page_size).unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// One-based page number.
    pub fn page(&self) -> usize {
        match self.page {
            0 => DEFAULT_PAGE,
            page => page,
        }
    }

    pub fn page_size(&self) -> usize {
        match self.page_size {
            0 => DEFAULT_PAGE_SIZE,
            size => size,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus totals over the whole match set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Slice `items` to the requested page.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let page = request.page();
    let page_size = request.page_size();
    let total = items.len();
    let total_pages = total.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size);

    let items = items.into_iter().skip(start).take(page_size).collect();

    Page {
        items,
        total,
        page,
        page_size,
        total_pages,
    }
}
