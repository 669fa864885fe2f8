//! Typed requests for each Adzuna endpoint.
//!
//! Every request maps to exactly one relative path and one [`QueryParams`]
//! mapping. Country codes and category tags are interpolated verbatim; the API
//! is the only validator.

use crate::params::QueryParams;

/// A request the dispatcher can send.
pub trait ApiRequest {
    /// Path relative to the API root, without a leading slash.
    fn path(&self) -> String;

    /// Caller-supplied query fields. Never contains credentials.
    fn query(&self) -> QueryParams {
        QueryParams::new()
    }
}

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_RESULTS_PER_PAGE: u32 = 10;

pub fn search_path(country: &str, page: u32) -> String {
    format!("jobs/{country}/search/{page}")
}

pub fn categories_path(country: &str) -> String {
    format!("jobs/{country}/categories")
}

pub fn histogram_path(country: &str) -> String {
    format!("jobs/{country}/histogram")
}

pub fn top_companies_path(country: &str) -> String {
    format!("jobs/{country}/top_companies")
}

pub fn geodata_path(country: &str) -> String {
    format!("jobs/{country}/geodata")
}

pub fn history_path(country: &str) -> String {
    format!("jobs/{country}/history")
}

pub const VERSION_PATH: &str = "version";

/// Keyword / location / category filter shared by the market-data endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    /// Sent as `what`.
    pub keywords: Option<String>,
    /// Sent as `where`.
    pub location: Option<String>,
    pub category: Option<String>,
}

impl JobFilter {
    fn apply(&self, params: QueryParams) -> QueryParams {
        params
            .text("what", self.keywords.as_deref())
            .text("where", self.location.as_deref())
            .text("category", self.category.as_deref())
    }
}

/// `GET jobs/{country}/search/{page}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchJobsRequest {
    pub country: String,
    pub keywords: Option<String>,
    pub location: Option<String>,
    pub page: u32,
    pub results_per_page: u32,
    pub salary_min: Option<u64>,
    pub salary_max: Option<u64>,
    pub full_time: Option<bool>,
    pub part_time: Option<bool>,
    pub contract: Option<bool>,
    pub permanent: Option<bool>,
    pub category: Option<String>,
    pub sort_by: Option<String>,
    pub max_days_old: Option<u64>,
}

impl SearchJobsRequest {
    /// First page of ten results with no filters.
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            keywords: None,
            location: None,
            page: DEFAULT_PAGE,
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
            salary_min: None,
            salary_max: None,
            full_time: None,
            part_time: None,
            contract: None,
            permanent: None,
            category: None,
            sort_by: None,
            max_days_old: None,
        }
    }
}

impl ApiRequest for SearchJobsRequest {
    fn path(&self) -> String {
        search_path(&self.country, self.page)
    }

    fn query(&self) -> QueryParams {
        QueryParams::new()
            .with("results_per_page", self.results_per_page)
            .text("what", self.keywords.as_deref())
            .text("where", self.location.as_deref())
            .number("salary_min", self.salary_min)
            .number("salary_max", self.salary_max)
            .flag("full_time", self.full_time)
            .flag("part_time", self.part_time)
            .flag("contract", self.contract)
            .flag("permanent", self.permanent)
            .text("category", self.category.as_deref())
            .text("sort_by", self.sort_by.as_deref())
            .number("max_days_old", self.max_days_old)
    }
}

/// `GET jobs/{country}/categories`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoriesRequest {
    pub country: String,
}

impl ApiRequest for CategoriesRequest {
    fn path(&self) -> String {
        categories_path(&self.country)
    }
}

/// `GET jobs/{country}/histogram`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryHistogramRequest {
    pub country: String,
    pub filter: JobFilter,
}

impl ApiRequest for SalaryHistogramRequest {
    fn path(&self) -> String {
        histogram_path(&self.country)
    }

    fn query(&self) -> QueryParams {
        self.filter.apply(QueryParams::new())
    }
}

/// `GET jobs/{country}/top_companies`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopCompaniesRequest {
    pub country: String,
    pub filter: JobFilter,
}

impl ApiRequest for TopCompaniesRequest {
    fn path(&self) -> String {
        top_companies_path(&self.country)
    }

    fn query(&self) -> QueryParams {
        self.filter.apply(QueryParams::new())
    }
}

/// `GET jobs/{country}/geodata`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeodataRequest {
    pub country: String,
    pub filter: JobFilter,
}

impl ApiRequest for GeodataRequest {
    fn path(&self) -> String {
        geodata_path(&self.country)
    }

    fn query(&self) -> QueryParams {
        self.filter.apply(QueryParams::new())
    }
}

/// `GET jobs/{country}/history`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryHistoryRequest {
    pub country: String,
    pub filter: JobFilter,
    pub months: Option<u64>,
}

impl ApiRequest for SalaryHistoryRequest {
    fn path(&self) -> String {
        history_path(&self.country)
    }

    fn query(&self) -> QueryParams {
        self.filter
            .apply(QueryParams::new())
            .number("months", self.months)
    }
}

/// `GET version`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionRequest;

impl ApiRequest for VersionRequest {
    fn path(&self) -> String {
        VERSION_PATH.to_string()
    }
}
