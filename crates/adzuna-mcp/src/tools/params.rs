//! Parameter structs for all MCP tools.

use adzuna_client::endpoints::{DEFAULT_PAGE, DEFAULT_RESULTS_PER_PAGE};
use adzuna_client::{
    GeodataRequest, JobFilter, SalaryHistogramRequest, SalaryHistoryRequest, SearchJobsRequest,
    TopCompaniesRequest,
};
use schemars::JsonSchema;
use serde::Deserialize;

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_results_per_page() -> u32 {
    DEFAULT_RESULTS_PER_PAGE
}

// ── search_jobs ──

/// Parameters for the `search_jobs` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchJobsParams {
    #[schemars(
        description = "ISO 3166-1 alpha-2 country code. Determines job market AND currency. Supported: gb, us, de, fr, au, nz, ca, in, pl, br, at, za"
    )]
    pub country: String,
    #[schemars(
        description = "Space-separated search terms matched against job title and description. Terms are OR'd together, case insensitive, no boolean operators. Example: 'python developer'"
    )]
    pub keywords: Option<String>,
    #[schemars(
        description = "Geographic filter with fuzzy matching: city, region, or postal code prefix (e.g. 'London', 'SW1', '10001'). Omit for country-wide search"
    )]
    pub location: Option<String>,
    #[schemars(description = "Page number for pagination (starts at 1, not 0)")]
    #[serde(default = "default_page")]
    pub page: u32,
    #[schemars(description = "Results per page (default 10, max 50)")]
    #[serde(default = "default_results_per_page")]
    pub results_per_page: u32,
    #[schemars(
        description = "Minimum ANNUAL salary in LOCAL CURRENCY (e.g. 50000 not 50). Jobs without listed salaries are excluded"
    )]
    pub salary_min: Option<u64>,
    #[schemars(description = "Maximum ANNUAL salary in LOCAL CURRENCY")]
    pub salary_max: Option<u64>,
    #[schemars(description = "Set true to show ONLY full-time jobs")]
    pub full_time: Option<bool>,
    #[schemars(description = "Set true to show ONLY part-time jobs")]
    pub part_time: Option<bool>,
    #[schemars(description = "Set true to show ONLY contract/freelance jobs")]
    pub contract: Option<bool>,
    #[schemars(description = "Set true to show ONLY permanent positions")]
    pub permanent: Option<bool>,
    #[schemars(
        description = "Job category tag from get_categories (e.g. 'it-jobs'). Tags are country-specific"
    )]
    pub category: Option<String>,
    #[schemars(
        description = "Sort order: 'date' (newest first), 'salary' (highest first), 'relevance' (default)"
    )]
    pub sort_by: Option<String>,
    #[schemars(description = "Maximum age of listings in days (e.g. 7 for last week)")]
    pub max_days_old: Option<u64>,
}

impl From<SearchJobsParams> for SearchJobsRequest {
    fn from(p: SearchJobsParams) -> Self {
        Self {
            country: p.country,
            keywords: p.keywords,
            location: p.location,
            page: p.page,
            results_per_page: p.results_per_page,
            salary_min: p.salary_min,
            salary_max: p.salary_max,
            full_time: p.full_time,
            part_time: p.part_time,
            contract: p.contract,
            permanent: p.permanent,
            category: p.category,
            sort_by: p.sort_by,
            max_days_old: p.max_days_old,
        }
    }
}

// ── get_categories ──

/// Parameters for the `get_categories` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CategoriesParams {
    #[schemars(
        description = "ISO 3166-1 alpha-2 country code. Determines job market AND currency. Supported: gb, us, de, fr, au, nz, ca, in, pl, br, at, za"
    )]
    pub country: String,
}

// ── get_salary_histogram / get_top_companies / get_geodata ──

/// Parameters shared by the histogram, top-companies and geodata tools.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct MarketDataParams {
    #[schemars(
        description = "ISO 3166-1 alpha-2 country code. Determines job market AND currency. Supported: gb, us, de, fr, au, nz, ca, in, pl, br, at, za"
    )]
    pub country: String,
    #[schemars(description = "Filter to specific roles (e.g. 'software engineer')")]
    pub keywords: Option<String>,
    #[schemars(description = "Location filter (e.g. 'London', 'New York')")]
    pub location: Option<String>,
    #[schemars(description = "Category tag from get_categories (e.g. 'it-jobs')")]
    pub category: Option<String>,
}

impl MarketDataParams {
    fn split(self) -> (String, JobFilter) {
        (
            self.country,
            JobFilter {
                keywords: self.keywords,
                location: self.location,
                category: self.category,
            },
        )
    }
}

impl From<MarketDataParams> for SalaryHistogramRequest {
    fn from(p: MarketDataParams) -> Self {
        let (country, filter) = p.split();
        Self { country, filter }
    }
}

impl From<MarketDataParams> for TopCompaniesRequest {
    fn from(p: MarketDataParams) -> Self {
        let (country, filter) = p.split();
        Self { country, filter }
    }
}

impl From<MarketDataParams> for GeodataRequest {
    fn from(p: MarketDataParams) -> Self {
        let (country, filter) = p.split();
        Self { country, filter }
    }
}

// ── get_salary_history ──

/// Parameters for the `get_salary_history` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SalaryHistoryParams {
    #[schemars(
        description = "ISO 3166-1 alpha-2 country code. Determines job market AND currency. Supported: gb, us, de, fr, au, nz, ca, in, pl, br, at, za"
    )]
    pub country: String,
    #[schemars(description = "Filter to specific roles (e.g. 'software engineer')")]
    pub keywords: Option<String>,
    #[schemars(description = "Location filter (e.g. 'London')")]
    pub location: Option<String>,
    #[schemars(description = "Category tag from get_categories (e.g. 'it-jobs')")]
    pub category: Option<String>,
    #[schemars(description = "Number of months of history (default 12, max ~24)")]
    pub months: Option<u64>,
}

impl From<SalaryHistoryParams> for SalaryHistoryRequest {
    fn from(p: SalaryHistoryParams) -> Self {
        Self {
            country: p.country,
            filter: JobFilter {
                keywords: p.keywords,
                location: p.location,
                category: p.category,
            },
            months: p.months,
        }
    }
}
