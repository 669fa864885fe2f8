//! # Adzuna API Client
//!
//! Relays job-search and labour-market queries to the Adzuna REST API.
//!
//! - [`config`]: credentials and client configuration
//! - [`params`]: optional-field query builder
//! - [`endpoints`]: one typed request per endpoint
//! - [`client`]: the dispatcher
//! - [`countries`]: reference table of supported markets

pub mod client;
pub mod config;
pub mod countries;
pub mod endpoints;
pub mod error;
pub mod params;

pub use client::AdzunaApiClient;
pub use config::{AdzunaApiConfig, Credentials};
pub use endpoints::{
    ApiRequest, CategoriesRequest, GeodataRequest, JobFilter, SalaryHistogramRequest,
    SalaryHistoryRequest, SearchJobsRequest, TopCompaniesRequest, VersionRequest,
};
pub use error::{ClientError, ClientResult};
pub use params::{QueryParams, QueryValue};
