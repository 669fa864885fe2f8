//! MCP ServerHandler implementation for Adzuna.
//!
//! Every tool relays exactly one Adzuna API call and returns the upstream JSON
//! unchanged:
//!
//! - `search_jobs`: Search job listings with salary, contract and recency filters
//! - `get_categories`: List valid category tags for a country
//! - `get_salary_histogram`: Salary distribution for matching jobs
//! - `get_top_companies`: Employers ranked by open positions
//! - `get_geodata`: Job counts and salaries by region
//! - `get_salary_history`: Average salary by month
//! - `get_api_version`: Upstream API version

use adzuna_client::countries::SUPPORTED_COUNTRIES;
use adzuna_client::{
    AdzunaApiClient, GeodataRequest, SalaryHistogramRequest, SalaryHistoryRequest,
    SearchJobsRequest, TopCompaniesRequest,
};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use tracing::info;

use crate::tools::*;

/// Adzuna MCP server handler.
#[derive(Debug, Clone)]
pub struct AdzunaMcpServer {
    tool_router: ToolRouter<Self>,
    client: AdzunaApiClient,
}

impl AdzunaMcpServer {
    /// Create a server relaying through `client`.
    pub fn new(client: AdzunaApiClient) -> Self {
        Self {
            tool_router: Self::tool_router(),
            client,
        }
    }
}

/// Server instructions, including the supported-market table.
pub fn instructions() -> String {
    let countries: Vec<String> = SUPPORTED_COUNTRIES
        .iter()
        .map(|c| format!("- {c}"))
        .collect();

    format!(
        "Adzuna Jobs API - Search jobs and access labour market data across {count} countries.\n\
         \n\
         IMPORTANT NOTES:\n\
         - All salary figures are ANNUAL amounts in LOCAL CURRENCY (GBP for UK, USD for US, EUR for Germany/France, etc.)\n\
         - Country codes use ISO 3166-1 alpha-2 (e.g. \"gb\", \"us\", \"de\")\n\
         \n\
         SUPPORTED COUNTRIES:\n\
         {list}\n\
         \n\
         RECOMMENDED WORKFLOWS:\n\
         1. Job Search: get_categories → search_jobs (get valid category tags first)\n\
         2. Salary Research: get_salary_histogram + get_geodata + get_salary_history\n\
         3. Company Research: get_top_companies",
        count = SUPPORTED_COUNTRIES.len(),
        list = countries.join("\n"),
    )
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for AdzunaMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "adzuna-mcp".to_string(),
                title: Some("Adzuna Jobs".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP server exposing Adzuna job search, salary distribution, \
                     employer rankings, regional breakdowns and salary history"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(instructions()),
        }
    }
}

#[tool_router(router = tool_router)]
impl AdzunaMcpServer {
    /// Search job listings in one country.
    #[tool(
        name = "search_jobs",
        description = "Search for jobs on Adzuna across 12 supported countries. All salary figures are ANNUAL amounts in LOCAL CURRENCY. Returns 'count' (total matches, for pagination) and 'results' (listings with id, title, company.display_name, location.display_name, description, redirect_url, created, salary_min, salary_max, salary_is_predicted, contract_type, contract_time, category.tag). Call get_categories first to obtain valid category tags."
    )]
    pub async fn search_jobs(
        &self,
        Parameters(params): Parameters<SearchJobsParams>,
    ) -> Result<String, String> {
        info!(tool = "search_jobs", country = %params.country, page = params.page, "Tool called");
        let request: SearchJobsRequest = params.into();
        render_result("search_jobs", self.client.search_jobs(&request).await)
    }

    /// List category tags for a country.
    #[tool(
        name = "get_categories",
        description = "Get valid job category tags for a country. Use BEFORE search_jobs: pass the 'tag' value (e.g. 'it-jobs'), not the label, as the category parameter. Tags are country-specific; use the same country code in both calls. Returns 'results': [{tag, label}]."
    )]
    pub async fn get_categories(
        &self,
        Parameters(params): Parameters<CategoriesParams>,
    ) -> Result<String, String> {
        info!(tool = "get_categories", country = %params.country, "Tool called");
        render_result(
            "get_categories",
            self.client.get_categories(&params.country).await,
        )
    }

    /// Salary distribution for matching jobs.
    #[tool(
        name = "get_salary_histogram",
        description = "Get the salary distribution for jobs matching the search criteria. Only jobs WITH listed salaries are counted. Returns 'histogram': keys are ANNUAL salaries in LOCAL CURRENCY (as strings), values are job counts at that salary point. The peak is the most common salary."
    )]
    pub async fn get_salary_histogram(
        &self,
        Parameters(params): Parameters<MarketDataParams>,
    ) -> Result<String, String> {
        info!(tool = "get_salary_histogram", country = %params.country, "Tool called");
        let request: SalaryHistogramRequest = params.into();
        render_result(
            "get_salary_histogram",
            self.client.get_salary_histogram(&request).await,
        )
    }

    /// Employers ranked by open positions.
    #[tool(
        name = "get_top_companies",
        description = "Get top employers currently hiring, ranked by number of open positions (hiring VOLUME, not company quality). Returns 'leaderboard': [{canonical_name, count, average_salary}], average_salary is ANNUAL in LOCAL CURRENCY and may be null."
    )]
    pub async fn get_top_companies(
        &self,
        Parameters(params): Parameters<MarketDataParams>,
    ) -> Result<String, String> {
        info!(tool = "get_top_companies", country = %params.country, "Tool called");
        let request: TopCompaniesRequest = params.into();
        render_result(
            "get_top_companies",
            self.client.get_top_companies(&request).await,
        )
    }

    /// Job counts and salaries by region.
    #[tool(
        name = "get_geodata",
        description = "Get salary and job count data broken down by geographic region. With no location the breakdown is national; with a location (e.g. 'London') it breaks down within that area. Returns 'locations': [{location: {display_name, area}, count, average_salary}]."
    )]
    pub async fn get_geodata(
        &self,
        Parameters(params): Parameters<MarketDataParams>,
    ) -> Result<String, String> {
        info!(tool = "get_geodata", country = %params.country, "Tool called");
        let request: GeodataRequest = params.into();
        render_result("get_geodata", self.client.get_geodata(&request).await)
    }

    /// Average salary by month.
    #[tool(
        name = "get_salary_history",
        description = "Get historical salary trends for matching jobs. Returns 'month': data points of year-month (YYYY-MM) and average ANNUAL salary in LOCAL CURRENCY. Use 'months' to choose the window (6 recent trend, 12 year-over-year, 24 longer term)."
    )]
    pub async fn get_salary_history(
        &self,
        Parameters(params): Parameters<SalaryHistoryParams>,
    ) -> Result<String, String> {
        info!(tool = "get_salary_history", country = %params.country, "Tool called");
        let request: SalaryHistoryRequest = params.into();
        render_result(
            "get_salary_history",
            self.client.get_salary_history(&request).await,
        )
    }

    /// Upstream API version.
    #[tool(
        name = "get_api_version",
        description = "Get the current Adzuna API version information."
    )]
    pub async fn get_api_version(&self) -> Result<String, String> {
        info!(tool = "get_api_version", "Tool called");
        render_result("get_api_version", self.client.get_api_version().await)
    }
}
