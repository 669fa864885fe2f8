
mod company_research_test;
mod job_search_test;
mod salary_research_test;
