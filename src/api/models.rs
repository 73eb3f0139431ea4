use serde::Serialize;
use std::time::Duration;

use crate::cli::{Command, CrawlArgs, ExtractArgs, MapArgs, ScopeArgs, SearchArgs};
use crate::types::{AnswerLevel, ContentFormat, Depth, TimeRange, Topic};

/// Remote operation addressed by a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    Extract,
    Crawl,
    Map,
    Usage,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Search => "search",
            Endpoint::Extract => "extract",
            Endpoint::Crawl => "crawl",
            Endpoint::Map => "map",
            Endpoint::Usage => "usage",
        }
    }

    /// Used when the invocation gives no `--timeout`.
    pub fn default_timeout(self) -> Duration {
        match self {
            Endpoint::Search | Endpoint::Extract => Duration::from_secs(60),
            Endpoint::Crawl | Endpoint::Map => Duration::from_secs(150),
            Endpoint::Usage => Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub search_depth: Depth,
    pub topic: Topic,
    pub max_results: u8,
    pub include_images: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_answer: Option<AnswerLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_raw_content: Option<ContentFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractRequest {
    pub urls: Vec<String>,
    pub extract_depth: Depth,
    pub format: ContentFormat,
    pub include_images: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrawlRequest {
    pub url: String,
    #[serde(flatten)]
    pub scope: Scope,
    pub extract_depth: Depth,
    pub include_images: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapRequest {
    pub url: String,
    #[serde(flatten)]
    pub scope: Scope,
}

/// Crawl/map limits. Path and domain patterns are regexes evaluated by the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scope {
    pub max_depth: u8,
    pub max_breadth: u32,
    pub limit: u32,
    pub allow_external: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_paths: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_paths: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<f64>,
}

/// One fully validated call against the API.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    Search(SearchRequest),
    Extract(ExtractRequest),
    Crawl(CrawlRequest),
    Map(MapRequest),
    Usage,
}

impl ApiRequest {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            ApiRequest::Search(_) => Endpoint::Search,
            ApiRequest::Extract(_) => Endpoint::Extract,
            ApiRequest::Crawl(_) => Endpoint::Crawl,
            ApiRequest::Map(_) => Endpoint::Map,
            ApiRequest::Usage => Endpoint::Usage,
        }
    }

    pub fn timeout(&self) -> Duration {
        let requested = match self {
            ApiRequest::Extract(req) => req.timeout,
            ApiRequest::Crawl(req) => req.scope.timeout,
            ApiRequest::Map(req) => req.scope.timeout,
            ApiRequest::Search(_) | ApiRequest::Usage => None,
        };
        requested
            .map(Duration::from_secs_f64)
            .unwrap_or_else(|| self.endpoint().default_timeout())
    }

    /// JSON body of the call; `None` for the bodyless usage lookup.
    pub fn body(&self) -> serde_json::Result<Option<serde_json::Value>> {
        let body = match self {
            ApiRequest::Search(req) => serde_json::to_value(req)?,
            ApiRequest::Extract(req) => serde_json::to_value(req)?,
            ApiRequest::Crawl(req) => serde_json::to_value(req)?,
            ApiRequest::Map(req) => serde_json::to_value(req)?,
            ApiRequest::Usage => return Ok(None),
        };
        Ok(Some(body))
    }
}

impl From<&Command> for ApiRequest {
    fn from(command: &Command) -> Self {
        match command {
            Command::Search(args) => ApiRequest::Search(args.into()),
            Command::Extract(args) => ApiRequest::Extract(args.into()),
            Command::Crawl(args) => ApiRequest::Crawl(args.into()),
            Command::Map(args) => ApiRequest::Map(args.into()),
            Command::Usage => ApiRequest::Usage,
        }
    }
}

impl From<&SearchArgs> for SearchRequest {
    fn from(args: &SearchArgs) -> Self {
        SearchRequest {
            query: args.query.clone(),
            search_depth: args.depth,
            topic: args.topic,
            max_results: args.max_results,
            include_images: args.include_images,
            time_range: args.time_range,
            include_answer: args.include_answer,
            include_raw_content: args.include_raw,
            include_domains: split_list(&args.include_domains),
            exclude_domains: split_list(&args.exclude_domains),
            country: non_blank(args.country.as_deref()),
        }
    }
}

impl From<&ExtractArgs> for ExtractRequest {
    fn from(args: &ExtractArgs) -> Self {
        ExtractRequest {
            urls: args.urls.clone(),
            extract_depth: args.depth,
            format: args.output_format,
            include_images: args.include_images,
            timeout: args.timeout,
        }
    }
}

impl From<&CrawlArgs> for CrawlRequest {
    fn from(args: &CrawlArgs) -> Self {
        CrawlRequest {
            url: args.url.clone(),
            scope: (&args.scope).into(),
            extract_depth: args.depth,
            include_images: args.include_images,
        }
    }
}

impl From<&MapArgs> for MapRequest {
    fn from(args: &MapArgs) -> Self {
        MapRequest {
            url: args.url.clone(),
            scope: (&args.scope).into(),
        }
    }
}

impl From<&ScopeArgs> for Scope {
    fn from(args: &ScopeArgs) -> Self {
        Scope {
            max_depth: args.max_depth,
            max_breadth: args.max_breadth,
            limit: args.limit,
            allow_external: !args.no_external,
            instructions: non_blank(args.instructions.as_deref()),
            select_paths: split_list(&args.select_paths),
            exclude_paths: split_list(&args.exclude_paths),
            select_domains: split_list(&args.select_domains),
            exclude_domains: split_list(&args.exclude_domains),
            timeout: args.timeout,
        }
    }
}

/// Flattens repeated and comma-separated flag values, trimming each entry.
/// Returns `None` when nothing but blanks was given.
pub fn split_list(values: &[String]) -> Option<Vec<String>> {
    let items: Vec<String> = values
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    if items.is_empty() { None } else { Some(items) }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(str::to_string)
}
