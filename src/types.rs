//! Enumerated flag values shared by the argument parser and the request payloads.

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
    Markdown,
}

/// Effort tier for search and extraction; advanced costs more credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    Basic,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    General,
    News,
    Finance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    #[value(alias = "d")]
    Day,
    #[value(alias = "w")]
    Week,
    #[value(alias = "m")]
    Month,
    #[value(alias = "y")]
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerLevel {
    #[value(aliases = ["true", "True"])]
    Basic,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    #[value(aliases = ["true", "True"])]
    Markdown,
    Text,
}
