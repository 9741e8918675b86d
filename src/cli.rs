//! CLI argument parsing for cifra

use clap::{Parser, ValueEnum};

/// Output format for introspection results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "cifra")]
#[command(version)]
#[command(about = "Inspect trace-format enumeration constants and namespaces", long_about = None)]
pub struct Cli {
    /// List every exported public name in registration order
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Dump the members of a published namespace (e.g. Undefined)
    #[arg(short = 'n', long = "namespace", value_name = "NAME")]
    pub namespace: Option<String>,

    /// Resolve a single member, written as NAMESPACE.MEMBER
    #[arg(short = 'r', long = "resolve", value_name = "NAME.MEMBER")]
    pub resolve: Option<String>,

    /// Reverse-resolve a value inside the selected namespace
    #[arg(long = "name-of", value_name = "VALUE", requires = "namespace")]
    pub name_of: Option<u64>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
