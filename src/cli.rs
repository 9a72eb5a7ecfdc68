//! Command-line arguments of the `repo-finder` binary.

use clap::{Parser, Subcommand};

use crate::finder::BuildTool;

#[derive(Parser, Debug)]
#[command(name = "repo-finder")]
#[command(about = "GitHub repository finder", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Search repositories with a single query")]
    Search {
        #[arg(default_value = "", help = "Free-text search query")]
        query: String,

        #[arg(short, long, help = "Programming language filter")]
        language: Option<String>,

        #[arg(
            short,
            long,
            value_delimiter = ',',
            help = "Topics to filter by (repeat the flag or separate with commas)"
        )]
        topics: Vec<String>,

        #[arg(long, help = "Minimum number of stars")]
        stars: Option<u32>,

        #[arg(long, help = "Minimum number of forks")]
        forks: Option<u32>,

        #[arg(long, help = "Maximum number of results (default 100)")]
        max_results: Option<usize>,

        #[arg(long, help = "Print JSON instead of a table")]
        json: bool,
    },

    #[command(about = "Search Java repositories targeting a Java version")]
    Java {
        #[arg(default_value = "8", help = "Java version: 8, 11, 17 or 21")]
        java_version: String,

        #[arg(short, long, help = "Build tool hint: maven, gradle or ant")]
        build_tool: Option<BuildTool>,

        #[arg(long, help = "Minimum number of stars")]
        stars: Option<u32>,

        #[arg(long, default_value_t = 50, help = "Maximum number of results")]
        max_results: usize,

        #[arg(long, help = "Print JSON instead of a table")]
        json: bool,
    },

    #[command(about = "Analyze build tooling and frameworks of one repository")]
    Analyze {
        #[arg(help = "Repository URL, e.g. https://github.com/owner/repo")]
        url: String,

        #[arg(long, help = "Print JSON instead of key/value lines")]
        json: bool,
    },

    #[command(about = "Serve the JSON web front-end")]
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080", help = "Address to bind")]
        bind: String,
    },
}
