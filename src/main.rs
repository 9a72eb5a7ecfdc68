// Command-line front-end for the repository finder.
//
// `search`, `java` and `analyze` print a table (or JSON with `--json`);
// `serve` starts the JSON web front-end.

use anyhow::{Context, Result};
use clap::Parser as _;
use indicatif::{ProgressBar, ProgressStyle};
use repo_finder::cli::{Cli, Commands};
use repo_finder::report::{render_analysis, render_details, render_table};
use repo_finder::{
    Aggregator, FinderConfig, ProgressCallback, ProgressEvent, SearchCriteria, SearchOutput,
    analyze, find_repositories, find_version_repositories,
};

/// Records shown in the detailed view under the table.
const DETAILED_VIEW_COUNT: usize = 3;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        log::debug!("rustls crypto provider already installed");
    }

    let cli = Cli::parse();
    let config = FinderConfig::from_env();
    config.validate()?;

    match cli.command {
        Commands::Search {
            query,
            language,
            topics,
            stars,
            forks,
            max_results,
            json,
        } => {
            let criteria = SearchCriteria {
                free_text: query,
                language,
                topics,
                min_stars: stars,
                min_forks: forks,
                max_results: max_results.unwrap_or(config.default_max_results),
                ..Default::default()
            };
            let output = find_repositories(&config, criteria, progress(json)).await?;
            print_results(&output, json)?;
        }
        Commands::Java {
            java_version,
            build_tool,
            stars,
            max_results,
            json,
        } => {
            let output = find_version_repositories(
                &config,
                &java_version,
                build_tool,
                stars,
                max_results,
                progress(json),
            )
            .await?;
            print_results(&output, json)?;
        }
        Commands::Analyze { url, json } => {
            let analysis = analyze(&config, &url).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                println!("\nAnalysis Results:");
                println!("{}", render_analysis(&analysis));
            }
        }
        Commands::Serve { bind } => {
            let client = config
                .build_client()
                .context("failed to build GitHub client")?;
            repo_finder::web::serve(Aggregator::new(client, config), &bind)
                .await
                .with_context(|| format!("web front-end on {bind} failed"))?;
        }
    }

    Ok(())
}

/// Enrichment progress bar on stderr; none for JSON output.
fn progress(json: bool) -> Option<ProgressCallback> {
    if json {
        return None;
    }

    let pb = ProgressBar::new(0);
    if let Ok(style) =
        ProgressStyle::with_template("  Enriching [{bar:30}] {pos}/{len} {msg} ETA {eta}")
    {
        pb.set_style(style);
    }

    Some(Box::new(move |event: ProgressEvent| match event {
        ProgressEvent::Started { total } => pb.set_length(total),
        ProgressEvent::RecordEnriched { full_name } => {
            pb.set_message(full_name);
            pb.inc(1);
        }
        ProgressEvent::Finished { .. } => pb.finish_and_clear(),
    }))
}

fn print_results(output: &SearchOutput, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(output)?);
        return Ok(());
    }

    println!("\nFound {} repositories:\n", output.count);
    if !output.results.is_empty() {
        println!("{}", render_table(&output.results));
        println!();
        print!("{}", render_details(&output.results, DETAILED_VIEW_COUNT));
    }
    for error in &output.errors {
        eprintln!("warning: {error}");
    }
    Ok(())
}
