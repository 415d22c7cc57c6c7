// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use readmeify::cli::{Cli, Commands, OutputFormat};
use readmeify::config::{Config, ConfigBuilder};
use readmeify::discovery::list_directories;
use readmeify::errors::Error;
use readmeify::github::{parse_repo_spec, GitHubClient, RepoSpec, RepositoryApi};
use readmeify::signal::setup_signal_handler;
use readmeify::{assemble_context, commit_document, output, readme_path, CommitOutcome};

fn main() {
    // Initialize logging. RUST_LOG overrides the crate default.
    let default_filter = if cfg!(debug_assertions) {
        "readmeify=debug"
    } else {
        "readmeify=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    log::info!("Starting readmeify v{}...", env!("CARGO_PKG_VERSION"));

    // Panic messages must not leak the build location.
    std::panic::set_hook(Box::new(|info| {
        let msg = match info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => match info.payload().downcast_ref::<String>() {
                Some(s) => s.as_str(),
                None => "Box<Any>",
            },
        };
        eprintln!(
            "Application Error: {}",
            msg.replace(env!("CARGO_MANIFEST_DIR"), "<redacted>")
        );
    }));

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        let code = match e.downcast_ref::<Error>() {
            Some(Error::Interrupted) => {
                eprintln!("\nOperation cancelled.");
                std::process::exit(130);
            }
            Some(Error::Conflict { .. }) => 3,
            Some(err) if err.is_commit_failure() => 2,
            _ => 1,
        };
        eprintln!("Error: {:#}", e);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Context {
            repo,
            subdir,
            format,
        } => {
            let spec = parse_repo_spec(repo)?;
            let config = build_config(&cli, &spec)?;
            let subdir = subdir.clone().or(spec.subdir);
            let client = GitHubClient::new(&config.api)?;
            let token = setup_signal_handler()?;

            let ctx = assemble_context(&client, &spec.repo, subdir.as_deref(), &config, &token)?;
            match format {
                OutputFormat::Text => print!("{}", output::render_context_block(&ctx)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ctx)?),
            }
        }
        Commands::Repos { format } => {
            let config = ConfigBuilder::from_cli(&cli.global).build()?;
            if config.api.credentials.is_none() {
                anyhow::bail!(Error::Config(
                    "listing repositories requires an access token (--token or GITHUB_TOKEN)"
                        .to_string()
                ));
            }
            let client = GitHubClient::new(&config.api)?;

            let repos = client.list_user_repos()?;
            log::debug!("Listed {} repositories", repos.len());
            match format {
                OutputFormat::Text => print!("{}", output::render_repo_list(&repos)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&repos)?),
            }
        }
        Commands::Folders { repo } => {
            let spec = parse_repo_spec(repo)?;
            let config = build_config(&cli, &spec)?;
            let client = GitHubClient::new(&config.api)?;

            let tree = client.fetch_tree(&spec.repo)?;
            for dir in list_directories(&tree.entries) {
                println!("{}", dir.path);
            }
        }
        Commands::Commit { repo, file, subdir } => {
            let spec = parse_repo_spec(repo)?;
            let content = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read '{}'", file.display()))?;
            let config = build_config(&cli, &spec)?;
            let subdir = subdir.clone().or(spec.subdir);
            let client = GitHubClient::new(&config.api)?;

            let target = readme_path(subdir.as_deref());
            let outcome = commit_document(
                &client,
                &spec.repo,
                &target,
                &content,
                config.api.commit_branch(),
            )?;
            match outcome {
                CommitOutcome::Created { path, revision } => {
                    println!("Created {} ({})", path, revision)
                }
                CommitOutcome::Updated {
                    path,
                    previous_revision,
                    revision,
                } => println!("Updated {} ({} -> {})", path, previous_revision, revision),
            }
        }
    }
    Ok(())
}

/// CLI flags win over the ref embedded in the repository URL.
fn build_config(cli: &Cli, spec: &RepoSpec) -> Result<Config> {
    let config = ConfigBuilder::from_cli(&cli.global)
        .git_ref_if_unset(spec.git_ref.clone())
        .build()?;
    log::debug!("Configuration built successfully.");
    Ok(config)
}
