// SPDX-FileCopyrightText: Copyright © 2025 AerynOS Developers
//
// SPDX-License-Identifier: MPL-2.0

use color_eyre::eyre::eyre;
use github_sources::{
    software::GITHUB_REPOSITORY_KEY,
    source::{self, GithubClient, SourceKind},
    Software,
};
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Configures the tracing infrastructure with appropriate formatting and filtering
///
/// Sets up tracing with ANSI colors, uptime timer, and target information.
/// Uses environment variables for filtering or defaults to info level.
fn configure_tracing() -> color_eyre::Result<()> {
    let f = Format::default()
        .with_ansi(true)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_file(false)
        .with_line_number(false)
        .with_target(true)
        .with_thread_ids(false);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().event_format(f))
        .with(ErrorLayer::default())
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    configure_tracing()?;

    let mut args = std::env::args().skip(1);
    let kind: SourceKind = args
        .next()
        .ok_or_else(|| eyre!("usage: github-sources <releases|tags> <owner/repo>..."))?
        .parse()?;

    let client = GithubClient::new()?;
    for repo in args {
        let software =
            Software::new(repo.as_str()).with_info(GITHUB_REPOSITORY_KEY, repo.as_str());
        let versions = source::from_kind(kind, software, client.clone())
            .get_all_versions()
            .await?;
        info!(%repo, count = versions.len(), "fetched versions");

        let c = colored_json::to_colored_json_auto(&versions)?;
        println!("{}", c);
    }
    Ok(())
}
