use anyhow::Context;
use cli::Commands;
use std::io::{self, Write};
use std::time::Duration;
use warbler_api_types::PartialErrorCheck;
use warbler_api_types::lists::request::ListMembersQuery;
use warbler_client::Client;

pub mod cli;
mod config;

pub async fn run(args: cli::WarblerArgs) -> anyhow::Result<()> {
    let config = config::Config::load(&args.config)?;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to construct HTTP client")?;

    let client = Client::from_reqwest(&config.api_base, config.bearer_token()?, http);

    tracing::debug!(api_base = client.api_base(), "Client ready");

    match args.command {
        Commands::Members {
            list_id,
            max_results,
            pagination_token,
            user_fields,
            tweet_fields,
            expansions,
        } => {
            let query = ListMembersQuery {
                max_results,
                pagination_token,
                expansions,
                user_fields,
                tweet_fields,
            };

            let response = client
                .list_members(&list_id, &query)
                .await
                .with_context(|| format!("Failed to fetch members of list {list_id}"))?;

            println!("{response:#?}");
            report(&mut io::stderr().lock(), &response)?;
        },
        Commands::Add { list_id, user_id } => {
            let response = client
                .add_list_member(&list_id, &user_id)
                .await
                .with_context(|| format!("Failed to add {user_id} to list {list_id}"))?;

            println!("{response:#?}");
            report(&mut io::stderr().lock(), &response)?;
        },
        Commands::Remove { list_id, user_id } => {
            let response = client
                .remove_list_member(&list_id, &user_id)
                .await
                .with_context(|| format!("Failed to remove {user_id} from list {list_id}"))?;

            println!("{response:#?}");
            report(&mut io::stderr().lock(), &response)?;
        },
    }

    Ok(())
}

/// Partial errors are not fatal. They are listed after the response.
fn report(out: &mut impl Write, response: &impl PartialErrorCheck) -> io::Result<()> {
    if !response.has_partial_error() {
        return Ok(());
    }

    let errors = response.partial_errors();
    writeln!(out, "Response is incomplete, {} resource(s) failed:", errors.len())?;
    for error in errors {
        writeln!(out, "  - {error}")?;
    }

    Ok(())
}
