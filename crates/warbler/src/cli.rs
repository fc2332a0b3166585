use clap::{Parser, Subcommand};
use std::path::PathBuf;
use warbler_api_types::fields::{Expansion, TweetField, UserField};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct WarblerArgs {
    /// Path to the config file.
    #[arg(short, long)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print one page of the members of a list.
    Members {
        list_id: String,
        /// Page size, 1 to 100.
        #[arg(long)]
        max_results: Option<u32>,
        /// `next_token` from the previous page.
        #[arg(long)]
        pagination_token: Option<String>,
        /// Comma separated, e.g. `created_at,pinned_tweet_id`.
        #[arg(long, value_delimiter = ',')]
        user_fields: Vec<UserField>,
        /// Comma separated. Only applies to expanded tweets.
        #[arg(long, value_delimiter = ',')]
        tweet_fields: Vec<TweetField>,
        #[arg(long, value_delimiter = ',')]
        expansions: Vec<Expansion>,
    },
    /// Add a user to a list.
    Add { list_id: String, user_id: String },
    /// Remove a user from a list.
    Remove { list_id: String, user_id: String },
}
