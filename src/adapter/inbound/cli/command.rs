//! Command-line interface definitions.
//!
//! Defines the CLI structure for the basketry binary using `clap`. Every
//! subcommand maps onto one basket API [`Action`].

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::adapter::inbound::controller::Action;
use crate::domain::id::{BasketId, OwnerId};
use crate::domain::identity::Identity;

/// Manage per-user item baskets
#[derive(Parser, Debug)]
#[command(name = "basketry")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = "basketry.toml")]
    pub config: PathBuf,

    /// Act as this user (anonymous when omitted)
    #[arg(long, global = true)]
    pub user: Option<OwnerId>,

    /// Role held by the user (repeatable)
    #[arg(long = "role", global = true)]
    pub roles: Vec<String>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Identity the command acts as.
    #[must_use]
    pub fn identity(&self) -> Identity {
        match self.user {
            Some(id) => Identity::user(id, self.roles.iter().cloned()),
            None => Identity::anonymous(),
        }
    }

    /// Action to run; `dump` when no subcommand is given.
    #[must_use]
    pub fn action(&self) -> Action {
        self.command.as_ref().map(Commands::action).unwrap_or_default()
    }
}

/// Top-level subcommands for the basketry CLI.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add comma-separated item IDs to the selected basket
    Add { refs: String },

    /// Remove comma-separated item IDs from the selected basket
    Remove { refs: String },

    /// Empty the selected basket
    Clear,

    /// Show the contents of the selected basket
    Dump,

    /// List baskets
    List,

    /// Create a basket
    Create { name: Option<String> },

    /// Delete a basket (the default basket is only emptied)
    Delete { id: BasketId },

    /// Rename a basket
    Rename { id: BasketId, name: String },

    /// Select the basket other commands act on
    Select { id: BasketId },
}

impl Commands {
    #[must_use]
    pub fn action(&self) -> Action {
        match self {
            Self::Add { refs } => Action::Add(refs.clone()),
            Self::Remove { refs } => Action::Remove(refs.clone()),
            Self::Clear => Action::Clear,
            Self::Dump => Action::Dump,
            Self::List => Action::List,
            Self::Create { name } => Action::Create(name.clone().unwrap_or_default()),
            Self::Delete { id } => Action::Delete(*id),
            Self::Rename { id, name } => Action::Rename(*id, name.clone()),
            Self::Select { id } => Action::Select(*id),
        }
    }
}
