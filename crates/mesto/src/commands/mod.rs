//! Command dispatch: bridges CLI args -> core Commands -> output formatting.

pub mod cards;
pub mod config_cmd;
pub mod profile;
pub mod util;

use mesto_core::{BootstrapReport, Controller};
use tracing::warn;

use crate::cli::{CardsCommand, Command, GlobalOpts};
use crate::error::CliError;

/// Start-up fetches a command cannot run without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionNeeds {
    pub profile: bool,
    pub cards: bool,
}

/// What each session command reads from the bootstrapped state.
pub fn session_needs(cmd: &Command) -> SessionNeeds {
    match cmd {
        Command::Profile(_) => SessionNeeds {
            profile: true,
            cards: false,
        },
        Command::Cards(args) => match args.command {
            // Filters are relative to the signed-in user.
            CardsCommand::List { mine, liked, .. } => SessionNeeds {
                profile: mine || liked,
                cards: true,
            },
            CardsCommand::Show { .. } | CardsCommand::Delete { .. } => SessionNeeds {
                profile: false,
                cards: true,
            },
            // Without a profile every card would look unliked.
            CardsCommand::Like { .. } => SessionNeeds {
                profile: true,
                cards: true,
            },
            CardsCommand::Add { .. } => SessionNeeds::default(),
        },
        Command::Config(_) | Command::Completions(_) => SessionNeeds::default(),
    }
}

/// Fail on a start-up fetch the command needs; carry on past the others.
pub fn check_bootstrap(report: BootstrapReport, needs: SessionNeeds) -> Result<(), CliError> {
    match report.user {
        Err(err) if needs.profile => return Err(err.into()),
        Err(err) => warn!(error = %err, "profile unavailable, continuing"),
        Ok(()) => {}
    }
    match report.cards {
        Err(err) if needs.cards => return Err(err.into()),
        Err(err) => warn!(error = %err, "cards unavailable, continuing"),
        Ok(_) => {}
    }
    Ok(())
}

/// Dispatch a session-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    controller: &Controller,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Profile(args) => profile::handle(controller, args, global).await,
        Command::Cards(args) => cards::handle(controller, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
