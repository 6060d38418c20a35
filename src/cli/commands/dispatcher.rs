//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::api::SceneClient;
use crate::cli::args::Commands;
use crate::error::{PlanetError, Result};
use crate::input::InputSource;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `client` - Scenes API client to delegate to
    /// * `input` - Source of piped ids or area of interest
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// `Ok(())` once the command's output has been written.
    fn execute(
        &self,
        client: &dyn SceneClient,
        input: &mut dyn InputSource,
        ui: &mut dyn UserInterface,
    ) -> Result<()>;
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<'a> {
    client: &'a dyn SceneClient,
    input: &'a mut dyn InputSource,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a new dispatcher around a client and an input source.
    pub fn new(client: &'a dyn SceneClient, input: &'a mut dyn InputSource) -> Self {
        Self { client, input }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. API failures come back as [`PlanetError::Api`], whose
    /// message is the line shown to the user.
    pub fn dispatch(
        &mut self,
        command: &Commands,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        tracing::debug!("Dispatching {}", command.name());

        let result = match command {
            Commands::ListAllSceneTypes => {
                let cmd = super::scene_types::SceneTypesCommand::new();
                cmd.execute(self.client, &mut *self.input, ui)
            }
            Commands::Download(args) => {
                let cmd = super::download::DownloadCommand::new(args.clone());
                cmd.execute(self.client, &mut *self.input, ui)
            }
            Commands::Thumbnails(args) => {
                let cmd = super::thumbnails::ThumbnailsCommand::new(args.clone());
                cmd.execute(self.client, &mut *self.input, ui)
            }
            Commands::Metadata(args) => {
                let cmd = super::metadata::MetadataCommand::new(args.clone());
                cmd.execute(self.client, &mut *self.input, ui)
            }
            Commands::GetScenesList(args) => {
                let cmd = super::scenes_list::ScenesListCommand::new(args.clone());
                cmd.execute(self.client, &mut *self.input, ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(self.client, &mut *self.input, ui)
            }
        };

        if let Err(PlanetError::Api(err)) = &result {
            tracing::debug!(kind = ?err.kind(), "{} failed: {}", command.name(), err.message());
        }

        result
    }
}
