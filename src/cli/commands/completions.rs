//! Shell completions generation.
//!
//! The `planet completions` command generates shell completion scripts.

use clap::CommandFactory;

use crate::api::SceneClient;
use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::input::InputSource;
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    /// Render the completion script.
    pub fn script(&self) -> Result<String> {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(self.args.shell, &mut cmd, "planet", &mut buf);
        String::from_utf8(buf)
            .map_err(|e| anyhow::anyhow!("Completion script is not UTF-8: {}", e).into())
    }
}

impl Command for CompletionsCommand {
    fn execute(
        &self,
        _client: &dyn SceneClient,
        _input: &mut dyn InputSource,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let script = self.script()?;
        ui.message(script.trim_end());
        Ok(())
    }
}
