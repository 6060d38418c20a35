//! The `planet metadata` command.

use crate::api::SceneClient;
use crate::cli::args::MetadataArgs;
use crate::cli::output::format_response;
use crate::error::Result;
use crate::input::InputSource;
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// Prints the metadata of one scene.
pub struct MetadataCommand {
    args: MetadataArgs,
}

impl MetadataCommand {
    /// Create a new metadata command.
    pub fn new(args: MetadataArgs) -> Self {
        Self { args }
    }
}

impl Command for MetadataCommand {
    fn execute(
        &self,
        client: &dyn SceneClient,
        _input: &mut dyn InputSource,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let body = client.fetch_scene_info(&self.args.id, &self.args.scene_type.scene_type)?;
        ui.message(&format_response(&body, self.args.pretty.pretty)?);
        Ok(())
    }
}
