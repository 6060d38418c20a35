//! The `planet thumbnails` command.

use crate::api::SceneClient;
use crate::cli::args::ThumbnailsArgs;
use crate::error::Result;
use crate::input::InputSource;
use crate::ui::UserInterface;

use super::dispatcher::Command;
use super::download::scene_ids_or_usage;

/// The thumbnails command implementation.
pub struct ThumbnailsCommand {
    args: ThumbnailsArgs,
}

impl ThumbnailsCommand {
    /// Create a new thumbnails command.
    pub fn new(args: ThumbnailsArgs) -> Self {
        Self { args }
    }
}

impl Command for ThumbnailsCommand {
    fn execute(
        &self,
        client: &dyn SceneClient,
        input: &mut dyn InputSource,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let ids = scene_ids_or_usage(&self.args.scene_ids, "thumbnails", input, ui)?;

        let saved = client.fetch_scene_thumbnails(
            &ids,
            &self.args.scene_type.scene_type,
            self.args.size.as_str(),
            self.args.format.as_str(),
        )?;
        tracing::debug!("Fetched {} thumbnail(s)", saved.len());

        Ok(())
    }
}
