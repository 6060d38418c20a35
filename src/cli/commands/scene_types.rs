//! The `planet list-all-scene-types` command.

use crate::api::SceneClient;
use crate::error::Result;
use crate::input::InputSource;
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// Prints the raw list of scene types.
#[derive(Debug, Default)]
pub struct SceneTypesCommand;

impl SceneTypesCommand {
    /// Create a new list-all-scene-types command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for SceneTypesCommand {
    fn execute(
        &self,
        client: &dyn SceneClient,
        _input: &mut dyn InputSource,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let body = client.list_all_scene_types()?;
        ui.message(&body);
        Ok(())
    }
}
