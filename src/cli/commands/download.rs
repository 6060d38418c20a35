//! The `planet download` command.
//!
//! Fetches full scene images for ids given as arguments or piped on stdin.

use crate::api::SceneClient;
use crate::cli::args::{subcommand_usage, DownloadArgs};
use crate::error::Result;
use crate::input::{resolve_scene_ids, InputSource, SceneIds};
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// The download command implementation.
pub struct DownloadCommand {
    args: DownloadArgs,
}

impl DownloadCommand {
    /// Create a new download command.
    pub fn new(args: DownloadArgs) -> Self {
        Self { args }
    }
}

impl Command for DownloadCommand {
    fn execute(
        &self,
        client: &dyn SceneClient,
        input: &mut dyn InputSource,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let ids = scene_ids_or_usage(&self.args.scene_ids, "download", input, ui)?;

        let saved = client.fetch_scene_geotiffs(
            &ids,
            &self.args.scene_type.scene_type,
            self.args.product.as_str(),
        )?;
        tracing::debug!("Downloaded {} of {} scene(s)", saved.len(), ids.len());

        Ok(())
    }
}

/// Resolve scene ids, showing the command's usage when there are none to read.
pub(super) fn scene_ids_or_usage(
    args: &[String],
    command: &str,
    input: &mut dyn InputSource,
    ui: &mut dyn UserInterface,
) -> Result<Vec<String>> {
    match resolve_scene_ids(args, input)? {
        SceneIds::Resolved(ids) => Ok(ids),
        SceneIds::Missing => {
            ui.message(&subcommand_usage(command));
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ClientCall, MockClient};
    use crate::cli::args::Product;
    use crate::input::MockInput;
    use crate::ui::MockUI;

    fn args(ids: &[&str], product: Product) -> DownloadArgs {
        DownloadArgs {
            product,
            scene_ids: ids.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn explicit_ids_never_read_stdin() {
        let client = MockClient::new();
        let mut input = MockInput::piped(&["piped"]);
        let mut ui = MockUI::new();

        DownloadCommand::new(args(&["a", "b"], Product::Analytic))
            .execute(&client, &mut input, &mut ui)
            .unwrap();

        assert_eq!(input.reads(), 0);
        assert_eq!(
            client.calls(),
            vec![ClientCall::FetchSceneGeotiffs {
                ids: vec!["a".to_string(), "b".to_string()],
                scene_type: "ortho".to_string(),
                product: "analytic".to_string(),
            }]
        );
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn piped_ids_are_trimmed() {
        let client = MockClient::new();
        let mut input = MockInput::piped(&[" 2015_abc \n", "", "2015_def"]);
        let mut ui = MockUI::new();

        DownloadCommand::new(args(&[], Product::Band3))
            .execute(&client, &mut input, &mut ui)
            .unwrap();

        assert_eq!(
            client.calls(),
            vec![ClientCall::FetchSceneGeotiffs {
                ids: vec!["2015_abc".to_string(), "2015_def".to_string()],
                scene_type: "ortho".to_string(),
                product: "band_3".to_string(),
            }]
        );
    }

    #[test]
    fn terminal_shows_usage_and_fetches_nothing() {
        let client = MockClient::new();
        let mut input = MockInput::terminal();
        let mut ui = MockUI::new();

        DownloadCommand::new(args(&[], Product::Visual))
            .execute(&client, &mut input, &mut ui)
            .unwrap();

        assert!(ui.has_message("planet download"));
        assert_eq!(
            client.calls(),
            vec![ClientCall::FetchSceneGeotiffs {
                ids: Vec::new(),
                scene_type: "ortho".to_string(),
                product: "visual".to_string(),
            }]
        );
    }
}
