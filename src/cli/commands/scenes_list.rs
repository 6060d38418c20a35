//! The `planet get-scenes-list` command.
//!
//! The area of interest comes from the argument, or from piped stdin when the
//! argument is `-` or left out. With neither, scenes are listed unfiltered.

use crate::api::SceneClient;
use crate::cli::args::ScenesListArgs;
use crate::cli::output::format_response;
use crate::error::Result;
use crate::input::{resolve_aoi, InputSource};
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// The get-scenes-list command implementation.
pub struct ScenesListCommand {
    args: ScenesListArgs,
}

impl ScenesListCommand {
    /// Create a new get-scenes-list command.
    pub fn new(args: ScenesListArgs) -> Self {
        Self { args }
    }
}

impl Command for ScenesListCommand {
    fn execute(
        &self,
        client: &dyn SceneClient,
        input: &mut dyn InputSource,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let aoi = resolve_aoi(self.args.aoi.as_deref(), input)?;
        if aoi.is_none() {
            tracing::debug!("No area of interest, listing all scenes");
        }

        let body = client.get_scenes_list(&self.args.scene_type.scene_type, aoi.as_deref())?;
        ui.message(&format_response(&body, self.args.pretty.pretty)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ClientCall, MockClient};
    use crate::cli::args::PrettyArgs;
    use crate::input::MockInput;
    use crate::ui::MockUI;

    fn args(aoi: Option<&str>, pretty: bool) -> ScenesListArgs {
        ScenesListArgs {
            pretty: PrettyArgs { pretty },
            aoi: aoi.map(str::to_string),
            ..Default::default()
        }
    }

    fn intersects(client: &MockClient) -> Option<String> {
        match client.calls().as_slice() {
            [ClientCall::GetScenesList { intersects, .. }] => intersects.clone(),
            other => panic!("unexpected calls: {:?}", other),
        }
    }

    #[test]
    fn terminal_without_aoi_has_no_filter() {
        let client = MockClient::new().with_scenes_list("{}");
        let mut input = MockInput::terminal();
        let mut ui = MockUI::new();

        ScenesListCommand::new(args(Some("-"), false))
            .execute(&client, &mut input, &mut ui)
            .unwrap();

        assert_eq!(intersects(&client), None);
        assert_eq!(ui.messages(), ["{}"]);
    }

    #[test]
    fn dash_with_pipe_joins_lines() {
        let client = MockClient::new();
        let mut input = MockInput::piped(&["  {\"type\": \"Point\",", "\"coordinates\": [0, 0]}  "]);
        let mut ui = MockUI::new();

        ScenesListCommand::new(args(Some("-"), false))
            .execute(&client, &mut input, &mut ui)
            .unwrap();

        assert_eq!(
            intersects(&client).as_deref(),
            Some("{\"type\": \"Point\",\"coordinates\": [0, 0]}")
        );
    }

    #[test]
    fn explicit_aoi_is_passed_through() {
        let client = MockClient::new();
        let mut input = MockInput::piped(&["ignored"]);
        let mut ui = MockUI::new();

        ScenesListCommand::new(args(Some("POINT(-122.4 37.7)"), false))
            .execute(&client, &mut input, &mut ui)
            .unwrap();

        assert_eq!(intersects(&client).as_deref(), Some("POINT(-122.4 37.7)"));
        assert_eq!(input.reads(), 0);
    }

    #[test]
    fn pretty_reformats_list() {
        let client = MockClient::new().with_scenes_list(r#"{"count":0,"features":[]}"#);
        let mut input = MockInput::terminal();
        let mut ui = MockUI::new();

        ScenesListCommand::new(args(None, true))
            .execute(&client, &mut input, &mut ui)
            .unwrap();

        assert_eq!(ui.messages(), ["{\n  \"count\": 0,\n  \"features\": []\n}"]);
    }
}
