use crate::commands::{CmdMessage, CmdResult, OrderpadPaths};
use crate::config::OrderpadConfig;
use crate::error::{OrderpadError, Result};
use crate::model::Scope;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    SetConfirmDelete(bool),
}

pub fn run(paths: &OrderpadPaths, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    let mut config = OrderpadConfig::load(&dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::SetConfirmDelete(value) => {
            config.confirm_delete = value;
            config.save(&dir)?;
            result.add_message(CmdMessage::success(format!(
                "confirm-delete set to {}",
                value
            )));
        }
    }

    Ok(result.with_config(config))
}

pub fn parse_bool(value: &str) -> Result<bool> {
    match value {
        "true" | "on" | "yes" => Ok(true),
        "false" | "off" | "no" => Ok(false),
        other => Err(OrderpadError::Api(format!(
            "Expected true or false, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_show_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let paths = OrderpadPaths {
            project: Some(dir.path().to_path_buf()),
            global: dir.path().join("global"),
        };

        run(
            &paths,
            Scope::Project,
            ConfigAction::SetConfirmDelete(false),
        )
        .unwrap();

        let result = run(&paths, Scope::Project, ConfigAction::ShowAll).unwrap();
        assert!(!result.config.unwrap().confirm_delete);
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool("on").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(parse_bool("maybe").is_err());
    }
}
