use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use registrar_core::controller::DELETE_PROMPT;
use registrar_core::{
    DeleteOutcome, PageController, PageKind, RecordId, RecordKind, RegistrarConfig,
};

use crate::commands::{notifier, open_store, write_page};
use crate::utils::tui::confirm;

/// How the record to delete was named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Uid(RecordId),
    /// One-based, as numbered by `registrar list`.
    Position(usize),
}

fn parse_target(arg: &str) -> Result<Target> {
    if let Ok(uid) = arg.parse::<RecordId>() {
        return Ok(Target::Uid(uid));
    }
    match arg.parse::<usize>() {
        Ok(position) if position > 0 => Ok(Target::Position(position)),
        _ => anyhow::bail!("'{}' is neither a record id nor a position", arg),
    }
}

pub fn run(
    kind: RecordKind,
    target: &str,
    force: bool,
    html: Option<&Path>,
    config: &RegistrarConfig,
) -> Result<()> {
    let target = parse_target(target)?;

    // Deleting happens from the page that shows every collection.
    let mut controller =
        PageController::open(open_store(config)?, notifier(config), PageKind::Data)?;

    let confirmation = confirm(DELETE_PROMPT, force)?;
    let outcome = match target {
        Target::Uid(uid) => controller.delete(kind, uid, confirmation)?,
        Target::Position(position) => controller.delete_at(kind, position - 1, confirmation)?,
    };

    if outcome == DeleteOutcome::Cancelled {
        println!("{}", "Nothing deleted".dimmed());
    }
    if let Some(out) = html {
        write_page(&mut controller, out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_is_uid_or_position() {
        let uid = RecordId::new();
        assert_eq!(parse_target(&uid.to_string()).unwrap(), Target::Uid(uid));
        assert_eq!(parse_target("2").unwrap(), Target::Position(2));
        assert!(parse_target("0").is_err());
        assert!(parse_target("segundo").is_err());
    }
}
