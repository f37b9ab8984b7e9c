use std::borrow::{Borrow, BorrowMut};

use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use registrar_core::notify::NoticeTiming;
use registrar_core::{Confirmation, NoticeBoard, Notifier, Severity};

/// Prints notices as colored lines (errors go to stderr) and keeps them on a
/// board so they can be drawn into a saved page.
pub struct TerminalNotifier {
    board: NoticeBoard,
}

impl TerminalNotifier {
    pub fn new(timing: NoticeTiming) -> Self {
        TerminalNotifier {
            board: NoticeBoard::new(timing),
        }
    }
}

impl Notifier for TerminalNotifier {
    fn show(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Success => println!("  {}", message.green()),
            Severity::Info => println!("  {}", message.blue()),
            Severity::Error => eprintln!("  {}", message.red()),
        }
        self.board.show(message, severity);
    }
}

impl Borrow<NoticeBoard> for TerminalNotifier {
    fn borrow(&self) -> &NoticeBoard {
        &self.board
    }
}

impl BorrowMut<NoticeBoard> for TerminalNotifier {
    fn borrow_mut(&mut self) -> &mut NoticeBoard {
        &mut self.board
    }
}

/// Ask a yes/no question, defaulting to no. `force` answers yes without asking.
pub fn confirm(prompt: &str, force: bool) -> Result<Confirmation> {
    if force {
        return Ok(Confirmation::Confirmed);
    }

    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;

    Ok(confirmed.into())
}
