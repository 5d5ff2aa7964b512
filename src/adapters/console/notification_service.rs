use crate::domain::{AudiobookPlayed, IssueArchived};
use crate::ports::notification_service::{NotificationService as NotificationServiceTrait, Result};
use std::cell::RefCell;
use std::io::{self, Stdout, Write};

/// Console implementation of NotificationService
///
/// Prints announcements as plain lines. Defaults to stdout; any writer can be
/// supplied for capturing output.
pub struct NotificationService<W: Write = Stdout> {
    out: RefCell<W>,
}

impl NotificationService<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> NotificationService<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn line(&self, message: std::fmt::Arguments<'_>) -> Result<()> {
        let mut out = self.out.borrow_mut();
        out.write_fmt(message)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}

impl<W: Write> NotificationServiceTrait for NotificationService<W> {
    fn announce_playback(&self, event: &AudiobookPlayed) -> Result<()> {
        self.line(format_args!("Playing audiobook: {}", event.title))
    }

    fn announce_archive(&self, event: &IssueArchived) -> Result<()> {
        self.line(format_args!(
            "Issue #{} of {} has been archived.",
            event.issue_number, event.title
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;

    #[test]
    fn test_announcements_are_written_as_lines() {
        let service = NotificationService::new(Vec::new());

        service
            .announce_playback(&AudiobookPlayed {
                item_id: ItemId::new(3),
                title: "The Alchemist".to_string(),
                duration_hours: 4.5,
            })
            .unwrap();
        service
            .announce_archive(&IssueArchived {
                item_id: ItemId::new(5),
                title: "National Geographic".to_string(),
                issue_number: 256,
            })
            .unwrap();

        let output = String::from_utf8(service.into_inner()).unwrap();
        assert_eq!(
            output,
            "Playing audiobook: The Alchemist\nIssue #256 of National Geographic has been archived.\n"
        );
    }
}
