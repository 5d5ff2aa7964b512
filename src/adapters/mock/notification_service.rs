use crate::domain::{AudiobookPlayed, DomainEvent, IssueArchived};
use crate::ports::notification_service::{NotificationService as NotificationServiceTrait, Result};
use std::sync::Mutex;

/// Mock implementation of NotificationService
///
/// Does not deliver anything. Records every announcement as a domain event
/// so tests can assert on what would have been sent.
#[derive(Default)]
pub struct NotificationService {
    sent: Mutex<Vec<DomainEvent>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Announcements received so far, oldest first
    pub fn sent(&self) -> Vec<DomainEvent> {
        self.sent.lock().unwrap().clone()
    }
}

impl NotificationServiceTrait for NotificationService {
    fn announce_playback(&self, event: &AudiobookPlayed) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push(DomainEvent::AudiobookPlayed(event.clone()));
        Ok(())
    }

    fn announce_archive(&self, event: &IssueArchived) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push(DomainEvent::IssueArchived(event.clone()));
        Ok(())
    }
}
