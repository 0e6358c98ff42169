//! Open/close state machine for a single modal.
//!
//! ```text
//! Closed --open--> Opening --timer--> Open --close--> Closing --settle--> Closed
//!                     \------------------close-------/
//! ```
//!
//! Opening hands out an [`OpenTicket`]. The ticket is only honoured while the
//! modal is still in the `Opening` phase it was issued for, so a timer left
//! over from an earlier open cannot reveal a modal that has since been closed
//! and reopened. The uncancelled `setTimeout` this replaces could do exactly
//! that on a quick close/reopen.

use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    /// Open requested, waiting for the delay before becoming visible
    Opening(OpenTicket),
    Open,
    /// Close requested, resources not yet released
    Closing,
}

/// Identifies one pending open-delay timer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenTicket(u64);

#[derive(Debug, Default)]
pub struct Lifecycle {
    phase: Phase,
    issued: u64,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True from the open request until the close request
    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Opening(_) | Phase::Open)
    }

    /// Drives the CSS transition; only true once the delay has elapsed
    pub fn is_visible(&self) -> bool {
        self.phase == Phase::Open
    }

    /// Request opening. Returns the ticket to schedule the reveal with, or
    /// `None` when the modal is already opening or open.
    pub fn open(&mut self) -> Option<OpenTicket> {
        match self.phase {
            Phase::Opening(_) | Phase::Open => None,
            Phase::Closed | Phase::Closing => {
                self.issued += 1;
                let ticket = OpenTicket(self.issued);
                debug!("Modal opening (ticket {})", ticket.0);
                self.phase = Phase::Opening(ticket);
                Some(ticket)
            }
        }
    }

    /// The open delay for `ticket` has elapsed. Returns whether the modal
    /// became visible.
    pub fn reveal(&mut self, ticket: OpenTicket) -> bool {
        match self.phase {
            Phase::Opening(pending) if pending == ticket => {
                debug!("Modal visible (ticket {})", ticket.0);
                self.phase = Phase::Open;
                true
            }
            _ => {
                debug!(
                    "Ignoring stale open timer (ticket {}, phase {:?})",
                    ticket.0, self.phase
                );
                false
            }
        }
    }

    /// Request closing. Visibility drops immediately and any pending reveal
    /// is cancelled. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        match self.phase {
            Phase::Opening(_) | Phase::Open => {
                debug!("Modal closing");
                self.phase = Phase::Closing;
                true
            }
            Phase::Closed | Phase::Closing => false,
        }
    }

    /// Finish a close once its resources have been released
    pub fn settle(&mut self) {
        if self.phase == Phase::Closing {
            self.phase = Phase::Closed;
        }
    }
}
