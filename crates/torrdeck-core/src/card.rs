//! Per-torrent owner of the snapshot, its coordinator, and in-flight actions.
//!
//! # Design
//! - The card is the only mutator of its coordinator; spawned tasks report back
//!   over an unbounded channel and the card applies them on its own schedule.
//! - Snapshots for a different torrent are rejected rather than merged.
//! - In-flight calls are never cancelled; a newer snapshot only clears the busy flags.
//! - A remote call that panics or is aborted resolves as a failure, so its slot
//!   never stays pending.

use std::sync::Arc;

use tokio::sync::mpsc;
use torrdeck_model::{Category, ControlService, TorrentSnapshot};
use tracing::{debug, warn};

use crate::coordinator::{MutationCoordinator, Resolution, TaskOutcome};
use crate::dispatch::{ActionDispatcher, ControlRequest};
use crate::flow::{ConfirmationFlow, DeleteChoice, OptionsEntry};
use crate::view::TorrentView;

/// Dashboard card for a single torrent.
#[derive(Debug)]
pub struct TorrentCard {
    snapshot: TorrentSnapshot,
    categories: Vec<Category>,
    coordinator: MutationCoordinator,
    dispatcher: ActionDispatcher,
    flow: ConfirmationFlow,
    resolved_tx: mpsc::UnboundedSender<Resolution>,
    resolved_rx: mpsc::UnboundedReceiver<Resolution>,
    in_flight: usize,
}

impl TorrentCard {
    /// Create a card with both action slots idle.
    #[must_use]
    pub fn new(
        snapshot: TorrentSnapshot,
        categories: Vec<Category>,
        service: Arc<dyn ControlService>,
    ) -> Self {
        let (resolved_tx, resolved_rx) = mpsc::unbounded_channel();
        Self {
            snapshot,
            categories,
            coordinator: MutationCoordinator::new(),
            dispatcher: ActionDispatcher::new(service),
            flow: ConfirmationFlow::new(),
            resolved_tx,
            resolved_rx,
            in_flight: 0,
        }
    }

    /// Latest accepted snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &TorrentSnapshot {
        &self.snapshot
    }

    /// Categories offered by the category submenu.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Replace the category list.
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    /// Pending-action state.
    #[must_use]
    pub const fn coordinator(&self) -> &MutationCoordinator {
        &self.coordinator
    }

    /// Menu state.
    #[must_use]
    pub const fn flow(&self) -> &ConfirmationFlow {
        &self.flow
    }

    /// Remote calls whose resolution has not been applied yet.
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Display bundle for the current snapshot.
    #[must_use]
    pub fn view(&self) -> TorrentView {
        TorrentView::build(&self.snapshot, &self.coordinator)
    }

    /// Accept the next telemetry snapshot.
    ///
    /// Returns `true` when state or category changed and pending slots were reset.
    /// Snapshots for another torrent are logged and dropped.
    pub fn apply_snapshot(&mut self, next: TorrentSnapshot) -> bool {
        if next.id != self.snapshot.id {
            warn!(
                expected = %self.snapshot.id,
                received = %next.id,
                "snapshot for another torrent ignored"
            );
            return false;
        }
        let changed = self.coordinator.on_snapshot_changed(&self.snapshot, &next);
        self.snapshot = next;
        changed
    }

    /// Pause the torrent.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn pause(&mut self) {
        self.submit(ControlRequest::Pause);
    }

    /// Resume the torrent.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn resume(&mut self) {
        self.submit(ControlRequest::Resume);
    }

    /// Remove the torrent.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn remove(&mut self, delete_files: bool) {
        self.submit(ControlRequest::Remove { delete_files });
    }

    /// Move the torrent into a category.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn set_category(&mut self, name: impl Into<String>) {
        self.submit(ControlRequest::SetCategory { name: name.into() });
    }

    /// Dispatch a request and spawn its remote call.
    ///
    /// The matching slot is pending when this returns.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn submit(&mut self, request: ControlRequest) {
        let task = self
            .dispatcher
            .dispatch(&mut self.coordinator, &self.snapshot.id, request);
        let kind = task.kind();
        let resolved_tx = self.resolved_tx.clone();
        self.in_flight += 1;
        let call = tokio::spawn(task.resolve());
        tokio::spawn(async move {
            let resolution = match call.await {
                Ok(resolution) => resolution,
                Err(err) => {
                    warn!(slot = kind.as_str(), error = %err, "control task ended abnormally");
                    Resolution {
                        kind,
                        outcome: TaskOutcome::Failed,
                    }
                }
            };
            if resolved_tx.send(resolution).is_err() {
                debug!("card dropped before resolution arrived");
            }
        });
    }

    /// Apply every resolution that has already arrived; never waits.
    pub fn apply_resolutions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(resolution) = self.resolved_rx.try_recv() {
            self.apply_resolution(resolution);
            applied += 1;
        }
        applied
    }

    /// Wait for the next resolution and apply it.
    ///
    /// Returns `None` immediately when nothing is in flight.
    pub async fn next_resolution(&mut self) -> Option<Resolution> {
        if self.in_flight == 0 {
            return None;
        }
        let resolution = self.resolved_rx.recv().await?;
        self.apply_resolution(resolution);
        Some(resolution)
    }

    /// Show the options menu.
    pub fn open_options(&mut self) {
        self.flow.open_options();
    }

    /// Pick an options entry.
    pub fn select_option(&mut self, entry: OptionsEntry) -> bool {
        self.flow.select_option(entry)
    }

    /// Confirm a delete choice, dispatching the removal when the submenu is open.
    ///
    /// # Panics
    ///
    /// Panics when a removal is dispatched outside a tokio runtime.
    pub fn confirm_delete(&mut self, choice: DeleteChoice) -> bool {
        let Some(request) = self.flow.confirm_delete(choice) else {
            return false;
        };
        self.submit(request);
        true
    }

    /// Pick a category by index, dispatching the change when the submenu is open.
    ///
    /// # Panics
    ///
    /// Panics when a change is dispatched outside a tokio runtime.
    pub fn select_category(&mut self, index: usize) -> bool {
        let Some(request) = self.flow.choose_category(&self.categories, index) else {
            return false;
        };
        self.submit(request);
        true
    }

    /// Close every menu.
    pub fn dismiss_menus(&mut self) {
        self.flow.dismiss();
    }

    fn apply_resolution(&mut self, resolution: Resolution) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.coordinator.resolve(resolution);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::coordinator::ActionKind;
    use crate::testing::{RecordedCall, StubService};
    use torrdeck_model::TorrentState;

    fn card(service: Arc<StubService>) -> TorrentCard {
        TorrentCard::new(
            TorrentSnapshot::new("abc", "debian.iso", TorrentState::Downloading),
            vec![Category::new("linux"), Category::new("movies")],
            service,
        )
    }

    #[tokio::test]
    async fn snapshot_for_other_torrent_is_ignored() {
        let mut card = card(StubService::succeeding());
        card.pause();
        let stranger = TorrentSnapshot::new("zzz", "other", TorrentState::PausedDl);
        assert!(!card.apply_snapshot(stranger));
        assert_eq!(card.snapshot().id, "abc");
        assert!(card.coordinator().is_pending(ActionKind::MainAction));
    }

    #[tokio::test]
    async fn failed_pause_clears_main_slot() {
        let service = StubService::failing();
        let mut card = card(service.clone());
        card.pause();
        assert!(card.view().main_busy);

        let resolution = card.next_resolution().await;
        assert_eq!(resolution.map(|r| r.outcome), Some(TaskOutcome::Failed));
        assert!(card.coordinator().is_idle());
        assert_eq!(card.in_flight(), 0);
        assert_eq!(service.calls(), vec![RecordedCall::Pause("abc".into())]);
    }

    #[tokio::test]
    async fn panicking_call_resolves_as_failure() {
        let service = StubService::panicking();
        let mut card = card(service.clone());
        card.pause();
        assert!(card.coordinator().is_pending(ActionKind::MainAction));

        let resolution = tokio::time::timeout(Duration::from_secs(2), card.next_resolution())
            .await
            .ok()
            .flatten();
        assert_eq!(
            resolution,
            Some(Resolution {
                kind: ActionKind::MainAction,
                outcome: TaskOutcome::Failed,
            })
        );
        assert_eq!(card.in_flight(), 0);
        assert!(card.coordinator().is_idle());
        assert_eq!(service.calls(), vec![RecordedCall::Pause("abc".into())]);
    }

    #[tokio::test]
    async fn next_resolution_returns_none_when_idle() {
        let mut card = card(StubService::succeeding());
        assert!(card.next_resolution().await.is_none());
        assert_eq!(card.apply_resolutions(), 0);
    }

    #[tokio::test]
    async fn category_menu_dispatches_selected_category() {
        let service = StubService::succeeding();
        let mut card = card(service.clone());
        assert!(!card.select_category(0));

        card.open_options();
        assert!(card.select_option(OptionsEntry::ChangeCategory));
        assert!(card.select_category(1));
        assert!(card.view().category_busy);
        assert!(!card.flow().is_active());

        let _ = card.next_resolution().await;
        assert!(card.coordinator().is_pending(ActionKind::CategoryAction));

        let mut next = card.snapshot().clone();
        next.category = "movies".into();
        assert!(card.apply_snapshot(next));
        assert!(card.coordinator().is_idle());
        assert_eq!(
            service.calls(),
            vec![RecordedCall::SetCategory {
                id: "abc".into(),
                name: "movies".into()
            }]
        );
    }

    #[tokio::test]
    async fn delete_confirmation_dispatches_once() {
        let service = StubService::succeeding();
        let mut card = card(service.clone());
        card.open_options();
        card.select_option(OptionsEntry::RemoveTorrent);
        assert!(card.confirm_delete(DeleteChoice::RemoveTorrentOnly));
        assert!(!card.confirm_delete(DeleteChoice::DeleteFiles));
        assert_eq!(card.in_flight(), 1);

        let _ = card.next_resolution().await;
        assert_eq!(
            service.calls(),
            vec![RecordedCall::Remove {
                id: "abc".into(),
                delete_files: false
            }]
        );
    }
}
