#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

//! Status classification and optimistic action coordination for one torrent.
//!
//! Layout:
//! - `classify/`: pure helpers deriving display state from a snapshot
//! - `coordinator.rs`: per-torrent pending-action state machine
//! - `dispatch.rs`: control requests issued against a [`ControlService`]
//! - `flow.rs`: confirmation menus sequenced through disclosures
//! - `card.rs`: the per-torrent owner wiring the pieces together
//! - `view.rs`: display-ready bundle rendered by the dashboard
//!
//! [`ControlService`]: torrdeck_model::ControlService

pub mod card;
pub mod classify;
pub mod coordinator;
pub mod dispatch;
pub mod flow;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use card::TorrentCard;
pub use coordinator::{ActionKind, MutationCoordinator, Resolution, SlotState, TaskOutcome};
pub use dispatch::{ActionDispatcher, ControlRequest, DispatchTask};
pub use flow::{
    ConfirmationFlow, DeleteChoice, Disclosure, DisclosureState, MenuEntry, OptionsEntry,
};
pub use view::{MainButton, TorrentView};
