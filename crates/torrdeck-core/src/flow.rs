//! Two-step confirmation menus in front of destructive or selection actions.
//!
//! # Design
//! - Menus are sequenced through caller-supplied [`Disclosure`] handles; the flow
//!   owns no rendering.
//! - A terminal choice closes every disclosure and yields one [`ControlRequest`].
//! - Choices made while the matching submenu is closed yield nothing.

use serde::Serialize;
use torrdeck_model::Category;
use tracing::debug;

use crate::dispatch::ControlRequest;

/// Open/close capability of a menu widget.
pub trait Disclosure {
    /// Show the menu.
    fn open(&mut self);
    /// Hide the menu.
    fn close(&mut self);
    /// Whether the menu is currently shown.
    fn is_open(&self) -> bool;
}

/// Plain in-memory disclosure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisclosureState {
    open: bool,
}

impl Disclosure for DisclosureState {
    fn open(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

/// Rendered menu row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    /// Text shown to the user.
    pub label: String,
    /// Whether the row is styled as destructive.
    pub danger: bool,
}

impl MenuEntry {
    /// Regular entry.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            danger: false,
        }
    }

    /// Destructive entry.
    #[must_use]
    pub fn danger(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            danger: true,
        }
    }
}

/// Entries of the top-level options menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionsEntry {
    /// Opens the delete confirmation submenu.
    RemoveTorrent,
    /// Opens the category submenu.
    ChangeCategory,
}

impl OptionsEntry {
    /// Entries in menu order.
    pub const ALL: [Self; 2] = [Self::RemoveTorrent, Self::ChangeCategory];

    /// Row rendered for the entry.
    #[must_use]
    pub fn entry(self) -> MenuEntry {
        match self {
            Self::RemoveTorrent => MenuEntry::danger("Remove Torrent"),
            Self::ChangeCategory => MenuEntry::new("Change Category"),
        }
    }
}

/// Terminal choices of the delete confirmation submenu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteChoice {
    /// Remove the torrent and its payload.
    DeleteFiles,
    /// Remove the torrent, keep the payload.
    RemoveTorrentOnly,
}

impl DeleteChoice {
    /// Choices in menu order.
    pub const ALL: [Self; 2] = [Self::DeleteFiles, Self::RemoveTorrentOnly];

    /// Row rendered for the choice.
    #[must_use]
    pub fn entry(self) -> MenuEntry {
        match self {
            Self::DeleteFiles => MenuEntry::danger("Delete Files"),
            Self::RemoveTorrentOnly => MenuEntry::new("Remove Torrent Only"),
        }
    }

    /// Request issued when the choice is confirmed.
    #[must_use]
    pub const fn request(self) -> ControlRequest {
        ControlRequest::Remove {
            delete_files: matches!(self, Self::DeleteFiles),
        }
    }
}

/// One row per category, in the order supplied.
#[must_use]
pub fn category_entries(categories: &[Category]) -> Vec<MenuEntry> {
    categories
        .iter()
        .map(|category| MenuEntry::new(category.name.clone()))
        .collect()
}

/// Options menu plus its two submenus.
#[derive(Clone, Debug, Default)]
pub struct ConfirmationFlow<D = DisclosureState> {
    options: D,
    delete_confirmation: D,
    category_change: D,
}

impl ConfirmationFlow<DisclosureState> {
    /// Flow over in-memory disclosures, all closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: Disclosure> ConfirmationFlow<D> {
    /// Flow over caller-supplied disclosures.
    pub const fn with_disclosures(options: D, delete_confirmation: D, category_change: D) -> Self {
        Self {
            options,
            delete_confirmation,
            category_change,
        }
    }

    /// Start an invocation by showing the options menu.
    pub fn open_options(&mut self) {
        self.delete_confirmation.close();
        self.category_change.close();
        self.options.open();
    }

    /// Pick an options entry; returns `false` when the options menu is closed.
    pub fn select_option(&mut self, entry: OptionsEntry) -> bool {
        if !self.options.is_open() {
            return false;
        }
        self.options.close();
        match entry {
            OptionsEntry::RemoveTorrent => self.delete_confirmation.open(),
            OptionsEntry::ChangeCategory => self.category_change.open(),
        }
        true
    }

    /// Confirm a delete choice.
    pub fn confirm_delete(&mut self, choice: DeleteChoice) -> Option<ControlRequest> {
        if !self.delete_confirmation.is_open() {
            debug!(?choice, "delete choice ignored; submenu closed");
            return None;
        }
        self.dismiss();
        Some(choice.request())
    }

    /// Pick the category at `index`; out-of-range picks leave the submenu open.
    pub fn choose_category(
        &mut self,
        categories: &[Category],
        index: usize,
    ) -> Option<ControlRequest> {
        if !self.category_change.is_open() {
            return None;
        }
        let category = categories.get(index)?;
        self.dismiss();
        Some(ControlRequest::SetCategory {
            name: category.name.clone(),
        })
    }

    /// Close every menu without issuing anything.
    pub fn dismiss(&mut self) {
        self.options.close();
        self.delete_confirmation.close();
        self.category_change.close();
    }

    /// Whether any menu is showing.
    pub fn is_active(&self) -> bool {
        self.options.is_open()
            || self.delete_confirmation.is_open()
            || self.category_change.is_open()
    }

    /// Options menu handle.
    pub const fn options(&self) -> &D {
        &self.options
    }

    /// Delete confirmation handle.
    pub const fn delete_confirmation(&self) -> &D {
        &self.delete_confirmation
    }

    /// Category submenu handle.
    pub const fn category_change(&self) -> &D {
        &self.category_change
    }
}
