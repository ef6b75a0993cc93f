use crate::errors::CoreError;
use crate::models::asset::{Asset, AssetBook, AssetDraft, DraftField};
use crate::services::asset_service::AssetService;

use super::format::{format_percent, format_usd, ChangeDirection};

/// One formatted row of the assets table.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRow {
    pub id: u64,
    pub name: String,
    pub quantity: String,
    pub value: String,
    pub change: String,
    pub direction: ChangeDirection,
}

impl From<&Asset> for AssetRow {
    fn from(asset: &Asset) -> Self {
        Self {
            id: asset.id,
            name: asset.name.clone(),
            quantity: asset.quantity.to_string(),
            value: format_usd(asset.value),
            change: format_percent(asset.change),
            direction: ChangeDirection::of(asset.change),
        }
    }
}

/// The assets management page: a seeded, session-only list with an
/// add form, per-row delete and a search box.
#[derive(Debug)]
pub struct AssetsView {
    book: AssetBook,
    draft: AssetDraft,
    search: String,
    show_form: bool,
    /// Last validation message from the form, cleared on success.
    notice: Option<String>,
}

impl AssetsView {
    pub const HEADING: &'static str = "Assets Management";
    pub const SEARCH_PLACEHOLDER: &'static str = "Search by asset name...";
    pub const COLUMNS: [&'static str; 5] = [
        "Asset Name",
        "Quantity",
        "Current Value",
        "Percentage Change",
        "Actions",
    ];

    pub fn new() -> Self {
        Self::with_book(AssetBook::seeded())
    }

    pub fn with_book(book: AssetBook) -> Self {
        Self {
            book,
            draft: AssetDraft::default(),
            search: String::new(),
            show_form: false,
            notice: None,
        }
    }

    pub fn book(&self) -> &AssetBook {
        &self.book
    }

    pub fn draft(&self) -> &AssetDraft {
        &self.draft
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_form_open(&self) -> bool {
        self.show_form
    }

    /// Open or close the add form. Returns the new state.
    pub fn toggle_form(&mut self) -> bool {
        self.show_form = !self.show_form;
        self.show_form
    }

    pub fn form_button_label(&self) -> &'static str {
        if self.show_form {
            "Close"
        } else {
            "+ Add Asset"
        }
    }

    /// Feed raw input text into one form field.
    pub fn set_field(&mut self, field: DraftField, raw: &str) {
        self.draft.set_field(field, raw);
    }

    /// Submit the form. On success the form is cleared and the new id
    /// returned; on failure the draft is kept and a notice is set.
    pub fn submit(&mut self) -> Result<u64, CoreError> {
        let draft = std::mem::take(&mut self.draft);
        match AssetService::new().add_asset(&mut self.book, draft.clone()) {
            Ok(id) => {
                self.notice = None;
                Ok(id)
            }
            Err(e) => {
                self.notice = Some(e.to_string());
                self.draft = draft;
                Err(e)
            }
        }
    }

    /// Remove one asset by id.
    pub fn delete(&mut self, id: u64) -> Result<Asset, CoreError> {
        AssetService::new().delete_asset(&mut self.book, id)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Rows matching the current search.
    pub fn rows(&self) -> Vec<AssetRow> {
        AssetService::new()
            .search(&self.book, &self.search)
            .into_iter()
            .map(AssetRow::from)
            .collect()
    }
}

impl Default for AssetsView {
    fn default() -> Self {
        Self::new()
    }
}
