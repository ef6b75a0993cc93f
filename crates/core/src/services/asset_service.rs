use crate::errors::CoreError;
use crate::models::asset::{Asset, AssetBook, AssetDraft};
use crate::views::search::{filter, Searchable};

/// Adds, removes and searches assets in an `AssetBook`.
///
/// No I/O; operates on the book it is handed.
pub struct AssetService;

impl AssetService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the draft and append it. Returns the new asset's id.
    pub fn add_asset(&self, book: &mut AssetBook, draft: AssetDraft) -> Result<u64, CoreError> {
        let id = book.push(draft)?;
        log::debug!("Added asset {id}");
        Ok(id)
    }

    /// Remove exactly the asset with `id`.
    pub fn delete_asset(&self, book: &mut AssetBook, id: u64) -> Result<Asset, CoreError> {
        let removed = book.remove(id)?;
        log::debug!("Deleted asset {id} ({})", removed.name);
        Ok(removed)
    }

    /// Assets whose name, quantity, value or change contains `query`
    /// (case-insensitive). An empty query returns everything.
    pub fn search<'a>(&self, book: &'a AssetBook, query: &str) -> Vec<&'a Asset> {
        filter(book.assets(), query)
    }
}

impl Default for AssetService {
    fn default() -> Self {
        Self::new()
    }
}

impl Searchable for Asset {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.quantity.to_string().contains(needle)
            || self.value.to_string().contains(needle)
            || self.change.to_string().contains(needle)
    }
}
