use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A locally authored portfolio entry. Lives only for the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: u64,

    /// Ticker or label, uppercased (e.g., "AAPL").
    pub name: String,

    pub quantity: f64,

    /// Current value per unit.
    pub value: f64,

    /// Percentage change.
    pub change: f64,
}

/// The add-asset form. Numeric fields stay `None` until the user
/// enters something parseable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetDraft {
    pub name: String,
    pub quantity: Option<f64>,
    pub value: Option<f64>,
    pub change: Option<f64>,
}

/// Which field of the form an input event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Quantity,
    Value,
    Change,
}

impl AssetDraft {
    pub fn new(name: impl Into<String>, quantity: f64, value: f64, change: f64) -> Self {
        Self {
            name: name.into().to_uppercase(),
            quantity: Some(quantity),
            value: Some(value),
            change: Some(change),
        }
    }

    /// Apply raw text typed into one of the form inputs.
    /// Names are uppercased; numbers that fail to parse clear the field.
    pub fn set_field(&mut self, field: DraftField, raw: &str) {
        let number = || raw.trim().parse::<f64>().ok().filter(|n| n.is_finite());
        match field {
            DraftField::Name => self.name = raw.to_uppercase(),
            DraftField::Quantity => self.quantity = number(),
            DraftField::Value => self.value = number(),
            DraftField::Change => self.change = number(),
        }
    }

    /// Check every field is filled in and turn the draft into an asset.
    /// A zero quantity, value or change counts as not filled in.
    pub fn into_asset(self, id: u64) -> Result<Asset, CoreError> {
        let name = self.name.trim().to_uppercase();
        let filled = |n: Option<f64>| n.filter(|v| *v != 0.0);
        match (
            name.is_empty(),
            filled(self.quantity),
            filled(self.value),
            filled(self.change),
        ) {
            (false, Some(quantity), Some(value), Some(change)) => Ok(Asset {
                id,
                name,
                quantity,
                value,
                change,
            }),
            _ => Err(CoreError::ValidationError("Please fill out all fields.".into())),
        }
    }
}

/// The in-memory asset list with its id counter.
///
/// Ids come from a counter that only moves forward, so an id is never
/// handed out twice in one session, even after the newest asset is deleted.
#[derive(Debug, Clone, Default)]
pub struct AssetBook {
    assets: Vec<Asset>,
    next_id: u64,
}

impl AssetBook {
    pub fn new() -> Self {
        Self {
            assets: Vec::new(),
            next_id: 1,
        }
    }

    /// The demo holdings every fresh assets page starts with.
    pub fn seeded() -> Self {
        let assets: Vec<Asset> = [
            ("AAPL", 10.0, 150.0, 0.5),
            ("GOOGL", 5.0, 2500.0, -0.2),
            ("TSLA", 8.0, 700.0, 1.3),
        ]
        .into_iter()
        .zip(1u64..)
        .map(|((name, quantity, value, change), id)| Asset {
            id,
            name: name.to_string(),
            quantity,
            value,
            change,
        })
        .collect();
        let next_id = assets.len() as u64 + 1;
        Self { assets, next_id }
    }

    /// Validate and append a draft. Returns the id assigned to it.
    pub fn push(&mut self, draft: AssetDraft) -> Result<u64, CoreError> {
        let id = self.next_id.max(1);
        let asset = draft.into_asset(id)?;
        self.assets.push(asset);
        self.next_id = id + 1;
        Ok(id)
    }

    /// Remove the asset with `id`, returning it.
    pub fn remove(&mut self, id: u64) -> Result<Asset, CoreError> {
        let idx = self
            .assets
            .iter()
            .position(|a| a.id == id)
            .ok_or(CoreError::AssetNotFound(id))?;
        Ok(self.assets.remove(idx))
    }

    pub fn get(&self, id: u64) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Sum of `quantity * value` across all assets.
    pub fn total_value(&self) -> f64 {
        self.assets.iter().map(|a| a.quantity * a.value).sum()
    }
}
