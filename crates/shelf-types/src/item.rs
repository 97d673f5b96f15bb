use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConstraintViolation;
use crate::id::ItemId;

/// A stored item record.
///
/// Invariants: `name` is non-empty and trimmed, `price >= 0.0`. Both are
/// enforced by the store at write time, so any `Item` read back from a
/// store satisfies them. `created_at` is set once at insert; `updated_at`
/// is refreshed on every successful mutation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Complete item payload, used for create and full-replace update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub price: f64,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Apply domain constraints: trim the name, require it non-empty,
    /// require a non-negative price. Returns the normalized draft.
    pub fn validated(self) -> Result<Self, ConstraintViolation> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ConstraintViolation::EmptyName);
        }
        if self.price < 0.0 {
            return Err(ConstraintViolation::NegativePrice);
        }
        Ok(Self {
            name,
            price: self.price,
        })
    }
}

/// Partial item payload for merge-style updates.
///
/// Absent fields are left untouched by a merge. Present fields are held to
/// the same constraints as a full update. Field presence itself is not
/// required here — an empty patch is legal and merges to a no-op apart
/// from refreshing `updated_at`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl ItemPatch {
    /// Returns `true` if the patch supplies no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }

    /// Validate and normalize whichever fields are present.
    pub fn validated(self) -> Result<Self, ConstraintViolation> {
        let name = match self.name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(ConstraintViolation::EmptyName);
                }
                Some(name)
            }
            None => None,
        };
        if let Some(price) = self.price {
            if price < 0.0 {
                return Err(ConstraintViolation::NegativePrice);
            }
        }
        Ok(Self {
            name,
            price: self.price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_trims_name() {
        let draft = ItemDraft::new(" Widget ", 9.99).validated().unwrap();
        assert_eq!(draft.name, "Widget");
        assert_eq!(draft.price, 9.99);
    }

    #[test]
    fn draft_rejects_blank_name() {
        let err = ItemDraft::new("   ", 1.0).validated().unwrap_err();
        assert_eq!(err, ConstraintViolation::EmptyName);
    }

    #[test]
    fn draft_rejects_negative_price() {
        let err = ItemDraft::new("Widget", -0.01).validated().unwrap_err();
        assert_eq!(err, ConstraintViolation::NegativePrice);
    }

    #[test]
    fn zero_price_is_valid() {
        assert!(ItemDraft::new("Widget", 0.0).validated().is_ok());
    }

    #[test]
    fn empty_patch_is_valid() {
        let patch = ItemPatch::default();
        assert!(patch.is_empty());
        assert!(patch.validated().is_ok());
    }

    #[test]
    fn patch_validates_present_fields() {
        let patch = ItemPatch {
            name: Some("  ".into()),
            price: None,
        };
        assert_eq!(
            patch.validated().unwrap_err(),
            ConstraintViolation::EmptyName
        );

        let patch = ItemPatch {
            name: None,
            price: Some(-1.0),
        };
        assert_eq!(
            patch.validated().unwrap_err(),
            ConstraintViolation::NegativePrice
        );
    }

    #[test]
    fn patch_trims_present_name() {
        let patch = ItemPatch {
            name: Some(" Gadget ".into()),
            price: None,
        };
        assert_eq!(patch.validated().unwrap().name.unwrap(), "Gadget");
    }

    #[test]
    fn item_serializes_camel_case() {
        let item = Item {
            id: ItemId::generate(),
            name: "Widget".into(),
            price: 9.99,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
