use serde::{Deserialize, Serialize};

/// Store - one catalog listing
///
/// A Store is an id-less value entity: the surrogate integer key is assigned
/// by storage and never travels with the value. Callers that need the key
/// resolve it through the repository.
///
/// `name` is unique across the catalog; uniqueness is enforced by the storage
/// schema, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Display name, unique across the catalog
    pub name: String,

    /// Street address
    pub address: String,

    /// Free-form category label (e.g. "Cafe", "Restaurant")
    pub category: String,

    /// Path to the cover image, managed by the collaborator layer
    pub image_path: String,

    /// Contact information (phone, email - opaque to this layer)
    pub contact: String,
}

impl Store {
    /// Create a new Store value
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        category: impl Into<String>,
        image_path: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            category: category.into(),
            image_path: image_path.into(),
            contact: contact.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store() {
        let store = Store::new(
            "Corner Cafe",
            "12 High St",
            "Cafe",
            "images/corner.png",
            "corner@example.com",
        );

        assert_eq!(store.name, "Corner Cafe");
        assert_eq!(store.address, "12 High St");
        assert_eq!(store.category, "Cafe");
        assert_eq!(store.image_path, "images/corner.png");
        assert_eq!(store.contact, "corner@example.com");
    }

    #[test]
    fn test_store_equality_is_by_value() {
        let a = Store::new("A", "addr", "cat", "img", "c");
        let b = Store::new("A", "addr", "cat", "img", "c");
        assert_eq!(a, b);

        let c = Store::new("A", "other addr", "cat", "img", "c");
        assert_ne!(a, c);
    }

    #[test]
    fn test_store_serde_round_trip() {
        let store = Store::new("A", "addr", "cat", "img/a.png", "c");
        let json = serde_json::to_string(&store).unwrap();
        let back: Store = serde_json::from_str(&json).unwrap();
        assert_eq!(store, back);
    }
}
