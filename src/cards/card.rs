//! Card model: a display name plus three comparable attributes.
//!
//! Cards are immutable after creation. Identity matters: the engine tracks
//! cards by [`CardId`], never by attribute equality, because two distinct
//! cards may share every attribute value.

use serde::{Deserialize, Serialize};

/// One of the three comparable card attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Weight,
    Length,
    Lifespan,
}

impl Attribute {
    /// All attributes in their canonical order.
    ///
    /// The heuristic policy breaks score ties by this order, so it must stay
    /// stable.
    pub const ALL: [Attribute; 3] = [Attribute::Weight, Attribute::Length, Attribute::Lifespan];

    /// Lowercase name, for display and diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Attribute::Weight => "weight",
            Attribute::Length => "length",
            Attribute::Lifespan => "lifespan",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unique identifier for one card instance within a pool.
///
/// Assigned at pool creation and never reused; the conservation invariant
/// compares ids, not values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// An immutable card.
///
/// ```
/// use nature_duel::cards::{Attribute, Card, CardId};
///
/// let lion = Card::new(CardId::new(0), "Lion", 190, 250, 14);
/// assert_eq!(lion.value(Attribute::Weight), 190);
/// assert_eq!(format!("{}", lion), "Lion | weight:190 length:250 lifespan:14");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Instance identity within the pool.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Attribute values.
    pub weight: u32,
    pub length: u32,
    pub lifespan: u32,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, weight: u32, length: u32, lifespan: u32) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
            length,
            lifespan,
        }
    }

    /// Value of the given attribute.
    #[must_use]
    pub const fn value(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Weight => self.weight,
            Attribute::Length => self.length,
            Attribute::Lifespan => self.lifespan,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | weight:{} length:{} lifespan:{}",
            self.name, self.weight, self.length, self.lifespan
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_order() {
        assert_eq!(
            Attribute::ALL,
            [Attribute::Weight, Attribute::Length, Attribute::Lifespan]
        );
        assert_eq!(Attribute::Weight.as_str(), "weight");
        assert_eq!(format!("{}", Attribute::Lifespan), "lifespan");
    }

    #[test]
    fn test_card_id() {
        let id = CardId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Card(7)");
    }

    #[test]
    fn test_value_lookup() {
        let card = Card::new(CardId::new(0), "Tortoise", 300, 150, 100);
        assert_eq!(card.value(Attribute::Weight), 300);
        assert_eq!(card.value(Attribute::Length), 150);
        assert_eq!(card.value(Attribute::Lifespan), 100);
    }

    #[test]
    fn test_identity_not_value_equality() {
        // Same values, different identity
        let a = Card::new(CardId::new(1), "Twin", 10, 10, 10);
        let b = Card::new(CardId::new(2), "Twin", 10, 10, 10);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(CardId::new(3), "Eagle", 6, 220, 25);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
