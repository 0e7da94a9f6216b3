//! Identifier aliases shared across the crate.

/// Opaque identifier of a basketable item. Only values `>= 1` are valid.
pub type ItemRef = i64;

/// Basket number, unique within one owner's collection.
pub type BasketId = i64;

/// Identifier of the user a collection belongs to.
pub type OwnerId = i64;

/// Number of the default basket. It always exists and cannot be removed.
pub const DEFAULT_ID: BasketId = 1;

/// Whether `item` is a reference a basket may hold.
#[must_use]
pub const fn is_valid_ref(item: ItemRef) -> bool {
    item >= 1
}
