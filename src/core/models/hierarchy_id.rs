//! Identifiers for nodes of a project hierarchy
//!
//! # Examples
//!
//! ```
//! use tfm_values::core::models::HierarchyId;
//!
//! let id = HierarchyId::new(42);
//! assert_eq!(id.id(), 42);
//! assert!(!id.is_root());
//! assert!(HierarchyId::ROOT.is_root());
//! assert!(HierarchyId::NIL.is_nil_or_empty());
//! ```

/// An item identifier within a project hierarchy
///
/// Conversion to and from the raw integer is always explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HierarchyId(u32);

impl HierarchyId {
    /// The hierarchy as a whole, as opposed to a single item
    pub const ROOT: Self = Self(0xFFFF_FFFE);

    /// The currently selected items, which may include the root
    pub const SELECTION: Self = Self(0xFFFF_FFFD);

    /// No item; used when nothing is selected
    pub const NIL: Self = Self(0xFFFF_FFFF);

    /// An empty item
    pub const EMPTY: Self = Self(0);

    /// Wrap a raw item identifier
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw item identifier
    #[must_use]
    pub const fn id(self) -> u32 {
        self.0
    }

    /// Whether this is [`Self::ROOT`]
    #[must_use]
    pub const fn is_root(self) -> bool {
        self.0 == Self::ROOT.0
    }

    /// Whether this is [`Self::SELECTION`]
    #[must_use]
    pub const fn is_selection(self) -> bool {
        self.0 == Self::SELECTION.0
    }

    /// Whether this is [`Self::NIL`]
    #[must_use]
    pub const fn is_nil(self) -> bool {
        self.0 == Self::NIL.0
    }

    /// Whether this is [`Self::EMPTY`]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    /// Whether this is [`Self::NIL`] or [`Self::EMPTY`]
    #[must_use]
    pub const fn is_nil_or_empty(self) -> bool {
        self.is_nil() || self.is_empty()
    }
}

impl From<u32> for HierarchyId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl From<HierarchyId> for u32 {
    fn from(id: HierarchyId) -> Self {
        id.id()
    }
}

impl std::fmt::Display for HierarchyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
