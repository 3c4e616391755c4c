//! Query filters for the `menu_items` table.

/// Select predicates understood by the menu store.
#[derive(Debug, Clone)]
pub enum MenuFilter {
    /// Every row, including retired ones. Used by catalog management.
    All,
    /// Only rows with `active = true` - the items an operator may put on a
    /// new order.
    Selectable,
}
