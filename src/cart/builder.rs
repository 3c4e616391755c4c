use rust_decimal::Decimal;
use tracing::debug;

use super::error::CartError;
use crate::catalog::MenuCatalog;
use crate::model::OrderLine;

/// Assembles the line list for an in-progress order.
///
/// Holds the ordered lines (insertion order is display order) plus the
/// transient selection state: the currently chosen menu item id and the
/// pending quantity. Adding a line freezes a snapshot of the item and
/// clears the transient state for the next pick.
///
/// Selecting the same dish twice on purpose is normal order-taking (a
/// second round of drinks, say), so duplicate selections become separate
/// lines and are never merged.
#[derive(Debug)]
pub struct CartBuilder {
    lines: Vec<OrderLine>,
    selected_item: Option<String>,
    pending_quantity: u32,
}

impl Default for CartBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CartBuilder {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            selected_item: None,
            pending_quantity: 1,
        }
    }

    /// The lines added so far, in display order.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Marks a menu item as the current pick.
    pub fn select_item(&mut self, id: impl Into<String>) {
        self.selected_item = Some(id.into());
    }

    pub fn clear_selection(&mut self) {
        self.selected_item = None;
    }

    /// Sets the pending quantity verbatim. [`CartBuilder::add_line`] rejects
    /// anything below 1.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.pending_quantity = quantity;
    }

    /// Parses a user-typed quantity. Non-numeric or non-positive input
    /// clamps to the minimum of 1 - it is never accepted as zero.
    pub fn set_quantity_input(&mut self, raw: &str) {
        self.pending_quantity = raw
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|q| *q >= 1)
            .unwrap_or(1);
    }

    /// Appends a line for the current selection, freezing the item's name
    /// and price as of now.
    ///
    /// Fails without touching the cart when nothing is selected, the
    /// pending quantity is below 1, or the selection no longer resolves to
    /// a selectable item. On success the transient selection resets for
    /// the next pick.
    pub fn add_line(&mut self, catalog: &MenuCatalog) -> Result<(), CartError> {
        let selected = self
            .selected_item
            .as_deref()
            .ok_or(CartError::NothingSelected)?;
        if self.pending_quantity < 1 {
            return Err(CartError::InvalidQuantity(self.pending_quantity));
        }
        let item = catalog
            .resolve(selected)
            .ok_or_else(|| CartError::UnknownItem(selected.to_string()))?;

        let line = OrderLine::snapshot_of(item, self.pending_quantity);
        debug!(menu_item_id = %line.menu_item_id, quantity = line.quantity, "Line added");
        self.lines.push(line);

        self.selected_item = None;
        self.pending_quantity = 1;

        Ok(())
    }

    /// Removes and returns the line at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds. Callers remove lines the
    /// operator can see, so an invalid index is a programming error, not a
    /// user error.
    pub fn remove_line(&mut self, index: usize) -> OrderLine {
        self.lines.remove(index)
    }

    /// Sum of `price × quantity` across all lines. Zero for an empty cart.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(OrderLine::line_total).sum()
    }

    /// Clears lines and selection, ready for the next order. Invoked by
    /// the caller once a submission has succeeded.
    pub fn reset(&mut self) {
        self.lines.clear();
        self.selected_item = None;
        self.pending_quantity = 1;
    }
}
