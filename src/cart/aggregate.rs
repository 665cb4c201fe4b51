//! Cart aggregation
//!
//! A [`Cart`] is an ordered list of lines, unique by `(menu_item_id,
//! variant)`. Adding an existing key increments its quantity in place;
//! a new key is appended at the end. The catalog and the notification
//! observer are passed in by the caller so the logic runs without any
//! ambient state.

use super::{
    models::{checked_total, CartError, CartLine, CartView, LineSelection},
    observer::{deliver, CartNotice, CartObserver},
};
use crate::catalog::models::MenuItem;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds `selection` to the cart, merging with an existing line of the
    /// same item and variant.
    ///
    /// On merge the stored unit price is kept and the supplied one ignored.
    /// The observer is notified after the cart has changed; its failure is
    /// only logged.
    pub fn add_line(
        &mut self,
        catalog: &[MenuItem],
        selection: LineSelection,
        observer: &dyn CartObserver,
    ) -> Result<&[CartLine], CartError> {
        let notice = self.merge_line(catalog, selection)?;
        deliver(observer, &notice);
        Ok(&self.lines)
    }

    /// The mutation half of [`Cart::add_line`]: validates and merges
    /// `selection`, returning the notice for the caller to deliver.
    pub fn merge_line(
        &mut self,
        catalog: &[MenuItem],
        selection: LineSelection,
    ) -> Result<CartNotice, CartError> {
        let LineSelection {
            menu_item_id,
            variant,
            quantity,
            price,
        } = selection;

        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        if let Some(price) = price {
            if price < Decimal::ZERO {
                return Err(CartError::NegativePrice(price));
            }
        }

        let item = catalog
            .iter()
            .find(|i| i.id == menu_item_id)
            .ok_or_else(|| CartError::UnknownItem(menu_item_id.clone()))?;
        let offered = item.variant(&variant).ok_or_else(|| CartError::InvalidVariant {
            menu_item_id: menu_item_id.clone(),
            variant: variant.clone(),
        })?;

        let merged = match self
            .lines
            .iter()
            .position(|l| l.is_keyed(&menu_item_id, &variant))
        {
            Some(index) => {
                let line = &mut self.lines[index];
                let before = line.quantity;
                line.quantity = before.checked_add(quantity).ok_or_else(|| {
                    CartError::QuantityOverflow {
                        menu_item_id: menu_item_id.clone(),
                    }
                })?;
                Some((index, before))
            }
            None => {
                self.lines.push(CartLine {
                    menu_item_id,
                    name: item.name.clone(),
                    variant: variant.clone(),
                    quantity,
                    unit_price: price.unwrap_or(offered.price),
                });
                None
            }
        };

        if checked_total(&self.lines).is_none() {
            match merged {
                Some((index, before)) => self.lines[index].quantity = before,
                None => {
                    self.lines.pop();
                }
            }
            return Err(CartError::TotalOverflow {
                menu_item_id: item.id.clone(),
            });
        }

        Ok(CartNotice::added(&item.name, &variant, quantity))
    }

    /// Sets the quantity of an existing line; 0 removes it.
    pub fn set_quantity(
        &mut self,
        menu_item_id: &str,
        variant: &str,
        quantity: u32,
    ) -> Result<&[CartLine], CartError> {
        if quantity == 0 {
            self.remove_line(menu_item_id, variant)?;
            return Ok(&self.lines);
        }

        let index = self
            .lines
            .iter()
            .position(|l| l.is_keyed(menu_item_id, variant))
            .ok_or_else(|| CartError::LineNotFound {
                menu_item_id: menu_item_id.to_string(),
                variant: variant.to_string(),
            })?;
        let before = std::mem::replace(&mut self.lines[index].quantity, quantity);

        if checked_total(&self.lines).is_none() {
            self.lines[index].quantity = before;
            return Err(CartError::TotalOverflow {
                menu_item_id: menu_item_id.to_string(),
            });
        }

        Ok(&self.lines)
    }

    /// Takes ordered `lines` out of the cart. Quantities added since the
    /// order was drafted stay; lines that reach zero are dropped.
    pub fn deduct(&mut self, lines: &[CartLine]) {
        for ordered in lines {
            if let Some(line) = self
                .lines
                .iter_mut()
                .find(|l| l.is_keyed(&ordered.menu_item_id, &ordered.variant))
            {
                line.quantity = line.quantity.saturating_sub(ordered.quantity);
            }
        }
        self.lines.retain(|l| l.quantity > 0);
    }

    /// Removes a line, returning it. Remaining lines keep their order.
    pub fn remove_line(&mut self, menu_item_id: &str, variant: &str) -> Result<CartLine, CartError> {
        let index = self
            .lines
            .iter()
            .position(|l| l.is_keyed(menu_item_id, variant))
            .ok_or_else(|| CartError::LineNotFound {
                menu_item_id: menu_item_id.to_string(),
                variant: variant.to_string(),
            })?;

        Ok(self.lines.remove(index))
    }

    /// Sum of quantity × unit price over all lines
    pub fn total(&self) -> Decimal {
        // Every change that would overflow the total is rolled back.
        checked_total(&self.lines).unwrap_or_default()
    }

    /// Sum of quantities over all lines
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Snapshot of the lines with derived totals
    pub fn view(&self) -> CartView {
        CartView {
            items: self.lines.clone(),
            total: self.total(),
            item_count: self.item_count(),
        }
    }
}
