// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena of rendered row slots.
//!
//! Slots are addressed by the row's position in the rendered window. When the
//! list scrolls, a slot's occupant is replaced in place; the backing storage
//! only ever grows to the widest window seen.

use alloc::string::String;
use alloc::vec::Vec;

use spanscope_space::Extent;

use crate::element::{ColumnRef, ElementId, SpanRef};
use crate::tree::NodeRef;

/// Side of the timeline an off-screen span lies on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ArrowSide {
    /// The span ends before the view starts.
    #[default]
    Left,
    /// The span starts after the view ends.
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ArrowSlot {
    pub(crate) element: ElementId,
    pub(crate) space: Extent,
    pub(crate) visible: bool,
    pub(crate) side: ArrowSide,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TextSlot {
    pub(crate) element: ElementId,
    pub(crate) space: Extent,
    pub(crate) text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct RowSlot {
    pub(crate) list: Option<ColumnRef>,
    pub(crate) span_list: Option<ColumnRef>,
    pub(crate) span_bar: Option<SpanRef>,
    pub(crate) invisible_bar: Option<SpanRef>,
    pub(crate) arrow: Option<ArrowSlot>,
    pub(crate) text: Option<TextSlot>,
}

impl RowSlot {
    pub(crate) fn set_text(&mut self, element: ElementId, text: &str, space: Extent) {
        match &mut self.text {
            Some(slot) => {
                slot.element = element;
                slot.space = space;
                slot.text.clear();
                slot.text.push_str(text);
            }
            None => {
                self.text = Some(TextSlot {
                    element,
                    space,
                    text: String::from(text),
                });
            }
        }
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct RowSlots {
    slots: Vec<RowSlot>,
}

impl RowSlots {
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&RowSlot> {
        self.slots.get(index)
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut RowSlot {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, RowSlot::default);
        }
        &mut self.slots[index]
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut RowSlot)> + '_ {
        self.slots.iter_mut().enumerate()
    }

    /// Node rendered in the list column of row `index`.
    pub(crate) fn list_node(&self, index: usize) -> Option<&NodeRef> {
        self.get(index)?.list.as_ref().map(|cell| &cell.node)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use spanscope_space::Extent;

    use super::RowSlots;
    use crate::element::ElementId;

    #[test]
    fn slots_grow_and_are_reused() {
        let mut rows = RowSlots::default();
        rows.slot_mut(3)
            .set_text(ElementId(1), "GET /api", Extent::new(0.0, 1.0));
        assert_eq!(rows.len(), 4);
        assert!(rows.get(0).is_some_and(|slot| slot.text.is_none()));

        let capacity = rows
            .get(3)
            .and_then(|slot| slot.text.as_ref())
            .map(|t| t.text.capacity())
            .unwrap_or_default();
        rows.slot_mut(3)
            .set_text(ElementId(2), "db", Extent::new(1.0, 1.0));
        let text = rows.get(3).and_then(|slot| slot.text.as_ref()).unwrap();
        assert_eq!(text.text, "db");
        assert_eq!(text.element, ElementId(2));
        assert_eq!(text.text.capacity(), capacity);
        assert_eq!(rows.len(), 4);
    }
}
