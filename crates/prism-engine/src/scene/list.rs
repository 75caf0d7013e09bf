use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::Color;

    fn rect_at(x: f32) -> Rect {
        Rect::new(x, 0.0, 10.0, 10.0)
    }

    fn pushed_x(item: &DrawItem) -> f32 {
        match &item.cmd {
            DrawCmd::Rect(r) => r.rect.origin.x,
            _ => panic!("expected rect"),
        }
    }

    // ── paint order ─────────────────────────────────────────────────────────

    #[test]
    fn higher_z_paints_later() {
        let mut list = DrawList::new();
        list.push_rect(ZIndex::new(5), rect_at(1.0), Color::transparent());
        list.push_rect(ZIndex::new(-1), rect_at(2.0), Color::transparent());
        list.push_rect(ZIndex::new(0), rect_at(3.0), Color::transparent());

        let xs: Vec<f32> = list.iter_in_paint_order().map(pushed_x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 1.0]);
    }

    #[test]
    fn equal_z_preserves_insertion_order() {
        let mut list = DrawList::new();
        for i in 0..4 {
            list.push_rect(ZIndex::new(7), rect_at(i as f32), Color::transparent());
        }

        let xs: Vec<f32> = list.iter_in_paint_order().map(pushed_x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn clear_resets_order_and_items() {
        let mut list = DrawList::new();
        list.push_rect(ZIndex::new(0), rect_at(1.0), Color::transparent());
        list.clear();

        assert!(list.items().is_empty());

        list.push_rect(ZIndex::new(0), rect_at(9.0), Color::transparent());
        assert_eq!(list.items()[0].key.order, 0);
    }
}
