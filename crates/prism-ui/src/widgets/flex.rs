use prism_engine::coords::{Rect, Vec2};

use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

// ── Align ─────────────────────────────────────────────────────────────────

/// Cross-axis alignment inside a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Children fill the full cross-axis extent (default).
    #[default]
    Stretch,
    /// Children are placed at the start of the cross axis.
    Start,
    /// Children are centered on the cross axis.
    Center,
    /// Children are placed at the end of the cross axis.
    End,
}

// ── Spacer ────────────────────────────────────────────────────────────────

/// A zero-sized child that flex containers expand to fill leftover space on
/// their main axis.
///
/// ```rust,ignore
/// // Push the trailing button to the right edge:
/// Row::new().child(label).child(Spacer).child(button)
/// ```
pub struct Spacer;

impl Widget for Spacer {
    fn measure(&self, _constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        // Deliberately ignores the constraint minimum: flex containers detect
        // spacers by their exact zero size.
        Vec2::zero()
    }

    fn paint(&self, _painter: &mut Painter, _rect: Rect) {}
}

// ── spacer distribution ───────────────────────────────────────────────────

fn spacer_count(sizes: &[Vec2]) -> usize {
    sizes.iter().filter(|s| s.x == 0.0 && s.y == 0.0).count()
}

/// Expands zero-sized children to share the leftover width of a row.
fn expand_spacers_x(sizes: &mut [Vec2], available_w: f32, spacing: f32) {
    let n = spacer_count(sizes);
    if n == 0 {
        return;
    }
    let fixed_w: f32 = sizes.iter().map(|s| s.x).sum();
    let spacing_total = (sizes.len().saturating_sub(1)) as f32 * spacing;
    let share = ((available_w - fixed_w - spacing_total).max(0.0)) / n as f32;
    for s in sizes.iter_mut() {
        if s.x == 0.0 && s.y == 0.0 {
            s.x = share;
        }
    }
}

/// Expands zero-sized children to share the leftover height of a column.
fn expand_spacers_y(sizes: &mut [Vec2], available_h: f32, spacing: f32) {
    let n = spacer_count(sizes);
    if n == 0 {
        return;
    }
    let fixed_h: f32 = sizes.iter().map(|s| s.y).sum();
    let spacing_total = (sizes.len().saturating_sub(1)) as f32 * spacing;
    let share = ((available_h - fixed_h - spacing_total).max(0.0)) / n as f32;
    for s in sizes.iter_mut() {
        if s.x == 0.0 && s.y == 0.0 {
            s.y = share;
        }
    }
}

// ── Column ────────────────────────────────────────────────────────────────

/// Vertical flex container. Children are stacked top to bottom.
///
/// Zero-sized children ([`Spacer`]) absorb the leftover height, so
/// `Column::new().child(Spacer).child(bar)` pins `bar` to the bottom edge.
///
/// # Example
/// ```rust,ignore
/// Column::new()
///     .padding(Edges::all(16.0))
///     .spacing(8.0)
///     .child(Text::new("Title", font, 20.0, white))
///     .child(Text::new("Body",  font, 14.0, grey))
/// ```
pub struct Column {
    children: Vec<Element>,
    spacing: f32,
    padding: Edges,
    cross_align: Align,
}

impl Column {
    pub fn new() -> Self {
        Self { children: Vec::new(), spacing: 0.0, padding: Edges::default(), cross_align: Align::Stretch }
    }

    pub fn spacing(mut self, v: f32) -> Self {
        self.spacing = v;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn cross_align(mut self, align: Align) -> Self {
        self.cross_align = align;
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    // ── layout helpers ────────────────────────────────────────────────────

    fn inner_width(&self, available: f32) -> f32 {
        (available - self.padding.h()).max(0.0)
    }

    fn child_constraints(&self, inner_w: f32) -> Constraints {
        match self.cross_align {
            Align::Stretch => {
                // Only enforce the width when it is actually constrained.
                // When inner_w is INFINITY (e.g. Column inside an unconstrained
                // Row) children should size naturally, not to ∞.
                let min_x = if inner_w.is_finite() { inner_w } else { 0.0 };
                Constraints {
                    min: Vec2::new(min_x, 0.0),
                    max: Vec2::new(inner_w, f32::INFINITY),
                }
            }
            _ => Constraints::loose(Vec2::new(inner_w, f32::INFINITY)),
        }
    }

    fn child_x(&self, inner_origin_x: f32, inner_w: f32, child_w: f32) -> f32 {
        match self.cross_align {
            Align::Stretch | Align::Start => inner_origin_x,
            Align::Center => inner_origin_x + (inner_w - child_w) * 0.5,
            Align::End => inner_origin_x + (inner_w - child_w),
        }
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Column {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let inner_w = self.inner_width(constraints.max.x);
        let child_c = self.child_constraints(inner_w);

        let sizes: Vec<Vec2> = self.children.iter().map(|c| c.measure(child_c, ctx)).collect();

        let fixed_h: f32 = sizes.iter().map(|s| s.y).sum();
        let max_child_w: f32 = sizes.iter().map(|s| s.x).fold(0.0f32, f32::max);
        let spacing_total = (self.children.len().saturating_sub(1)) as f32 * self.spacing;

        // When spacers are present and height is bounded, they fill remaining space.
        let total_h = if spacer_count(&sizes) > 0 && constraints.max.y.is_finite() {
            constraints.max.y
        } else {
            fixed_h + spacing_total + self.padding.v()
        };

        let w = match self.cross_align {
            // Only fill the available width when it is actually constrained.
            // When max.x is INFINITY (e.g. Column inside an unconstrained Row)
            // fall back to content width so we don't report a giant size.
            Align::Stretch => {
                if constraints.max.x.is_finite() { constraints.max.x }
                else { (max_child_w + self.padding.h()).max(0.0) }
            }
            _ => (max_child_w + self.padding.h()).max(0.0),
        };

        constraints.constrain(Vec2::new(w, total_h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let inner = inset_rect(rect, self.padding);
        let child_c = self.child_constraints(inner.size.x);

        // Measure pass. The layout_ctx borrow ends with each measure call,
        // leaving painter free for the paint loop below.
        let mut sizes: Vec<Vec2> =
            self.children.iter().map(|c| c.measure(child_c, &painter.layout_ctx())).collect();
        expand_spacers_y(&mut sizes, inner.size.y, self.spacing);

        let mut y = inner.origin.y;
        for (i, (child, s)) in self.children.iter().zip(sizes.iter()).enumerate() {
            let x = self.child_x(inner.origin.x, inner.size.x, s.x);
            child.paint(painter, Rect::new(x, y, s.x, s.y));
            y += s.y;
            if i + 1 < self.children.len() {
                y += self.spacing;
            }
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        let inner = inset_rect(rect, self.padding);
        let child_c = self.child_constraints(inner.size.x);
        let cross_align = self.cross_align;
        let spacing = self.spacing;
        let n = self.children.len();

        // Measure pass (immutable) to get each child's size.
        let mut sizes: Vec<Vec2> = self.children.iter().map(|c| c.measure(child_c, ctx)).collect();
        expand_spacers_y(&mut sizes, inner.size.y, spacing);

        // Event-routing pass (mutable).
        let mut y = inner.origin.y;
        for (i, (child, s)) in self.children.iter_mut().zip(sizes.iter()).enumerate() {
            let x = match cross_align {
                Align::Stretch | Align::Start => inner.origin.x,
                Align::Center => inner.origin.x + (inner.size.x - s.x) * 0.5,
                Align::End => inner.origin.x + (inner.size.x - s.x),
            };
            let child_rect = Rect::new(x, y, s.x, s.y);
            if child.on_event(event, child_rect, ctx).is_consumed() {
                return EventResult::Consumed;
            }
            y += s.y;
            if i + 1 < n {
                y += spacing;
            }
        }
        EventResult::Ignored
    }
}

// ── Row ───────────────────────────────────────────────────────────────────

/// Horizontal flex container. Children are placed left to right.
///
/// Zero-sized children ([`Spacer`]) absorb the leftover width.
///
/// # Example
/// ```rust,ignore
/// Row::new()
///     .spacing(8.0)
///     .child(icon_widget)
///     .child(Text::new("Label", font, 14.0, white))
/// ```
pub struct Row {
    children: Vec<Element>,
    spacing: f32,
    padding: Edges,
    cross_align: Align,
}

impl Row {
    pub fn new() -> Self {
        Self { children: Vec::new(), spacing: 0.0, padding: Edges::default(), cross_align: Align::Stretch }
    }

    pub fn spacing(mut self, v: f32) -> Self {
        self.spacing = v;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn cross_align(mut self, align: Align) -> Self {
        self.cross_align = align;
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    // ── layout helpers ────────────────────────────────────────────────────

    fn inner_height(&self, available: f32) -> f32 {
        (available - self.padding.v()).max(0.0)
    }

    fn child_constraints(&self, inner_h: f32) -> Constraints {
        match self.cross_align {
            Align::Stretch => {
                // Only enforce the height when it is finite (the Row has a
                // known height to fill). When inner_h is INFINITY the row is
                // inside an unconstrained column; children should size
                // naturally, not to ∞.
                let min_h = if inner_h.is_finite() { inner_h } else { 0.0 };
                Constraints {
                    min: Vec2::new(0.0, min_h),
                    max: Vec2::new(f32::INFINITY, inner_h),
                }
            }
            _ => Constraints::loose(Vec2::new(f32::INFINITY, inner_h)),
        }
    }

    fn child_y(&self, inner_origin_y: f32, inner_h: f32, child_h: f32) -> f32 {
        match self.cross_align {
            Align::Stretch | Align::Start => inner_origin_y,
            Align::Center => inner_origin_y + (inner_h - child_h) * 0.5,
            Align::End => inner_origin_y + (inner_h - child_h),
        }
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Row {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let inner_h = self.inner_height(constraints.max.y);
        let child_c = self.child_constraints(inner_h);

        let sizes: Vec<Vec2> = self.children.iter().map(|c| c.measure(child_c, ctx)).collect();

        let fixed_w: f32 = sizes.iter().map(|s| s.x).sum();
        let max_child_h: f32 = sizes.iter().map(|s| s.y).fold(0.0f32, f32::max);
        let spacing_total = (self.children.len().saturating_sub(1)) as f32 * self.spacing;

        // When spacers are present and width is bounded, they fill remaining space.
        let total_w = if spacer_count(&sizes) > 0 && constraints.max.x.is_finite() {
            constraints.max.x
        } else {
            fixed_w + spacing_total + self.padding.h()
        };

        let h = match self.cross_align {
            // Only fill the available height when it is actually constrained.
            // When max.y is INFINITY (e.g. Row inside an unconstrained Column)
            // fall back to content height so we don't report a giant size.
            Align::Stretch => {
                if constraints.max.y.is_finite() { constraints.max.y }
                else { (max_child_h + self.padding.v()).max(0.0) }
            }
            _ => (max_child_h + self.padding.v()).max(0.0),
        };

        constraints.constrain(Vec2::new(total_w, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let inner = inset_rect(rect, self.padding);
        let child_c = self.child_constraints(inner.size.y);

        // Measure pass. The layout_ctx borrow ends with each measure call,
        // leaving painter free for the paint loop below.
        let mut sizes: Vec<Vec2> =
            self.children.iter().map(|c| c.measure(child_c, &painter.layout_ctx())).collect();
        expand_spacers_x(&mut sizes, inner.size.x, self.spacing);

        let mut x = inner.origin.x;
        for (i, (child, s)) in self.children.iter().zip(sizes.iter()).enumerate() {
            let y = self.child_y(inner.origin.y, inner.size.y, s.y);
            child.paint(painter, Rect::new(x, y, s.x, s.y));
            x += s.x;
            if i + 1 < self.children.len() {
                x += self.spacing;
            }
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        let inner = inset_rect(rect, self.padding);
        let child_c = self.child_constraints(inner.size.y);
        let cross_align = self.cross_align;
        let spacing = self.spacing;
        let n = self.children.len();

        // Measure pass (immutable) to get each child's size.
        let mut sizes: Vec<Vec2> = self.children.iter().map(|c| c.measure(child_c, ctx)).collect();
        expand_spacers_x(&mut sizes, inner.size.x, spacing);

        // Event-routing pass (mutable).
        let mut x = inner.origin.x;
        for (i, (child, s)) in self.children.iter_mut().zip(sizes.iter()).enumerate() {
            let y = match cross_align {
                Align::Stretch | Align::Start => inner.origin.y,
                Align::Center => inner.origin.y + (inner.size.y - s.y) * 0.5,
                Align::End => inner.origin.y + (inner.size.y - s.y),
            };
            let child_rect = Rect::new(x, y, s.x, s.y);
            if child.on_event(event, child_rect, ctx).is_consumed() {
                return EventResult::Consumed;
            }
            x += s.x;
            if i + 1 < n {
                x += spacing;
            }
        }
        EventResult::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_engine::paint::Color;
    use prism_engine::scene::{DrawCmd, DrawList};
    use prism_engine::text::FontSystem;

    /// Stub widget with a fixed natural size that paints one solid rect.
    struct Fixed {
        w: f32,
        h: f32,
    }

    impl Widget for Fixed {
        fn measure(&self, _constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
            Vec2::new(self.w, self.h)
        }
        fn paint(&self, painter: &mut Painter, rect: Rect) {
            painter.fill_rect(rect, Color::from_straight(1.0, 1.0, 1.0, 1.0));
        }
    }

    fn painted_rects(widget: &dyn Widget, bounds: Rect) -> Vec<Rect> {
        let fonts = FontSystem::new();
        let mut list = DrawList::new();
        let mut painter = Painter::new(&mut list, &fonts, Vec2::zero(), false, 1.0);
        widget.paint(&mut painter, bounds);
        list.items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Rect(r) => Some(r.rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn column_spacer_pushes_trailing_child_to_bottom() {
        let col = Column::new()
            .child(Fixed { w: 10.0, h: 20.0 })
            .child(Spacer)
            .child(Fixed { w: 10.0, h: 30.0 });

        let rects = painted_rects(&col, Rect::new(0.0, 0.0, 100.0, 200.0));
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].origin.y, 0.0);
        assert_eq!(rects[1].origin.y, 170.0); // 200 - 30
    }

    #[test]
    fn row_spacer_pushes_trailing_child_to_right() {
        let row = Row::new()
            .child(Fixed { w: 20.0, h: 10.0 })
            .child(Spacer)
            .child(Fixed { w: 30.0, h: 10.0 });

        let rects = painted_rects(&row, Rect::new(0.0, 0.0, 100.0, 40.0));
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].origin.x, 0.0);
        assert_eq!(rects[1].origin.x, 70.0); // 100 - 30
    }

    #[test]
    fn row_center_aligns_children_on_cross_axis() {
        let row = Row::new().cross_align(Align::Center).child(Fixed { w: 20.0, h: 10.0 });

        let rects = painted_rects(&row, Rect::new(0.0, 0.0, 100.0, 40.0));
        assert_eq!(rects[0].origin.y, 15.0); // (40 - 10) / 2
    }

    #[test]
    fn column_measure_with_spacer_fills_bounded_height() {
        let col = Column::new().child(Fixed { w: 10.0, h: 20.0 }).child(Spacer);
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts, scale: 1.0 };

        let size = col.measure(Constraints::loose(Vec2::new(100.0, 300.0)), &ctx);
        assert_eq!(size.y, 300.0);
    }

    #[test]
    fn row_measure_sums_children_and_spacing() {
        let row = Row::new()
            .spacing(5.0)
            .cross_align(Align::Start)
            .child(Fixed { w: 20.0, h: 10.0 })
            .child(Fixed { w: 30.0, h: 12.0 });
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts, scale: 1.0 };

        let size = row.measure(Constraints::loose(Vec2::new(500.0, 500.0)), &ctx);
        assert_eq!(size.x, 55.0); // 20 + 5 + 30
        assert_eq!(size.y, 12.0);
    }
}
