use prism_engine::coords::{Rect, Vec2};
use prism_engine::paint::Color;
use prism_engine::scene::Border;
use prism_engine::text::FontId;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

/// An option within a [`RadioGroup`].
#[derive(Clone)]
pub struct RadioOption {
    /// Display label.
    pub label: String,
    /// Logical value identifying this option.
    pub value: String,
}

impl RadioOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

/// A horizontal strip of mutually-exclusive radio-button options.
///
/// Item widths follow their labels, so the group re-measures text during
/// event routing to hit-test the same rects it painted.
///
/// # Example
/// ```rust,ignore
/// RadioGroup::new()
///     .option("none",  "none")
///     .option("left",  "left")
///     .option("right", "right")
///     .selected("none")
///     .font(body_font)
///     .on_change(|v| println!("selected: {v}"))
/// ```
pub struct RadioGroup {
    options: Vec<RadioOption>,
    selected: Option<String>,
    font: Option<FontId>,
    font_size: f32,
    label_color: Color,
    selected_color: Color,
    border_color: Color,
    dot_radius: f32,
    gap: f32,      // between dot and label
    item_gap: f32, // between items
    on_change: Option<Box<dyn FnMut(String)>>,
}

impl RadioGroup {
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            selected: None,
            font: None,
            font_size: 13.0,
            label_color: Color::from_straight(0.85, 0.85, 0.9, 1.0),
            selected_color: Color::from_straight(0.2, 0.65, 1.0, 1.0),
            border_color: Color::from_straight(0.35, 0.45, 0.6, 1.0),
            dot_radius: 8.0,
            gap: 8.0,
            item_gap: 10.0,
            on_change: None,
        }
    }

    pub fn option(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(RadioOption::new(label, value));
        self
    }
    pub fn options(mut self, opts: impl IntoIterator<Item = RadioOption>) -> Self {
        self.options.extend(opts);
        self
    }
    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }
    pub fn font(mut self, v: FontId) -> Self { self.font = Some(v); self }
    pub fn font_size(mut self, v: f32) -> Self { self.font_size = v; self }
    pub fn label_color(mut self, v: Color) -> Self { self.label_color = v; self }
    pub fn selected_color(mut self, v: Color) -> Self { self.selected_color = v; self }
    pub fn border_color(mut self, v: Color) -> Self { self.border_color = v; self }
    pub fn dot_radius(mut self, v: f32) -> Self { self.dot_radius = v; self }
    pub fn item_gap(mut self, v: f32) -> Self { self.item_gap = v; self }
    pub fn on_change(mut self, f: impl FnMut(String) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    fn row_height(&self) -> f32 {
        (self.dot_radius * 2.0).max(self.font_size * 1.2)
    }

    fn item_width(&self, opt: &RadioOption, ctx: &LayoutCtx) -> f32 {
        let dot_d = self.dot_radius * 2.0;
        match self.font {
            Some(font) => {
                let label_w = ctx
                    .fonts
                    .measure_text_scaled(&opt.label, font, self.font_size, None, ctx.scale)
                    .x;
                dot_d + self.gap + label_w
            }
            None => dot_d,
        }
    }
}

impl Default for RadioGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for RadioGroup {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let items_w: f32 = self.options.iter().map(|o| self.item_width(o, ctx)).sum();
        let gaps = (self.options.len().saturating_sub(1)) as f32 * self.item_gap;
        constraints.constrain(Vec2::new(items_w + gaps, self.row_height()))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let cy = rect.origin.y + rect.size.y * 0.5;

        let mut x = rect.origin.x;
        for opt in &self.options {
            let item_w = self.item_width(opt, &painter.layout_ctx());
            let is_selected = self.selected.as_deref() == Some(&opt.value);

            // Outer ring
            let ring_cx = x + self.dot_radius;
            painter.fill_circle(
                Vec2::new(ring_cx, cy),
                self.dot_radius,
                Color::from_straight(0.1, 0.12, 0.18, 1.0),
                Some(Border::new(
                    1.5,
                    if is_selected { self.selected_color } else { self.border_color },
                )),
            );

            // Inner dot (if selected)
            if is_selected {
                painter.fill_circle(
                    Vec2::new(ring_cx, cy),
                    self.dot_radius * 0.45,
                    self.selected_color,
                    None,
                );
            }

            // Label
            if let Some(font) = self.font {
                let text_x = x + self.dot_radius * 2.0 + self.gap;
                let text_y = cy - self.font_size * 0.5;
                painter.text(
                    &opt.label,
                    font,
                    self.font_size,
                    self.label_color,
                    Vec2::new(text_x, text_y),
                    None,
                );
            }

            x += item_w + self.item_gap;
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        if let UiEvent::Click { pos } = event {
            if !rect.contains(*pos) {
                return EventResult::Ignored;
            }

            let mut x = rect.origin.x;
            for opt in &self.options {
                let item_w = self.item_width(opt, ctx);
                let item_rect = Rect::new(x, rect.origin.y, item_w, rect.size.y);
                if item_rect.contains(*pos) {
                    let value = opt.value.clone();
                    self.selected = Some(value.clone());
                    if let Some(f) = &mut self.on_change {
                        f(value);
                    }
                    return EventResult::Consumed;
                }
                x += item_w + self.item_gap;
            }
        }
        EventResult::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_engine::text::FontSystem;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn fonts() -> FontSystem {
        FontSystem::new()
    }

    #[test]
    fn click_on_item_selects_it_and_fires_callback() {
        let picked = Rc::new(RefCell::new(None::<String>));
        let sink = Rc::clone(&picked);
        // No font: each item is just the 16px dot, items at x 0, 26, 52.
        let mut group = RadioGroup::new()
            .option("none", "none")
            .option("left", "left")
            .option("right", "right")
            .selected("none")
            .on_change(move |v| *sink.borrow_mut() = Some(v));

        let fonts = fonts();
        let ctx = LayoutCtx { fonts: &fonts, scale: 1.0 };
        let rect = Rect::new(0.0, 0.0, 68.0, 16.0);

        let result = group.on_event(&UiEvent::Click { pos: Vec2::new(30.0, 8.0) }, rect, &ctx);
        assert_eq!(result, EventResult::Consumed);
        assert_eq!(group.selected.as_deref(), Some("left"));
        assert_eq!(picked.borrow().as_deref(), Some("left"));
    }

    #[test]
    fn click_in_gap_between_items_is_ignored() {
        let mut group = RadioGroup::new().option("a", "a").option("b", "b");

        let fonts = fonts();
        let ctx = LayoutCtx { fonts: &fonts, scale: 1.0 };
        let rect = Rect::new(0.0, 0.0, 42.0, 16.0);

        // x = 20 falls in the 10px gap between the two dots.
        let result = group.on_event(&UiEvent::Click { pos: Vec2::new(20.0, 8.0) }, rect, &ctx);
        assert_eq!(result, EventResult::Ignored);
        assert!(group.selected.is_none());
    }

    #[test]
    fn click_outside_group_is_ignored() {
        let mut group = RadioGroup::new().option("a", "a").selected("a");

        let fonts = fonts();
        let ctx = LayoutCtx { fonts: &fonts, scale: 1.0 };
        let rect = Rect::new(0.0, 0.0, 16.0, 16.0);

        let result = group.on_event(&UiEvent::Click { pos: Vec2::new(100.0, 8.0) }, rect, &ctx);
        assert_eq!(result, EventResult::Ignored);
        assert_eq!(group.selected.as_deref(), Some("a"));
    }

    #[test]
    fn measure_without_font_is_dots_plus_gaps() {
        let group = RadioGroup::new().option("a", "a").option("b", "b").option("c", "c");

        let fonts = fonts();
        let ctx = LayoutCtx { fonts: &fonts, scale: 1.0 };

        let size = group.measure(Constraints::loose(Vec2::new(500.0, 500.0)), &ctx);
        assert_eq!(size.x, 68.0); // 3 × 16 + 2 × 10
        assert_eq!(size.y, 16.0);
    }
}
