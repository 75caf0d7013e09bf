use prism_engine::coords::{Rect, Vec2};
use prism_engine::scene::DrawList;
use prism_engine::text::{raster_scale, FontId, FontLoadError, FontSystem};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Element;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of input state for one UI frame.
///
/// Construct this from the engine's `InputState` / `InputFrame` each frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Current cursor position in logical pixels.
    pub mouse_pos: Vec2,
    /// `true` while the primary button is held down.
    pub mouse_pressed: bool,
    /// `true` for exactly one frame when the primary button is released.
    pub mouse_clicked: bool,
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator that owns shared resources across frames.
///
/// Owns the `FontSystem` (and therefore all loaded fonts) and the `DrawList`
/// that is populated each frame by [`frame`](Self::frame).
///
/// The GPU renderers (`RectRenderer`, `TextRenderer`, …) still live in the
/// application and receive the `&mut DrawList` returned by `frame`.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let font  = ui.load_font(include_bytes!("my_font.ttf"))?;
/// let mut root: Element = Row::new()
///     .child(Text::new("Hello", font, 16.0, white))
///     .into();
///
/// // In your on_frame callback:
/// let draw_list = ui.frame(&mut root, viewport, scale_factor, &input);
/// rect_renderer.render(rctx, target, draw_list);
/// text_renderer.render(rctx, target, draw_list, &ui.font_system);
/// ```
pub struct UiScene {
    /// Fonts are public so the application can pass `&ui.font_system` to the
    /// engine's `TextRenderer::render`.
    pub font_system: FontSystem,
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    ///
    /// Public so callers can split-borrow it alongside `font_system` when
    /// passing both to engine renderers.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { font_system: FontSystem::new(), draw_list: DrawList::new() }
    }

    /// Load a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Layout, paint, and event-route the widget tree for this frame.
    ///
    /// `root` is borrowed rather than consumed so widget state (selection,
    /// callbacks) persists across frames; it is updated via `on_event` after
    /// painting, so visual state changes appear on the next frame.
    ///
    /// `viewport` is the window's logical size and `scale_factor` its
    /// physical-to-logical pixel ratio (`WindowCtx::scale_factor`). The scale
    /// is quantized through `raster_scale` so measurements agree with the
    /// text renderer's glyph placement.
    ///
    /// The returned `&mut DrawList` is owned by the `UiScene` and valid until
    /// the next call. Pass it to each engine renderer in your render closure.
    #[must_use]
    pub fn frame(
        &mut self,
        root: &mut Element,
        viewport: Vec2,
        scale_factor: f32,
        input: &UiInput,
    ) -> &mut DrawList {
        self.draw_list.clear();
        let scale = raster_scale(scale_factor);

        // ── measure ───────────────────────────────────────────────────────
        let ctx = LayoutCtx { fonts: &self.font_system, scale };
        // Pre-pass: let children compute their natural sizes. The root itself
        // always occupies the full viewport, so its measured size is unused.
        let _ = root.measure(Constraints::loose(viewport), &ctx);
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(
                &mut self.draw_list,
                &self.font_system,
                input.mouse_pos,
                input.mouse_pressed,
                scale,
            );
            root.paint(&mut painter, rect);
        }

        // ── events ────────────────────────────────────────────────────────
        root.on_event(&UiEvent::Hover { pos: input.mouse_pos }, rect, &ctx);
        if input.mouse_clicked {
            root.on_event(&UiEvent::Click { pos: input.mouse_pos }, rect, &ctx);
        }

        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
