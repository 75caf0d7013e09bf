//! Prism UI — immediate-layout widget tree on top of `prism-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use prism_ui::prelude::*;
//!
//! let mut ui = UiScene::new();
//! let font = ui.load_font(include_bytes!("my_font.ttf"))?;
//!
//! // Build the root once; it keeps widget state (e.g. the selected radio
//! // option) across frames.
//! let mut root: Element = Column::new()
//!     .child(Spacer)
//!     .child(Button::new(Text::new("go", font, 14.0, white)).on_click(|| {}))
//!     .into();
//!
//! // In your frame callback:
//! let input = UiInput { mouse_pos, mouse_pressed, mouse_clicked };
//! let draw_list = ui.frame(&mut root, viewport, scale_factor, &input);
//! // Pass draw_list to the engine renderers.
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`] for any type, then use it anywhere an [`Element`] is
//! accepted:
//!
//! ```rust,ignore
//! use prism_ui::prelude::*;
//!
//! pub struct MyBadge { color: Color, size: f32 }
//!
//! impl Widget for MyBadge {
//!     fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
//!         constraints.constrain(Vec2::new(self.size, self.size))
//!     }
//!     fn paint(&self, painter: &mut Painter, rect: Rect) {
//!         painter.fill_rounded_rect(rect, rect.size.x / 2.0, self.color, None);
//!     }
//! }
//! ```

pub mod constraints;
pub mod event;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything you need to build and extend UI — import this in your component files.
pub mod prelude {
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        button::Button,
        container::Container,
        flex::{Align, Column, Row, Spacer},
        radio::{RadioGroup, RadioOption},
        text::Text,
    };

    // Re-export the engine primitives everyone needs.
    pub use prism_engine::coords::{CornerRadii, Rect, Vec2};
    pub use prism_engine::paint::Color;
    pub use prism_engine::scene::Border;
    pub use prism_engine::text::FontId;
}
