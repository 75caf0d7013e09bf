use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;

use prism_core::{mesh, Command, ViewTransform};
use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::input::MouseButton;
use prism_engine::mesh::{MeshDraw, MeshRenderer, MeshVertex};
use prism_engine::render::shapes::circle::CircleRenderer;
use prism_engine::render::shapes::rect::RectRenderer;
use prism_engine::render::shapes::rounded_rect::RoundedRectRenderer;
use prism_engine::render::shapes::text::TextRenderer;
use prism_ui::prelude::*;

pub const WINDOW_WIDTH: f64 = 800.0;
pub const WINDOW_HEIGHT: f64 = 600.0;

/// Commands pushed by UI callbacks during the frame, drained at the start of
/// the next one.
type CommandQueue = Rc<RefCell<Vec<Command>>>;

// ── scene state ───────────────────────────────────────────────────────────

/// The accumulated view plus the rotation the loop re-applies every frame.
struct SceneState {
    view: ViewTransform,
    spin: Command,
}

impl SceneState {
    fn new() -> Self {
        // The projection keeps the launch aspect; resizing the window
        // stretches the scene instead of re-deriving it.
        Self {
            view: ViewTransform::new((WINDOW_WIDTH / WINDOW_HEIGHT) as f32),
            spin: Command::None,
        }
    }

    /// Zoom steps act on the view immediately; direction commands latch the
    /// per-frame spin until replaced.
    fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::ZoomIn => self.view.zoom_in(),
            Command::ZoomOut => self.view.zoom_out(),
            direction => self.spin = direction,
        }
    }
}

// ── app ───────────────────────────────────────────────────────────────────

pub struct PrismApp {
    scene: SceneState,
    ui: UiScene,
    root: Element,
    commands: CommandQueue,

    mesh_renderer: MeshRenderer,
    rect_renderer: RectRenderer,
    rounded_rect_renderer: RoundedRectRenderer,
    circle_renderer: CircleRenderer,
    text_renderer: TextRenderer,

    vertices: [MeshVertex; 18],
    draws: [MeshDraw; 5],
}

impl PrismApp {
    pub fn new(
        font_data: &[u8],
        vertex_shader: Option<String>,
        fragment_shader: Option<String>,
    ) -> Self {
        let mut ui = UiScene::new();
        let font = match ui.load_font(font_data) {
            Ok(id) => Some(id),
            Err(err) => {
                log::warn!("no usable UI font, controls will be unlabeled: {err}");
                None
            }
        };

        let commands: CommandQueue = Rc::new(RefCell::new(Vec::new()));
        let root = control_root(font, &commands);

        Self {
            scene: SceneState::new(),
            ui,
            root,
            commands,
            mesh_renderer: MeshRenderer::new(vertex_shader, fragment_shader),
            rect_renderer: RectRenderer::new(),
            rounded_rect_renderer: RoundedRectRenderer::new(),
            circle_renderer: CircleRenderer::new(),
            text_renderer: TextRenderer::new(),
            vertices: build_vertices(),
            draws: prism_draws(),
        }
    }
}

impl App for PrismApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // Drain commands queued by last frame's UI callbacks.
        for cmd in self.commands.borrow_mut().drain(..) {
            self.scene.apply(cmd);
        }

        // Layout + paint the control bar.
        let (w, h) = ctx.window.logical_size();
        let (mx, my) = ctx.input.pointer_pos.unwrap_or((0.0, 0.0));
        let ui_input = UiInput {
            mouse_pos: Vec2::new(mx, my),
            mouse_pressed: ctx.input.button_down(MouseButton::Left),
            mouse_clicked: ctx.input_frame.buttons_released.contains(&MouseButton::Left),
        };
        let _ = self.ui.frame(
            &mut self.root,
            Vec2::new(w, h),
            ctx.window.scale_factor(),
            &ui_input,
        );

        // Render the prism first, then the UI passes over it.
        let matrix = self.scene.view.matrix();
        let vertices = &self.vertices;
        let draws = &self.draws;
        let dl = &mut self.ui.draw_list;
        let fs = &self.ui.font_system;
        let r_mesh = &mut self.mesh_renderer;
        let r_r = &mut self.rect_renderer;
        let r_rr = &mut self.rounded_rect_renderer;
        let r_c = &mut self.circle_renderer;
        let r_t = &mut self.text_renderer;

        let control = ctx.render(Color::from_straight(0.1, 0.0, 0.2, 1.0), |rctx, target| {
            r_mesh.render(rctx, target, matrix, vertices, draws);
            r_r.render(rctx, target, dl);
            r_rr.render(rctx, target, dl);
            r_c.render(rctx, target, dl);
            r_t.render(rctx, target, dl, fs);
        });

        // Advance the spin for the next frame.
        self.scene.view.apply_rotation(self.scene.spin);

        control
    }
}

// ── control bar ───────────────────────────────────────────────────────────

fn control_root(font: Option<FontId>, commands: &CommandQueue) -> Element {
    let bar = Row::new()
        .cross_align(Align::Center)
        .spacing(8.0)
        .child(direction_picker(font, commands))
        .child(Spacer)
        .child(zoom_button("zoom in", Command::ZoomIn, font, commands))
        .child(zoom_button("zoom out", Command::ZoomOut, font, commands));

    Column::new()
        .child(Spacer)
        .child(
            Container::new()
                .padding(Edges::symmetric(10.0, 12.0))
                .background(Color::from_straight(0.07, 0.07, 0.11, 0.92))
                .border(Border::new(1.0, Color::from_straight(0.25, 0.25, 0.35, 1.0)))
                .child(bar),
        )
        .into()
}

fn direction_picker(font: Option<FontId>, commands: &CommandQueue) -> RadioGroup {
    let queue = Rc::clone(commands);
    let mut group = RadioGroup::new()
        .option("none", "none")
        .option("left", "left")
        .option("right", "right")
        .option("up", "up")
        .option("down", "down")
        .selected("none")
        .on_change(move |value| {
            if let Some(cmd) = direction_command(&value) {
                queue.borrow_mut().push(cmd);
            }
        });
    if let Some(font) = font {
        group = group.font(font);
    }
    group
}

fn direction_command(value: &str) -> Option<Command> {
    match value {
        "none" => Some(Command::None),
        "left" => Some(Command::Left),
        "right" => Some(Command::Right),
        "up" => Some(Command::Up),
        "down" => Some(Command::Down),
        _ => None,
    }
}

fn zoom_button(
    label: &str,
    command: Command,
    font: Option<FontId>,
    commands: &CommandQueue,
) -> Button {
    let queue = Rc::clone(commands);
    Button::new(button_label(label, font))
        .background(Color::from_straight(0.16, 0.18, 0.28, 1.0))
        .hover_background(Color::from_straight(0.22, 0.25, 0.38, 1.0))
        .press_background(Color::from_straight(0.12, 0.14, 0.22, 1.0))
        .corner_radius(5.0)
        .padding(Edges::symmetric(6.0, 12.0))
        .on_click(move || queue.borrow_mut().push(command))
}

fn button_label(text: &str, font: Option<FontId>) -> Element {
    match font {
        Some(font) => {
            Text::new(text, font, 13.0, Color::from_straight(0.9, 0.9, 0.95, 1.0)).into()
        }
        // Keeps the button clickable when no system font was found.
        None => Container::new().min_size(52.0, 16.0).into(),
    }
}

// ── geometry assembly ─────────────────────────────────────────────────────

/// Packs the prism into one vertex buffer: front triangle, back triangle,
/// then the three side quads.
///
/// The back triangle's vertex order is reversed here so it winds outward
/// under back-face culling; its colors stay parallel to the original vertex
/// indices. Side quads are four vertices each, drawn through the shared quad
/// index pattern.
fn build_vertices() -> [MeshVertex; 18] {
    let front = mesh::front_vertices();
    let back = mesh::back_vertices();
    let sides = mesh::side_vertices();
    let side_colors = mesh::side_colors();

    let mut out = [MeshVertex { position: [0.0; 3], color: [0.0; 3] }; 18];
    for i in 0..3 {
        out[i] = vertex(front[i], mesh::FACE_COLORS[i]);
    }
    for k in 0..3 {
        out[3 + k] = vertex(back[2 - k], mesh::FACE_COLORS[2 - k]);
    }
    for k in 0..12 {
        out[6 + k] = vertex(sides[k], side_colors[k]);
    }
    out
}

fn vertex(position: Vec3, color: Vec3) -> MeshVertex {
    MeshVertex { position: position.to_array(), color: color.to_array() }
}

/// Draw plan over [`build_vertices`]: two non-indexed triangles, then the
/// quads at vertex offsets 6, 10, and 14.
fn prism_draws() -> [MeshDraw; 5] {
    [
        MeshDraw::Triangles(0..3),
        MeshDraw::Triangles(3..6),
        MeshDraw::Quad { base_vertex: 6 },
        MeshDraw::Quad { base_vertex: 10 },
        MeshDraw::Quad { base_vertex: 14 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::mesh::{FACE_COLORS, SIDE_COLORS};

    // ── vertex buffer assembly ────────────────────────────────────────────

    #[test]
    fn front_section_keeps_vertex_order_and_colors() {
        let v = build_vertices();
        let front = mesh::front_vertices();
        for i in 0..3 {
            assert_eq!(v[i].position, front[i].to_array());
            assert_eq!(v[i].color, FACE_COLORS[i].to_array());
        }
    }

    #[test]
    fn back_section_is_reversed_with_parallel_colors() {
        let v = build_vertices();
        let back = mesh::back_vertices();
        for k in 0..3 {
            assert_eq!(v[3 + k].position, back[2 - k].to_array());
            assert_eq!(v[3 + k].color, FACE_COLORS[2 - k].to_array());
        }
    }

    #[test]
    fn side_section_matches_quads_and_color_cycle() {
        let v = build_vertices();
        let sides = mesh::side_vertices();
        for k in 0..12 {
            assert_eq!(v[6 + k].position, sides[k].to_array());
            assert_eq!(v[6 + k].color, SIDE_COLORS[k % 4].to_array());
        }
    }

    #[test]
    fn draw_plan_covers_both_triangles_and_three_quads() {
        let draws = prism_draws();
        assert_eq!(draws[0], MeshDraw::Triangles(0..3));
        assert_eq!(draws[1], MeshDraw::Triangles(3..6));
        assert_eq!(draws[2], MeshDraw::Quad { base_vertex: 6 });
        assert_eq!(draws[3], MeshDraw::Quad { base_vertex: 10 });
        assert_eq!(draws[4], MeshDraw::Quad { base_vertex: 14 });
    }

    // ── command handling ──────────────────────────────────────────────────

    #[test]
    fn radio_values_map_to_direction_commands() {
        assert_eq!(direction_command("none"), Some(Command::None));
        assert_eq!(direction_command("left"), Some(Command::Left));
        assert_eq!(direction_command("right"), Some(Command::Right));
        assert_eq!(direction_command("up"), Some(Command::Up));
        assert_eq!(direction_command("down"), Some(Command::Down));
        assert_eq!(direction_command("sideways"), None);
    }

    #[test]
    fn zoom_applies_immediately_and_leaves_spin_alone() {
        let mut scene = SceneState::new();
        let before = scene.view.matrix();

        scene.apply(Command::ZoomIn);
        assert_eq!(scene.spin, Command::None);
        assert_ne!(scene.view.matrix(), before);
    }

    #[test]
    fn direction_latches_spin_without_touching_the_view() {
        let mut scene = SceneState::new();
        let before = scene.view.matrix();

        scene.apply(Command::Left);
        assert_eq!(scene.spin, Command::Left);
        assert_eq!(scene.view.matrix(), before);

        scene.apply(Command::None);
        assert_eq!(scene.spin, Command::None);
    }
}
