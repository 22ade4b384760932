//! Rendering contract
//!
//! The puzzle core never owns a window. It draws onto anything that
//! implements [`Surface`]; [`DrawList`] is the in-crate implementation that
//! records commands and tessellates them into [`Vertex`] data for a host
//! GPU pipeline. Images and text are passed through by name for the host
//! to resolve.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

pub use vertex::{Palette, Vertex, colors};

/// RGBA color, each channel in 0..=1
pub type Color = [f32; 4];

/// Drawing primitives the puzzle core needs from its host
pub trait Surface {
    /// Surface size in pixels
    fn size(&self) -> (u32, u32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Filled rectangle anchored at its top-left corner
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
    /// Copy an image (by asset path) with its top-left corner at `origin`
    fn blit(&mut self, image: &str, origin: Vec2);
    /// Text centered on `center`
    fn draw_text(&mut self, text: &str, center: Vec2, size: f32, color: Color);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Rect {
        origin: Vec2,
        size: Vec2,
        color: Color,
    },
    Image {
        path: String,
        origin: Vec2,
    },
    Text {
        text: String,
        center: Vec2,
        size: f32,
        color: Color,
    },
}

/// Recording surface, cleared by the host once per frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Triangle list for the filled shapes, in draw order
    ///
    /// Images and text are skipped; the host draws them from its own
    /// texture and font caches.
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut vertices = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => vertices.extend(shapes::circle(
                    *center,
                    *radius,
                    *color,
                    shapes::CIRCLE_SEGMENTS,
                )),
                DrawCommand::Rect {
                    origin,
                    size,
                    color,
                } => vertices.extend(shapes::rect(*origin, *size, *color)),
                DrawCommand::Image { .. } | DrawCommand::Text { .. } => {}
            }
        }
        vertices
    }

    /// [`vertices`](Self::vertices) as raw bytes, ready for a vertex buffer
    /// laid out by [`Vertex::desc`]
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }
}

impl Surface for DrawList {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            color,
        });
    }

    fn blit(&mut self, image: &str, origin: Vec2) {
        self.commands.push(DrawCommand::Image {
            path: image.to_string(),
            origin,
        });
    }

    fn draw_text(&mut self, text: &str, center: Vec2, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            center,
            size,
            color,
        });
    }
}
