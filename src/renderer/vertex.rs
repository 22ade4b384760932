//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Triangle-list vertex in screen pixels
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    /// Position at shader location 0, color at location 1
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Buffer layout matching [`DrawList::vertex_bytes`](super::DrawList::vertex_bytes)
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Colors for game elements
pub mod colors {
    /// Opaque color from 8-bit channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const BLACK: [f32; 4] = rgb(0, 0, 0);
    pub const WHITE: [f32; 4] = rgb(255, 255, 255);

    pub const TARGET_IDLE: [f32; 4] = rgb(25, 0, 252);
    pub const TARGET_ACTIVE: [f32; 4] = rgb(0, 231, 252);
    pub const TARGET_TOUCHING: [f32; 4] = rgb(0, 252, 0);

    pub const TARGET_IDLE_GRAY: [f32; 4] = rgb(41, 41, 41);
    pub const TARGET_ACTIVE_GRAY: [f32; 4] = rgb(222, 220, 220);
    pub const TARGET_TOUCHING_GRAY: [f32; 4] = rgb(255, 255, 255);
}

/// Presentation colors; grayscale mode swaps the whole set, never the logic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub target_idle: [f32; 4],
    pub target_active: [f32; 4],
    pub target_touching: [f32; 4],
    pub target_ring: [f32; 4],
    pub player: [f32; 4],
    pub text: [f32; 4],
    pub button: [f32; 4],
    pub button_text: [f32; 4],
}

impl Palette {
    pub fn color() -> Self {
        Self {
            target_idle: colors::TARGET_IDLE,
            target_active: colors::TARGET_ACTIVE,
            target_touching: colors::TARGET_TOUCHING,
            target_ring: colors::BLACK,
            player: colors::WHITE,
            text: colors::WHITE,
            button: colors::WHITE,
            button_text: colors::BLACK,
        }
    }

    pub fn grayscale() -> Self {
        Self {
            target_idle: colors::TARGET_IDLE_GRAY,
            target_active: colors::TARGET_ACTIVE_GRAY,
            target_touching: colors::TARGET_TOUCHING_GRAY,
            ..Self::color()
        }
    }

    pub fn for_settings(grayscale: bool) -> Self {
        if grayscale {
            Self::grayscale()
        } else {
            Self::color()
        }
    }
}
