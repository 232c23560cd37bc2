//! Vertex types and palettes for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for every game element
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: [f32; 4],
    pub player: [f32; 4],
    pub platform: [f32; 4],
    pub wall: [f32; 4],
    pub obstacle: [f32; 4],
    pub coin: [f32; 4],
    pub goal: [f32; 4],
}

impl Palette {
    /// The game's classic look: cyan sky, green platforms, red hazards
    pub const fn standard() -> Self {
        Self {
            background: [0.0, 1.0, 1.0, 1.0],
            player: [1.0, 0.0, 0.0, 1.0],
            platform: [0.0, 1.0, 0.0, 1.0],
            wall: [0.0, 0.0, 1.0, 1.0],
            obstacle: [1.0, 0.0, 0.0, 1.0],
            coin: [1.0, 1.0, 0.0, 1.0],
            goal: [1.0, 1.0, 0.0, 1.0],
        }
    }

    /// High-contrast variant: dark background, brighter separated hues
    pub const fn high_contrast() -> Self {
        Self {
            background: [0.05, 0.05, 0.08, 1.0],
            player: [1.0, 1.0, 1.0, 1.0],
            platform: [0.2, 0.9, 0.3, 1.0],
            wall: [0.4, 0.6, 1.0, 1.0],
            obstacle: [1.0, 0.25, 0.2, 1.0],
            coin: [1.0, 0.9, 0.2, 1.0],
            goal: [1.0, 0.6, 0.9, 1.0],
        }
    }
}
