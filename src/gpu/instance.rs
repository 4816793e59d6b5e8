//! Per-shape instance data uploaded to the vertex buffer.

use crate::canvas::{DrawList, Shape};
use crate::color::Rgba8;
use bytemuck::{Pod, Zeroable};

/// Fragment shader draws a disc.
pub const KIND_CIRCLE: u32 = 0;
/// Fragment shader fills the whole quad.
pub const KIND_RECT: u32 = 1;

/// One instanced quad: center and half extent in play-field pixels, sRGB
/// color with straight alpha, and which shape to cut out of the quad.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Instance {
    pub center: [f32; 2],
    pub half_size: [f32; 2],
    pub color: [f32; 4],
    pub kind: u32,
}

impl Instance {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 4] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2, 2 => Float32x4, 3 => Uint32];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Instance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }

    pub fn from_shape(shape: &Shape) -> Self {
        match *shape {
            Shape::Circle { center, radius, color } => Self {
                center: center.to_array(),
                half_size: [radius, radius],
                color: color.to_f32_array(),
                kind: KIND_CIRCLE,
            },
            Shape::Rect { min, size, color } => Self {
                center: (min + size * 0.5).to_array(),
                half_size: (size * 0.5).to_array(),
                color: color.to_f32_array(),
                kind: KIND_RECT,
            },
        }
    }
}

/// Convert a frame's shapes, skipping those that cannot show up.
pub fn pack(list: &DrawList, out: &mut Vec<Instance>) {
    out.clear();
    out.extend(
        list.shapes()
            .iter()
            .filter(|shape| is_visible(shape))
            .map(Instance::from_shape),
    );
}

fn is_visible(shape: &Shape) -> bool {
    let empty = match *shape {
        Shape::Circle { radius, .. } => radius <= 0.0,
        Shape::Rect { size, .. } => size.x <= 0.0 || size.y <= 0.0,
    };
    !empty && shape.color().a > 0
}

/// Clear color for a background given in sRGB. Surfaces with an sRGB format
/// expect linear values.
pub fn clear_color(background: Rgba8, srgb_target: bool) -> wgpu::Color {
    let [r, g, b, a] = background.to_f32_array();
    let channel = |c: f32| {
        let c = if srgb_target { srgb_to_linear(c) } else { c };
        c as f64
    };
    wgpu::Color {
        r: channel(r),
        g: channel(g),
        b: channel(b),
        a: a as f64,
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
