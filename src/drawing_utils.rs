//! Shared content-stream builders for worksheet drawing

use crate::style::{Color, DashPattern};
use lopdf::{Object, content::Operation};

/// Convert a top-left based y coordinate to PDF user space (bottom-left origin)
pub fn to_pdf_y(page_height: f32, y: f32) -> f32 {
    page_height - y
}

/// MediaBox array for a page of the given size
pub fn media_box(width: f32, height: f32) -> Vec<Object> {
    vec![Object::Integer(0), Object::Integer(0), width.into(), height.into()]
}

/// Set stroke color and width for drawing operations
pub fn set_stroke_style(color: Color, width: f32) -> Vec<Operation> {
    vec![
        Operation::new("RG", vec![color.r.into(), color.g.into(), color.b.into()]),
        Operation::new("w", vec![width.into()]),
    ]
}

/// Set the line dash pattern (`d` operator); solid lines use an empty array
pub fn set_dash_pattern(dash: &DashPattern) -> Operation {
    let (lengths, phase) = match dash {
        DashPattern::Solid => (Vec::new(), 0.0),
        DashPattern::Dashed { lengths, phase } => (
            lengths.iter().map(|&l| Object::from(l)).collect(),
            *phase,
        ),
    };
    Operation::new("d", vec![Object::Array(lengths), phase.into()])
}

/// Stroke a straight line between two points (PDF coordinates)
pub fn draw_line(x1: f32, y1: f32, x2: f32, y2: f32) -> Vec<Operation> {
    vec![
        Operation::new("m", vec![x1.into(), y1.into()]),
        Operation::new("l", vec![x2.into(), y2.into()]),
        Operation::new("S", vec![]),
    ]
}

/// Show an already-encoded string at (x, y) in PDF coordinates
pub fn draw_text(
    font_resource: &str,
    font_size: f32,
    color: Color,
    x: f32,
    y: f32,
    encoded: Object,
) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![
                Object::Name(font_resource.as_bytes().to_vec()),
                font_size.into(),
            ],
        ),
        Operation::new("rg", vec![color.r.into(), color.g.into(), color.b.into()]),
        Operation::new("Td", vec![x.into(), y.into()]),
        Operation::new("Tj", vec![encoded]),
        Operation::new("ET", vec![]),
    ]
}
