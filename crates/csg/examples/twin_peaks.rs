//! Print the inside segments of a few horizontal scanlines through a
//! two-peaked polygon, then the same after rotating it.
//!
//! Usage:
//!   cargo run -p csg --example twin_peaks

use csg::{Line, Matrix, Shape, Vector};

fn main() -> Result<(), csg::GeomError> {
    let shape = Shape::builder()
        .with_loop(|l| {
            l.point(0.0, 0.0)
                .point(4.0, 0.0)
                .point(4.0, 1.0)
                .point(3.0, 2.0)
                .point(2.0, 1.0)
                .point(1.0, 2.0)
                .point(0.0, 1.0)
        })?
        .build()?;
    println!("shape: {shape}");
    for y in [0.5, 1.0, 1.5, 1.9] {
        let query = Line::from_to(Vector::new(0.0, y), Vector::new(4.0, y));
        print_row(y, &shape.scanlines(&query));
    }

    let rotated = Matrix::rotate_degrees(90.0) * &shape;
    let bb = rotated.bounding_box();
    println!("rotated bounds: {} .. {}", bb.min(), bb.max());
    let query = Line::from_to(Vector::new(bb.x_min, -2.0), Vector::new(bb.x_max, -2.0));
    print_row(-2.0, &rotated.scanlines(&query));
    Ok(())
}

fn print_row(y: f64, segments: &[Line]) {
    let parts: Vec<String> = segments
        .iter()
        .map(|s| format!("{} -> {}", s.start, s.end()))
        .collect();
    println!("y = {y:>4}: {}", parts.join(", "));
}
