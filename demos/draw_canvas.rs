//! Build a small canvas, mutate it, and draw it.
//!
//! Run with: RUST_LOG=canvaslist=debug cargo run --example draw_canvas --features tracing

use canvaslist::{BasicShape, CanvasList, Circle, Rect, RightTriangle};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut canvas = CanvasList::new();
    canvas.push_back(BasicShape::new(1, 3));
    canvas.push_front(Rect::new(5, 5, 4, 6));
    canvas.insert_after(0, RightTriangle::new(10, 11, 3, 7))?;
    canvas.push_front(Circle::new(9, 1, 8));

    tracing::info!(shapes = canvas.len(), "canvas built");
    println!("Canvas ({} shapes):", canvas.len());
    canvas.draw().map_err(|e| miette::miette!("failed to draw canvas: {e}"))?;

    let mut report = String::new();
    canvas
        .write_addresses(&mut report)
        .map_err(|e| miette::miette!("failed to format addresses: {e}"))?;
    print!("{report}");

    let removed = canvas.remove_every_other();
    canvas.remove_at(0)?;
    println!("After removing {removed} shapes and the front:");
    canvas.draw().map_err(|e| miette::miette!("failed to draw canvas: {e}"))?;

    Ok(())
}
