//! WebAssembly bindings for raster-lab.
//!
//! Lets a browser page run the rasterizers and either draw the cells itself
//! or show a finished PNG.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { rasterize_cells, render_png, describe } from 'raster-lab';
//!
//! await init();
//!
//! // [x, y, coverage] triples in emission order
//! const cells = rasterize_cells('wu', 0, 0, 4, 2, 0);
//!
//! // Or a rendered 800x600 grid
//! const pngData = render_png('circle', 0, 0, 0, 0, 8, 800, 600, 20);
//! const blob = new Blob([pngData], { type: 'image/png' });
//! document.getElementById('grid').src = URL.createObjectURL(blob);
//! ```

use wasm_bindgen::prelude::*;

use crate::catalog;
use crate::output::PngEncoder;
use crate::raster::{rasterize, Algorithm, Plot, Request};
use crate::render::{select_renderer, GridStyle, RenderTarget, RendererKind};

fn to_js(e: crate::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn request(algorithm: &str, x1: f64, y1: f64, x2: f64, y2: f64, radius: i64) -> Result<Request, JsValue> {
    let algorithm: Algorithm = algorithm.parse().map_err(to_js)?;
    Ok(if algorithm.uses_radius() {
        Request::circle(x1, y1, radius)
    } else {
        Request::line(algorithm, x1, y1, x2, y2)
    })
}

fn run(algorithm: &str, x1: f64, y1: f64, x2: f64, y2: f64, radius: i32) -> Result<Vec<Plot>, JsValue> {
    rasterize(&request(algorithm, x1, y1, x2, y2, i64::from(radius))?).map_err(to_js)
}

/// Flatten plots into `[x, y, coverage, x, y, coverage, ...]`.
fn flatten(plots: &[Plot]) -> Vec<f64> {
    plots.iter().flat_map(|p| [p.cell.x as f64, p.cell.y as f64, p.coverage()]).collect()
}

/// Run an algorithm and return its plots as `[x, y, coverage]` triples.
///
/// Line algorithms read `(x1, y1)-(x2, y2)`; `circle` reads `(x1, y1)` and `radius`.
#[wasm_bindgen]
pub fn rasterize_cells(
    algorithm: &str,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    radius: i32,
) -> Result<js_sys::Float64Array, JsValue> {
    let flat = flatten(&run(algorithm, x1, y1, x2, y2, radius)?);
    Ok(js_sys::Float64Array::from(flat.as_slice()))
}

/// Run an algorithm and render it over the grid as PNG bytes.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn render_png(
    algorithm: &str,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    radius: i32,
    width: u32,
    height: u32,
    cell_size: u32,
) -> Result<Vec<u8>, JsValue> {
    let plots = run(algorithm, x1, y1, x2, y2, radius)?;
    let mut target = RenderTarget::new(width, height, cell_size).map_err(to_js)?;
    select_renderer(RendererKind::Auto)
        .render(&mut target, &GridStyle::default(), &plots)
        .map_err(to_js)?;
    PngEncoder::to_bytes(target.framebuffer()).map_err(to_js)
}

/// Title and summary of an algorithm, separated by a blank line.
#[wasm_bindgen]
pub fn describe(algorithm: &str) -> Result<String, JsValue> {
    let algorithm: Algorithm = algorithm.parse().map_err(to_js)?;
    let info = catalog::describe(algorithm);
    Ok(format!("{}\n\n{}", info.title, info.summary))
}
