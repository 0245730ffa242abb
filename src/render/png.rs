use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, Rgb, RgbImage};
use log::{debug, info};
use plotters::prelude::*;

use super::chart::{Chart, LegendCorner};
use super::RenderConfig;
use crate::color::to_plotters;

const ERROR_BAR_CAP: u32 = 8;

/// Render `chart` and write it as a tight-cropped PNG, replacing any
/// existing file.
pub fn save_png(chart: &Chart, config: &RenderConfig, path: &Path) -> Result<()> {
    let img = render(chart, config)?;
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(
        "Wrote {}x{} image to {}",
        img.width(),
        img.height(),
        path.display()
    );
    Ok(())
}

/// Draw the chart onto an in-memory RGB canvas and crop it to its content.
pub fn render(chart: &Chart, config: &RenderConfig) -> Result<RgbImage> {
    let (width, height) = config.canvas_size();
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    draw(chart, &mut buffer, (width, height)).context("drawing chart")?;

    let canvas = RgbImage::from_raw(width, height, buffer)
        .context("canvas buffer does not match its size")?;
    Ok(tight_crop(&canvas, config.pad_pixels()))
}

fn draw(chart: &Chart, buffer: &mut [u8], size: (u32, u32)) -> Result<()> {
    let root = BitMapBackend::with_buffer(buffer, size).into_drawing_area();
    root.fill(&WHITE)?;

    let corner = chart.best_legend_corner();
    debug!("legend placed at {corner:?}");

    let mut ctx = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(chart.x_range().log_scale(), chart.y_range())?;

    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .axis_desc_style(("sans-serif", 20))
        .label_style(("sans-serif", 15))
        .x_label_formatter(&|v: &f64| format_episodes(*v))
        .draw()?;

    for (trace, color) in chart.traces().iter().zip(chart.colors()) {
        let color = to_plotters(color);
        let points: Vec<(f64, f64, f64)> = trace.plottable().collect();

        ctx.draw_series(points.iter().map(|&(x, m, s)| {
            ErrorBar::new_vertical(x, m - s, m, m + s, color.stroke_width(1), ERROR_BAR_CAP)
        }))?;

        ctx.draw_series(LineSeries::new(
            points.iter().map(|&(x, m, _)| (x, m)),
            color.stroke_width(2),
        ))?
        .label(trace.label.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    ctx.configure_series_labels()
        .position(label_position(corner))
        .label_font(("sans-serif", 16))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn label_position(corner: LegendCorner) -> SeriesLabelPosition {
    match corner {
        LegendCorner::UpperRight => SeriesLabelPosition::UpperRight,
        LegendCorner::UpperLeft => SeriesLabelPosition::UpperLeft,
        LegendCorner::LowerLeft => SeriesLabelPosition::LowerLeft,
        LegendCorner::LowerRight => SeriesLabelPosition::LowerRight,
    }
}

/// Episode tick labels: plain integers up to a million, scientific above.
fn format_episodes(v: f64) -> String {
    if v >= 1e6 {
        format!("{v:.0e}")
    } else if v >= 1.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

/// Crop away the white border around the drawn content, keeping `pad`
/// pixels of margin.
pub fn tight_crop(img: &RgbImage, pad: u32) -> RgbImage {
    const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

    let mut min = (u32::MAX, u32::MAX);
    let mut max = (0u32, 0u32);
    for (x, y, px) in img.enumerate_pixels() {
        if *px != BACKGROUND {
            min = (min.0.min(x), min.1.min(y));
            max = (max.0.max(x), max.1.max(y));
        }
    }
    if min.0 == u32::MAX {
        return img.clone();
    }

    let x0 = min.0.saturating_sub(pad);
    let y0 = min.1.saturating_sub(pad);
    let x1 = (max.0 + pad).min(img.width() - 1);
    let y1 = (max.1 + pad).min(img.height() - 1);
    image::imageops::crop_imm(img, x0, y0, x1 - x0 + 1, y1 - y0 + 1).to_image()
}
