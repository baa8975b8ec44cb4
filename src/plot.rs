use std::error::Error;
use std::path::Path;
use std::process::Command;

use plotters::prelude::*;

pub const PINK: RGBColor = RGBColor(255, 192, 203);

/// One density curve plus how it should appear in the chart.
pub struct DensitySeries<'a> {
    pub label: &'a str,
    pub color: RGBColor,
    pub curve: Vec<(f64, f64)>,
}

/// Draws every series as a translucent filled area under a solid line,
/// all on one autoscaled chart, and writes the result to `output_path`.
/// An existing file at that path is overwritten.
pub fn render_density_chart(
    output_path: &str,
    series: &[DensitySeries],
) -> Result<(), Box<dyn Error>> {
    let mut x_min = f64::MAX;
    let mut x_max = f64::MIN;
    let mut y_max = f64::MIN;
    for s in series {
        for &(x, y) in &s.curve {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_max = y_max.max(y);
        }
    }
    if x_min >= x_max {
        x_min = 0.0;
        x_max = 1.0;
    }
    if y_max <= 0.0 {
        y_max = 1.0;
    }
    y_max *= 1.05;

    let root_area = BitMapBackend::new(output_path, (1200, 800)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut ctx = ChartBuilder::on(&root_area)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .caption("Probability Density Function (PDF)", ("sans-serif", 40))
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;

    ctx.configure_mesh()
        .x_desc("Value")
        .y_desc("Density")
        .draw()?;

    for s in series {
        let color = s.color;
        ctx.draw_series(AreaSeries::new(s.curve.iter().copied(), 0.0, color.mix(0.4)))?;
        ctx.draw_series(LineSeries::new(s.curve.iter().copied(), &color))?
            .label(s.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    ctx.configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root_area.present()?;
    Ok(())
}

/// Opens the rendered chart in the platform image viewer, blocking
/// until the viewer exits.
pub fn show(path: &str) -> Result<(), Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Err(format!("no chart at {path}").into());
    }

    #[cfg(target_os = "macos")]
    let status = Command::new("open").arg("-W").arg(path).status()?;
    #[cfg(target_os = "windows")]
    let status = Command::new("cmd").args(["/C", "start", "/WAIT", path]).status()?;
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let status = Command::new("xdg-open").arg(path).status()?;

    if !status.success() {
        return Err(format!("image viewer exited with {status}").into());
    }
    Ok(())
}
