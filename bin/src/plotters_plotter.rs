use plot_lib::{ChartSpec, Series};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

pub struct PlottersPlotter{}

impl PlottersPlotter {
    pub fn create() -> anyhow::Result<PlottersPlotter> {
        Ok(PlottersPlotter{})
    }
}

impl plot_lib::Plotter for PlottersPlotter {
    fn plot_line(&mut self, series : &Series, spec : &ChartSpec) -> anyhow::Result<()> {
        // The output format follows the path's extension; anything that is not
        // svg is handed to the bitmap backend, which rejects extensions it
        // cannot encode.
        let extension = Path::new(&spec.output_path).extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        if extension.eq_ignore_ascii_case("svg") {
            let root_area =
                SVGBackend::new(&spec.output_path, (1024, 768)).into_drawing_area();
            PlottersPlotter::draw_line_chart(root_area, series, spec)
        } else {
            let root_area =
                BitMapBackend::new(&spec.output_path, (1024, 768)).into_drawing_area();
            PlottersPlotter::draw_line_chart(root_area, series, spec)
        }
    }
}

impl PlottersPlotter {
    fn draw_line_chart<DB>(root_area : DrawingArea<DB, Shift>,
                           series : &Series,
                           spec : &ChartSpec) -> anyhow::Result<()>
        where DB : DrawingBackend, DB::ErrorType : 'static {
        root_area.fill(&WHITE)?;

        let chart_area = root_area.titled(&spec.title, ("sans-serif", 18))?;

        let (min_x, max_x) = series.x_range();
        let (mut min_y, mut max_y) = series.y_range();
        if min_y == max_y {
            // A flat series still needs a non-degenerate cartesian range.
            min_y -= 1.0;
            max_y += 1.0;
        }

        let mut cc = ChartBuilder::on(&chart_area)
            .margin(5)
            .set_all_label_area_size(50)
            .build_cartesian_2d(min_x..max_x, min_y..max_y)?;

        cc.configure_mesh()
            .x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str())
            .draw()?;

        let points = series.x_points().iter()
            .zip(series.y_points().iter())
            .map(|(x, y)| (*x, *y));
        cc.draw_series(LineSeries::new(points, &RED))?;

        root_area.present()?;

        Ok(())
    }
}
