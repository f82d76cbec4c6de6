use crate::chart_spec::ChartSpec;
use crate::plotter::*;
use crate::series::Series;
use crate::PlotError;

pub fn generate_plot(plotter : &mut impl Plotter, output_path : &str) -> anyhow::Result<()> {
    if output_path.is_empty() {
        return Err(PlotError(String::from("No output path supplied")).into());
    }

    let series = Series::example();

    let mut spec = ChartSpec::default();
    spec.set_title(String::from("example plot"))
        .set_x_label(String::from("x"))
        .set_y_label(String::from("y"))
        .set_output_path(String::from(output_path));

    plotter.plot_line(&series, &spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use mockall::{predicate::*};

    #[test]
    fn generate_plots_the_fixed_series_once() -> anyhow::Result<()> {
        let mut plotter = MockPlotter::new();

        let expected_series = Series::from_points(
            vec![1.0, 2.0, 3.0, 4.0, 5.0], vec![6.0, 7.0, -2.0, 3.0, 5.0])?;
        let mut expected_spec = ChartSpec::default();
        expected_spec.set_title(String::from("example plot"))
            .set_x_label(String::from("x"))
            .set_y_label(String::from("y"))
            .set_output_path(String::from("example.png"));

        plotter.expect_plot_line()
            .with(eq(expected_series), eq(expected_spec))
            .times(1)
            .return_once(|_, _| Ok(()));

        generate_plot(&mut plotter, "example.png")
    }

    #[test]
    fn generate_fails_without_an_output_path() {
        let mut plotter = MockPlotter::new();
        plotter.expect_plot_line().times(0);

        let result = generate_plot(&mut plotter, "");
        assert!(result.is_err());
    }

    #[test]
    fn generate_propagates_a_plotter_failure() {
        let mut plotter = MockPlotter::new();
        plotter.expect_plot_line()
            .times(1)
            .return_once(|_, _| Err(anyhow!("Failed")));

        let result = generate_plot(&mut plotter, "example.png");
        assert!(result.is_err());
    }
}
