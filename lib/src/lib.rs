pub mod chart_spec;
pub mod commands;
pub mod plotter;
pub mod series;

pub use chart_spec::ChartSpec;
pub use commands::generate_plot::generate_plot;
pub use plotter::Plotter;
pub use series::Series;

#[derive(Debug)]
pub struct PlotError(String);

impl std::fmt::Display for PlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        let PlotError(text) = self;
        text.fmt(f)
    }
}

impl std::convert::From<String> for PlotError {
    fn from(text : String) -> Self {
        PlotError(text)
    }
}

impl std::error::Error for PlotError {
}
