use crate::chart_spec::ChartSpec;
use crate::series::Series;

#[cfg(test)]
use mockall::{automock};

#[cfg_attr(test, automock)]
pub trait Plotter {
    fn plot_line(&mut self, series : &Series, spec : &ChartSpec) -> anyhow::Result<()>;
}
