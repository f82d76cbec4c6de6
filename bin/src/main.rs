use plot_lib;
use plot_tool::plotters_plotter::PlottersPlotter;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "plot-tool", about = "Renders the example line plot to an image file")]
struct CliOptions {
    /// Where to write the image, format inferred from the extension
    output_path : String
}

fn main() -> anyhow::Result<()> {
    let options = CliOptions::from_args();

    let mut plotter = PlottersPlotter::create()?;
    plot_lib::generate_plot(&mut plotter, &options.output_path)?;

    println!("Saved plot to {}", options.output_path);
    Ok(())
}
