pub mod generate_plot;
