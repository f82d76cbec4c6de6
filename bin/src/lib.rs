pub mod plotters_plotter;
