use getset::{Setters};

#[derive(Debug, PartialEq, Clone, Setters)]
#[getset(set = "pub")]
pub struct ChartSpec {
    pub title : String,
    pub x_label : String,
    pub y_label : String,
    pub output_path : String
}

impl Default for ChartSpec {
    fn default() -> Self {
        ChartSpec { title : String::new(), x_label : String::new(),
            y_label : String::new(), output_path : String::new() }
    }
}
