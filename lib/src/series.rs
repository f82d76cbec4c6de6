use crate::PlotError;

#[derive(Debug, PartialEq, Clone)]
pub struct Series {
    x_points : Vec<f32>,
    y_points : Vec<f32>
}

impl Series {
    pub fn from_points(x_points : Vec<f32>, y_points : Vec<f32>) -> anyhow::Result<Series> {
        if x_points.len() != y_points.len() {
            return Err(PlotError(format!("Series must have as many x points as y points ({} != {})",
                x_points.len(), y_points.len())).into());
        }
        if x_points.is_empty() {
            return Err(PlotError(String::from("Series must contain at least one point")).into());
        }

        Ok(Series { x_points, y_points })
    }

    pub fn example() -> Series {
        Series {
            x_points : vec![1.0, 2.0, 3.0, 4.0, 5.0],
            y_points : vec![6.0, 7.0, -2.0, 3.0, 5.0]
        }
    }

    pub fn len(&self) -> usize {
        self.x_points.len()
    }

    pub fn x_points(&self) -> &[f32] {
        &self.x_points
    }

    pub fn y_points(&self) -> &[f32] {
        &self.y_points
    }

    pub fn x_range(&self) -> (f32, f32) {
        Series::find_range(&self.x_points)
    }

    pub fn y_range(&self) -> (f32, f32) {
        Series::find_range(&self.y_points)
    }

    fn find_range(points : &[f32]) -> (f32, f32) {
        let mut min_point = f32::INFINITY;
        let mut max_point = f32::NEG_INFINITY;
        for p in points {
            min_point = min_point.min(*p);
            max_point = max_point.max(*p);
        }

        (min_point, max_point)
    }
}
