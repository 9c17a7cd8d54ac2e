use crate::{Error, Result};

/// Behavior outside the input range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extrapolate {
    /// Continue the slope of the nearest segment
    Extend,
    /// Hold the nearest output value
    Clamp,
}

/// Piecewise-linear mapping from an input range to an output range
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    input: Vec<f64>,
    output: Vec<f64>,
    extrapolate: Extrapolate,
}

impl Interpolation {
    /// Build a mapping; the input range must be non-decreasing, finite and
    /// match the output range in length (at least two points)
    pub fn new(input: Vec<f64>, output: Vec<f64>, extrapolate: Extrapolate) -> Result<Self> {
        if input.len() < 2 {
            return Err(Error::Interpolation(format!(
                "input range needs at least 2 points, got {}",
                input.len()
            )));
        }
        if input.len() != output.len() {
            return Err(Error::Interpolation(format!(
                "input range has {} points but output range has {}",
                input.len(),
                output.len()
            )));
        }
        if input.iter().chain(output.iter()).any(|v| !v.is_finite()) {
            return Err(Error::Interpolation("ranges must be finite".to_string()));
        }
        if input.windows(2).any(|w| w[1] < w[0]) {
            return Err(Error::Interpolation(
                "input range must be non-decreasing".to_string(),
            ));
        }
        Ok(Self {
            input,
            output,
            extrapolate,
        })
    }

    pub fn extrapolate(&self) -> Extrapolate {
        self.extrapolate
    }

    /// Map a value through the ranges
    pub fn map(&self, value: f64) -> f64 {
        let last = self.input.len() - 1;

        if value <= self.input[0] && self.extrapolate == Extrapolate::Clamp {
            return self.output[0];
        }
        if value >= self.input[last] && self.extrapolate == Extrapolate::Clamp {
            return self.output[last];
        }

        // First segment whose end covers the value; out-of-range values use
        // the outermost segment.
        let segment = self.input[1..last]
            .iter()
            .position(|&end| value < end)
            .unwrap_or(last - 1);

        lerp_segment(
            value,
            self.input[segment],
            self.input[segment + 1],
            self.output[segment],
            self.output[segment + 1],
        )
    }
}

#[inline]
fn lerp_segment(value: f64, in_from: f64, in_to: f64, out_from: f64, out_to: f64) -> f64 {
    let span = in_to - in_from;
    if span == 0.0 {
        return if value < in_from { out_from } else { out_to };
    }
    let t = (value - in_from) / span;
    out_from + (out_to - out_from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_two_point_linear() {
        let i = Interpolation::new(vec![0.0, 10.0], vec![0.0, 100.0], Extrapolate::Extend).unwrap();
        assert!(approx(i.map(0.0), 0.0));
        assert!(approx(i.map(2.5), 25.0));
        assert!(approx(i.map(10.0), 100.0));
    }

    #[test]
    fn test_extend_extrapolates_both_sides() {
        let i = Interpolation::new(vec![0.0, 10.0], vec![0.0, 100.0], Extrapolate::Extend).unwrap();
        assert!(approx(i.map(-5.0), -50.0));
        assert!(approx(i.map(20.0), 200.0));
    }

    #[test]
    fn test_clamp_holds_edges() {
        let i = Interpolation::new(
            vec![0.0, 10.0, 20.0],
            vec![100.0, 50.0, 100.0],
            Extrapolate::Clamp,
        )
        .unwrap();
        assert!(approx(i.map(-1000.0), 100.0));
        assert!(approx(i.map(5.0), 75.0));
        assert!(approx(i.map(10.0), 50.0));
        assert!(approx(i.map(15.0), 75.0));
        assert!(approx(i.map(1000.0), 100.0));
    }

    #[test]
    fn test_multi_segment_extend_uses_outer_slopes() {
        let i = Interpolation::new(
            vec![0.0, 10.0, 20.0],
            vec![100.0, 50.0, 100.0],
            Extrapolate::Extend,
        )
        .unwrap();
        assert!(approx(i.map(-10.0), 150.0));
        assert!(approx(i.map(30.0), 150.0));
    }

    #[test]
    fn test_rejects_malformed_ranges() {
        assert!(Interpolation::new(vec![0.0], vec![1.0], Extrapolate::Clamp).is_err());
        assert!(Interpolation::new(vec![0.0, 1.0], vec![1.0], Extrapolate::Clamp).is_err());
        assert!(Interpolation::new(vec![1.0, 0.0], vec![0.0, 1.0], Extrapolate::Clamp).is_err());
        assert!(Interpolation::new(vec![0.0, f64::NAN], vec![0.0, 1.0], Extrapolate::Clamp).is_err());
    }

    #[test]
    fn test_flat_segment_steps() {
        let i = Interpolation::new(vec![5.0, 5.0], vec![0.0, 1.0], Extrapolate::Extend).unwrap();
        assert!(approx(i.map(4.0), 0.0));
        assert!(approx(i.map(5.0), 1.0));
    }
}
