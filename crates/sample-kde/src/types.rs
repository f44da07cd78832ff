//! Density estimate results

use std::fmt;

/// Density evaluated on an evenly spaced grid
#[derive(Debug, Clone, PartialEq)]
pub struct DensityEstimate {
    /// Evaluation points, ascending
    pub grid: Vec<f64>,
    /// Estimated density at each grid point
    pub density: Vec<f64>,
    /// Bandwidth used for smoothing
    pub bandwidth: f64,
}

impl DensityEstimate {
    /// Number of grid points
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// Check if the estimate holds no points
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Spacing between consecutive grid points
    pub fn step(&self) -> f64 {
        match (self.grid.first(), self.grid.last()) {
            (Some(first), Some(last)) if self.grid.len() > 1 => {
                (last - first) / (self.grid.len() - 1) as f64
            }
            _ => 0.0,
        }
    }

    /// Riemann sum of the density over the grid, close to 1 for a wide enough grid
    pub fn integral(&self) -> f64 {
        self.density.iter().sum::<f64>() * self.step()
    }

    /// Grid point with the highest density
    pub fn mode(&self) -> Option<f64> {
        self.density
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, &d)| match best {
                Some((_, max)) if max >= d => best,
                _ => Some((i, d)),
            })
            .map(|(i, _)| self.grid[i])
    }

    /// Split into `(grid, density)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.grid, self.density)
    }
}

impl fmt::Display for DensityEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lo = self.grid.first().copied().unwrap_or(0.0);
        let hi = self.grid.last().copied().unwrap_or(0.0);
        write!(
            f,
            "DensityEstimate({} points over [{:.3}, {:.3}], bandwidth={:.4})",
            self.len(),
            lo,
            hi,
            self.bandwidth
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let estimate = DensityEstimate {
            grid: vec![0.0, 0.5, 1.0],
            density: vec![0.5, 1.0, 0.5],
            bandwidth: 0.25,
        };
        assert_eq!(estimate.len(), 3);
        assert_eq!(estimate.step(), 0.5);
        assert_eq!(estimate.integral(), 1.0);
        assert_eq!(estimate.mode(), Some(0.5));
        assert_eq!(
            estimate.to_string(),
            "DensityEstimate(3 points over [0.000, 1.000], bandwidth=0.2500)"
        );
        let (grid, density) = estimate.into_parts();
        assert_eq!(grid.len(), density.len());
    }

    #[test]
    fn test_empty() {
        let estimate = DensityEstimate {
            grid: vec![],
            density: vec![],
            bandwidth: 1.0,
        };
        assert!(estimate.is_empty());
        assert_eq!(estimate.step(), 0.0);
        assert_eq!(estimate.mode(), None);
    }
}
