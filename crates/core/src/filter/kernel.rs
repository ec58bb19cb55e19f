use ndarray::{arr2, Array2};

/// A square convolution kernel with odd size >= 3.
#[derive(Clone, Debug)]
pub struct Kernel {
    weights: Array2<f32>,
}

impl Kernel {
    /// Wraps an arbitrary weight matrix, rejecting shapes the convolution
    /// loop cannot center on a pixel.
    pub fn new(weights: Array2<f32>) -> Result<Self, &'static str> {
        let (rows, cols) = weights.dim();
        if rows != cols {
            return Err("kernel must be square");
        }
        if rows < 3 || rows % 2 == 0 {
            return Err("kernel size must be odd and >= 3");
        }
        Ok(Self { weights })
    }

    /// The fixed 3x3 sharpening kernel used by the enhancement stage.
    pub fn sharpen() -> Self {
        Self {
            weights: arr2(&[[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]]),
        }
    }

    /// Sobel horizontal-gradient operator.
    pub fn sobel_x() -> Self {
        Self {
            weights: arr2(&[[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]]),
        }
    }

    /// Sobel vertical-gradient operator.
    pub fn sobel_y() -> Self {
        Self {
            weights: arr2(&[[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]]),
        }
    }

    /// Normalized Gaussian kernel: outer product of a 1-D profile with itself.
    pub fn gaussian(size: usize, sigma: f32) -> Self {
        debug_assert!(size >= 3 && size % 2 == 1);
        let profile = gaussian_profile_1d(size, sigma);
        let mut weights = Array2::zeros((size, size));
        for y in 0..size {
            for x in 0..size {
                weights[[y, x]] = profile[y] * profile[x];
            }
        }
        Self { weights }
    }

    pub fn size(&self) -> usize {
        self.weights.nrows()
    }

    /// Pixels on each side of the center the kernel reaches.
    pub fn radius(&self) -> usize {
        self.size() / 2
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.weights[[row, col]]
    }
}

/// Precompute a normalized 1-D Gaussian profile of the given size and sigma.
///
/// `size` must be odd and >= 1.
pub(crate) fn gaussian_profile_1d(size: usize, sigma: f32) -> Vec<f32> {
    debug_assert!(size >= 1 && size % 2 == 1);
    let sigma = sigma as f64;
    let half = (size / 2) as f64;
    let mut profile: Vec<f64> = (0..size)
        .map(|i| {
            let x = i as f64 - half;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f64 = profile.iter().sum();
    for v in &mut profile {
        *v /= sum;
    }
    profile.iter().map(|&v| v as f32).collect()
}
