//! Gauss–Legendre quadrature tables.
//!
//! 24-point abscissae (roots of the 24th Legendre polynomial) and weights on
//! [-1, 1]. Callers map the nodes onto [0, 1] with `t = 0.5 * x + 0.5` and
//! scale the weighted sum by half the interval.

pub(crate) const ABSCISSAE: [f32; 24] = [
    -0.064_056_89,
    0.064_056_89,
    -0.191_118_87,
    0.191_118_87,
    -0.315_042_68,
    0.315_042_68,
    -0.433_793_51,
    0.433_793_51,
    -0.545_421_47,
    0.545_421_47,
    -0.648_093_65,
    0.648_093_65,
    -0.740_124_19,
    0.740_124_19,
    -0.820_001_99,
    0.820_001_99,
    -0.886_415_53,
    0.886_415_53,
    -0.938_274_55,
    0.938_274_55,
    -0.974_728_56,
    0.974_728_56,
    -0.995_187_2,
    0.995_187_2,
];

pub(crate) const WEIGHTS: [f32; 24] = [
    0.127_938_2,
    0.127_938_2,
    0.125_837_456,
    0.125_837_456,
    0.121_670_47,
    0.121_670_47,
    0.115_505_67,
    0.115_505_67,
    0.107_444_27,
    0.107_444_27,
    0.097_618_65,
    0.097_618_65,
    0.086_190_16,
    0.086_190_16,
    0.073_346_48,
    0.073_346_48,
    0.059_298_584,
    0.059_298_584,
    0.044_277_44,
    0.044_277_44,
    0.028_531_389,
    0.028_531_389,
    0.012_341_23,
    0.012_341_23,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_interval() {
        // Weights on [-1, 1] integrate the constant 1 to the interval width.
        let sum: f32 = WEIGHTS.iter().sum();
        assert!((sum - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_abscissae_symmetric() {
        for pair in ABSCISSAE.chunks(2) {
            assert_eq!(pair[0], -pair[1]);
        }
    }
}
