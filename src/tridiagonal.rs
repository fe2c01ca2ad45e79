use nalgebra::DMatrix;
use tracing::trace;

use crate::error::{CurveError, Result};

/// Square matrix with nonzero entries only on the main diagonal and its two neighbours.
/// - `sub` - sub-diagonal, `sub[0]` is never used,
/// - `main` - main diagonal,
/// - `sup` - super-diagonal, `sup[n - 1]` is never used.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalMatrix {
    sub: Vec<f64>,
    main: Vec<f64>,
    sup: Vec<f64>,
}

impl TridiagonalMatrix {
    /// Creates an `n x n` matrix filled with zeros.
    pub fn new(n: usize) -> Self {
        TridiagonalMatrix {
            sub: vec![0.0; n],
            main: vec![0.0; n],
            sup: vec![0.0; n],
        }
    }

    pub fn size(&self) -> usize {
        self.main.len()
    }

    pub fn get_sub_diagonal(&self) -> &[f64] {
        &self.sub
    }

    pub fn get_main_diagonal(&self) -> &[f64] {
        &self.main
    }

    pub fn get_super_diagonal(&self) -> &[f64] {
        &self.sup
    }

    /// Reads element `(row, col)`. Everything off the three diagonals, as well as
    /// indices outside of the matrix, reads as zero.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        let n = self.size();
        if row >= n || col >= n {
            return 0.0;
        }

        if row == col {
            self.main[row]
        } else if row + 1 == col {
            self.sup[row]
        } else if row == col + 1 {
            self.sub[row]
        } else {
            0.0
        }
    }

    /// Writes element `(row, col)`.
    /// # Example
    /// ```
    /// use curve_kit::TridiagonalMatrix;
    ///
    /// let mut matrix = TridiagonalMatrix::new(3);
    /// assert!(matrix.set(1, 2, 4.0).is_ok());
    /// assert_eq!(4.0, matrix.get(1, 2));
    /// ```
    /// # Errors
    /// Only the main, super and sub diagonals can be set.
    /// ```
    /// use curve_kit::TridiagonalMatrix;
    ///
    /// let mut matrix = TridiagonalMatrix::new(3);
    /// assert!(matrix.set(0, 2, 1.0).is_err());
    /// ```
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let n = self.size();
        if row >= n || col >= n {
            return Err(CurveError::InvalidArgument(format!(
                "({row}, {col}) is outside of {n}x{n} matrix"
            )));
        }

        if row == col {
            self.main[row] = value;
        } else if row + 1 == col {
            self.sup[row] = value;
        } else if row == col + 1 {
            self.sub[row] = value;
        } else {
            return Err(CurveError::InvalidArgument(
                "only the main, super and sub diagonals can be set".to_string(),
            ));
        }
        Ok(())
    }

    /// Solves `self * x = rhs` with the Thomas algorithm. The matrix is left untouched.
    ///
    /// There is no pivoting. The matrix should be diagonally dominant; a zero pivot
    /// produces non-finite values instead of an error.
    /// # Example
    /// ```
    /// use curve_kit::TridiagonalMatrix;
    ///
    /// let mut matrix = TridiagonalMatrix::new(2);
    /// matrix.set(0, 0, 2.0).unwrap();
    /// matrix.set(0, 1, 1.0).unwrap();
    /// matrix.set(1, 0, 1.0).unwrap();
    /// matrix.set(1, 1, 2.0).unwrap();
    ///
    /// let x = matrix.solve(&[3.0, 3.0]).unwrap();
    /// assert!((x[0] - 1.0).abs() < 1e-12);
    /// assert!((x[1] - 1.0).abs() < 1e-12);
    /// ```
    pub fn solve(&self, rhs: &[f64]) -> Result<Vec<f64>> {
        let n = self.size();
        if rhs.len() != n {
            return Err(CurveError::LengthMismatch { expected: n, actual: rhs.len() });
        }
        if n == 0 {
            return Ok(Vec::new());
        }
        trace!(size = n, "solving tridiagonal system");

        let mut c_prime = vec![0.0; n];
        c_prime[0] = self.sup[0] / self.main[0];
        for i in 1..n {
            c_prime[i] = self.sup[i] / (self.main[i] - c_prime[i - 1] * self.sub[i]);
        }

        let mut d_prime = vec![0.0; n];
        d_prime[0] = rhs[0] / self.main[0];
        for i in 1..n {
            d_prime[i] = (rhs[i] - d_prime[i - 1] * self.sub[i])
                / (self.main[i] - c_prime[i - 1] * self.sub[i]);
        }

        let mut x = vec![0.0; n];
        x[n - 1] = d_prime[n - 1];
        for i in (0..n - 1).rev() {
            x[i] = d_prime[i] - c_prime[i] * x[i + 1];
        }
        Ok(x)
    }

    /// Computes `self * x`.
    pub fn multiply(&self, x: &[f64]) -> Result<Vec<f64>> {
        let n = self.size();
        if x.len() != n {
            return Err(CurveError::LengthMismatch { expected: n, actual: x.len() });
        }

        let product = (0..n)
            .map(|i| {
                let mut value = self.main[i] * x[i];
                if i > 0 {
                    value += self.sub[i] * x[i - 1];
                }
                if i + 1 < n {
                    value += self.sup[i] * x[i + 1];
                }
                value
            })
            .collect();
        Ok(product)
    }

    /// Dense copy of the matrix.
    pub fn to_dense(&self) -> DMatrix<f64> {
        let n = self.size();
        DMatrix::from_fn(n, n, |row, col| self.get(row, col))
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use nalgebra::DVector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    fn random_dominant_matrix(rng: &mut StdRng, n: usize) -> TridiagonalMatrix {
        let mut matrix = TridiagonalMatrix::new(n);
        for i in 0..n {
            let mut off_diagonal = 0.0;
            if i > 0 {
                let value = rng.gen_range(-1.0..1.0);
                matrix.set(i, i - 1, value).unwrap();
                off_diagonal += f64::abs(value);
            }
            if i + 1 < n {
                let value = rng.gen_range(-1.0..1.0);
                matrix.set(i, i + 1, value).unwrap();
                off_diagonal += f64::abs(value);
            }
            matrix.set(i, i, off_diagonal + rng.gen_range(0.5..2.0)).unwrap();
        }
        matrix
    }

    #[test]
    fn set_and_get_on_diagonals() {
        let mut matrix = TridiagonalMatrix::new(3);
        matrix.set(0, 0, 1.0).unwrap();
        matrix.set(1, 0, 2.0).unwrap();
        matrix.set(1, 2, 3.0).unwrap();

        assert_eq!(1.0, matrix.get(0, 0));
        assert_eq!(2.0, matrix.get(1, 0));
        assert_eq!(3.0, matrix.get(1, 2));
        assert_eq!(0.0, matrix.get(2, 0));
        assert_eq!(0.0, matrix.get(5, 5));

        assert_eq!(&[0.0, 2.0, 0.0], matrix.get_sub_diagonal());
        assert_eq!(&[1.0, 0.0, 0.0], matrix.get_main_diagonal());
        assert_eq!(&[0.0, 3.0, 0.0], matrix.get_super_diagonal());
    }

    #[test]
    fn set_off_band_is_invalid_argument() {
        let mut matrix = TridiagonalMatrix::new(4);

        assert!(matches!(matrix.set(0, 2, 1.0), Err(CurveError::InvalidArgument(_))));
        assert!(matches!(matrix.set(3, 0, 1.0), Err(CurveError::InvalidArgument(_))));
        assert!(matches!(matrix.set(3, 4, 1.0), Err(CurveError::InvalidArgument(_))));
        assert!(matches!(matrix.set(4, 4, 1.0), Err(CurveError::InvalidArgument(_))));
    }

    #[test]
    fn solve_rejects_rhs_of_wrong_length() {
        let matrix = TridiagonalMatrix::new(3);

        let result = matrix.solve(&[1.0, 2.0]);
        assert!(matches!(
            result,
            Err(CurveError::LengthMismatch { expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn solve_empty_system() {
        let matrix = TridiagonalMatrix::new(0);
        assert!(matrix.solve(&[]).unwrap().is_empty());
    }

    #[test]
    fn solve_known_system() {
        // [2 1 0; 1 4 1; 0 1 2] x = [3 0 -3] -> x = [1.5 0 -1.5]
        let eps = 1e-12;
        let mut matrix = TridiagonalMatrix::new(3);
        matrix.set(0, 0, 2.0).unwrap();
        matrix.set(0, 1, 1.0).unwrap();
        matrix.set(1, 0, 1.0).unwrap();
        matrix.set(1, 1, 4.0).unwrap();
        matrix.set(1, 2, 1.0).unwrap();
        matrix.set(2, 1, 1.0).unwrap();
        matrix.set(2, 2, 2.0).unwrap();

        let x = matrix.solve(&[3.0, 0.0, -3.0]).unwrap();

        assert_approx_eq!(x[0], 1.5, eps);
        assert_approx_eq!(x[1], 0.0, eps);
        assert_approx_eq!(x[2], -1.5, eps);
    }

    #[test]
    fn solve_does_not_modify_matrix() {
        let mut rng = StdRng::seed_from_u64(7);
        let matrix = random_dominant_matrix(&mut rng, 6);
        let copy = matrix.clone();

        matrix.solve(&[1.0; 6]).unwrap();

        assert_eq!(copy, matrix);
    }

    #[test]
    fn solution_satisfies_system() {
        let eps = 1e-9;
        let mut rng = StdRng::seed_from_u64(42);

        for n in 1..20 {
            let matrix = random_dominant_matrix(&mut rng, n);
            let rhs: Vec<f64> = (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect();

            let x = matrix.solve(&rhs).unwrap();
            let product = matrix.multiply(&x).unwrap();

            for i in 0..n {
                assert_approx_eq!(product[i], rhs[i], eps);
            }
        }
    }

    #[test]
    fn matches_dense_solution() {
        let eps = 1e-9;
        let mut rng = StdRng::seed_from_u64(3);
        let matrix = random_dominant_matrix(&mut rng, 8);
        let rhs: Vec<f64> = (0..8).map(|_| rng.gen_range(-5.0..5.0)).collect();

        let x = matrix.solve(&rhs).unwrap();
        let dense = matrix
            .to_dense()
            .lu()
            .solve(&DVector::from_column_slice(&rhs))
            .unwrap();

        for i in 0..8 {
            assert_approx_eq!(x[i], dense[i], eps);
        }
    }

    #[test]
    fn solve_is_linear() {
        let eps = 1e-9;
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..10 {
            let n = rng.gen_range(2..15);
            let matrix = random_dominant_matrix(&mut rng, n);
            let d1: Vec<f64> = (0..n).map(|_| rng.gen_range(-5.0..5.0)).collect();
            let d2: Vec<f64> = (0..n).map(|_| rng.gen_range(-5.0..5.0)).collect();
            let a: f64 = rng.gen_range(-3.0..3.0);
            let b: f64 = rng.gen_range(-3.0..3.0);

            let combined: Vec<f64> = d1.iter().zip(&d2).map(|(u, v)| a * u + b * v).collect();
            let x = matrix.solve(&combined).unwrap();
            let x1 = matrix.solve(&d1).unwrap();
            let x2 = matrix.solve(&d2).unwrap();

            for i in 0..n {
                assert_approx_eq!(x[i], a * x1[i] + b * x2[i], eps);
            }
        }
    }

    #[test]
    fn multiply_rejects_wrong_length() {
        let matrix = TridiagonalMatrix::new(2);
        assert!(matches!(
            matrix.multiply(&[1.0]),
            Err(CurveError::LengthMismatch { expected: 2, actual: 1 })
        ));
    }
}
