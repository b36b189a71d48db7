use std::fmt;

use crate::error::MathError;

/// An n-dimensional point or direction in single-precision float space.
///
/// The dimension is fixed at construction and every operation returns a
/// new `Vector`; binary operations require operand dimensions to match
/// exactly and fail with [`MathError::DimensionMismatch`] otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    components: Vec<f32>,
}

impl Vector {
    /// Creates a vector from an ordered list of components.
    pub fn new(components: impl Into<Vec<f32>>) -> Self {
        Self { components: components.into() }
    }

    /// Creates a vector from a flat float buffer.
    ///
    /// Round-trips losslessly with [`Vector::as_slice`].
    pub fn from_slice(components: &[f32]) -> Self {
        Self { components: components.to_vec() }
    }

    /// Number of components.
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    /// Component at `i`. Out-of-range access is a caller precondition
    /// violation and panics like slice indexing.
    pub fn get(&self, i: usize) -> f32 {
        self.components[i]
    }

    /// The components as a flat float buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.components
    }

    /// Component-wise sum of two vectors.
    pub fn add(&self, other: &Vector) -> Result<Vector, MathError> {
        self.zip_with(other, "addition", |a, b| a + b)
    }

    /// Component-wise difference of two vectors.
    pub fn subtract(&self, other: &Vector) -> Result<Vector, MathError> {
        self.zip_with(other, "subtraction", |a, b| a - b)
    }

    /// Scalar multiple of the vector.
    pub fn scale(&self, scalar: f32) -> Vector {
        Vector::new(self.components.iter().map(|c| c * scalar).collect::<Vec<_>>())
    }

    /// Broadcast-adds a scalar to every component.
    pub fn add_scalar(&self, scalar: f32) -> Vector {
        Vector::new(self.components.iter().map(|c| c + scalar).collect::<Vec<_>>())
    }

    /// Standard 3-D cross product. Both operands must have dimension 3.
    pub fn cross(&self, other: &Vector) -> Result<Vector, MathError> {
        if self.dimension() != 3 || other.dimension() != 3 {
            return Err(MathError::cross_requires_3d(self.dimension(), other.dimension()));
        }

        let (a1, a2, a3) = (self.components[0], self.components[1], self.components[2]);
        let (b1, b2, b3) = (other.components[0], other.components[1], other.components[2]);

        Ok(Vector::new([
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        ]))
    }

    /// Linear interpolation `(1-t)*self + t*other`.
    ///
    /// `t` is unrestricted; values outside `[0, 1]` extrapolate.
    pub fn lerp(&self, other: &Vector, t: f32) -> Result<Vector, MathError> {
        self.zip_with(other, "interpolation", |a, b| (1.0 - t) * a + t * b)
    }

    /// Scalar inner product.
    pub fn dot(&self, other: &Vector) -> Result<f32, MathError> {
        if self.dimension() != other.dimension() {
            return Err(MathError::vector_dimensions(
                "dot product",
                self.dimension(),
                other.dimension(),
            ));
        }

        Ok(self
            .components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Euclidean norm, always >= 0.
    pub fn magnitude(&self) -> f32 {
        self.components.iter().map(|c| c * c).sum::<f32>().sqrt()
    }

    /// Unit vector in the same direction.
    pub fn normalize(&self) -> Result<Vector, MathError> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(MathError::zero_magnitude());
        }
        Ok(self.scale(1.0 / mag))
    }

    fn zip_with(
        &self,
        other: &Vector,
        operation: &str,
        f: impl Fn(f32, f32) -> f32,
    ) -> Result<Vector, MathError> {
        if self.dimension() != other.dimension() {
            return Err(MathError::vector_dimensions(
                operation,
                self.dimension(),
                other.dimension(),
            ));
        }

        let components: Vec<f32> = self
            .components
            .iter()
            .zip(&other.components)
            .map(|(&a, &b)| f(a, b))
            .collect();

        Ok(Vector::new(components))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(|c| c.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

impl From<Vec<f32>> for Vector {
    fn from(components: Vec<f32>) -> Self {
        Vector::new(components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn assert_close(actual: &Vector, expected: &[f32]) {
        assert_eq!(actual.dimension(), expected.len());
        for (i, &e) in expected.iter().enumerate() {
            assert!(
                (actual.get(i) - e).abs() < EPSILON,
                "component {i}: {} != {e}",
                actual.get(i)
            );
        }
    }

    #[test]
    fn test_add_subtract_round_trip() {
        let u = Vector::new([1.0, 2.5, -3.0]);
        let v = Vector::new([-4.0, 0.5, 7.25]);

        let diff = v.subtract(&u).unwrap();
        let restored = u.add(&diff).unwrap();

        assert_close(&restored, v.as_slice());
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let u = Vector::new([1.0, 2.0]);
        let v = Vector::new([1.0, 2.0, 3.0]);

        let result = u.add(&v);
        assert!(matches!(result, Err(MathError::DimensionMismatch(_))));
    }

    #[test]
    fn test_scale_and_add_scalar() {
        let v = Vector::new([1.0, -2.0, 4.0]);

        assert_close(&v.scale(0.5), &[0.5, -1.0, 2.0]);
        assert_close(&v.add_scalar(1.0), &[2.0, -1.0, 5.0]);
    }

    #[test]
    fn test_cross_basis_vectors() {
        let x = Vector::new([1.0, 0.0, 0.0]);
        let y = Vector::new([0.0, 1.0, 0.0]);

        let z = x.cross(&y).unwrap();
        assert_close(&z, &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_cross_rejects_non_3d() {
        let u = Vector::new([1.0, 0.0]);
        let v = Vector::new([0.0, 1.0]);
        assert!(matches!(u.cross(&v), Err(MathError::DimensionMismatch(_))));

        let u = Vector::new([1.0, 0.0, 0.0, 0.0]);
        let v = Vector::new([0.0, 1.0, 0.0, 0.0]);
        assert!(matches!(u.cross(&v), Err(MathError::DimensionMismatch(_))));

        let u = Vector::new([1.0, 0.0, 0.0]);
        let v = Vector::new([0.0, 1.0]);
        assert!(matches!(u.cross(&v), Err(MathError::DimensionMismatch(_))));
    }

    #[test]
    fn test_lerp_endpoints() {
        let u = Vector::new([0.0, 10.0]);
        let v = Vector::new([4.0, -10.0]);

        assert_close(&u.lerp(&v, 0.0).unwrap(), u.as_slice());
        assert_close(&u.lerp(&v, 1.0).unwrap(), v.as_slice());
        assert_close(&u.lerp(&v, 0.5).unwrap(), &[2.0, 0.0]);
    }

    #[test]
    fn test_lerp_identity_for_any_t() {
        let v = Vector::new([3.0, -1.0, 0.25]);

        for t in [-2.0, 0.0, 0.3, 1.0, 5.5] {
            assert_close(&v.lerp(&v, t).unwrap(), v.as_slice());
        }
    }

    #[test]
    fn test_lerp_extrapolates() {
        let u = Vector::new([0.0]);
        let v = Vector::new([1.0]);

        assert_close(&u.lerp(&v, 2.0).unwrap(), &[2.0]);
        assert_close(&u.lerp(&v, -1.0).unwrap(), &[-1.0]);
    }

    #[test]
    fn test_dot_product() {
        let u = Vector::new([1.0, 2.0, 3.0]);
        let v = Vector::new([4.0, 5.0, 6.0]);

        assert_eq!(u.dot(&v).unwrap(), 32.0);
    }

    #[test]
    fn test_dot_dimension_mismatch() {
        let u = Vector::new([1.0, 2.0, 3.0]);
        let v = Vector::new([4.0, 5.0]);

        assert!(matches!(u.dot(&v), Err(MathError::DimensionMismatch(_))));
    }

    #[test]
    fn test_magnitude() {
        let v = Vector::new([3.0, 4.0]);
        assert_eq!(v.magnitude(), 5.0);

        let zero = Vector::new([0.0, 0.0, 0.0]);
        assert_eq!(zero.magnitude(), 0.0);
    }

    #[test]
    fn test_normalize_has_unit_magnitude() {
        for v in [
            Vector::new([3.0, 4.0]),
            Vector::new([1.0, 1.0, 1.0]),
            Vector::new([-0.5, 0.25, 8.0, 2.0]),
        ] {
            let n = v.normalize().unwrap();
            assert!((n.magnitude() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_normalize_zero_vector_fails() {
        let zero = Vector::new([0.0, 0.0]);
        assert!(matches!(zero.normalize(), Err(MathError::DegenerateVector(_))));
    }

    #[test]
    fn test_flat_buffer_round_trip() {
        let v = Vector::new([1.5, -2.25, 0.0, 9.75]);
        let restored = Vector::from_slice(v.as_slice());

        assert_eq!(v, restored);
    }

    #[test]
    fn test_display() {
        let v = Vector::new([1.0, -2.5]);
        assert_eq!(v.to_string(), "[1, -2.5]");
    }
}
