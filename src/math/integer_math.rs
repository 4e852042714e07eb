use nalgebra::{Matrix2, Matrix3};

/// Greatest common divisor of the absolute values of `values`.
///
/// Returns 0 when every entry is 0, a positive integer otherwise.
pub fn gcd_of_list(values: &[i64]) -> i64 {
    values.iter().fold(0, |acc, &x| gcd(acc, x))
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a.abs()
}

/// Exact determinant of a 2×2 integer matrix, widened to i64.
pub fn det2(m: &Matrix2<i32>) -> i64 {
    let m = m.map(i64::from);
    m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
}

/// Exact determinant of a 3×3 integer matrix, widened to i64.
pub fn det3(m: &Matrix3<i32>) -> i64 {
    let m = m.map(i64::from);
    m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
        - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
        + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
}
