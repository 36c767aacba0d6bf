// Core Rust functions (callable from Rust)

/// Returns `a + b`.
///
/// Overflow is not checked: it panics when overflow checks are enabled
/// and wraps otherwise.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Subtracts the subtrahend `b` from the minuend `a`.
pub fn subtract(a: i64, b: i64) -> i64 {
    a - b
}

// Python-exposed functions
#[cfg(feature = "python")]
mod python {
    use pyo3::prelude::*;

    #[pyfunction]
    #[pyo3(name = "add")]
    fn py_add(a: i64, b: i64) -> i64 {
        super::add(a, b)
    }

    #[pyfunction]
    #[pyo3(name = "subtract")]
    fn py_subtract(a: i64, b: i64) -> i64 {
        super::subtract(a, b)
    }

    // Python module definition
    #[pymodule]
    fn calculator(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(py_add, m)?)?;
        m.add_function(wrap_pyfunction!(py_subtract, m)?)?;
        Ok(())
    }
}
