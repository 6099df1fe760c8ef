// Python-binding (maturin develop --features python).
// Alt går via JSON-strenger så Python-siden slipper egne typer.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::dates;
use crate::error::ProgressError;
use crate::report;

fn to_py_err(e: ProgressError) -> PyErr {
    PyErr::new::<PyValueError, _>(e.to_string())
}

/// {"observations": [...], "startDate": "...", "endDate": "..."} -> rapport-JSON
#[pyfunction]
fn build_report_json(json_in: &str) -> PyResult<String> {
    report::build_report_json(json_in).map_err(to_py_err)
}

#[pyfunction]
fn normalize_query_datetime(value: &str) -> PyResult<String> {
    dates::normalize_query_datetime(value).map_err(to_py_err)
}

#[pymodule]
fn liftlog_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(build_report_json, m)?)?;
    m.add_function(wrap_pyfunction!(normalize_query_datetime, m)?)?;
    Ok(())
}
