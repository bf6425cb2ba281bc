//! Python bindings for `strbytes`.
//!
//! Python strings may hold unpaired surrogates, which Rust's `&str` cannot.
//! Strings are therefore read as UTF-16 with `surrogatepass` and projected
//! through the UTF-16 path, so a lone surrogate becomes an element of its own.

use std::{fs::OpenOptions, sync::Once};

use ::strbytes::{ByteArrayEncoder, EncoderOptions, utf16_to_byte_array};
use log::LevelFilter;
use pyo3::{
    exceptions::PyValueError,
    prelude::*,
    types::{PyBytes, PyString},
};

static INIT_LOGGER: Once = Once::new();

fn utf16_units(s: &Bound<'_, PyString>) -> PyResult<Vec<u16>> {
    let encoded = s.call_method1("encode", ("utf-16-le", "surrogatepass"))?;
    let bytes = encoded.downcast::<PyBytes>()?.as_bytes();
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Projects `s` to `bytes`, one byte per code point.
#[pyfunction]
pub fn string_to_byte_array<'py>(
    py: Python<'py>,
    s: &Bound<'py, PyString>,
) -> PyResult<Bound<'py, PyBytes>> {
    let units = utf16_units(s)?;
    Ok(PyBytes::new(py, &utf16_to_byte_array(&units)))
}

/// Projects `s` to `bytes`, raising `ValueError` on the lossy elements the
/// keyword flags refuse.
#[pyfunction]
#[pyo3(signature = (s, *, reject_truncated=false, reject_astral=false, reject_ill_formed=false))]
pub fn encode<'py>(
    py: Python<'py>,
    s: &Bound<'py, PyString>,
    reject_truncated: bool,
    reject_astral: bool,
    reject_ill_formed: bool,
) -> PyResult<Bound<'py, PyBytes>> {
    let encoder = ByteArrayEncoder::new(EncoderOptions {
        reject_truncated,
        reject_astral,
        reject_ill_formed,
    });
    let units = utf16_units(s)?;
    let out = encoder
        .encode(&units[..])
        .map_err(|err| PyValueError::new_err(err.to_string()))?;
    Ok(PyBytes::new(py, &out))
}

/// Installs a stderr (or file) logger for the library's debug output. Only the
/// first call has an effect.
#[pyfunction]
#[pyo3(signature = (log_file=None))]
pub fn enable_verbose_logging(log_file: Option<String>) -> PyResult<()> {
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.is_test(false);
        builder.filter_level(LevelFilter::Trace);

        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}

#[pymodule]
pub fn strbytes(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(string_to_byte_array, m)?)?;
    m.add_function(wrap_pyfunction!(encode, m)?)?;
    m.add_function(wrap_pyfunction!(enable_verbose_logging, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
