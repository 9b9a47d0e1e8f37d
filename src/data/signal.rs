//! Breathing signal samples and the sources that supply them.
//!
//! The loader expects header-less, comma-delimited rows of numeric fields.
//! Only the time and breath-value columns are parsed; everything else on the
//! row is ignored. Blank lines are skipped.
//!
//! Rows come from a local file, an HTTP(S) URL or memory; all of them go
//! through [`parse_signal`].

use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;

use crate::config::InputColumns;
use crate::error::{LoadError, LoadResult};

/// One `(time, value)` pair of the breathing trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub value: f64,
}

/// A loaded breathing trace, stored column-wise.
///
/// The sample index is the only identity; times are expected in increasing
/// order but this is not enforced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signal {
    pub times: Vec<f64>,
    pub values: Vec<f64>,
}

impl Signal {
    pub fn from_samples<I: IntoIterator<Item = Sample>>(samples: I) -> Self {
        let mut signal = Signal::default();
        for s in samples {
            signal.push(s);
        }
        signal
    }

    pub fn push(&mut self, sample: Sample) {
        self.times.push(sample.time);
        self.values.push(sample.value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn sample(&self, index: usize) -> Option<Sample> {
        Some(Sample {
            time: *self.times.get(index)?,
            value: *self.values.get(index)?,
        })
    }

    /// Time of the first sample, used to place the legend markers.
    pub fn first_time(&self) -> Option<f64> {
        self.times.first().copied()
    }
}

/// Anything that can produce an ordered breathing trace.
pub trait SignalSource {
    /// Human-readable origin of the data (path, label, ...), used in logs.
    fn describe(&self) -> String;

    /// Read the full trace. Called once per load.
    fn read_signal(&self) -> LoadResult<Signal>;
}

/// A delimited text file on disk.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    pub path: PathBuf,
    pub columns: InputColumns,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>, columns: InputColumns) -> Self {
        Self {
            path: path.into(),
            columns,
        }
    }
}

impl SignalSource for CsvFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_signal(&self) -> LoadResult<Signal> {
        let file = std::fs::File::open(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_signal(file, &self.columns).map_err(|e| match e {
            LoadError::Io { source, .. } => LoadError::Io {
                path: self.path.clone(),
                source,
            },
            other => other,
        })
    }
}

/// Fetches the raw body of a remote document.
pub trait HttpFetch {
    fn fetch(&self, url: &str) -> LoadResult<Box<dyn Read>>;
}

/// Blocking HTTP(S) GET through reqwest.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestFetch;

impl HttpFetch for ReqwestFetch {
    fn fetch(&self, url: &str) -> LoadResult<Box<dyn Read>> {
        let http_err = |source: reqwest::Error| LoadError::Http {
            url: url.to_string(),
            source,
        };
        let resp = reqwest::blocking::get(url)
            .and_then(|r| r.error_for_status())
            .map_err(http_err)?;
        log::debug!("fetched {} ({:?} bytes)", url, resp.content_length());
        Ok(Box::new(resp))
    }
}

/// A delimited text document served over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource<F = ReqwestFetch> {
    pub url: String,
    pub columns: InputColumns,
    fetch: F,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, columns: InputColumns) -> Self {
        Self::with_fetch(url, columns, ReqwestFetch)
    }
}

impl<F: HttpFetch> HttpSource<F> {
    pub fn with_fetch(url: impl Into<String>, columns: InputColumns, fetch: F) -> Self {
        Self {
            url: url.into(),
            columns,
            fetch,
        }
    }
}

impl<F: HttpFetch> SignalSource for HttpSource<F> {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn read_signal(&self) -> LoadResult<Signal> {
        let body = self.fetch.fetch(&self.url)?;
        parse_signal(body, &self.columns).map_err(|e| match e {
            LoadError::Io { source, .. } => LoadError::Io {
                path: PathBuf::from(&self.url),
                source,
            },
            other => other,
        })
    }
}

/// Whether `location` names a remote document rather than a local file.
pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Pick the source for a user-entered location: HTTP(S) URLs are fetched,
/// anything else is a local file path.
pub fn source_for(location: &str, columns: InputColumns) -> Box<dyn SignalSource> {
    if is_url(location) {
        Box::new(HttpSource::new(location, columns))
    } else {
        Box::new(CsvFileSource::new(location, columns))
    }
}

/// An already materialized trace, e.g. produced by a test harness or an
/// acquisition front-end.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pub label: String,
    pub samples: Vec<Sample>,
}

impl MemorySource {
    pub fn new(label: impl Into<String>, samples: Vec<Sample>) -> Self {
        Self {
            label: label.into(),
            samples,
        }
    }

    /// Build a source from bare values, using the index as time.
    pub fn from_values(label: impl Into<String>, values: &[f64]) -> Self {
        let samples = values
            .iter()
            .enumerate()
            .map(|(i, v)| Sample {
                time: i as f64,
                value: *v,
            })
            .collect();
        Self::new(label, samples)
    }
}

impl SignalSource for MemorySource {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn read_signal(&self) -> LoadResult<Signal> {
        Ok(Signal::from_samples(self.samples.iter().copied()))
    }
}

/// Parse delimited rows from any reader into a [`Signal`].
///
/// Every non-blank row must carry the same number of fields as the first one,
/// and enough fields to reach both configured columns.
pub fn parse_signal<R: Read>(reader: R, columns: &InputColumns) -> LoadResult<Signal> {
    let reader = BufReader::new(reader);
    let required = columns.time.max(columns.value) + 1;
    let mut expected: Option<usize> = None;
    let mut signal = Signal::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| LoadError::Io {
            path: PathBuf::new(),
            source,
        })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cols: Vec<&str> = line.split(columns.delimiter).map(|s| s.trim()).collect();
        match expected {
            None => {
                if cols.len() < required {
                    return Err(LoadError::MissingColumns {
                        line: line_no,
                        required,
                        found: cols.len(),
                    });
                }
                expected = Some(cols.len());
            }
            Some(n) if n != cols.len() => {
                return Err(LoadError::ColumnCount {
                    line: line_no,
                    expected: n,
                    found: cols.len(),
                });
            }
            Some(_) => {}
        }

        let time = parse_cell(cols[columns.time], line_no, columns.time)?;
        let value = parse_cell(cols[columns.value], line_no, columns.value)?;
        signal.push(Sample { time, value });
    }

    Ok(signal)
}

/// `column` is the zero-based index; the error reports it one-based.
fn parse_cell(cell: &str, line: usize, column: usize) -> LoadResult<f64> {
    cell.parse::<f64>().map_err(|_| LoadError::NotNumeric {
        line,
        column: column + 1,
        value: cell.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_source_uses_index_as_time() {
        let src = MemorySource::from_values("mem", &[4.0, 1.0]);
        let s = src.read_signal().unwrap();
        assert_eq!(s.times, vec![0.0, 1.0]);
        assert_eq!(s.values, vec![4.0, 1.0]);
    }

    #[test]
    fn url_detection() {
        assert!(is_url("https://example.org/breath.csv"));
        assert!(is_url("http://localhost:8000/b.csv"));
        assert!(!is_url("/home/me/https_dump.csv"));
        assert!(!is_url("data/breath.csv"));
    }
}
