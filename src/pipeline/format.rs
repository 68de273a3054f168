//! Result formatters.
//!
//! [`TextFormatter`] writes the matrix as plain rows: every value followed
//! by one space, every row terminated by `\n`, infinity as `inf`. Values use
//! the shortest form that round-trips (`0.1339745962155614`) unless a
//! precision is set, in which case they are rounded to that many significant
//! digits the way C's `%g` does (`0.133975` for 6).
//! [`JsonFormatter`] writes a document with the vocabulary, the matrix
//! (infinite entries as `null`), the network links, and the configuration.

use std::io::Write;

use serde::Serialize;

use super::artifacts::PfnetOutput;
use super::traits::ResultFormatter;
use crate::error::Result;
use crate::graph::DenseMatrix;
use crate::pathfinder::Edge;
use crate::types::PfnetConfig;

/// Write `matrix` as whitespace-separated text rows
///
/// `precision` is the number of significant digits; `None` keeps the
/// shortest round-trip form.
pub fn write_matrix(
    matrix: &DenseMatrix,
    precision: Option<usize>,
    writer: &mut dyn Write,
) -> Result<()> {
    for row in matrix.rows() {
        for &value in row {
            match precision {
                Some(digits) => write!(writer, "{} ", format_significant(value, digits))?,
                None => write!(writer, "{value} ")?,
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Format `value` with `digits` significant digits, `%g` style
///
/// Fixed notation when the decimal exponent lies in `-4..digits`,
/// scientific otherwise; trailing zeros are removed.
pub fn format_significant(value: f64, digits: usize) -> String {
    if !value.is_finite() || value == 0.0 {
        return value.to_string();
    }
    let digits = digits.max(1);

    // Rounding first fixes the exponent (9.9999996 -> 1.00000e1)
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Plain text rows, one per vocabulary term
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter {
    /// Significant digits per value (`None` = shortest round-trip form)
    pub precision: Option<usize>,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Round values to `digits` significant digits
    pub fn with_precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }
}

impl ResultFormatter for TextFormatter {
    fn format(
        &self,
        output: &PfnetOutput,
        _cfg: &PfnetConfig,
        writer: &mut dyn Write,
    ) -> Result<()> {
        write_matrix(output.matrix(), self.precision, writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// JSON document describing the whole network
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    /// Indent the output
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    vocabulary: &'a [String],
    matrix: Vec<Vec<Option<f64>>>,
    links: Vec<Edge>,
    config: &'a PfnetConfig,
}

impl<'a> JsonReport<'a> {
    fn new(output: &'a PfnetOutput, cfg: &'a PfnetConfig) -> Self {
        let matrix = output
            .matrix()
            .rows()
            .map(|row| {
                row.iter()
                    .map(|&v| v.is_finite().then_some(v))
                    .collect()
            })
            .collect();

        Self {
            vocabulary: output.vocabulary.terms(),
            matrix,
            links: output.links(),
            config: cfg,
        }
    }
}

impl ResultFormatter for JsonFormatter {
    fn format(&self, output: &PfnetOutput, cfg: &PfnetConfig, writer: &mut dyn Write) -> Result<()> {
        let report = JsonReport::new(output, cfg);
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &report)?;
        } else {
            serde_json::to_writer(&mut *writer, &report)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
