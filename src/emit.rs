//! Bit grid → VHDL array-of-vectors constant.
//!
//! ```text
//! type <type> is array(0 to H-1) of std_logic_vector(W-1 downto 0);
//! constant <NAME> : <type> := (
//!   "0110…",
//!   …
//!   "1001…"
//! );
//! ```
//!
//! Row `y` becomes array index `y`. With [`BitOrder::MsbFirst`] column
//! `x = 0` is the leftmost character, i.e. vector bit `W-1`.
use crate::threshold::BitGrid;
use serde::Deserialize;
use std::fmt;

/// Mapping of image columns onto bit-vector indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BitOrder {
    /// `x = 0` → bit `W-1` (leftmost character).
    #[default]
    MsbFirst,
    /// `x = 0` → bit `0` (rightmost character).
    LsbFirst,
}

/// Names and layout of the emitted declaration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeclarationOptions {
    pub type_name: String,
    pub constant_name: String,
    pub element_type: String,
    pub indent: String,
    pub bit_order: BitOrder,
}

impl Default for DeclarationOptions {
    fn default() -> Self {
        Self {
            type_name: "vader_bitmap_t".to_string(),
            constant_name: "DARK_VADER_BITMAP".to_string(),
            element_type: "std_logic_vector".to_string(),
            indent: "  ".to_string(),
            bit_order: BitOrder::MsbFirst,
        }
    }
}

impl DeclarationOptions {
    /// Check that every name is a basic VHDL identifier.
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("type_name", &self.type_name),
            ("constant_name", &self.constant_name),
            ("element_type", &self.element_type),
        ] {
            if !is_identifier(value) {
                return Err(format!("{field} {value:?} is not a valid identifier"));
            }
        }
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(format!("indent {:?} must be spaces or tabs", self.indent));
        }
        Ok(())
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !s.ends_with('_')
        && !s.contains("__")
}

/// Quoted `'0'`/`'1'` literal for row `y`.
pub fn row_literal(grid: &BitGrid, y: usize, order: BitOrder) -> String {
    let digit = |&b: &bool| if b { '1' } else { '0' };
    let row = grid.row(y);
    let mut out = String::with_capacity(row.len() + 2);
    out.push('"');
    match order {
        BitOrder::MsbFirst => out.extend(row.iter().map(digit)),
        BitOrder::LsbFirst => out.extend(row.iter().rev().map(digit)),
    }
    out.push('"');
    out
}

/// Fully rendered declaration, one entry per output line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    lines: Vec<String>,
}

impl Declaration {
    pub fn new(grid: &BitGrid, opts: &DeclarationOptions) -> Self {
        let (w, h) = (grid.width(), grid.height());
        let mut lines = Vec::with_capacity(h + 3);
        lines.push(format!(
            "type {} is array(0 to {}) of {}({} downto 0);",
            opts.type_name,
            h as isize - 1,
            opts.element_type,
            w as isize - 1
        ));
        lines.push(format!(
            "constant {} : {} := (",
            opts.constant_name, opts.type_name
        ));
        for y in 0..h {
            let sep = if y + 1 < h { "," } else { "" };
            lines.push(format!(
                "{}{}{sep}",
                opts.indent,
                row_literal(grid, y, opts.bit_order)
            ));
        }
        lines.push(");".to_string());
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
