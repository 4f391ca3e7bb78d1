//! Text rendering of the board

use std::fmt;

use super::Board;

/// Two-character filler of an empty cell
const EMPTY_CELL: &str = "--";

impl Board {
    /// Text board, top rank first, followed by the file legend.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            write!(f, "{}  ", self.rows() - row)?;
            let start = (row * self.cols()) as usize;
            for cell in &self.cells[start..start + self.cols() as usize] {
                match cell.occupant().and_then(|id| self.piece(id)) {
                    Some(piece) => write!(f, "{} ", piece.code())?,
                    None => write!(f, "{EMPTY_CELL} ")?,
                }
            }
            writeln!(f)?;
        }
        f.write_str("  ")?;
        for col in 0..self.cols() {
            write!(f, " {} ", (b'a' + col as u8) as char)?;
        }
        writeln!(f)
    }
}
