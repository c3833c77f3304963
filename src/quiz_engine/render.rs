use log::warn;

/// Turns one question asset into something a view can show.
pub trait AssetRenderer {
    fn render(&self, asset: &str) -> String;
}

/// Shows assets exactly as stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawAsset;

impl AssetRenderer for RawAsset {
    fn render(&self, asset: &str) -> String {
        asset.to_string()
    }
}

/// Draws a FEN position as an 8x8 board of Unicode chess glyphs, seen from
/// the side to move.
#[derive(Debug, Clone, Copy)]
pub struct FenDiagram {
    /// Swap glyph colours so white pieces read correctly on dark terminals.
    pub invert_color: bool,
}

impl Default for FenDiagram {
    fn default() -> Self {
        FenDiagram { invert_color: true }
    }
}

const EMPTY_SQUARE: char = '⭘';

type Board = [[Option<char>; 8]; 8];

fn glyph(piece: char, invert_color: bool) -> char {
    let white = piece.is_ascii_uppercase() != invert_color;
    match (piece.to_ascii_lowercase(), white) {
        ('k', true)  => '♔',
        ('q', true)  => '♕',
        ('r', true)  => '♖',
        ('b', true)  => '♗',
        ('n', true)  => '♘',
        ('p', true)  => '♙',
        ('k', false) => '♚',
        ('q', false) => '♛',
        ('r', false) => '♜',
        ('b', false) => '♝',
        ('n', false) => '♞',
        _            => '♟',
    }
}

/// Parse the piece-placement field; `board[0]` is rank 8, `board[r][0]` the a-file.
fn parse_placement(placement: &str) -> Option<Board> {
    let mut board: Board = [[None; 8]; 8];
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return None;
    }
    for (row, rank) in ranks.iter().enumerate() {
        let mut file = 0usize;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                if skip == 0 || skip > 8 {
                    return None;
                }
                file += skip as usize;
            } else if "kqrbnpKQRBNP".contains(c) {
                if file >= 8 {
                    return None;
                }
                board[row][file] = Some(c);
                file += 1;
            } else {
                return None;
            }
        }
        if file != 8 {
            return None;
        }
    }
    Some(board)
}

impl FenDiagram {
    fn diagram(&self, fen: &str) -> Option<String> {
        let mut fields = fen.split_whitespace();
        let board = parse_placement(fields.next()?)?;
        let black_to_move = match fields.next() {
            None | Some("w") => false,
            Some("b") => true,
            Some(_) => return None,
        };

        let order: Vec<usize> = if black_to_move { (0..8).rev().collect() } else { (0..8).collect() };
        let lines: Vec<String> = order
            .iter()
            .map(|&row| {
                order
                    .iter()
                    .map(|&file| match board[row][file] {
                        Some(piece) => glyph(piece, self.invert_color),
                        None        => EMPTY_SQUARE,
                    })
                    .map(String::from)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        Some(lines.join("\n"))
    }
}

impl AssetRenderer for FenDiagram {
    fn render(&self, asset: &str) -> String {
        self.diagram(asset).unwrap_or_else(|| {
            warn!("asset is not a FEN position, showing it raw: {asset:?}");
            asset.to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn raw_asset_is_passed_through() {
        assert_eq!(RawAsset.render("anything at all"), "anything at all");
    }

    #[test]
    fn empty_board_is_eight_rows_of_eight() {
        let out = FenDiagram::default().render("8/8/8/8/8/8/8/8 w - - 0 1");
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows.len(), 8);
        for row in rows {
            assert_eq!(row.split(' ').count(), 8);
            assert!(row.split(' ').all(|sq| sq == "⭘"));
        }
    }

    #[test]
    fn start_position_from_white() {
        let out = FenDiagram { invert_color: false }.render(START);
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows[0], "♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜");
        assert_eq!(rows[7], "♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖");
    }

    #[test]
    fn inverted_colours_swap_glyphs() {
        let out = FenDiagram { invert_color: true }.render(START);
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows[0], "♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖");
        assert_eq!(rows[6], "♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟");
    }

    #[test]
    fn black_to_move_flips_the_board() {
        let out = FenDiagram { invert_color: false }.render("k7/8/8/8/8/8/8/7K b - - 0 1");
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows[0], "♔ ⭘ ⭘ ⭘ ⭘ ⭘ ⭘ ⭘");
        assert_eq!(rows[7], "⭘ ⭘ ⭘ ⭘ ⭘ ⭘ ⭘ ♚");
    }

    #[test]
    fn malformed_fen_falls_back_to_raw() {
        let diagram = FenDiagram::default();
        for bad in ["not a fen", "8/8/8 w", "9/8/8/8/8/8/8/8 w", "8/8/8/8/8/8/8/7 w", "8/8/8/8/8/8/8/8 x"] {
            assert_eq!(diagram.render(bad), bad);
        }
    }
}
