//! Static font-metric tables for the two PDF base-14 faces the exporter uses.
//!
//! Widths come from the Adobe AFM files for Helvetica and Helvetica-Bold, in
//! 1/1000 em. Tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

// ────────────────────────────────────────────────────────────────────────────
// Face enum
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Regular,
    Bold,
}

impl Face {
    pub fn metrics(self) -> &'static FontMetricTable {
        match self {
            Face::Regular => &HELVETICA,
            Face::Bold => &HELVETICA_BOLD,
        }
    }
}

const MM_PER_PT: f32 = 25.4 / 72.0;

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    widths: [u16; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    average_char_width: u16,
}

impl FontMetricTable {
    /// Rendered width of `s` in millimetres at `font_size_pt`.
    pub fn measure_mm(&self, s: &str, font_size_pt: f32) -> f32 {
        let units: u32 = s
            .chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    u32::from(self.widths[code - 32])
                } else {
                    u32::from(self.average_char_width)
                }
            })
            .sum();
        units as f32 / 1000.0 * font_size_pt * MM_PER_PT
    }

    /// Greedy word wrap at `max_width_mm`. Words wider than a full line are
    /// broken between characters. Always returns at least one line.
    pub fn wrap(&self, text: &str, font_size_pt: f32, max_width_mm: f32) -> Vec<String> {
        let space = self.measure_mm(" ", font_size_pt);
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in text.split_whitespace() {
            for piece in self.break_word(word, font_size_pt, max_width_mm) {
                let piece_width = self.measure_mm(&piece, font_size_pt);
                if current.is_empty() {
                    current = piece;
                    current_width = piece_width;
                } else if current_width + space + piece_width <= max_width_mm {
                    current.push(' ');
                    current.push_str(&piece);
                    current_width += space + piece_width;
                } else {
                    lines.push(std::mem::take(&mut current));
                    current = piece;
                    current_width = piece_width;
                }
            }
        }

        if !current.is_empty() || lines.is_empty() {
            lines.push(current);
        }
        lines
    }

    fn break_word(&self, word: &str, font_size_pt: f32, max_width_mm: f32) -> Vec<String> {
        if self.measure_mm(word, font_size_pt) <= max_width_mm {
            return vec![word.to_string()];
        }

        let mut pieces = Vec::new();
        let mut piece = String::new();
        for c in word.chars() {
            piece.push(c);
            if piece.chars().count() > 1 && self.measure_mm(&piece, font_size_pt) > max_width_mm {
                piece.pop();
                pieces.push(std::mem::take(&mut piece));
                piece.push(c);
            }
        }
        if !piece.is_empty() {
            pieces.push(piece);
        }
        pieces
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tables
// ────────────────────────────────────────────────────────────────────────────

#[rustfmt::skip]
static HELVETICA: FontMetricTable = FontMetricTable {
    widths: [
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        278, 278, 584, 584, 584, 556, 1015,
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        278, 278, 278, 469, 556, 333,
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        334, 260, 334, 584,
    ],
    average_char_width: 556,
};

#[rustfmt::skip]
static HELVETICA_BOLD: FontMetricTable = FontMetricTable {
    widths: [
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        333, 333, 584, 584, 584, 611, 975,
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        333, 278, 333, 584, 556, 333,
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        389, 280, 389, 584,
    ],
    average_char_width: 611,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_width_at_10pt() {
        // 278/1000 em × 10pt = 2.78pt ≈ 0.981mm
        let w = Face::Regular.metrics().measure_mm(" ", 10.0);
        assert!((w - 0.9807).abs() < 0.001, "got {w}");
    }

    #[test]
    fn test_bold_is_wider() {
        let text = "Achievements";
        assert!(
            Face::Bold.metrics().measure_mm(text, 12.0)
                > Face::Regular.metrics().measure_mm(text, 12.0)
        );
    }

    #[test]
    fn test_non_ascii_uses_average_width() {
        let m = Face::Regular.metrics();
        assert!((m.measure_mm("é", 10.0) - m.measure_mm("0", 10.0)).abs() < f32::EPSILON);
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        let lines = Face::Regular.metrics().wrap("Rust and Go", 10.0, 100.0);
        assert_eq!(lines, vec!["Rust and Go"]);
    }

    #[test]
    fn test_wrap_respects_width() {
        let m = Face::Regular.metrics();
        let text = "Designed and shipped a distributed job scheduler used by forty internal teams across three regions";
        let lines = m.wrap(text, 10.0, 60.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(m.measure_mm(line, 10.0) <= 60.0, "overflow: {line}");
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_breaks_overlong_word() {
        let m = Face::Regular.metrics();
        let word = "W".repeat(40);
        let lines = m.wrap(&word, 10.0, 30.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(m.measure_mm(line, 10.0) <= 30.0);
        }
    }

    #[test]
    fn test_wrap_empty_text_yields_one_empty_line() {
        assert_eq!(Face::Regular.metrics().wrap("   ", 10.0, 50.0), vec![String::new()]);
    }
}
