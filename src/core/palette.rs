//! Feste Farbtabelle für das Palette-Panel.

/// Zeilen der Farbtabelle
pub const GRID_ROWS: usize = 2;
/// Spalten der Farbtabelle
pub const GRID_COLUMNS: usize = 2;

/// Standardfarben, zeilenweise (Zeile 0: Weiß, Schwarz; Zeile 1: Grau, Dunkelgrau)
pub const DEFAULT_COLORS: [[Swatch; GRID_COLUMNS]; GRID_ROWS] = [
    [Swatch::from_hex("#FFFFFF"), Swatch::from_hex("#000000")],
    [Swatch::from_hex("#808080"), Swatch::from_hex("#404040")],
];

/// Einzelne Farbfläche mit Hex-Literal und RGB-Wert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    hex: &'static str,
    rgb: [u8; 3],
}

impl Swatch {
    /// Parst ein `#RRGGBB`-Literal. Ungültige Literale brechen die Const-Auswertung ab.
    pub const fn from_hex(hex: &'static str) -> Self {
        let bytes = hex.as_bytes();
        assert!(
            bytes.len() == 7 && bytes[0] == b'#',
            "color literal must have the form #RRGGBB"
        );
        Self {
            hex,
            rgb: [
                hex_byte(bytes[1], bytes[2]),
                hex_byte(bytes[3], bytes[4]),
                hex_byte(bytes[5], bytes[6]),
            ],
        }
    }

    /// Hex-Literal wie in der Tabelle angegeben
    pub fn hex(&self) -> &'static str {
        self.hex
    }

    /// RGB-Kanäle
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }
}

const fn hex_byte(high: u8, low: u8) -> u8 {
    hex_digit(high) * 16 + hex_digit(low)
}

const fn hex_digit(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => panic!("invalid hex digit in color literal"),
    }
}

/// Unveränderliches 2×2-Raster von Farbflächen
#[derive(Debug, Clone)]
pub struct ColorGrid {
    rows: [[Swatch; GRID_COLUMNS]; GRID_ROWS],
}

impl ColorGrid {
    /// Erstellt das Raster aus einer zeilenweisen Farbtabelle
    pub fn new(rows: [[Swatch; GRID_COLUMNS]; GRID_ROWS]) -> Self {
        Self { rows }
    }

    /// Farbfläche an (Zeile, Spalte)
    pub fn swatch(&self, row: usize, column: usize) -> Option<&Swatch> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Alle Farbflächen zeilenweise als `(zeile, spalte, swatch)`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Swatch)> {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, swatch)| (r, c, swatch))
        })
    }

    pub fn row_count(&self) -> usize {
        GRID_ROWS
    }

    pub fn column_count(&self) -> usize {
        GRID_COLUMNS
    }
}

impl Default for ColorGrid {
    fn default() -> Self {
        Self::new(DEFAULT_COLORS)
    }
}
