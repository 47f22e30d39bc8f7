use std::fmt;

/// The traceback pointers of one cell of the dynamic programming matrix.
///
/// Every predecessor achieving the optimum is recorded, so that all co-optimal
/// paths can be recovered. In the linear gap model only [`MATCH`], [`UP`],
/// [`LEFT`], and [`STOP`] are used.
///
/// [`MATCH`]: BacktrackCell::MATCH
/// [`UP`]: BacktrackCell::UP
/// [`LEFT`]: BacktrackCell::LEFT
/// [`STOP`]: BacktrackCell::STOP
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Debug)]
pub(crate) struct BacktrackCell(u8);

impl BacktrackCell {
    /// Diagonal move whose predecessor lies in the match layer
    pub(crate) const MATCH: u8 = 1;
    /// Diagonal move whose predecessor lies in the vertical gap layer
    pub(crate) const MATCH_FROM_UP: u8 = 2;
    /// Diagonal move whose predecessor lies in the horizontal gap layer
    pub(crate) const MATCH_FROM_LEFT: u8 = 4;
    pub(crate) const UP: u8 = 8;
    pub(crate) const UP_EXTENDING: u8 = 16;
    pub(crate) const LEFT: u8 = 32;
    pub(crate) const LEFT_EXTENDING: u8 = 64;
    pub(crate) const STOP: u8 = 128;

    #[inline]
    pub(crate) fn set(&mut self, flag: u8, when: bool) {
        if when {
            self.0 |= flag;
        }
    }

    #[inline]
    pub(crate) fn stop(&mut self) {
        self.0 |= Self::STOP;
    }

    #[inline]
    #[must_use]
    pub(crate) const fn has(self, flag: u8) -> bool {
        self.0 & flag > 0
    }

    #[inline]
    #[must_use]
    pub(crate) const fn is_stop(self) -> bool {
        self.has(Self::STOP)
    }

    fn symbols(self) -> String {
        const GLYPHS: [(u8, char); 8] = [
            (BacktrackCell::STOP, 'o'),
            (BacktrackCell::MATCH, '\\'),
            (BacktrackCell::MATCH_FROM_UP, 'v'),
            (BacktrackCell::MATCH_FROM_LEFT, '>'),
            (BacktrackCell::UP, '^'),
            (BacktrackCell::UP_EXTENDING, ':'),
            (BacktrackCell::LEFT, '<'),
            (BacktrackCell::LEFT_EXTENDING, '-'),
        ];

        let states: String = GLYPHS
            .iter()
            .filter(|(flag, _)| self.has(*flag))
            .map(|(_, glyph)| *glyph)
            .collect();
        if states.is_empty() { String::from(".") } else { states }
    }
}

/// Row-major storage of [`BacktrackCell`] values for a matrix with a leading
/// boundary row and column.
#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) struct BacktrackMatrix {
    pub data: Vec<BacktrackCell>,
    cols:     usize,
}

impl BacktrackMatrix {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        BacktrackMatrix {
            data: vec![BacktrackCell::default(); rows * cols],
            cols,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) fn get(&self, r: usize, c: usize) -> BacktrackCell {
        self.data[self.cols * r + c]
    }

    #[inline]
    pub(crate) fn set(&mut self, r: usize, c: usize, cell: BacktrackCell) {
        self.data[self.cols * r + c] = cell;
    }
}

impl fmt::Display for BacktrackMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.data.chunks(self.cols).enumerate() {
            write!(f, "{r:02}:")?;
            for cell in row {
                write!(f, " {:>3}", cell.symbols())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
