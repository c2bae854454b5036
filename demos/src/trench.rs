//! Trench-map image enhancement over an infinite canvas.
//!
//! Each round maps every pixel through a 512-entry lookup indexed by its
//! 3x3 window read MSB-first. Off-grid pixels take a uniform background
//! value, which itself flips between rounds when the lookup's ends demand
//! it (a real input maps an all-dark window to lit).

use stride_core::{Grid, Point};

use crate::input::InputError;

/// An infinite black-and-white image: a finite grid plus the uniform
/// background filling the rest of the plane.
#[derive(Debug)]
pub struct TrenchMap {
    decoder: Vec<bool>,
    image: Grid<bool>,
    background: bool,
}

impl TrenchMap {
    /// Parse a decoder block (512 entries, blank-line terminated) followed
    /// by the image rows.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let mut lines = text.lines();
        let mut decoder = Vec::with_capacity(512);
        let mut line_no = 0;
        for line in lines.by_ref() {
            line_no += 1;
            if line.is_empty() {
                break;
            }
            decoder.extend(line.chars().map(|c| c == '#'));
        }
        if decoder.len() != 512 {
            return Err(InputError::Parse {
                line: line_no,
                msg: format!("decoder has {} entries, expected 512", decoder.len()),
            });
        }
        let image = Grid::from_lines(lines, |c| c == '#')?;
        Ok(Self {
            decoder,
            image,
            background: false,
        })
    }

    /// The finite part of the image.
    pub fn image(&self) -> &Grid<bool> {
        &self.image
    }

    /// Run one enhancement round.
    ///
    /// The output grows by one pixel on every side, so the new cell at
    /// (x, y) reads its window around (x-1, y-1) in the old image.
    pub fn enhance(&mut self) {
        let (w, h) = self.image.dimensions();
        let mut next = Grid::filled(w + 2, h + 2, false);
        for (p, cell) in next.iter_mut() {
            let mut idx = 0usize;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let src = Point::new(p.x + dx - 1, p.y + dy - 1);
                    let lit = self.image.get_opt(src).copied().unwrap_or(self.background);
                    idx = (idx << 1) | usize::from(lit);
                }
            }
            *cell = self.decoder[idx];
        }
        self.background = if self.background {
            self.decoder[511]
        } else {
            self.decoder[0]
        };
        self.image = next;
    }

    /// Number of lit pixels, or `None` while the background is lit (the
    /// true count is infinite).
    pub fn lit(&self) -> Option<usize> {
        if self.background {
            return None;
        }
        Some(self.image.cells().iter().filter(|&&b| b).count())
    }
}
