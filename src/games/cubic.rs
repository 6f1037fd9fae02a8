use super::cubic_masks::{win_mask_set, WinMask};
use crate::core::error::{BoardError, Result};
use crate::core::token::Token;
use std::sync::Arc;

/// A gravity-constrained N×N×N tic-tac-toe board.
///
/// Cells are stored flat, indexed `x + y·N + z·N²`. A cell above the ground
/// layer can only be filled once the cell directly beneath it is occupied.
#[derive(Debug, Clone)]
pub struct CubicBoard {
    size: usize,
    cells: Vec<Option<Token>>,
    win_masks: Arc<[WinMask]>,
}

impl CubicBoard {
    /// Creates an empty board with the given edge size.
    pub fn new(size: usize) -> Result<Self> {
        if size < 1 {
            return Err(BoardError::InvalidSize(size));
        }

        Ok(CubicBoard {
            size,
            cells: vec![None; size * size * size],
            win_masks: win_mask_set(size),
        })
    }

    /// Edge size.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.size + z * self.size * self.size
    }

    /// Returns the token occupying the cell, or `None` if it is empty.
    /// Out-of-range coordinates read as empty, never an error.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<Token> {
        if x >= self.size || y >= self.size || z >= self.size {
            return None;
        }
        self.cells[self.index(x, y, z)]
    }

    /// Whether the cell can take the next placement: it must be empty, and
    /// anything above the ground layer needs the cell beneath it occupied.
    pub fn is_fillable(&self, x: usize, y: usize, z: usize) -> bool {
        self.get(x, y, z).is_none() && (z == 0 || self.get(x, y, z - 1).is_some())
    }

    /// Places `token` at (x, y, z).
    pub fn set(&mut self, token: Token, x: usize, y: usize, z: usize) -> Result<()> {
        if x >= self.size || y >= self.size || z >= self.size {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                z,
                size: self.size,
            });
        }
        if !self.is_fillable(x, y, z) {
            return Err(BoardError::IllegalMove { x, y, z });
        }

        let index = self.index(x, y, z);
        self.cells[index] = Some(token);
        Ok(())
    }

    /// Returns the token holding a complete line, or `None`.
    ///
    /// Lines are scanned in a stable order and the first full one wins;
    /// callers check after every placement, so at most one line is new.
    pub fn winner(&self) -> Option<Token> {
        for mask in self.win_masks.iter() {
            let first = self.cells[mask[0]];
            if first.is_some() && mask[1..].iter().all(|&i| self.cells[i] == first) {
                return first;
            }
        }

        None
    }
}
