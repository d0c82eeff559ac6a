//! Player-slot partition into anchor and rotating groups

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::labels::MAX_TABLES;

/// Slot geometry of one scenario.
///
/// The rotating group is the last `seats_per_table - 1` slots. It is one
/// smaller than a full table, so the slot just below it stays an anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotLayout {
    pub tables: usize,
    pub seats_per_table: usize,
}

impl SlotLayout {
    /// Validate and build the layout for `tables` tables
    pub fn new(tables: usize, seats_per_table: usize) -> Result<Self> {
        if tables == 0 {
            return Err(ScheduleError::NoTables);
        }
        if tables > MAX_TABLES {
            return Err(ScheduleError::too_many_tables(tables));
        }
        if seats_per_table == 0 {
            return Err(ScheduleError::NoSeats);
        }

        if tables.checked_mul(seats_per_table).is_none() {
            return Err(ScheduleError::TooManyPlayers {
                tables,
                seats_per_table,
            });
        }

        let layout = Self {
            tables,
            seats_per_table,
        };
        if layout.rotating_size() >= layout.players() {
            return Err(ScheduleError::RotatingGroupTooLarge {
                rotating: layout.rotating_size(),
                players: layout.players(),
            });
        }
        debug_assert!(layout.rotating_size() < seats_per_table);
        Ok(layout)
    }

    pub fn players(&self) -> usize {
        self.tables * self.seats_per_table
    }

    pub fn rotating_size(&self) -> usize {
        self.seats_per_table - 1
    }

    /// First rotating slot; everything below is an anchor
    pub fn first_rotating(&self) -> usize {
        self.players() - self.rotating_size()
    }

    pub fn anchors(&self) -> Range<usize> {
        0..self.first_rotating()
    }

    pub fn rotating(&self) -> Range<usize> {
        self.first_rotating()..self.players()
    }

    pub fn is_rotating(&self, slot: usize) -> bool {
        self.rotating().contains(&slot)
    }
}
