//! Transposition Table
//!
//! A fixed-capacity hash table mapping Zobrist keys to scored search
//! results. Entries hold a score and the depth it was searched to, never a
//! best move; a probe only hits when the stored depth satisfies the query.

/// A single entry in the transposition table
#[derive(Clone, Copy)]
pub struct TTEntry {
    /// Zobrist hash key (for verification)
    pub key: u64,
    /// Depth remaining when the score was stored
    pub depth: i8,
    /// Score, White-relative centipawns
    pub score: i32,
    /// Age (for replacement)
    pub age: u8,
}

impl TTEntry {
    pub const EMPTY: TTEntry = TTEntry {
        key: 0,
        depth: 0,
        score: 0,
        age: 0,
    };
}

/// Transposition table
pub struct TranspositionTable {
    entries: Vec<TTEntry>,
    size: usize,
    age: u8,
}

impl TranspositionTable {
    /// Create a new transposition table with the given size in MB
    pub fn new(size_mb: usize) -> Self {
        let entry_size = std::mem::size_of::<TTEntry>();
        let num_entries = (size_mb * 1024 * 1024) / entry_size;
        // Round down to power of 2 for efficient indexing
        let size = num_entries.next_power_of_two() / 2;

        TranspositionTable {
            entries: vec![TTEntry::EMPTY; size],
            size,
            age: 0,
        }
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        (key as usize) & (self.size - 1)
    }

    /// Probe the table. Hits only when the stored entry was searched at
    /// least as deep as `required_depth`; a shallower entry never satisfies
    /// a deeper query.
    pub fn probe(&self, key: u64, required_depth: i32) -> Option<i32> {
        let entry = &self.entries[self.index(key)];
        if entry.key == key && i32::from(entry.depth) >= required_depth {
            Some(entry.score)
        } else {
            None
        }
    }

    /// Store an entry in the table
    pub fn store(&mut self, key: u64, depth: i32, score: i32) {
        let idx = self.index(key);
        let entry = &mut self.entries[idx];

        // Depth-preferred replacement:
        // - Entry is empty (key == 0)
        // - Old entry is from a previous search
        // - New entry is at least as deep
        let depth = depth.clamp(i8::MIN as i32, i8::MAX as i32) as i8;
        let should_replace = entry.key == 0
            || entry.age != self.age
            || depth >= entry.depth;

        if should_replace {
            *entry = TTEntry {
                key,
                depth,
                score,
                age: self.age,
            };
        }
    }

    /// Clear the table
    pub fn clear(&mut self) {
        self.entries.fill(TTEntry::EMPTY);
        self.age = 0;
    }

    /// Increment the age counter (call at the start of each move decision)
    pub fn new_search(&mut self) {
        self.age = self.age.wrapping_add(1);
    }

    /// Get the fill rate (per mille of sampled entries used)
    pub fn hashfull(&self) -> usize {
        let sample_size = 1000.min(self.size);
        let used = self.entries[..sample_size]
            .iter()
            .filter(|e| e.key != 0)
            .count();
        (used * 1000) / sample_size
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(64)
    }
}
