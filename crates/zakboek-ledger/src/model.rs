use zakboek_types::{BagId, BagRecord, Error, Result};

/// In-memory view of the ledger rows, strictly ascending by bag id.
///
/// The row vector doubles as the index: lookups and insertion positions are
/// binary searches over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerModel {
    rows: Vec<BagRecord>,
}

impl LedgerModel {
    /// Wrap a snapshot read from a gateway.
    ///
    /// Rejects out-of-order and duplicate ids. A hand-edited workbook can
    /// violate both; catching it here keeps every later binary search sound.
    pub fn from_snapshot(rows: Vec<BagRecord>) -> Result<Self> {
        for pair in rows.windows(2) {
            if pair[0].id >= pair[1].id {
                return Err(Error::Inconsistent(format!(
                    "ledger rows out of order: bag {} precedes bag {}",
                    pair[0].id, pair[1].id
                )));
            }
        }
        Ok(LedgerModel { rows })
    }

    pub fn rows(&self) -> &[BagRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn find(&self, id: BagId) -> Option<&BagRecord> {
        self.rows
            .binary_search_by_key(&id, |row| row.id)
            .ok()
            .map(|index| &self.rows[index])
    }

    /// Position at which a row for `id` keeps the ledger ascending.
    pub fn insertion_index(&self, id: BagId) -> usize {
        match self.rows.binary_search_by_key(&id, |row| row.id) {
            Ok(index) | Err(index) => index,
        }
    }

    pub(crate) fn insert(&mut self, index: usize, record: BagRecord) {
        self.rows.insert(index, record);
    }

    pub(crate) fn replace(&mut self, record: BagRecord) {
        if let Ok(index) = self.rows.binary_search_by_key(&record.id, |row| row.id) {
            self.rows[index] = record;
        }
    }

    /// Materialize a write set against this snapshot.
    ///
    /// Updates land first (they replace rows in place, so positions do not
    /// shift), then insertions replay at their recorded positions in
    /// recorded order. The result is the full new row sequence, still
    /// strictly ascending.
    pub fn apply(&self, write_set: &WriteSet) -> Vec<BagRecord> {
        let mut rows = self.rows.clone();
        for update in &write_set.updates {
            if let Ok(index) = rows.binary_search_by_key(&update.id, |row| row.id) {
                rows[index] = update.clone();
            }
        }
        for (index, record) in &write_set.insertions {
            rows.insert(*index, record.clone());
        }
        rows
    }
}

/// Changes a synchronization run wants written back.
///
/// Insertion positions are recorded against the working model as it grew,
/// so replaying them in order reproduces the exact final sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSet {
    pub updates: Vec<BagRecord>,
    pub insertions: Vec<(usize, BagRecord)>,
}

impl WriteSet {
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty() && self.insertions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.updates.len() + self.insertions.len()
    }
}
