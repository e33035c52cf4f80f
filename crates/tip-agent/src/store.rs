//! Dense resident storage.

use tip_core::{ResidentId, TipError, TipResult};

use crate::Resident;

/// All residents of a run, indexed by `ResidentId`.
///
/// Ids are assigned sequentially by [`push`](Self::push) and residents are
/// never removed, so `ids[i] == ResidentId(i)` always holds.
#[derive(Clone, Debug, Default)]
pub struct ResidentStore {
    residents: Vec<Resident>,
}

impl ResidentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next pushed resident will receive.
    pub fn next_id(&self) -> ResidentId {
        ResidentId(self.residents.len() as u32)
    }

    /// Append `resident`.  Its id must equal [`next_id`](Self::next_id).
    pub fn push(&mut self, resident: Resident) -> TipResult<ResidentId> {
        let expected = self.next_id();
        if resident.id != expected {
            return Err(TipError::InvalidConfiguration(format!(
                "resident id {} out of sequence, expected {expected}",
                resident.id
            )));
        }
        self.residents.push(resident);
        Ok(expected)
    }

    pub fn get(&self, id: ResidentId) -> TipResult<&Resident> {
        self.residents.get(id.index()).ok_or(TipError::ResidentNotFound(id))
    }

    pub fn get_mut(&mut self, id: ResidentId) -> TipResult<&mut Resident> {
        self.residents.get_mut(id.index()).ok_or(TipError::ResidentNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.residents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resident> + '_ {
        self.residents.iter()
    }

    pub fn as_slice(&self) -> &[Resident] {
        &self.residents
    }
}
