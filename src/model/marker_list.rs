use smallvec::SmallVec;

use super::marker::{MarkerId, Positioned};

/// Capacity-bounded list of markers kept in ascending position order.
///
/// Order only breaks transiently while a marker is being dragged; `resort`
/// restores it. Ids travel with their markers so callers can follow a marker
/// across a resort.
#[derive(Debug, Clone)]
pub struct MarkerList<M> {
    markers: SmallVec<[M; 8]>,
    ids: SmallVec<[MarkerId; 8]>,
    capacity: usize,
}

impl<M: Positioned + Copy> MarkerList<M> {
    pub fn new(capacity: usize) -> Self {
        Self {
            markers: SmallVec::new(),
            ids: SmallVec::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.markers.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[M] {
        &self.markers
    }

    pub fn iter(&self) -> impl Iterator<Item = (MarkerId, &M)> {
        self.ids.iter().copied().zip(self.markers.iter())
    }

    /// Inserts before the first marker at or after `marker`'s position.
    /// Returns `None` without touching the list when it is full.
    pub fn insert(&mut self, marker: M) -> Option<(usize, MarkerId)> {
        if self.is_full() {
            return None;
        }

        let position = marker.position();
        let index = self.markers.partition_point(|m| m.position() < position);
        let id = MarkerId::next();

        self.markers.insert(index, marker);
        self.ids.insert(index, id);
        Some((index, id))
    }

    pub fn remove(&mut self, index: usize) -> Option<(MarkerId, M)> {
        if index >= self.markers.len() {
            return None;
        }
        let marker = self.markers.remove(index);
        let id = self.ids.remove(index);
        Some((id, marker))
    }

    pub fn clear(&mut self) {
        self.markers.clear();
        self.ids.clear();
    }

    pub fn get(&self, index: usize) -> Option<&M> {
        self.markers.get(index)
    }

    /// Changing the position through this reference may break ordering until
    /// the next `resort`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut M> {
        self.markers.get_mut(index)
    }

    pub fn id_at(&self, index: usize) -> Option<MarkerId> {
        self.ids.get(index).copied()
    }

    pub fn index_of(&self, id: MarkerId) -> Option<usize> {
        self.ids.iter().position(|&candidate| candidate == id)
    }

    pub fn get_by_id(&self, id: MarkerId) -> Option<&M> {
        self.index_of(id).and_then(|index| self.markers.get(index))
    }

    pub fn get_by_id_mut(&mut self, id: MarkerId) -> Option<&mut M> {
        let index = self.index_of(id)?;
        self.markers.get_mut(index)
    }

    /// Stable re-sort by position. Markers keep their ids, so anything holding
    /// a `MarkerId` still points at the same marker afterwards.
    ///
    /// Returns true if any marker changed slot.
    pub fn resort(&mut self) -> bool {
        let mut order: SmallVec<[usize; 8]> = (0..self.markers.len()).collect();
        order.sort_by(|&a, &b| {
            self.markers[a]
                .position()
                .total_cmp(&self.markers[b].position())
        });

        if order.iter().enumerate().all(|(slot, &original)| slot == original) {
            return false;
        }

        let markers: SmallVec<[M; 8]> = order
            .iter()
            .map(|&original| self.markers[original])
            .collect();
        let ids: SmallVec<[MarkerId; 8]> =
            order.iter().map(|&original| self.ids[original]).collect();
        self.markers = markers;
        self.ids = ids;

        log::trace!("resorted {} markers", self.markers.len());
        true
    }

    pub fn is_sorted(&self) -> bool {
        self.markers
            .windows(2)
            .all(|pair| pair[0].position() <= pair[1].position())
    }
}
