use std::collections::HashSet;

use crate::error::TopologyError;
use crate::topology::{Benzenoid, FaceLabel};
use crate::traversal::breadth_first;

impl Benzenoid {
    /// `true` iff every hexagon can be reached from every other one through
    /// shared edges. An empty benzenoid counts as connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.face_coordinates().next() else {
            return true;
        };
        let component = breadth_first(start, |f| {
            self.face(f)
                .map(|data| data.adjacent_faces().to_vec())
                .unwrap_or_default()
        });
        component.len() == self.hexagon_count()
    }

    /// Positions where a hexagon could be added along the perimeter.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptyStructure`] on an empty benzenoid.
    pub fn empty_face_slots(&self) -> Result<HashSet<FaceLabel>, TopologyError> {
        let mut slots = HashSet::new();
        for &edge in self.perimeter()? {
            if let Some(data) = self.edge(edge) {
                slots.extend(
                    data.incident_face_candidates()
                        .into_iter()
                        .filter(|f| !self.contains_hexagon(*f)),
                );
            }
        }
        Ok(slots)
    }
}
