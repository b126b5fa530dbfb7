use std::collections::HashMap;

use crate::model::ProjectId;
use crate::registry::Registry;
use crate::sequence::{BoundaryPolicy, IndexedSequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("unknown project {0}")]
    UnknownProject(ProjectId),
    #[error("index {index} outside 1..={len}")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Clone, Debug, Default)]
pub struct NavigationStore {
    entries: HashMap<ProjectId, IndexedSequence>,
}

impl NavigationStore {
    pub fn from_registry(registry: &Registry, policy: BoundaryPolicy) -> Self {
        let entries = registry
            .iter()
            .filter_map(|project| {
                IndexedSequence::new(project.media_len(), policy).map(|seq| (project.id, seq))
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, project: ProjectId) -> Option<usize> {
        self.entries.get(&project).map(IndexedSequence::index)
    }

    pub fn sequence(&self, project: ProjectId) -> Option<&IndexedSequence> {
        self.entries.get(&project)
    }

    pub fn set(&mut self, project: ProjectId, index: usize) -> Result<usize, NavigationError> {
        let seq = self
            .entries
            .get_mut(&project)
            .ok_or(NavigationError::UnknownProject(project))?;
        if !seq.go_to(index) {
            return Err(NavigationError::OutOfRange {
                index,
                len: seq.len(),
            });
        }
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
