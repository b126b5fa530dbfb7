use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{MediaItem, MediaKind, Project, ProjectId, ProjectIdError};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub tag: String,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

impl MediaRecord {
    pub fn image(src: &str) -> Self {
        Self {
            tag: "img".to_string(),
            src: Some(src.to_string()),
            ..Self::default()
        }
    }

    pub fn video(src: &str) -> Self {
        Self {
            tag: "video".to_string(),
            sources: vec![src.to_string()],
            ..Self::default()
        }
    }

    fn resolved_src(&self) -> Option<&str> {
        self.src
            .as_deref()
            .map(str::trim)
            .filter(|src| !src.is_empty())
            .or_else(|| {
                self.sources
                    .iter()
                    .map(|src| src.trim())
                    .find(|src| !src.is_empty())
            })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub media: Vec<MediaRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryIssue {
    #[error("project #{position} has unusable id {raw:?}: {error}")]
    MalformedId {
        position: usize,
        raw: String,
        error: ProjectIdError,
    },
    #[error("project {0} appears more than once; the later entry wins")]
    DuplicateId(ProjectId),
    #[error("project {project} media {position} has no source")]
    MissingSource { project: ProjectId, position: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("project catalog is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default)]
pub struct Registry {
    projects: Vec<Project>,
    by_id: HashMap<ProjectId, usize>,
}

impl Registry {
    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.by_id.get(&id).and_then(|idx| self.projects.get(*idx))
    }

    pub fn contains(&self, id: ProjectId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn first_id(&self) -> Option<ProjectId> {
        self.projects.first().map(|project| project.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn insert(&mut self, project: Project) -> bool {
        if let Some(idx) = self.by_id.get(&project.id) {
            self.projects[*idx] = project;
            return false;
        }
        self.by_id.insert(project.id, self.projects.len());
        self.projects.push(project);
        true
    }
}

#[derive(Clone, Debug, Default)]
pub struct RegistryBuild {
    pub registry: Registry,
    pub issues: Vec<RegistryIssue>,
}

impl RegistryBuild {
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Ok(build_registry(records))
    }
}

pub fn build_registry<I>(records: I) -> RegistryBuild
where
    I: IntoIterator<Item = ProjectRecord>,
{
    let mut build = RegistryBuild::default();
    for (position, record) in records.into_iter().enumerate() {
        let id = match ProjectId::parse(&record.id) {
            Ok(id) => id,
            Err(error) => {
                build.issues.push(RegistryIssue::MalformedId {
                    position: position + 1,
                    raw: record.id,
                    error,
                });
                continue;
            }
        };
        let media = record
            .media
            .iter()
            .enumerate()
            .map(|(idx, media)| {
                let src = match media.resolved_src() {
                    Some(src) => src.to_string(),
                    None => {
                        build.issues.push(RegistryIssue::MissingSource {
                            project: id,
                            position: idx + 1,
                        });
                        String::new()
                    }
                };
                MediaItem {
                    kind: MediaKind::from_tag(&media.tag),
                    src,
                    alt: media.alt.clone(),
                }
            })
            .collect();
        let project = Project {
            id,
            title: record.title.trim().to_string(),
            subtitle: record.subtitle.trim().to_string(),
            media,
        };
        if !build.registry.insert(project) {
            build.issues.push(RegistryIssue::DuplicateId(id));
        }
    }
    build
}
