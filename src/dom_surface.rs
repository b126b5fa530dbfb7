use std::collections::HashMap;

use folio_core::{
    GallerySurface, MediaRecord, PageSurface, Playback, Presentation, ProjectId, ProjectRecord,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlMediaElement, NodeList};

pub(crate) const ACTIVE_CLASS: &str = "active";
pub(crate) const DRAGGING_CLASS: &str = "dragging";
const PROJECT_SELECTOR: &str = ".project";
const MEDIA_SELECTOR: &str = ".project-media";
const DOT_SELECTOR: &str = ".dot";

/// Markup handles for one project card.
#[derive(Clone)]
pub(crate) struct ProjectElements {
    pub(crate) container: Element,
    pub(crate) image_container: Option<Element>,
    pub(crate) media: Vec<Element>,
    pub(crate) dots: Vec<Element>,
}

/// Result of reading the page once at startup.
pub(crate) struct ScannedPage {
    pub(crate) records: Vec<ProjectRecord>,
    pub(crate) elements: Vec<(String, ProjectElements)>,
}

pub(crate) fn elements_of(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn select_all(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| elements_of(&list))
        .unwrap_or_default()
}

fn select_text(root: &Element, selector: &str) -> String {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|node| node.text_content())
        .unwrap_or_default()
}

fn media_record(element: &Element) -> MediaRecord {
    let sources = select_all(element, "source")
        .iter()
        .filter_map(|source| source.get_attribute("src"))
        .collect();
    MediaRecord {
        tag: element.tag_name().to_ascii_lowercase(),
        src: element.get_attribute("src"),
        sources,
        alt: element.get_attribute("alt"),
    }
}

pub(crate) fn scan_page(document: &Document) -> ScannedPage {
    let containers = document
        .query_selector_all(PROJECT_SELECTOR)
        .map(|list| elements_of(&list))
        .unwrap_or_default();
    let mut records = Vec::with_capacity(containers.len());
    let mut elements = Vec::with_capacity(containers.len());
    for container in containers {
        let raw_id = container.get_attribute("data-project").unwrap_or_default();
        let media = select_all(&container, MEDIA_SELECTOR);
        records.push(ProjectRecord {
            id: raw_id.clone(),
            title: select_text(&container, ".project-header h2"),
            subtitle: select_text(&container, ".project-header h3"),
            media: media.iter().map(media_record).collect(),
        });
        let image_container = container.query_selector(".image-container").ok().flatten();
        let dots = select_all(&container, DOT_SELECTOR);
        elements.push((
            raw_id,
            ProjectElements {
                container,
                image_container,
                media,
                dots,
            },
        ));
    }
    ScannedPage { records, elements }
}

fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

/// Applies gallery presentations to the live page.
pub(crate) struct DomSurface {
    document: Document,
    projects: HashMap<ProjectId, ProjectElements>,
}

impl DomSurface {
    /// Keys the scanned elements by id. Cards whose id does not parse are
    /// left out, matching the registry; a repeated id keeps the later card.
    pub(crate) fn new(document: Document, elements: Vec<(String, ProjectElements)>) -> Self {
        let projects = elements
            .into_iter()
            .filter_map(|(raw, elements)| ProjectId::parse(&raw).ok().map(|id| (id, elements)))
            .collect();
        Self { document, projects }
    }

    #[cfg(test)]
    pub(crate) fn project(&self, project: ProjectId) -> Option<&ProjectElements> {
        self.projects.get(&project)
    }

    pub(crate) fn projects(&self) -> impl Iterator<Item = (ProjectId, &ProjectElements)> {
        self.projects.iter().map(|(id, elements)| (*id, elements))
    }
}

impl GallerySurface for DomSurface {
    fn present(&mut self, project: ProjectId, presentation: &Presentation) {
        let Some(elements) = self.projects.get(&project) else {
            return;
        };
        for step in &presentation.media {
            let Some(element) = elements.media.get(step.position - 1) else {
                continue;
            };
            set_class(element, ACTIVE_CLASS, step.active);
            let Some(video) = element.dyn_ref::<HtmlMediaElement>() else {
                continue;
            };
            match step.playback {
                Playback::Still => {}
                Playback::Play => {
                    let _ = video.play();
                }
                Playback::StopAndRewind => {
                    let _ = video.pause();
                    video.set_current_time(0.0);
                }
            }
        }
        for (dot, active) in elements.dots.iter().zip(&presentation.dots) {
            set_class(dot, ACTIVE_CLASS, *active);
        }
    }

    fn set_dragging(&mut self, project: ProjectId, dragging: bool) {
        if let Some(elements) = self.projects.get(&project) {
            set_class(&elements.container, DRAGGING_CLASS, dragging);
        }
    }
}

impl PageSurface for DomSurface {
    fn pause_all_videos(&mut self) {
        let Ok(list) = self.document.query_selector_all("video") else {
            return;
        };
        for element in elements_of(&list) {
            if let Some(video) = element.dyn_ref::<HtmlMediaElement>() {
                let _ = video.pause();
            }
        }
    }

    fn resume_video(&mut self, project: ProjectId, position: usize) {
        let video = self
            .projects
            .get(&project)
            .and_then(|elements| elements.media.get(position.saturating_sub(1)))
            .and_then(|element| element.dyn_ref::<HtmlMediaElement>());
        if let Some(video) = video {
            let _ = video.play();
        }
    }
}
