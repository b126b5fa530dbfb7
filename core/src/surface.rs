use crate::model::ProjectId;
use crate::presenter::Presentation;

pub trait GallerySurface {
    fn present(&mut self, project: ProjectId, presentation: &Presentation);

    fn set_dragging(&mut self, project: ProjectId, dragging: bool);
}

pub trait PageSurface {
    fn pause_all_videos(&mut self);

    /// Resumes the inline video at a 1-based position, if it exists.
    fn resume_video(&mut self, project: ProjectId, position: usize);
}
