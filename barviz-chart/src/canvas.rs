use barviz_common::time::Duration;
use barviz_scenegraph::error::SceneGraphError;
use barviz_scenegraph::marks::group::SceneGroup;
use barviz_scenegraph::marks::mark::SceneMark;
use barviz_scenegraph::marks::rect::SceneRectMark;
use barviz_scenegraph::scene_graph::SceneGraph;

use crate::animate::{apply_frames, RectTransition};
use crate::error::BarChartError;

/// Identifies a mark appended to a [`DrawingSurface`] until the next `clear`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkHandle(usize);

impl MarkHandle {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// What the chart needs from the thing it draws on
pub trait DrawingSurface {
    /// Sizes the surface and offsets everything drawn by `origin`
    fn set_viewport(&mut self, width: f32, height: f32, origin: [f32; 2]);

    /// Drops every mark and every running transition
    fn clear(&mut self);

    fn append_group(&mut self, group: SceneGroup) -> MarkHandle;

    fn append_rects(&mut self, rects: SceneRectMark) -> MarkHandle;

    /// Starts animating the rects behind `handle`. The transition must have one
    /// entry per rect.
    fn start_transition(
        &mut self,
        handle: MarkHandle,
        transition: RectTransition,
    ) -> Result<(), BarChartError>;
}

#[derive(Debug, Clone)]
struct ActiveTransition {
    handle: MarkHandle,
    transition: RectTransition,
    elapsed: Duration,
}

/// In-memory surface that retains marks in a [`SceneGraph`] and steps
/// transitions on an external clock.
#[derive(Debug, Clone, Default)]
pub struct SceneCanvas {
    scene_graph: SceneGraph,
    transitions: Vec<ActiveTransition>,
}

impl SceneCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current frame
    pub fn scene_graph(&self) -> &SceneGraph {
        &self.scene_graph
    }

    pub fn is_animating(&self) -> bool {
        !self.transitions.is_empty()
    }

    /// Moves every running transition forward by `dt` and writes the resulting
    /// frames into the scene graph. Returns whether anything is still running.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let scene_graph = &mut self.scene_graph;
        self.transitions.retain_mut(|active| {
            active.elapsed = active.elapsed.saturating_add(dt);
            let frames = active.transition.frames_at(active.elapsed);
            match scene_graph.get_mark_mut(&[active.handle.index()]) {
                Ok(SceneMark::Rect(mark)) => apply_frames(mark, &frames),
                _ => {
                    log::warn!("dropping transition for missing rect mark {:?}", active.handle);
                    return false;
                }
            }
            !active.transition.is_finished(active.elapsed)
        });
        self.is_animating()
    }

    /// Advances until every transition has settled
    pub fn finish(&mut self) {
        let remaining = self
            .transitions
            .iter()
            .map(|active| active.transition.duration().saturating_sub(active.elapsed))
            .max();
        if let Some(remaining) = remaining {
            self.advance(remaining);
        }
    }

    fn push(&mut self, mark: SceneMark) -> MarkHandle {
        self.scene_graph.marks.push(mark);
        MarkHandle::new(self.scene_graph.marks.len() - 1)
    }
}

impl DrawingSurface for SceneCanvas {
    fn set_viewport(&mut self, width: f32, height: f32, origin: [f32; 2]) {
        self.scene_graph.width = width;
        self.scene_graph.height = height;
        self.scene_graph.origin = origin;
    }

    fn clear(&mut self) {
        self.scene_graph.marks.clear();
        self.transitions.clear();
    }

    fn append_group(&mut self, group: SceneGroup) -> MarkHandle {
        self.push(group.into())
    }

    fn append_rects(&mut self, rects: SceneRectMark) -> MarkHandle {
        self.push(rects.into())
    }

    fn start_transition(
        &mut self,
        handle: MarkHandle,
        transition: RectTransition,
    ) -> Result<(), BarChartError> {
        let SceneMark::Rect(mark) = self.scene_graph.get_mark_mut(&[handle.index()])? else {
            return Err(SceneGraphError::InternalError(format!(
                "mark {} is not a rect mark",
                handle.index()
            ))
            .into());
        };
        if mark.len as usize != transition.len() {
            return Err(SceneGraphError::InternalError(format!(
                "transition has {} entries for {} rects",
                transition.len(),
                mark.len
            ))
            .into());
        }

        // Enter state is applied synchronously, before the first tick
        apply_frames(mark, &transition.frames_at(Duration::ZERO));
        self.transitions.retain(|active| active.handle != handle);
        self.transitions.push(ActiveTransition {
            handle,
            transition,
            elapsed: Duration::ZERO,
        });
        Ok(())
    }
}
