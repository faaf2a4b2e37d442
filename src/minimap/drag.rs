//! Minimap window geometry and drag-to-reposition.

use bevy::prelude::*;

use crate::shared::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        anchor_cursor: IVec2,
        anchor_position: IVec2,
    },
}

/// On-screen placement of the minimap. Sizes are screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimapWindow {
    pub position: IVec2,
    pub size: IVec2,
    pub border: i32,
    pub drag: DragState,
}

impl MinimapWindow {
    pub fn new(position: IVec2, size: IVec2) -> Self {
        Self {
            position,
            size,
            border: BORDER_WIDTH,
            drag: DragState::Idle,
        }
    }

    pub fn from_config(config: &MinimapConfig) -> Self {
        Self::new(config.position(), config.screen_size())
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// The window plus its frame. Edges are exclusive.
    pub fn contains(&self, point: IVec2) -> bool {
        let min = self.position - IVec2::splat(self.border);
        let max = self.position + self.size + IVec2::splat(self.border);
        point.x > min.x && point.x < max.x && point.y > min.y && point.y < max.y
    }

    /// Start dragging if the press landed on the minimap.
    pub fn begin_drag(&mut self, cursor: IVec2) -> bool {
        if !self.contains(cursor) {
            return false;
        }
        self.drag = DragState::Dragging {
            anchor_cursor: cursor,
            anchor_position: self.position,
        };
        true
    }

    /// Follow the pointer, keeping the framed window inside the viewport.
    pub fn drag_to(&mut self, cursor: IVec2, viewport: IVec2) {
        let DragState::Dragging {
            anchor_cursor,
            anchor_position,
        } = self.drag
        else {
            return;
        };
        let target = anchor_position + (cursor - anchor_cursor);
        let min = IVec2::splat(self.border);
        let max = viewport - self.size - IVec2::splat(self.border);
        // When the viewport is too small the low bound wins.
        self.position = target.min(max).max(min);
    }

    /// Finish a drag. Returns the position to commit when the release landed
    /// on the minimap; a release elsewhere drops the drag without committing.
    pub fn end_drag(&mut self, cursor: IVec2) -> Option<IVec2> {
        if !self.is_dragging() {
            return None;
        }
        self.drag = DragState::Idle;
        self.contains(cursor).then_some(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: IVec2 = IVec2::new(1280, 720);

    fn window() -> MinimapWindow {
        MinimapWindow::new(IVec2::new(100, 100), IVec2::new(300, 180))
    }

    #[test]
    fn test_hit_region_includes_border() {
        let window = window();
        assert!(window.contains(IVec2::new(200, 150)));
        assert!(window.contains(IVec2::new(89, 89)));
        assert!(window.contains(IVec2::new(411, 291)));
        // Edges of the expanded rectangle are outside.
        assert!(!window.contains(IVec2::new(88, 150)));
        assert!(!window.contains(IVec2::new(412, 150)));
        assert!(!window.contains(IVec2::new(200, 292)));
    }

    #[test]
    fn test_press_outside_does_not_start_drag() {
        let mut window = window();
        assert!(!window.begin_drag(IVec2::new(700, 500)));
        assert_eq!(window.drag, DragState::Idle);
    }

    #[test]
    fn test_drag_follows_pointer_delta() {
        let mut window = window();
        assert!(window.begin_drag(IVec2::new(150, 150)));
        window.drag_to(IVec2::new(250, 190), VIEWPORT);
        assert_eq!(window.position, IVec2::new(200, 140));
        window.drag_to(IVec2::new(140, 150), VIEWPORT);
        assert_eq!(window.position, IVec2::new(90, 100));
    }

    #[test]
    fn test_drag_clamps_to_viewport() {
        let mut window = window();
        window.begin_drag(IVec2::new(150, 150));
        window.drag_to(IVec2::new(-500, -500), VIEWPORT);
        assert_eq!(window.position, IVec2::splat(BORDER_WIDTH));
        window.drag_to(IVec2::new(5000, 5000), VIEWPORT);
        assert_eq!(window.position, IVec2::new(1280 - 300 - 12, 720 - 180 - 12));
    }

    #[test]
    fn test_drag_in_tiny_viewport_keeps_low_bound() {
        let mut window = window();
        window.begin_drag(IVec2::new(150, 150));
        window.drag_to(IVec2::new(400, 400), IVec2::new(200, 100));
        assert_eq!(window.position, IVec2::splat(BORDER_WIDTH));
    }

    #[test]
    fn test_idle_window_ignores_pointer_motion() {
        let mut window = window();
        window.drag_to(IVec2::new(600, 600), VIEWPORT);
        assert_eq!(window.position, IVec2::new(100, 100));
    }

    #[test]
    fn test_release_inside_commits_position() {
        let mut window = window();
        window.begin_drag(IVec2::new(150, 150));
        window.drag_to(IVec2::new(170, 160), VIEWPORT);
        assert_eq!(window.end_drag(IVec2::new(170, 160)), Some(IVec2::new(120, 110)));
        assert!(!window.is_dragging());
    }

    #[test]
    fn test_release_outside_does_not_commit() {
        let mut window = window();
        window.begin_drag(IVec2::new(150, 150));
        assert_eq!(window.end_drag(IVec2::new(900, 600)), None);
        assert!(!window.is_dragging());
    }

    #[test]
    fn test_release_without_drag_is_ignored() {
        let mut window = window();
        assert_eq!(window.end_drag(IVec2::new(150, 150)), None);
    }
}
