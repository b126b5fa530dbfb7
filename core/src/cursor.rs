use crate::rules::PageRules;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    pub dot: [f32; 2],
    pub ring: [f32; 2],
}

#[derive(Clone, Debug)]
pub struct CursorTrail {
    speed: f32,
    ring_speed: f32,
    visible: bool,
    pointer: [f32; 2],
    dot: [f32; 2],
    ring: [f32; 2],
}

impl CursorTrail {
    pub fn new(speed: f32, trail_ratio: f32) -> Self {
        Self {
            speed,
            ring_speed: speed * trail_ratio,
            visible: false,
            pointer: [0.0, 0.0],
            dot: [0.0, 0.0],
            ring: [0.0, 0.0],
        }
    }

    pub fn from_rules(rules: &PageRules) -> Self {
        Self::new(rules.cursor_speed, rules.cursor_trail_ratio)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Records the latest pointer position. Returns `true` if this made the
    /// trail visible.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> bool {
        self.pointer = [x, y];
        self.show()
    }

    pub fn show(&mut self) -> bool {
        !std::mem::replace(&mut self.visible, true)
    }

    pub fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    pub fn tick(&mut self) -> Option<CursorFrame> {
        if !self.visible {
            return None;
        }
        approach(&mut self.dot, self.pointer, self.speed);
        approach(&mut self.ring, self.pointer, self.ring_speed);
        Some(self.frame())
    }

    pub fn frame(&self) -> CursorFrame {
        CursorFrame {
            dot: self.dot,
            ring: self.ring,
        }
    }
}

fn approach(value: &mut [f32; 2], target: [f32; 2], speed: f32) {
    value[0] += (target[0] - value[0]) * speed;
    value[1] += (target[1] - value[1]) * speed;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_trail_does_not_move() {
        let mut trail = CursorTrail::new(0.15, 0.6);
        assert_eq!(trail.tick(), None);
        assert_eq!(trail.frame().dot, [0.0, 0.0]);
    }

    #[test]
    fn first_move_shows_trail() {
        let mut trail = CursorTrail::new(0.15, 0.6);
        assert!(trail.pointer_moved(10.0, 10.0));
        assert!(!trail.pointer_moved(12.0, 10.0));
        assert!(trail.hide());
        assert!(!trail.hide());
    }

    #[test]
    fn one_frame_uses_linear_step() {
        let mut trail = CursorTrail::new(0.15, 0.6);
        trail.pointer_moved(100.0, 200.0);
        let frame = trail.tick().unwrap();
        assert!((frame.dot[0] - 15.0).abs() < 1e-4);
        assert!((frame.dot[1] - 30.0).abs() < 1e-4);
        assert!((frame.ring[0] - 9.0).abs() < 1e-4);
    }

    #[test]
    fn followers_converge_and_ring_lags() {
        let mut trail = CursorTrail::new(0.15, 0.6);
        trail.pointer_moved(400.0, -80.0);
        let mut frame = trail.frame();
        for step in 0..200 {
            frame = trail.tick().unwrap();
            if step == 5 {
                assert!(frame.ring[0] < frame.dot[0]);
            }
        }
        assert!((frame.dot[0] - 400.0).abs() < 0.01);
        assert!((frame.ring[1] + 80.0).abs() < 0.01);
    }
}
