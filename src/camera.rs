use glam::Vec2;

/// Smoothed follow camera
///
/// `offset` is added to world coordinates to get screen coordinates. Each
/// update moves it a fraction (`smoothing`) of the way toward centering the
/// target on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub offset: Vec2,
    screen_size: Vec2,
    smoothing: f32,
}

impl Camera {
    pub fn new(screen_width: u32, screen_height: u32, smoothing: f32) -> Self {
        Camera {
            offset: Vec2::ZERO,
            screen_size: Vec2::new(screen_width as f32, screen_height as f32),
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    fn target_offset(&self, target: Vec2) -> Vec2 {
        self.screen_size / 2.0 - target
    }

    pub fn update(&mut self, target: Vec2) {
        let goal = self.target_offset(target);
        self.offset += (goal - self.offset) * self.smoothing;
    }

    /// Jumps straight to the target (new game, load)
    pub fn snap_to(&mut self, target: Vec2) {
        self.offset = self.target_offset(target);
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world + self.offset
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen - self.offset
    }
}
