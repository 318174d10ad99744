use crate::sprite::{
    placeholder_color_for_direction, placeholder_color_for_state, Frame, FrameSet,
};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// Cardinal facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Dominant axis of `velocity`; horizontal wins ties. `None` when stationary.
    pub fn from_velocity(velocity: Vec2) -> Option<Direction> {
        if velocity == Vec2::ZERO {
            return None;
        }

        if velocity.x.abs() >= velocity.y.abs() {
            Some(if velocity.x > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            })
        } else {
            Some(if velocity.y > 0.0 {
                Direction::Down
            } else {
                Direction::Up
            })
        }
    }

    /// Unit vector in screen coordinates (y grows downward)
    pub fn to_vec(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Moving,
    Attack,
}

impl AnimationState {
    pub const ALL: [AnimationState; 3] =
        [AnimationState::Idle, AnimationState::Moving, AnimationState::Attack];
}

/// Frame selection over a family of frame sets keyed by `K`.
///
/// The frame index advances every `frame_delay_ms` while `advancing` is true
/// and loops over the active set; it snaps back to 0 when not advancing.
/// Switching to a set with fewer frames clamps the index into range.
#[derive(Debug, Clone)]
pub struct Animator<K: Copy + Eq + Hash> {
    sets: HashMap<K, FrameSet>,
    current: K,
    frame_index: usize,
    elapsed_ms: f32,
    frame_delay_ms: f32,
}

/// Player animation: one frame set per facing direction
pub type DirectionalAnimation = Animator<Direction>;

/// Enemy animation: one frame set per motion state
pub type StateAnimation = Animator<AnimationState>;

impl<K: Copy + Eq + Hash> Animator<K> {
    pub fn new(sets: HashMap<K, FrameSet>, initial: K, frame_delay_ms: f32) -> Self {
        Animator {
            sets,
            current: initial,
            frame_index: 0,
            elapsed_ms: 0.0,
            frame_delay_ms,
        }
    }

    pub fn set_frames(&mut self, key: K, frames: FrameSet) {
        self.sets.insert(key, frames);
        self.clamp_index();
    }

    /// Replaces every set present in `sets`; keys missing there keep theirs.
    pub fn install(&mut self, sets: &HashMap<K, FrameSet>) {
        for (key, frames) in sets {
            self.set_frames(*key, frames.clone());
        }
    }

    pub fn update(&mut self, dt_ms: f32, key: K, advancing: bool) {
        if key != self.current {
            self.current = key;
            self.clamp_index();
        }

        if !advancing {
            self.frame_index = 0;
            self.elapsed_ms = 0.0;
            return;
        }

        let len = self.current_len();
        if len == 0 || self.frame_delay_ms <= 0.0 {
            return;
        }

        self.elapsed_ms += dt_ms;
        while self.elapsed_ms >= self.frame_delay_ms {
            self.elapsed_ms -= self.frame_delay_ms;
            self.frame_index = (self.frame_index + 1) % len;
        }
    }

    pub fn current_key(&self) -> K {
        self.current
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn current_set(&self) -> Option<&FrameSet> {
        self.sets.get(&self.current)
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        self.current_set().and_then(|set| set.frame(self.frame_index))
    }

    fn current_len(&self) -> usize {
        self.sets.get(&self.current).map_or(0, FrameSet::len)
    }

    fn clamp_index(&mut self) {
        let len = self.current_len();
        if len == 0 {
            self.frame_index = 0;
        } else if self.frame_index >= len {
            self.frame_index = len - 1;
        }
    }
}

impl DirectionalAnimation {
    /// Single-frame colored placeholders for every direction
    pub fn placeholder(width: u32, height: u32, frame_delay_ms: f32) -> Self {
        let sets = Direction::ALL
            .iter()
            .map(|d| (*d, FrameSet::placeholder(placeholder_color_for_direction(*d), width, height)))
            .collect();
        Animator::new(sets, Direction::Right, frame_delay_ms)
    }
}

impl StateAnimation {
    pub fn placeholder(width: u32, height: u32, frame_delay_ms: f32) -> Self {
        let sets = AnimationState::ALL
            .iter()
            .map(|s| (*s, FrameSet::placeholder(placeholder_color_for_state(*s), width, height)))
            .collect();
        Animator::new(sets, AnimationState::Idle, frame_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::{Color, SpriteSource};

    fn strip(len: usize) -> FrameSet {
        let frames = (0..len).map(|i| Frame::new(i as i32 * 93, 0, 93, 93)).collect();
        FrameSet::new(SpriteSource::Placeholder(Color::WHITE), frames).unwrap()
    }

    #[test]
    fn test_direction_from_velocity() {
        assert_eq!(Direction::from_velocity(Vec2::new(3.0, 1.0)), Some(Direction::Right));
        assert_eq!(Direction::from_velocity(Vec2::new(-1.0, -3.0)), Some(Direction::Up));
        assert_eq!(Direction::from_velocity(Vec2::new(-2.0, 2.0)), Some(Direction::Left));
        assert_eq!(Direction::from_velocity(Vec2::ZERO), None);
    }

    #[test]
    fn test_advances_every_delay_and_loops() {
        let mut anim = DirectionalAnimation::new(
            HashMap::from([(Direction::Right, strip(3))]),
            Direction::Right,
            100.0,
        );

        anim.update(99.0, Direction::Right, true);
        assert_eq!(anim.frame_index(), 0);
        anim.update(1.0, Direction::Right, true);
        assert_eq!(anim.frame_index(), 1);
        anim.update(200.0, Direction::Right, true);
        assert_eq!(anim.frame_index(), 0);
    }

    #[test]
    fn test_resets_when_stationary() {
        let mut anim = DirectionalAnimation::new(
            HashMap::from([(Direction::Right, strip(4))]),
            Direction::Right,
            100.0,
        );
        anim.update(250.0, Direction::Right, true);
        assert_eq!(anim.frame_index(), 2);

        anim.update(16.0, Direction::Right, false);
        assert_eq!(anim.frame_index(), 0);
    }

    #[test]
    fn test_switching_to_shorter_set_clamps() {
        let mut anim = DirectionalAnimation::new(
            HashMap::from([(Direction::Right, strip(4)), (Direction::Up, strip(2))]),
            Direction::Right,
            100.0,
        );
        anim.update(300.0, Direction::Right, true);
        assert_eq!(anim.frame_index(), 3);

        anim.update(0.0, Direction::Up, true);
        assert_eq!(anim.frame_index(), 1);
        assert!(anim.current_frame().is_some());
    }

    #[test]
    fn test_placeholder_has_every_direction() {
        let anim = DirectionalAnimation::placeholder(93, 93, 100.0);
        for dir in Direction::ALL {
            let mut a = anim.clone();
            a.update(0.0, dir, false);
            assert_eq!(a.current_set().map(FrameSet::len), Some(1));
        }
    }
}
