use crate::types::{Frame, FINAL_FRAME, MAX_FRAMES};

/// Read-only copy of a game, handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub frames: [Frame; MAX_FRAMES],
    pub current_round: usize,
    pub score: u32,
    pub complete: bool,
}

impl GameSnapshot {
    /// The ten scoring frames, without the bonus slots.
    pub fn regulation_frames(&self) -> &[Frame] {
        &self.frames[..FINAL_FRAME]
    }

    /// First fill ball after a tenth-frame mark, shown as the tenth frame's third box.
    pub fn fill_ball(&self) -> Option<u32> {
        self.frames[FINAL_FRAME].pins_on_first_roll
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.current_round == index
    }

    pub fn playable(&self) -> bool {
        !self.complete
    }
}
