//=========================================================================
// Clip Player
//=========================================================================
//
// Plays one clip at a time and cross-fades from the previous clip.
//
// ```text
//   set_clip(B)          B: weight 0 → 1 over BLEND_FRAMES
//                        A: weight 1 → 0 over the same window
//   update(step)         times advance by `step`, wrapping at clip length
// ```
//
//=========================================================================

use super::clips::MomoClip;

/// Frames over which a new clip fades in.
pub const BLEND_FRAMES: f32 = 60.0;

//=== ClipState ===========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipState {
    pub clip: MomoClip,
    pub length: f32,
    /// Playback position in frames, within `[0, length)`.
    pub time: f32,
    pub weight: f32,
}

impl ClipState {
    fn advance(&mut self, step: f32) {
        self.time = (self.time + step) % self.length;
    }
}

//=== ClipPlayer ==========================================================

#[derive(Debug, Default)]
pub struct ClipPlayer {
    current: Option<ClipState>,
    fading: Option<ClipState>,
    /// Frames elapsed since the last `set_clip`.
    blend_elapsed: f32,
}

impl ClipPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts `clip` from time 0. `length` must be positive.
    ///
    /// The first clip plays at full weight immediately.
    pub fn set_clip(&mut self, clip: MomoClip, length: f32) {
        let previous = self.current.take();
        let weight = if previous.is_some() { 0.0 } else { 1.0 };

        self.fading = previous;
        self.blend_elapsed = 0.0;
        self.current = Some(ClipState { clip, length, time: 0.0, weight });
    }

    pub fn update(&mut self, step: f32) {
        let Some(current) = self.current.as_mut() else {
            return;
        };
        current.advance(step);

        let Some(fading) = self.fading.as_mut() else {
            return;
        };
        fading.advance(step);

        self.blend_elapsed += step;
        let progress = (self.blend_elapsed / BLEND_FRAMES).min(1.0);
        current.weight = progress;
        fading.weight = 1.0 - progress;

        if progress >= 1.0 {
            self.fading = None;
        }
    }

    pub fn current(&self) -> Option<&ClipState> {
        self.current.as_ref()
    }

    pub fn fading(&self) -> Option<&ClipState> {
        self.fading.as_ref()
    }

    #[cfg(test)]
    pub fn is_blending(&self) -> bool {
        self.fading.is_some()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
