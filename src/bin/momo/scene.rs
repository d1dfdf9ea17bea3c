//=========================================================================
// Momo Scene
//=========================================================================
//
// Per tick:
//   Space (edge)  → next clip in table order, wrapping; absent clips are
//                   passed over without switching
//   always        → player advances by UPDATE_SCALE frames
//   Q held        → exit
//
// Per frame the weighted pose is traced in place of a renderer.
//
//=========================================================================

use log::{debug, info, log_enabled, trace, Level};
use momokit::prelude::*;

use super::clips::{ClipLibrary, MomoClip, CLIP_COUNT};
use super::player::{ClipPlayer, ClipState};

/// Animation frames advanced per tick.
pub const UPDATE_SCALE: f32 = 27.0 / 60.0;

pub struct MomoScene {
    library: ClipLibrary,
    player: ClipPlayer,
    /// Index into `CLIPS` of the last selection.
    selected: usize,
    /// Set while Space is held so a held key selects only once.
    space_latch: bool,
    last_blend: f32,
}

impl MomoScene {
    /// Starts playing the first table clip if the asset has it.
    pub fn new(library: ClipLibrary) -> Self {
        let mut player = ClipPlayer::new();
        let first = MomoClip::at(0);
        if let Some(length) = library.length(first) {
            player.set_clip(first, length);
        }

        Self { library, player, selected: 0, space_latch: false, last_blend: 0.0 }
    }

    fn select_next(&mut self) {
        self.selected = (self.selected + 1) % CLIP_COUNT;
        let clip = MomoClip::at(self.selected);

        match self.library.length(clip) {
            Some(length) => {
                info!(target: "momo", "Playing {}", clip.asset_name());
                self.player.set_clip(clip, length);
            }
            None => debug!(target: "momo", "{} not in asset", clip.asset_name()),
        }
    }

    #[cfg(test)]
    pub fn player(&self) -> &ClipPlayer {
        &self.player
    }

    pub fn selected(&self) -> MomoClip {
        MomoClip::at(self.selected)
    }

    pub fn last_blend(&self) -> f32 {
        self.last_blend
    }
}

impl Scene for MomoScene {
    fn update(&mut self, tick: &Tick<'_>) -> SceneControl {
        let space = tick.input.is_key_down(KeyCode::Space);
        if space && !self.space_latch {
            self.space_latch = true;
            self.select_next();
        } else if !space {
            self.space_latch = false;
        }

        self.player.update(UPDATE_SCALE);

        if tick.input.is_key_down(KeyCode::KeyQ) {
            info!(target: "momo", "Quit requested");
            return SceneControl::Exit;
        }
        SceneControl::Continue
    }

    fn synchronize_motion(&mut self, _rate: f32, blend: f32) {
        self.last_blend = blend;

        if log_enabled!(target: "momo", Level::Trace) {
            for state in self.player.current().into_iter().chain(self.player.fading()) {
                trace_pose(state, blend);
            }
        }
    }
}

fn trace_pose(state: &ClipState, blend: f32) {
    trace!(
        target: "momo",
        "{} frame {:.1}/{} weight {:.2} (blend {:.2})",
        state.clip.asset_name(),
        state.time,
        state.length,
        state.weight,
        blend
    );
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use momokit::core::input::InputEvent;

    fn press(input: &mut InputState, key: KeyCode) {
        input.apply_events(&[InputEvent::KeyDown { key, modifiers: Modifiers::NONE }]);
    }

    fn release(input: &mut InputState, key: KeyCode) {
        input.apply_events(&[InputEvent::KeyUp { key, modifiers: Modifiers::NONE }]);
    }

    fn step(scene: &mut MomoScene, input: &InputState) -> SceneControl {
        let tick = Tick { dt: 1.0 / 60.0, fixed_dt: 1.0 / 60.0, smooth: true, input };
        scene.update(&tick)
    }

    #[test]
    fn starts_on_first_clip() {
        let scene = MomoScene::new(ClipLibrary::full());
        assert_eq!(scene.player().current().unwrap().clip, MomoClip::Carry);
        assert_eq!(scene.selected(), MomoClip::Carry);
    }

    #[test]
    fn holding_space_selects_once() {
        let mut scene = MomoScene::new(ClipLibrary::full());
        let mut input = InputState::new();

        press(&mut input, KeyCode::Space);
        for _ in 0..5 {
            step(&mut scene, &input);
        }
        assert_eq!(scene.selected(), MomoClip::Catch);

        release(&mut input, KeyCode::Space);
        step(&mut scene, &input);
        press(&mut input, KeyCode::Space);
        step(&mut scene, &input);

        assert_eq!(scene.selected(), MomoClip::Death);
        assert_eq!(scene.player().current().unwrap().clip, MomoClip::Death);
    }

    #[test]
    fn selection_wraps_after_last_clip() {
        let mut scene = MomoScene::new(ClipLibrary::full());
        let mut input = InputState::new();

        for _ in 0..CLIP_COUNT {
            press(&mut input, KeyCode::Space);
            step(&mut scene, &input);
            release(&mut input, KeyCode::Space);
            step(&mut scene, &input);
        }

        assert_eq!(scene.selected(), MomoClip::Carry);
    }

    #[test]
    fn missing_clips_keep_current_playing() {
        let library = ClipLibrary::from_toml_str(
            "mesh = \"MeshMomo\"\n[[actions]]\nname = \"Momo_Carry\"\nframes = 30",
        )
        .unwrap();
        let mut scene = MomoScene::new(library);
        let mut input = InputState::new();

        press(&mut input, KeyCode::Space);
        step(&mut scene, &input);

        assert_eq!(scene.selected(), MomoClip::Catch);
        assert_eq!(scene.player().current().unwrap().clip, MomoClip::Carry);
    }

    #[test]
    fn player_advances_by_update_scale() {
        let mut scene = MomoScene::new(ClipLibrary::full());
        let input = InputState::new();

        step(&mut scene, &input);
        step(&mut scene, &input);

        let time = scene.player().current().unwrap().time;
        assert!((time - 2.0 * UPDATE_SCALE).abs() < 1e-6);
    }

    #[test]
    fn q_requests_exit() {
        let mut scene = MomoScene::new(ClipLibrary::full());
        let mut input = InputState::new();

        assert_eq!(step(&mut scene, &input), SceneControl::Continue);
        press(&mut input, KeyCode::KeyQ);
        assert_eq!(step(&mut scene, &input), SceneControl::Exit);
    }

    #[test]
    fn synchronize_motion_records_blend() {
        let mut scene = MomoScene::new(ClipLibrary::full());
        scene.synchronize_motion(1.0, 0.375);
        assert_eq!(scene.last_blend(), 0.375);
    }
}
