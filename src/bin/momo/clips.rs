//=========================================================================
// Momo Clips
//=========================================================================
//
// The fixed table of Momo animation clips and the library of clips that
// are actually present in the loaded asset.
//
// Manifest format:
// ```toml
// mesh = "MeshMomo"
//
// [[actions]]
// name = "Momo_Run"
// frames = 24
//
// [[actions]]
// name = "Momo_Turn.L"
// frames = 18
// ```
//
//=========================================================================

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Deserialize;
use thiserror::Error;

//=== MomoClip ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MomoClip {
    Carry,
    Catch,
    Death,
    DieLava,
    Dj,
    Drowning,
    EdgeClimb,
    EdgeIdle,
    Fall,
    FallUp,
    Glide,
    HitLightly,
    HitCarry,
    Idle1,
    IdleCapoeira,
    IdleNasty,
    Jump,
    Kick,
    Revive,
    Run,
    RunFaster,
    ShimmyL,
    ShimmyR,
    TailWhip,
    Throw1,
    ThrowSheep,
    ThrowWith,
    ThrowWithout,
    TurnL,
    TurnR,
    Walk,
    WalkBack,
    WalkFast,
    WalkHand,
    WalkSlow,
    WallFlip,
}

/// Number of clips in the table.
pub const CLIP_COUNT: usize = 36;

/// Clip table in cycling order, paired with the action name in the asset.
pub const CLIPS: [(MomoClip, &str); CLIP_COUNT] = [
    (MomoClip::Carry, "Momo_Carry"),
    (MomoClip::Catch, "Momo_Catch"),
    (MomoClip::Death, "Momo_Death"),
    (MomoClip::DieLava, "Momo_DieLava"),
    (MomoClip::Dj, "Momo_dj"),
    (MomoClip::Drowning, "Momo_Drowning"),
    (MomoClip::EdgeClimb, "Momo_EdgeClimb"),
    (MomoClip::EdgeIdle, "Momo_EdgeIdle"),
    (MomoClip::Fall, "Momo_Fall"),
    (MomoClip::FallUp, "Momo_FallUp"),
    (MomoClip::Glide, "Momo_Glide"),
    (MomoClip::HitLightly, "Momo_Hit_Lightly"),
    (MomoClip::HitCarry, "Momo_HitCarry"),
    (MomoClip::Idle1, "Momo_Idle1"),
    (MomoClip::IdleCapoeira, "Momo_IdleCapoeira"),
    (MomoClip::IdleNasty, "Momo_IdleNasty"),
    (MomoClip::Jump, "Momo_Jump"),
    (MomoClip::Kick, "Momo_Kick"),
    (MomoClip::Revive, "Momo_Revive"),
    (MomoClip::Run, "Momo_Run"),
    (MomoClip::RunFaster, "Momo_RunFaster"),
    (MomoClip::ShimmyL, "Momo_ShimmyL"),
    (MomoClip::ShimmyR, "Momo_ShimmyR"),
    (MomoClip::TailWhip, "Momo_TailWhip"),
    (MomoClip::Throw1, "Momo_Throw1"),
    (MomoClip::ThrowSheep, "Momo_ThrowSheep"),
    (MomoClip::ThrowWith, "Momo_ThrowWith"),
    (MomoClip::ThrowWithout, "Momo_ThrowWithout"),
    (MomoClip::TurnL, "Momo_Turn.L"),
    (MomoClip::TurnR, "Momo_Turn.R"),
    (MomoClip::Walk, "Momo_Walk"),
    (MomoClip::WalkBack, "Momo_WalkBack"),
    (MomoClip::WalkFast, "Momo_WalkFast"),
    (MomoClip::WalkHand, "Momo_WalkHand"),
    (MomoClip::WalkSlow, "Momo_WalkSlow"),
    (MomoClip::WallFlip, "Momo_WallFlip"),
];

impl MomoClip {
    /// Position in [`CLIPS`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn at(index: usize) -> Self {
        CLIPS[index % CLIP_COUNT].0
    }

    /// Action name inside the asset file.
    pub fn asset_name(self) -> &'static str {
        CLIPS[self.index()].1
    }

    pub fn from_asset_name(name: &str) -> Option<Self> {
        CLIPS.iter().find(|(_, n)| *n == name).map(|(clip, _)| *clip)
    }
}

//=== ClipError ===========================================================

#[derive(Debug, Error)]
pub enum ClipError {
    #[error("missing Momo mesh")]
    MissingMesh,

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse clip manifest: {0}")]
    Parse(#[from] toml::de::Error),
}

//=== Manifest ============================================================

#[derive(Debug, Deserialize)]
struct ClipManifest {
    mesh: Option<String>,
    #[serde(default)]
    actions: Vec<ActionEntry>,
}

#[derive(Debug, Deserialize)]
struct ActionEntry {
    name: String,
    frames: f32,
}

//=== ClipLibrary =========================================================

/// Length in frames of each clip present in the asset.
#[derive(Debug, Clone)]
pub struct ClipLibrary {
    lengths: [Option<f32>; CLIP_COUNT],
}

impl ClipLibrary {
    /// Entity that must be present in every manifest.
    pub const MESH: &'static str = "MeshMomo";

    /// Length used when no manifest is given.
    pub const DEFAULT_FRAMES: f32 = 60.0;

    /// Every clip present with the default length.
    pub fn full() -> Self {
        Self { lengths: [Some(Self::DEFAULT_FRAMES); CLIP_COUNT] }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClipError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| ClipError::Io { path: path.to_path_buf(), source })?;
        let library = Self::from_toml_str(&text)?;
        info!(target: "momo", "Loaded {} clips from {}", library.available(), path.display());
        Ok(library)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ClipError> {
        let manifest: ClipManifest = toml::from_str(text)?;

        if manifest.mesh.as_deref() != Some(Self::MESH) {
            return Err(ClipError::MissingMesh);
        }

        let mut lengths = [None; CLIP_COUNT];
        for entry in manifest.actions {
            let Some(clip) = MomoClip::from_asset_name(&entry.name) else {
                debug!(target: "momo", "Ignoring unknown action {}", entry.name);
                continue;
            };
            if !(entry.frames.is_finite() && entry.frames > 0.0) {
                warn!(target: "momo", "Action {} has unusable length {}, skipped", entry.name, entry.frames);
                continue;
            }
            lengths[clip.index()] = Some(entry.frames);
        }

        Ok(Self { lengths })
    }

    /// Clip length in frames, or `None` if the asset lacks it.
    pub fn length(&self, clip: MomoClip) -> Option<f32> {
        self.lengths[clip.index()]
    }

    pub fn available(&self) -> usize {
        self.lengths.iter().flatten().count()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
