//=========================================================================
// Momo
//
// Animation viewer: cycles the Momo clip table with Space, quits on Q.
//
// Usage:
//   momo [CLIPS.toml] [DEFS.toml]
//
// Without a clip manifest every clip is available with a default length.
// Without user definitions the engine defaults are used.
//
//=========================================================================

mod clips;
mod player;
mod scene;

use anyhow::{Context, Result};
use log::info;
use momokit::prelude::*;

use clips::ClipLibrary;
use scene::MomoScene;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let clips_path = args.next();
    let defs_path = args.next();

    let defs = match &defs_path {
        Some(path) => UserDefs::load(path).with_context(|| format!("loading user definitions {path}"))?,
        None => {
            let mut defs = UserDefs::default();
            defs.window.title = "Momo".to_string();
            defs
        }
    };

    let mut engine = EngineBuilder::new().with_defs(defs).build();
    engine.initialize().context("engine initialization failed")?;

    let library = match &clips_path {
        Some(path) => ClipLibrary::load(path).with_context(|| format!("loading clips {path}"))?,
        None => ClipLibrary::full(),
    };

    let mut scene = MomoScene::new(library);
    let summary = engine.run_windowed(&mut scene).context("engine run failed")?;

    info!(
        target: "momo",
        "Finished after {} frames, {} ticks (last clip {}, blend {:.2})",
        summary.frames,
        summary.ticks,
        scene.selected().asset_name(),
        scene.last_blend()
    );
    engine.finalize();
    Ok(())
}
