//! Command-line front end for scene-bridge
//!
//! - `to-manifest <world.json> <catalog.json> [skeleton.json]`
//! - `from-manifest <manifest.json>`
//! - `encode <world.json> <snapshot.json>`
//! - `decode <snapshot.json>`
//!
//! Worlds are JSON arrays of internal wire entities. Results go to stdout.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use log::{ info, warn };
use serde::de::DeserializeOwned;

use scene_bridge::{
    check_schema_version, decode_snapshot, encode_snapshot, load_snapshot, save_snapshot,
    BuilderScene, InMemoryAssetCatalog, SceneTranslator, StandardTypeCodes, WireEntity, World,
};

const USAGE: &str = "usage: scene-bridge <to-manifest|from-manifest|encode|decode> <args...>";

fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn Error>> {
    let content = std::fs::read_to_string(Path::new(path))
        .map_err(|err| format!("failed to read {}: {}", path, err))?;
    Ok(serde_json::from_str(&content)?)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let bridge = StandardTypeCodes;

    match args {
        [cmd, world, catalog, rest @ ..] if cmd == "to-manifest" && rest.len() <= 1 => {
            let catalog = Arc::new(InMemoryAssetCatalog::from_json_file(catalog)?);
            info!("loaded {} catalog assets", catalog.len());
            let translator = SceneTranslator::standard(catalog);

            let wire: Vec<WireEntity> = read_json(world)?;
            let world = World::from_wire(&wire, &bridge)?;
            let skeleton = match rest.first() {
                Some(path) => read_json::<BuilderScene>(path)?,
                None => BuilderScene::default(),
            };

            let manifest = translator.to_manifest(&world, &skeleton).await?;
            print_json(&manifest)
        }
        [cmd, manifest] if cmd == "from-manifest" => {
            let translator = SceneTranslator::standard(Arc::new(InMemoryAssetCatalog::new()));
            let manifest: BuilderScene = read_json(manifest)?;

            let outcome = translator.from_manifest(&manifest)?;
            for skipped in &outcome.skipped {
                warn!("skipped {} on entity {}", skipped.component_id, skipped.entity_id);
            }
            print_json(&outcome.world.to_wire()?)
        }
        [cmd, world, snapshot] if cmd == "encode" => {
            let wire: Vec<WireEntity> = read_json(world)?;
            let state = encode_snapshot(&wire, &bridge)?;
            save_snapshot(snapshot, &state)?;
            Ok(())
        }
        [cmd, snapshot] if cmd == "decode" => {
            let state = load_snapshot(snapshot)?;
            check_schema_version(&state)?;
            print_json(&decode_snapshot(&state, &bridge)?)
        }
        _ => Err(USAGE.into()),
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run(&args).await {
        eprintln!("scene-bridge: {}", err);
        std::process::exit(1);
    }
}
