use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use burrow_blocks::{MaterialCatalog, TemplateCache, TileState, default_definitions};
use burrow_chunk::{Chunk, HEIGHT, LENGTH, WIDTH};
use burrow_world::{Generator, GeneratorConfig, LogDiagnostics, load_config_from_path};

/// Generate one chunk and print what ended up in it.
#[derive(Parser, Debug)]
#[command(name = "burrow-dump", version, about)]
struct Args {
    /// World seed; defaults to the current time.
    #[arg(long)]
    seed: Option<i64>,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    chunk_x: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    chunk_y: i64,
    /// Generator config (TOML); built-in defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Material table (TOML, `[[materials]]`); built-in table when omitted.
    #[arg(long)]
    materials: Option<PathBuf>,
    /// Draw a character map of this layer.
    #[arg(long)]
    z: Option<usize>,
    /// Describe the tile at x,y,z.
    #[arg(long, value_delimiter = ',')]
    tile: Option<Vec<usize>>,
    /// Write debug logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match &args.log_file {
        Some(path) => simplelog::WriteLogger::init(
            simplelog::LevelFilter::Debug,
            simplelog::Config::default(),
            File::create(path)?,
        )?,
        None => env_logger::init(),
    }

    let seed = match args.seed {
        Some(s) => s,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64,
    };
    let cfg = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => GeneratorConfig::default(),
    };
    let catalog = match &args.materials {
        Some(path) => MaterialCatalog::from_path(path)?,
        None => MaterialCatalog::builtin(),
    };
    log::info!(target: "burrow", "seed {} chunk ({}, {})", seed, args.chunk_x, args.chunk_y);

    let diagnostics = Arc::new(LogDiagnostics);
    let generator = Generator::with_config(seed, catalog.into_vec(), &cfg, diagnostics.clone())?;
    let chunk = generator.generate(args.chunk_x, args.chunk_y);

    println!("seed {seed} chunk ({}, {})", args.chunk_x, args.chunk_y);
    print_layers(&chunk);

    let (blocks, floors) = default_definitions();
    let names = TemplateCache::with_diagnostics(diagnostics);
    let describe = |t: &TileState| t.describe(&blocks, &floors, generator.materials(), &names);

    if let Some(z) = args.z {
        if z >= HEIGHT {
            return Err(format!("z={z} outside chunk height {HEIGHT}").into());
        }
        println!();
        print_map(&chunk, z);
    }
    if let Some(t) = args.tile.as_deref() {
        let &[x, y, z] = t else {
            return Err("--tile takes x,y,z".into());
        };
        if x >= WIDTH || y >= LENGTH || z >= HEIGHT {
            return Err(format!("tile ({x}, {y}, {z}) outside chunk").into());
        }
        let tile = chunk.get(x, y, z);
        println!();
        println!("({x}, {y}, {z}): {}", describe(tile));
        println!("  block {:?} floor {:?}", tile.block, tile.floor);
        println!(
            "  flags {:#06x} liquid {} random {:#010x}",
            tile.flags.0, tile.liquid, tile.random
        );
    }
    Ok(())
}

fn print_layers(chunk: &Chunk) {
    println!("{:>3} {:>6} {:>6} {:>6} {:>6}", "z", "blocks", "floors", "grass", "water");
    for z in (0..HEIGHT).rev() {
        let layer = chunk.layer(z);
        let blocks = layer.iter().filter(|t| !t.block.is_empty()).count();
        let floors = layer.iter().filter(|t| !t.floor.is_empty()).count();
        let grass = layer.iter().filter(|t| t.has_grass()).count();
        let water = layer.iter().filter(|t| t.has_liquid()).count();
        if blocks + floors + grass + water == 0 {
            continue;
        }
        println!("{z:>3} {blocks:>6} {floors:>6} {grass:>6} {water:>6}");
    }
}

// '#' block, '~' liquid, '"' grass, '.' bare floor, ' ' open.
fn print_map(chunk: &Chunk, z: usize) {
    for y in 0..LENGTH {
        let row: String = (0..WIDTH)
            .map(|x| {
                let t = chunk.get(x, y, z);
                if t.has_liquid() {
                    '~'
                } else if !t.block.is_empty() {
                    '#'
                } else if t.has_grass() {
                    '"'
                } else if !t.floor.is_empty() {
                    '.'
                } else {
                    ' '
                }
            })
            .collect();
        println!("{row}");
    }
}
