//! Campaign-map pathfinding demo.
//!
//! Generates a random biome field, then marches an army from the north-west
//! corner to the south-east corner twice: once unmodified, once with a
//! "ranger" perk set (cheap forests, mountain crossing). Prints both paths
//! and the movement range of the perked army as ASCII overlays.
//!
//! Run: cargo run --bin march

use gridmarch_core::{Biome, Bounds, Coord, Tile, TileMap};
use gridmarch_paths::{PathFinder, PathModifierSet};
use rand::{Rng, RngExt};

const WIDTH: i32 = 28;
const HEIGHT: i32 = 12;

fn generate_field(rng: &mut impl Rng) -> TileMap {
    let mut map = TileMap::new(Bounds::new(0, 0, WIDTH, HEIGHT), Tile::default());
    for c in map.bounds().iter() {
        let tile = match rng.random_range(0..10u32) {
            0 | 1 => Tile::new(2.0, Biome::Forest),
            2 => Tile::new(3.0, Biome::Hills),
            3 => Tile::new(4.0, Biome::Swamp),
            4 => Tile::blocked(Biome::Mountains),
            _ => Tile::new(1.0, Biome::Plains),
        };
        map.set(c, tile);
    }
    // Keep the corners open so the march has somewhere to go.
    map.set(Coord::new(0, 0), Tile::new(1.0, Biome::Plains));
    map.set(Coord::new(WIDTH - 1, HEIGHT - 1), Tile::new(1.0, Biome::Plains));
    map
}

fn biome_glyph(tile: Tile) -> char {
    match tile.biome {
        Biome::Forest => 'f',
        Biome::Hills => 'h',
        Biome::Swamp => 's',
        Biome::Mountains => '^',
        Biome::Water => '~',
        Biome::Desert => 'd',
        Biome::Road => '=',
        Biome::Plains | Biome::Any => '.',
    }
}

fn print_overlay(map: &TileMap, marked: impl Fn(Coord) -> Option<char>) {
    for y in 0..HEIGHT {
        let mut line = String::with_capacity(WIDTH as usize);
        for x in 0..WIDTH {
            let c = Coord::new(x, y);
            match marked(c) {
                Some(glyph) => line.push(glyph),
                None => line.push(map.get(c).map(biome_glyph).unwrap_or(' ')),
            }
        }
        println!("{line}");
    }
    println!();
}

fn main() {
    env_logger::init();

    let mut rng = rand::rng();
    let map = generate_field(&mut rng);
    let mut pf = PathFinder::new(map.bounds());

    let from = Coord::new(0, 0);
    let to = Coord::new(WIDTH - 1, HEIGHT - 1);

    println!("terrain ({}x{}):", WIDTH, HEIGHT);
    print_overlay(&map, |_| None);

    match pf.find_path(&map, &(), from, to) {
        Ok(Some(path)) => {
            println!("unmodified march: {} cells, cost {:.2}", path.len(), path.cost);
            print_overlay(&map, |c| path.cells.contains(&c).then_some('*'));
        }
        Ok(None) => println!("unmodified march: no route\n"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    // Ranger perks: forests at half cost, mountains passable.
    let mut perks = PathModifierSet::new();
    perks
        .add_cost_multiplier(Biome::Forest, 0.5)
        .add_reverse_walkable(Biome::Mountains);

    match pf.find_path(&map, &perks, from, to) {
        Ok(Some(path)) => {
            println!("ranger march: {} cells, cost {:.2}", path.len(), path.cost);
            print_overlay(&map, |c| path.cells.contains(&c).then_some('*'));
        }
        Ok(None) => println!("ranger march: no route\n"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let budget = 6.0;
    pf.reach_map(&map, &perks, &[from], budget);
    println!("ranger movement range from {from} (budget {budget}):");
    print_overlay(&map, |c| {
        (pf.cost_at(c) < gridmarch_paths::UNREACHABLE).then_some('+')
    });
}
