use anyhow::{Result, ensure};
use cave_core::{CaveGrid, RuleSet};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 200)]
    caves: u32,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn random_in(rng: &mut ChaCha8Rng, min_value: usize, max_value: usize) -> usize {
    min_value + rng.next_u64() as usize % (max_value - min_value + 1)
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::init();

    println!("Starting cave fuzz harness on seed {} for {} caves...", args.seed, args.caves);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for cave_index in 0..args.caves {
        let width = random_in(&mut rng, 1, 96);
        let height = random_in(&mut rng, 1, 96);
        let fill = random_in(&mut rng, 0, 100) as u8;
        let steps = random_in(&mut rng, 0, 8);

        let mut cave = CaveGrid::new(width, height, fill, &mut rng)?;
        for _ in 0..steps {
            let rule_set = choose(&mut rng, &[RuleSet::Conservative, RuleSet::Smooth]);
            cave.evolve(rule_set);

            // Assert invariants
            ensure!(
                cave.width() == width && cave.height() == height,
                "Invariant failed: dimensions changed on cave {cave_index}"
            );
            ensure!(border_is_solid(&cave), "Invariant failed: border eroded on cave {cave_index}");
            let rendered = cave.render();
            ensure!(
                rendered.len() == (width + 1) * height,
                "Invariant failed: render size mismatch on cave {cave_index}"
            );
        }
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}

fn border_is_solid(cave: &CaveGrid) -> bool {
    let (width, height) = (cave.width() as i32, cave.height() as i32);
    (0..width).all(|x| cave.is_wall(x, 0) && cave.is_wall(x, height - 1))
        && (0..height).all(|y| cave.is_wall(0, y) && cave.is_wall(width - 1, y))
}
