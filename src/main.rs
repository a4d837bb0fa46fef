mod bits;
mod random;

use clap::Parser;
use log::{debug, warn};
use random::Random;

/// Print random 32-bit strings with independently Bernoulli(p) bits,
/// least-significant bit first.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Generator seed; identical seeds reproduce identical output.
    #[clap(long, default_value_t = 1)]
    seed: u64,

    /// Seed from OS entropy instead of --seed.
    #[clap(long)]
    entropy: bool,

    /// Per-bit set probability.
    #[clap(long, default_value_t = 0.5)]
    probability: f64,

    /// Number of samples to print.
    #[clap(long, default_value_t = 10)]
    count: usize,
}

fn main() {
    dotenv::dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    if !(0.0..=1.0).contains(&args.probability) {
        warn!(
            "probability {} is outside [0, 1]; all bits will be {}",
            args.probability,
            if args.probability > 1.0 { "set" } else { "clear" }
        );
    }

    let mut rng = if args.entropy {
        debug!("seeding from OS entropy");
        Random::from_entropy()
    } else {
        debug!("seeding with {}", args.seed);
        Random::with_seed(args.seed)
    };

    for _ in 0..args.count {
        println!("{}", bits::format(bits::sample(args.probability, &mut rng)));
    }
}
