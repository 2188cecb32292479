use std::str::FromStr;

use clap::Parser;
use itertools::Itertools;
use monotone_window::{
    generate_random_sequence, generate_sorted_sources, naive, order::Direction, queries,
};
use serde::Serialize;
use serde_json::{json, Value};

/// A comma separated list of integers, e.g. `3,-1,4`.
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
struct Seq(Vec<i64>);

impl FromStr for Seq {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Seq(vec![]));
        }
        s.split(',')
            .map(|x| x.trim().parse::<i64>().map_err(|e| format!("{x:?}: {e}")))
            .collect::<Result<_, _>>()
            .map(Seq)
    }
}

#[derive(Clone, clap::Subcommand, Debug, Serialize)]
#[serde(tag = "query")]
enum Query {
    /// Days until a strictly warmer day.
    DailyTemperatures {
        #[arg(allow_hyphen_values = true)]
        values: Seq,
    },
    /// Nearest later strictly greater element.
    NextGreater {
        #[arg(allow_hyphen_values = true)]
        values: Seq,
    },
    /// Largest rectangle in a histogram.
    LargestRectangle {
        #[arg(allow_hyphen_values = true)]
        values: Seq,
    },
    /// Shortest subarray with sum at least k; -1 if none.
    ShortestSubarray {
        #[arg(allow_hyphen_values = true)]
        values: Seq,
        #[arg(short)]
        k: i64,
    },
    /// Maximum of every window.
    SlidingMax {
        #[arg(allow_hyphen_values = true)]
        values: Seq,
        #[arg(short)]
        w: usize,
    },
    /// Minimum of every window.
    SlidingMin {
        #[arg(allow_hyphen_values = true)]
        values: Seq,
        #[arg(short)]
        w: usize,
    },
    /// Position of the maximum of every window.
    SlidingArgmax {
        #[arg(allow_hyphen_values = true)]
        values: Seq,
        #[arg(short)]
        w: usize,
        #[arg(long, value_enum, default_value_t = Direction::Rightmost)]
        ties: Direction,
    },
    /// Indices i<j<k with a[i] < a[k] < a[j].
    Pattern132 {
        #[arg(allow_hyphen_values = true)]
        values: Seq,
    },
    /// Merge sorted sources, one per argument.
    Merge {
        #[arg(required = true, allow_hyphen_values = true)]
        sources: Vec<Seq>,
    },
    /// The k pairs with the smallest sums.
    KSmallestPairs {
        #[arg(allow_hyphen_values = true)]
        a: Seq,
        #[arg(allow_hyphen_values = true)]
        b: Seq,
        #[arg(short)]
        k: usize,
    },
    /// The k-th smallest cell of a matrix with sorted rows, one row per argument.
    KthSmallest {
        #[arg(short)]
        k: usize,
        #[arg(required = true, allow_hyphen_values = true)]
        rows: Vec<Seq>,
    },
    /// The k values closest to a target.
    KClosest {
        #[arg(allow_hyphen_values = true)]
        values: Seq,
        #[arg(short, long, allow_hyphen_values = true)]
        target: i64,
        #[arg(short)]
        k: usize,
    },
}

impl Query {
    fn run(&self) -> monotone_window::Result<Value> {
        use queries::*;
        Ok(match self {
            Query::DailyTemperatures { values } => json!(daily_temperatures(&values.0)),
            Query::NextGreater { values } => json!(next_greater_elements(&values.0)),
            Query::LargestRectangle { values } => json!(largest_rectangle_area(&values.0)?),
            Query::ShortestSubarray { values, k } => {
                let len = shortest_subarray_sum_at_least_k(&values.0, *k)?;
                json!(len.map_or(-1, |l| l as i64))
            }
            Query::SlidingMax { values, w } => json!(sliding_window_maximum(&values.0, *w)?),
            Query::SlidingMin { values, w } => json!(sliding_window_minimum(&values.0, *w)?),
            Query::SlidingArgmax { values, w, ties } => {
                json!(sliding_window_argmax(&values.0, *w, *ties)?)
            }
            Query::Pattern132 { values } => json!(find_132_pattern(&values.0)),
            Query::Merge { sources } => {
                let sources = sources.iter().map(|s| s.0.clone()).collect_vec();
                json!(merge_k_sorted_sequences(&sources)?)
            }
            Query::KSmallestPairs { a, b, k } => json!(k_smallest_pairs(&a.0, &b.0, *k)?),
            Query::KthSmallest { k, rows } => {
                let rows = rows.iter().map(|s| s.0.clone()).collect_vec();
                json!(kth_smallest_in_sorted_matrix(&rows, *k)?)
            }
            Query::KClosest { values, target, k } => json!(k_closest(&values.0, *target, *k)?),
        })
    }
}

#[derive(Serialize)]
struct EvalResult {
    query: &'static str,
    n: usize,
    rounds: usize,
    mismatches: usize,
}

/// Cross-check every query against its brute-force counterpart on random input.
fn eval(n: usize, rounds: usize, seed: u64) -> Vec<EvalResult> {
    type Check = fn(&[i64], u64) -> bool;
    let checks: [(&'static str, Check); 8] = [
        ("daily-temperatures", |v, _| {
            queries::daily_temperatures(v) == naive::daily_temperatures(v)
        }),
        ("largest-rectangle", |v, _| {
            let h = v.iter().map(|x| x.abs()).collect_vec();
            queries::largest_rectangle_area(&h).ok() == Some(naive::largest_rectangle_area(&h))
        }),
        ("shortest-subarray", |v, s| {
            let k = 1 + (s % 50) as i64;
            queries::shortest_subarray_sum_at_least_k(v, k).ok()
                == Some(naive::shortest_subarray_sum_at_least_k(v, k))
        }),
        ("sliding-max", |v, s| {
            let w = 1 + (s as usize) % v.len().max(1);
            v.is_empty()
                || queries::sliding_window_maximum(v, w).ok()
                    == Some(naive::sliding_window_maximum(v, w))
        }),
        ("sliding-min", |v, s| {
            let w = 1 + (s as usize) % v.len().max(1);
            v.is_empty()
                || queries::sliding_window_minimum(v, w).ok()
                    == Some(naive::sliding_window_minimum(v, w))
        }),
        ("pattern-132", |v, _| {
            queries::find_132_pattern(v).is_some() == naive::has_132_pattern(v)
        }),
        ("merge", |v, s| {
            let sources = generate_sorted_sources(v.len(), 1 + (s % 8) as usize, s);
            queries::merge_k_sorted_sequences(&sources).ok()
                == Some(naive::merge_k_sorted_sequences(&sources))
        }),
        ("k-closest", |v, s| {
            let sorted = v.iter().copied().sorted().collect_vec();
            let k = 1 + (s as usize) % sorted.len().max(1);
            sorted.is_empty()
                || queries::k_closest(&sorted, v[0], k).ok()
                    == Some(naive::k_closest(&sorted, v[0], k))
        }),
    ];

    checks
        .iter()
        .map(|&(query, check)| {
            let mismatches = (0..rounds)
                .filter(|&r| {
                    let s = seed.wrapping_add(r as u64);
                    let v = generate_random_sequence(n, -20, 20, s);
                    !check(&v, s)
                })
                .count();
            eprintln!("{query:>20}: {mismatches} / {rounds} mismatches");
            EvalResult {
                query,
                n,
                rounds,
                mismatches,
            }
        })
        .collect()
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run a single query on explicit input.
    Run {
        #[clap(subcommand)]
        query: Query,
    },
    /// Compare all queries against brute force on random input.
    Eval {
        /// Length of the generated random sequences.
        #[clap(short, default_value_t = 200)]
        n: usize,
        /// Number of random inputs per query.
        #[clap(short, long, default_value_t = 100)]
        rounds: usize,
        /// Seed of the first round; random when omitted.
        #[clap(short, long)]
        seed: Option<u64>,
    },
}

/// Monotone deque and k-way merge queries.
#[derive(clap::Parser)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

fn main() {
    color_backtrace::install();
    let args = Args::parse();

    match args.command {
        Command::Run { query } => match query.run() {
            Ok(result) => {
                let out = json!({ "config": query, "result": result });
                println!("{out}");
            }
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(2);
            }
        },
        Command::Eval { n, rounds, seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            eprintln!("Evaluating with n={n} rounds={rounds} seed={seed}:");
            let results = eval(n, rounds, seed);
            println!("{}", json!({ "seed": seed, "results": results }));
            if results.iter().any(|r| r.mismatches > 0) {
                std::process::exit(1);
            }
        }
    }
}
