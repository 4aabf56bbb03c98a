use crate::groups::NumAdditiveGroups;
use crate::{FenwickTree, PrefixSumIndex};

use rand::prelude::*;

fn bench<F: FnOnce()>(name: &str, num_tabs: usize, f: F) {
    use std::time::{Duration, Instant};
    let start = Instant::now();
    f();
    let elapsed = start.elapsed();

    print!("BENCH `{}` :", name);
    for _ in 0..num_tabs {
        print!("\t");
    }

    if elapsed < Duration::from_millis(1) {
        println!(
            "{} {:03} nanos",
            elapsed.as_micros(),
            elapsed.as_nanos() % 1000,
        );
    } else if elapsed < Duration::from_secs(1) {
        println!(
            "{} {:03} micros",
            elapsed.as_millis(),
            elapsed.as_micros() % 1000,
        );
    } else {
        println!(
            "{} {:03} millis",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
        );
    }
}

#[test]
#[ignore]
fn bench_prefix_sums() {
    let mut rng = SmallRng::from_entropy();

    const N: usize = 1 << 20;

    let mut a: Vec<u64> = (0..N as u64).collect();
    a.shuffle(&mut rng);

    let mut ft = FenwickTree::new(NumAdditiveGroups::<i64>::new(), N);
    let mut index = PrefixSumIndex::new(N);

    bench("FenwickTree::add", 2, || {
        for (i, &x) in a.iter().enumerate() {
            ft.add(i + 1, x as i64);
        }
    });
    bench("PrefixSumIndex::from_values", 1, || {
        index = PrefixSumIndex::from_values(&a).unwrap();
    });
    println!();

    bench("FenwickTree::prefix_sum", 1, || {
        for k in 0..=N {
            ft.prefix_sum(k);
        }
    });
    bench("PrefixSumIndex::prefix_sum", 1, || {
        for k in 0..=N {
            index.prefix_sum(k);
        }
    });
    println!();

    bench("FenwickTree::get", 2, || {
        for i in 1..=N {
            ft.get(i);
        }
    });
    bench("PrefixSumIndex::get", 2, || {
        for i in 1..=N {
            index.get(i);
        }
    });
    println!();

    bench("PrefixSumIndex::add", 2, || {
        for i in 1..=N {
            index.add(i, i as i64);
        }
    });
    bench("PrefixSumIndex::set", 2, || {
        for (i, &x) in a.iter().enumerate() {
            index.set(i + 1, x);
        }
    });
    println!();

    assert_eq!(index.get(3 * N / 4), a[3 * N / 4 - 1]);
    assert_eq!(index.prefix_sum(N), ft.prefix_sum(N) as u64);
}
