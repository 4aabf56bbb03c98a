use fenwick_index::{lowbit, PrefixSumIndex};

fn main() {
    env_logger::init();

    let mut index = PrefixSumIndex::new(15);

    println!("1. add 10, 20, ..., 150:");
    for i in 1..=15 {
        index.add(i, 10 * i as i64);
    }

    println!("prefix sums:");
    for &k in [3, 6, 11, 15].iter() {
        println!("  sum[1,{}] = {}", k, index.prefix_sum(k));
    }

    println!("range sums:");
    for &(l, r) in [(2, 4), (1, 3)].iter() {
        println!("  sum[{},{}] = {}", l, r, index.range_sum(l, r));
    }

    println!();
    println!("2. set A[3] = 33, A[5] = 55:");
    index.set(3, 33);
    index.set(5, 55);
    for k in 1..=5 {
        println!("  sum[1,{}] = {}", k, index.prefix_sum(k));
    }

    println!("point reads:");
    for i in 1..=5 {
        println!("  A[{}] = {}", i, index.get(i));
    }

    println!();
    print!("{}", index);

    println!();
    println!("3. lowbit:");
    for &x in [1i32, 2, 3, 4, 5, 6, 7, 8, 12, 16].iter() {
        println!(
            "  lowbit({}) = {} ({:08b}, {:08b})",
            x,
            lowbit(x),
            x as u8,
            x.wrapping_neg() as u8
        );
    }
}
