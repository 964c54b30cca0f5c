use foobar_puzzles::partition_count;

fn main() {
    for n in [6, 200] {
        println!("partition_count({n}) = {}", partition_count(n));
    }
}
