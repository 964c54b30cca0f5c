use foobar_puzzles::payment::{generous_count, stingy_count};
use foobar_puzzles::payment_gap;

fn main() {
    let total = 143;
    match payment_gap(total) {
        Ok(gap) => {
            println!(
                "total={total}: stingy={} generous={} gap={gap}",
                stingy_count(total as u64),
                generous_count(total as u64)
            );
        }
        Err(e) => eprintln!("{e}"),
    }
}
