use foobar_puzzles::{knight_distance, knight_route, logging};

fn main() {
    logging::init();

    // 19 = (2,3), 36 = (4,4): one knight move apart.
    match knight_distance(19, 36) {
        Ok(moves) => println!("knight_distance(19, 36) = {moves}"),
        Err(e) => eprintln!("{e}"),
    }

    if let Ok(Some(route)) = knight_route(0, 63) {
        let squares: Vec<String> = route.iter().map(ToString::to_string).collect();
        println!(
            "route 0 -> 63 ({} moves): {}",
            route.len() - 1,
            squares.join(" -> ")
        );
    }
}
