use foobar_puzzles::board::{knight_table, AdjacencyTable};
use foobar_puzzles::core::square::Square;
use foobar_puzzles::search::bfs::{distances_from, eccentricity, shortest_moves, shortest_route};
use foobar_puzzles::search::knight::distance_on;
use foobar_puzzles::{knight_distance, knight_route, PuzzleError, NO_ROUTE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Diameter of the knight graph on an 8x8 board.
const DIAMETER: i32 = 6;

#[test]
fn every_square_is_zero_from_itself() {
    for s in 0..64 {
        assert_eq!(knight_distance(s, s).unwrap(), 0);
        assert_eq!(knight_route(s, s).unwrap().unwrap().len(), 1);
    }
}

#[test]
fn distance_is_symmetric_for_every_pair() {
    for s in 0..64 {
        for d in 0..64 {
            let there = knight_distance(s, d).unwrap();
            let back = knight_distance(d, s).unwrap();
            assert_eq!(there, back, "{s} <-> {d}");
            assert_ne!(there, NO_ROUTE);
        }
    }
}

#[test]
fn adjacency_table_invariants() {
    let table = knight_table();
    for sq in Square::all() {
        let nbrs = table.neighbors(sq);
        assert!((2..=8).contains(&nbrs.len()), "square {sq} has {}", nbrs.len());
        for &n in nbrs {
            assert_ne!(n, sq);
            assert!(n.index() < Square::NUM);
            assert!((n.coord() - sq.coord()).is_knight_step());
            assert!(table.is_adjacent(n, sq), "{sq} -> {n} not mirrored");
        }
    }
}

#[test]
fn neighbours_are_exactly_the_one_move_squares() {
    for s in 0..64i64 {
        let sq = Square::try_from(s).unwrap();
        for d in 0..64i64 {
            let dst = Square::try_from(d).unwrap();
            let one_move = knight_distance(s, d).unwrap() == 1;
            assert_eq!(one_move, knight_table().is_adjacent(sq, dst));
        }
    }
}

#[test]
fn random_pairs_stay_within_diameter() {
    let mut rng = StdRng::seed_from_u64(0x6b6e_6967);
    for _ in 0..2_000 {
        let s = rng.random_range(0..64i64);
        let d = rng.random_range(0..64i64);
        let moves = knight_distance(s, d).unwrap();
        assert!((0..=DIAMETER).contains(&moves), "{s} -> {d} took {moves}");
    }
}

#[test]
fn diameter_is_reached() {
    let max = Square::all()
        .map(|sq| eccentricity(knight_table(), sq))
        .max()
        .unwrap();
    assert_eq!(max as i32, DIAMETER);
}

#[test]
fn routes_are_legal_and_shortest() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let s = rng.random_range(0..64i64);
        let d = rng.random_range(0..64i64);
        let route = knight_route(s, d).unwrap().unwrap();
        let moves = knight_distance(s, d).unwrap();

        assert_eq!(route.len() as i32, moves + 1);
        assert_eq!(route.first().unwrap().index() as i64, s);
        assert_eq!(route.last().unwrap().index() as i64, d);
        for hop in route.windows(2) {
            assert!(knight_table().is_adjacent(hop[0], hop[1]));
        }
    }
}

#[test]
fn distance_map_agrees_with_pairwise_search() {
    let table = knight_table();
    for src in Square::all() {
        let dist = distances_from(table, src);
        for dst in Square::all() {
            assert_eq!(dist[dst.index()], shortest_moves(table, src, dst));
        }
    }
}

#[test]
fn unreachable_destination_yields_no_route() {
    let a = Square::new(0).unwrap();
    let b = Square::new(10).unwrap();
    let c = Square::new(63).unwrap();
    let table = AdjacencyTable::empty().with_edge(a, b);

    assert_eq!(shortest_moves(&table, a, b), Some(1));
    assert_eq!(shortest_moves(&table, a, c), None);
    assert_eq!(shortest_route(&table, c, a), None);

    assert_eq!(distance_on(&table, a, b), 1);
    assert_eq!(distance_on(&table, a, c), NO_ROUTE);
    assert_eq!(distance_on(&table, c, b), NO_ROUTE);
}

#[test]
fn knight_distance_matches_search_on_the_shared_table() {
    for (s, d) in [(19i64, 36i64), (0, 63), (0, 9)] {
        let src = Square::try_from(s).unwrap();
        let dst = Square::try_from(d).unwrap();
        assert_eq!(knight_distance(s, d).unwrap(), distance_on(knight_table(), src, dst));
    }
}

#[test]
fn off_board_indices_are_rejected() {
    assert_eq!(
        knight_distance(64, 0),
        Err(PuzzleError::SquareOutOfRange { value: 64 })
    );
    assert_eq!(
        knight_distance(0, -3),
        Err(PuzzleError::SquareOutOfRange { value: -3 })
    );
    assert!(knight_route(0, 1_000).is_err());
}
