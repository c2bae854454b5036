//! Every driver against its sample input, pinning the known answers.

use stride_demos::{basins, burrow, chiton, input, octopus, reactor, trench};

fn data(name: &str) -> String {
    let path = format!("{}/data/{name}", env!("CARGO_MANIFEST_DIR"));
    input::read_to_string(&path).unwrap()
}

#[test]
fn chiton_sample_answers() {
    let grid = chiton::parse(&data("chiton.txt")).unwrap();
    assert_eq!(chiton::lowest_total_risk(&grid), Some(40));
    let full = chiton::expand(&grid, 5);
    assert_eq!(chiton::lowest_total_risk(&full), Some(315));
}

#[test]
fn basins_sample_answers() {
    let grid = basins::parse(&data("basins.txt")).unwrap();
    assert_eq!(basins::risk_level_sum(&grid), 15);
    assert_eq!(basins::largest_basins_product(&grid), 1134);
}

#[test]
fn octopus_sample_answers() {
    let grid = octopus::parse(&data("octopus.txt")).unwrap();
    assert_eq!(octopus::flashes_after(grid.clone(), 100), 1656);
    assert_eq!(octopus::first_synchronized_step(grid), 195);
}

#[test]
fn trench_sample_answers() {
    let mut map = trench::TrenchMap::parse(&data("trench.txt")).unwrap();
    for _ in 0..2 {
        map.enhance();
    }
    assert_eq!(map.lit(), Some(35));
    for _ in 2..50 {
        map.enhance();
    }
    assert_eq!(map.lit(), Some(3351));
}

#[test]
fn burrow_sample_answer() {
    let (start, depth) = burrow::Burrow::parse(&data("burrow.txt")).unwrap();
    assert_eq!(depth, 2);
    assert_eq!(burrow::least_energy(&start, depth), Some(12521));
}

#[test]
fn burrow_sample_answer_unfolded() {
    let (start, _) = burrow::Burrow::parse(&data("burrow.txt")).unwrap();
    assert_eq!(burrow::least_energy(&start.unfold(), 4), Some(44169));
}

#[test]
fn reactor_small_sample_answer() {
    let steps: Vec<reactor::Step> = input::parse_records(&data("reactor_small.txt")).unwrap();
    assert_eq!(reactor::active_count(&steps, reactor::init_region()), 39);
}

#[test]
fn reactor_larger_sample_answer() {
    let steps: Vec<reactor::Step> =
        input::read_records(concat!(env!("CARGO_MANIFEST_DIR"), "/data/reactor.txt")).unwrap();
    assert_eq!(reactor::active_count(&steps, reactor::init_region()), 590784);
}
