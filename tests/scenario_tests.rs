use battleship_skills::scenario::{self, place_random_fleet};
use battleship_skills::{
    Board, BoardError, Orientation, ScenarioConfig, ScenarioError, ShapeError, ShapeKind,
    ShipPlacement, ShipType, FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const EXPECTED_BOARD: &str = "\
0 0 0 0 5 0 0 0 0 0
0 0 5 5 5 5 0 0 0 0
0 3 5 5 5 5 5 0 0 0
0 5 5 5 5 5 5 5 0 0
5 5 5 5 5 5 5 5 0 0
0 5 5 5 5 5 5 5 5 0
0 5 5 5 5 5 5 5 5 5
0 0 5 0 5 5 5 5 5 0
0 0 0 0 0 5 5 5 0 0
0 0 0 0 0 0 5 0 0 0
";

#[test]
fn test_default_scenario_board() {
    let report = scenario::run(&ScenarioConfig::default()).unwrap();
    assert_eq!(report.board.to_string(), EXPECTED_BOARD);
    assert_eq!(report.board.affected_map().count_ones(), 52);
    assert_eq!(report.ships.len(), 2);
    let kinds: Vec<_> = report.masks.iter().map(|m| m.kind()).collect();
    assert_eq!(kinds, ShapeKind::ALL.to_vec());
}

#[test]
fn test_scenario_even_size_rejected() {
    let config = ScenarioConfig {
        skill_size: 6,
        ..ScenarioConfig::default()
    };
    assert_eq!(
        scenario::run(&config).unwrap_err(),
        ScenarioError::Shape(ShapeError::EvenSize { size: 6 })
    );
}

#[test]
fn test_scenario_without_ships() {
    let mut config = ScenarioConfig::default();
    config.fleet.clear();
    let report = scenario::run(&config).unwrap();
    assert!(report.board.ship_map().is_empty());
    assert_eq!(report.board.get(2, 1).unwrap().value(), 0);
}

#[test]
fn test_run_fleet_out_of_bounds() {
    let mut fleet = FLEET;
    fleet[1].col = 8;
    fleet[1].orientation = Orientation::Horizontal;
    let err = scenario::run_fleet(&fleet).unwrap_err();
    assert_eq!(err, ScenarioError::Board(BoardError::ShipOutOfBounds));
}

#[test]
fn test_run_fleet_overlap() {
    let fleet = [
        FLEET[0],
        ShipPlacement::new(ShipType::new("Submarine", 3), Orientation::Vertical, 1, 2),
    ];
    let err = scenario::run_fleet(&fleet).unwrap_err();
    assert_eq!(err.to_string(), "Ship placement overlaps with another ship");
}

#[test]
fn test_run_fleet_only_ships() {
    let report = scenario::run_fleet(&FLEET).unwrap();
    assert_eq!(report.board.ship_map().count_ones(), 6);
    assert!(report.board.affected_map().is_empty());
    assert!(report.masks.is_empty());
}

#[test]
fn test_random_fleet_reproducible() {
    let place = |seed| {
        let mut board = Board::new();
        let mut rng = SmallRng::seed_from_u64(seed);
        let ships = place_random_fleet(&mut board, &mut rng, &FLEET).unwrap();
        let origins: Vec<_> = ships.iter().map(|s| (s.origin(), s.orientation())).collect();
        (board, origins)
    };
    let (a, oa) = place(12345);
    let (b, ob) = place(12345);
    assert_eq!(a, b);
    assert_eq!(oa, ob);
    assert_eq!(a.ship_map().count_ones(), 6);
}

#[test]
fn test_report_json() {
    let report = scenario::run(&ScenarioConfig::default()).unwrap();
    let json = report.to_json();
    assert_eq!(json["board"][0][4], 5);
    assert_eq!(json["board"][2][1], 3);
    assert_eq!(json["board"].as_array().unwrap().len(), 10);
    assert_eq!(json["masks"]["cross"][3], serde_json::json!([1, 1, 1, 1, 1, 1, 1]));
    assert_eq!(json["ships"][1]["orientation"], "Vertical");
    assert_eq!(json["ships"][0]["origin"], serde_json::json!([2, 1]));
}
