use pmcts_connect_four::{
    policy::simulation::{heuristic_playout, random_playout},
    utils::random_element,
    ConnectFourState, PlaythroughMode, PmctsError, Player,
};
use rand::{rngs::StdRng, SeedableRng};

fn disc_count(state: &ConnectFourState) -> usize {
    state.cells().iter().filter(|cell| cell.is_some()).count()
}

#[test]
fn test_random_playout_reaches_terminal_state() {
    let start = ConnectFourState::from_moves(&[3, 3]).unwrap();

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let end = random_playout(&start, &mut rng).unwrap();

        assert!(end.is_over());
        assert!(end.is_won() != end.is_draw(), "a terminal state is either won or drawn");
        assert!(disc_count(&end) > disc_count(&start));
        // Start discs are kept
        assert_eq!(end.cell(5, 3), Some(Player::X));
        assert_eq!(end.cell(4, 3), Some(Player::O));
    }

    // The start state is a value; playouts work on copies
    assert_eq!(disc_count(&start), 2);
}

#[test]
fn test_playout_of_terminal_state_is_identity() {
    let won = ConnectFourState::from_moves(&[3, 4, 3, 4, 3, 4, 3]).unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    assert_eq!(random_playout(&won, &mut rng).unwrap(), won);
    assert_eq!(heuristic_playout(&won, &mut rng).unwrap(), won);
}

#[test]
fn test_heuristic_takes_immediate_win() {
    // X to move with three in column 3 (O also has three in column 4)
    let start = ConnectFourState::from_moves(&[3, 4, 3, 4, 3, 4]).unwrap();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let end = heuristic_playout(&start, &mut rng).unwrap();

        assert_eq!(end.first_winner(), Some(Player::X));
        assert_eq!(disc_count(&end), 7, "the win should be taken on the first move");
        assert_eq!(end.cell(2, 3), Some(Player::X));
    }
}

#[test]
fn test_heuristic_blocks_opponent_threat() {
    // O to move, X threatens to complete column 3, O has no win of its own
    let start = ConnectFourState::from_moves(&[3, 4, 3, 4, 3]).unwrap();
    assert!(start.potential_wins(Player::O).is_empty());

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let end = heuristic_playout(&start, &mut rng).unwrap();

        assert!(end.is_over());
        assert_eq!(end.cell(2, 3), Some(Player::O), "O should block column 3 first");
    }
}

#[test]
fn test_mode_dispatch_matches_policy_functions() {
    let start = ConnectFourState::from_moves(&[2, 4]).unwrap();

    let expected = random_playout(&start, &mut StdRng::seed_from_u64(11)).unwrap();
    let actual = PlaythroughMode::Random
        .playout(&start, &mut StdRng::seed_from_u64(11))
        .unwrap();
    assert_eq!(actual, expected);
    assert_eq!(actual.cells(), expected.cells());

    let expected = heuristic_playout(&start, &mut StdRng::seed_from_u64(12)).unwrap();
    let actual = PlaythroughMode::Heuristic
        .playout(&start, &mut StdRng::seed_from_u64(12))
        .unwrap();
    assert_eq!(actual.cells(), expected.cells());
}

#[test]
fn test_random_element_rejects_empty_input() {
    let mut rng = StdRng::seed_from_u64(0);
    let empty: [usize; 0] = [];

    assert!(matches!(random_element(&empty, &mut rng), Err(PmctsError::EmptyChoice)));
    assert_eq!(random_element(&[5usize], &mut rng).unwrap(), 5);
}
