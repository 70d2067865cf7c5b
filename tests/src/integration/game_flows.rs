//! # Game Flow Tests
//!
//! The board scenarios driven through signed calls, one owner acting with
//! its own key.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{node, place_l_shape, submit, Player};
    use g48_01_board_engine::{Grid, PackedBoard};
    use g48_02_player_state::{GameApi, GameEvent, PlayerRecord};
    use shared_types::GameCall;

    fn board_after(moves: &[GameCall]) -> Grid {
        let node = node();
        let alice = Player::new(1);
        submit(&node, &alice, GameCall::ResetGame { delegate: alice.id() }).unwrap();
        place_l_shape(&node, &alice).unwrap();
        for call in moves {
            submit(&node, &alice, *call).unwrap();
        }
        node.controller().board(&alice.id()).unwrap().to_grid()
    }

    // =========================================================================
    // SCENARIOS
    // =========================================================================

    #[test]
    fn test_l_shape_opening() {
        assert_eq!(
            board_after(&[]),
            [[1, 1, 1, 1], [1, 0, 0, 0], [1, 0, 0, 0], [1, 0, 0, 0]]
        );
    }

    #[test]
    fn test_move_up() {
        assert_eq!(
            board_after(&[GameCall::MoveUp]),
            [[2, 1, 1, 1], [2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]
        );
    }

    #[test]
    fn test_move_up_twice() {
        assert_eq!(
            board_after(&[GameCall::MoveUp, GameCall::MoveUp]),
            [[3, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]
        );
    }

    #[test]
    fn test_move_left() {
        assert_eq!(
            board_after(&[GameCall::MoveLeft]),
            [[2, 2, 0, 0], [1, 0, 0, 0], [1, 0, 0, 0], [1, 0, 0, 0]]
        );
    }

    #[test]
    fn test_move_right_twice() {
        assert_eq!(
            board_after(&[GameCall::MoveRight, GameCall::MoveRight]),
            [[0, 0, 0, 3], [0, 0, 0, 1], [0, 0, 0, 1], [0, 0, 0, 1]]
        );
    }

    #[test]
    fn test_move_down() {
        assert_eq!(
            board_after(&[GameCall::MoveDown]),
            [[0, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0], [2, 1, 1, 1]]
        );
    }

    #[test]
    fn test_reset_on_fresh_record() {
        let node = node();
        let alice = Player::new(1);
        submit(&node, &alice, GameCall::ResetGame { delegate: alice.id() }).unwrap();

        let record = node.controller().record(&alice.id()).unwrap();
        assert_eq!(record.board, PackedBoard::EMPTY);
        assert_eq!(record.game_count, 1);
        assert_eq!(record.session_key, alice.id());
    }

    // =========================================================================
    // ERROR PATHS
    // =========================================================================

    #[test]
    fn test_out_of_range_tile_leaves_record() {
        let node = node();
        let alice = Player::new(1);
        submit(&node, &alice, GameCall::ResetGame { delegate: alice.id() }).unwrap();
        place_l_shape(&node, &alice).unwrap();
        let before = node.controller().record(&alice.id()).unwrap();

        assert!(submit(&node, &alice, GameCall::AddTile { row: 0, col: 4 }).is_err());
        assert!(submit(&node, &alice, GameCall::AddTile { row: -1, col: 0 }).is_err());
        assert_eq!(node.controller().record(&alice.id()).unwrap(), before);
    }

    #[test]
    fn test_occupied_add_is_a_noop() {
        let node = node();
        let alice = Player::new(1);
        submit(&node, &alice, GameCall::AddTile { row: 1, col: 2 }).unwrap();
        submit(&node, &alice, GameCall::MoveLeft).unwrap();
        submit(&node, &alice, GameCall::AddTile { row: 1, col: 0 }).unwrap();
        let event = submit(&node, &alice, GameCall::AddTile { row: 1, col: 0 }).unwrap();
        assert!(matches!(event, GameEvent::TilePlaced { placed: false, .. }));
        assert_eq!(node.controller().board(&alice.id()).unwrap().cell(1, 0), 1);
    }

    // =========================================================================
    // COUNTERS
    // =========================================================================

    #[test]
    fn test_best_score_survives_resets() {
        let node = node();
        let alice = Player::new(1);
        submit(&node, &alice, GameCall::ResetGame { delegate: alice.id() }).unwrap();
        place_l_shape(&node, &alice).unwrap();
        submit(&node, &alice, GameCall::MoveUp).unwrap();
        submit(&node, &alice, GameCall::MoveUp).unwrap();
        let board = node.controller().board(&alice.id()).unwrap();

        let mut last = PlayerRecord::fresh(alice.id());
        for game in 2..=4u64 {
            submit(&node, &alice, GameCall::ResetGame { delegate: alice.id() }).unwrap();
            let record = node.controller().record(&alice.id()).unwrap();
            assert_eq!(record.game_count, game);
            assert_eq!(record.max_score, board.score());
            assert!(record.max_score >= last.max_score);
            last = record;
        }
    }
}
