//! # Session Delegation Tests
//!
//! An owner hands a disposable session key to a relay with `resetGame`, the
//! relay plays with it, and the next `resetGame` revokes it.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{node, place_l_shape, submit, Player};
    use g48_01_board_engine::Direction;
    use g48_02_player_state::{
        inclusion_proof, state_root, verify_inclusion, Action, GameApi, GameError, GameEvent,
        PlayerRecord,
    };
    use shared_types::GameCall;

    #[test]
    fn test_relay_plays_with_session_key() {
        let node = node();
        let (alice, relay) = (Player::new(1), Player::new(2));

        submit(&node, &alice, GameCall::ResetGame { delegate: relay.id() }).unwrap();
        place_l_shape(&node, &relay).unwrap();
        submit(&node, &relay, GameCall::MoveUp).unwrap();

        let api = node.controller();
        assert_eq!(api.session_key(&alice.id()).unwrap(), relay.id());
        assert_eq!(
            api.board(&alice.id()).unwrap().to_grid(),
            [[2, 1, 1, 1], [2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]
        );
        // the relay never gets a record of its own
        assert_eq!(
            api.record(&relay.id()).unwrap(),
            PlayerRecord::fresh(relay.id())
        );
    }

    #[test]
    fn test_reset_revokes_previous_session() {
        let node = node();
        let (alice, old, new) = (Player::new(1), Player::new(2), Player::new(3));

        submit(&node, &alice, GameCall::ResetGame { delegate: old.id() }).unwrap();
        submit(&node, &old, GameCall::AddTile { row: 0, col: 0 }).unwrap();
        submit(&node, &alice, GameCall::ResetGame { delegate: new.id() }).unwrap();

        // the old key now only reaches its own fresh record
        let event = submit(&node, &old, GameCall::AddTile { row: 2, col: 2 }).unwrap();
        assert_eq!(event.owner(), old.id());

        let api = node.controller();
        assert_eq!(api.board(&alice.id()).unwrap().raw(), 0);
        assert_eq!(api.game_count(&alice.id()).unwrap(), 2);

        // and explicit access to alice's record is refused
        let direct = api.execute(alice.id(), old.id(), Action::Move(Direction::Up));
        assert_eq!(
            direct,
            Err(GameError::Unauthorized {
                caller: old.id(),
                owner: alice.id()
            })
        );

        submit(&node, &new, GameCall::AddTile { row: 3, col: 3 }).unwrap();
        assert_eq!(api.board(&alice.id()).unwrap().cell(3, 3), 1);
    }

    #[test]
    fn test_revoked_key_write_lands_on_its_own_record() {
        let node = node();
        let (alice, old, new) = (Player::new(1), Player::new(2), Player::new(3));

        submit(&node, &alice, GameCall::ResetGame { delegate: old.id() }).unwrap();
        submit(&node, &alice, GameCall::ResetGame { delegate: new.id() }).unwrap();
        let api = node.controller();
        let alice_before = api.record(&alice.id()).unwrap();
        let root_before = api.state_root().unwrap();

        // accepted, not rejected: the signed surface resolves to old's own record
        let event = submit(&node, &old, GameCall::MoveLeft).unwrap();
        assert_eq!(event.owner(), old.id());

        assert_eq!(api.record(&alice.id()).unwrap(), alice_before);
        assert_eq!(api.snapshot().unwrap().len(), 2);
        assert_ne!(api.state_root().unwrap(), root_before);
    }

    #[test]
    fn test_session_key_can_start_next_game() {
        let node = node();
        let (alice, relay) = (Player::new(1), Player::new(2));

        submit(&node, &alice, GameCall::ResetGame { delegate: relay.id() }).unwrap();
        place_l_shape(&node, &relay).unwrap();
        submit(&node, &relay, GameCall::MoveUp).unwrap();
        submit(&node, &relay, GameCall::MoveUp).unwrap();

        let event = submit(&node, &relay, GameCall::ResetGame { delegate: relay.id() }).unwrap();
        assert_eq!(
            event,
            GameEvent::GameReset {
                owner: alice.id(),
                previous_session: relay.id(),
                session: relay.id(),
                game_count: 2,
                max_score: 16,
            }
        );
    }

    #[test]
    fn test_players_are_independent() {
        let node = node();
        let (alice, bob) = (Player::new(1), Player::new(4));

        submit(&node, &alice, GameCall::ResetGame { delegate: alice.id() }).unwrap();
        submit(&node, &bob, GameCall::ResetGame { delegate: bob.id() }).unwrap();
        submit(&node, &alice, GameCall::AddTile { row: 0, col: 0 }).unwrap();
        submit(&node, &bob, GameCall::AddTile { row: 3, col: 3 }).unwrap();
        submit(&node, &bob, GameCall::MoveUp).unwrap();

        let api = node.controller();
        assert_eq!(api.board(&alice.id()).unwrap().cell(0, 0), 1);
        assert_eq!(api.board(&alice.id()).unwrap().cell(0, 3), 0);
        assert_eq!(api.board(&bob.id()).unwrap().cell(0, 3), 1);
    }

    #[test]
    fn test_every_record_proves_into_state_root() {
        let node = node();
        let players: Vec<_> = (1..=5u8).map(Player::new).collect();
        for (i, p) in players.iter().enumerate() {
            submit(&node, p, GameCall::ResetGame { delegate: p.id() }).unwrap();
            submit(&node, p, GameCall::AddTile { row: (i % 4) as i64, col: 2 }).unwrap();
        }

        let records = node.controller().snapshot().unwrap();
        let root = node.controller().state_root().unwrap();
        assert_eq!(root, state_root(&records));

        for record in &records {
            let proof = inclusion_proof(&records, &record.owner_key).unwrap();
            assert!(verify_inclusion(&record.commitment(), &proof, &root));
        }
    }
}
