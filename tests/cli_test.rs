#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use battleship::cli::{coord_to_string, parse_coord, parse_placement, run_local, InputError};
    use battleship::{Coordinate, GameEngine, Orientation, Phase, PlayerId};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("A1"), Ok(Coordinate::new(0, 0)));
        assert_eq!(parse_coord("j10"), Ok(Coordinate::new(9, 9)));
        assert_eq!(parse_coord(" c4 "), Ok(Coordinate::new(3, 2)));
        assert_eq!(parse_coord(""), Err(InputError::Empty));
        assert_eq!(parse_coord("A"), Err(InputError::TooShort));
        assert_eq!(parse_coord("K1"), Err(InputError::ColumnOutOfRange('K')));
        assert_eq!(parse_coord("11"), Err(InputError::InvalidColumn('1')));
        assert_eq!(parse_coord("A0"), Err(InputError::RowOutOfRange(0)));
        assert_eq!(parse_coord("A11"), Err(InputError::RowOutOfRange(11)));
        assert_eq!(parse_coord("Ax"), Err(InputError::InvalidRow("x".to_string())));
    }

    #[test]
    fn test_parse_placement() {
        assert_eq!(
            parse_placement("B3 V"),
            Ok((Coordinate::new(2, 1), Orientation::Vertical))
        );
        assert_eq!(
            parse_placement("a5"),
            Ok((Coordinate::new(4, 0), Orientation::Horizontal))
        );
        assert_eq!(
            parse_placement("A5 X"),
            Err(InputError::InvalidOrientation("X".to_string()))
        );
    }

    #[test]
    fn test_coord_to_string() {
        assert_eq!(coord_to_string(Coordinate::new(4, 0)), "A5");
        assert_eq!(coord_to_string(Coordinate::new(9, 9)), "J10");
    }

    /// Both players place at random, then sweep the board row by row.
    fn scripted_game() -> String {
        let mut script = String::new();
        for _ in 0..10 {
            script.push('\n');
        }
        for row in 1..=10 {
            for col in b'A'..=b'J' {
                let cell = format!("{}{}\n", col as char, row);
                script.push_str(&cell);
                script.push_str(&cell);
            }
        }
        script
    }

    #[test]
    fn test_scripted_hot_seat_game() {
        let mut rng = SmallRng::seed_from_u64(12345);
        let mut engine = GameEngine::new();
        let mut input = Cursor::new(scripted_game());
        let mut out = Vec::new();

        let winner = run_local(&mut engine, &mut rng, &mut input, &mut out).unwrap();
        assert!(winner.is_some());
        assert_eq!(engine.current_phase(), Phase::Finished);
        assert_eq!(engine.winner(), winner);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("BATTLE BEGINS"));
        assert!(text.contains("wins!"));
    }

    #[test]
    fn test_bad_input_reprompts_then_quit() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut engine = GameEngine::new();
        let mut input = Cursor::new("Z9 H\nH8 H\nhelp\nauto\nquit\n");
        let mut out = Vec::new();

        let winner = run_local(&mut engine, &mut rng, &mut input, &mut out).unwrap();
        assert_eq!(winner, None);
        // Player 1 finished placing with `auto`, Player 2 is up.
        assert_eq!(engine.active_player(), PlayerId::Player2);
        assert!(engine.state().player(PlayerId::Player1).placement_complete());

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("out of bounds"));
        assert!(text.contains("does not fit"));
        assert!(text.contains("Game abandoned."));
    }

    #[test]
    fn test_reset_command() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut engine = GameEngine::new();
        let mut input = Cursor::new("auto\nreset\nquit\n");
        let mut out = Vec::new();

        run_local(&mut engine, &mut rng, &mut input, &mut out).unwrap();
        assert_eq!(engine.state(), battleship::GameState::new());
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut engine = GameEngine::new();
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        assert!(run_local(&mut engine, &mut rng, &mut input, &mut out).is_err());
    }
}
