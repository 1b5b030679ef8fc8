mod sentence;

#[cfg(test)]
mod tests {
    use crate::{Board, Game, KnowledgeEngine, MoveKind, Outcome};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn no_mines_is_won_without_moves() {
        // Every mine (there are none) is already flagged.
        let board: Board = "
            _ _ _ _
            _ _ _ _
            _ _ _ _
        "
        .parse()
        .unwrap();
        let mut game = Game::new(board, ChaCha8Rng::seed_from_u64(0));
        assert_eq!(game.outcome(), Some(Outcome::Won));
        assert_eq!(game.step().unwrap(), None);
        assert!(game.engine().moves_made().is_empty());
    }

    #[test]
    fn open_board_is_won_by_play() {
        let mut won = 0;
        for seed in 0..10 {
            let board: Board = "
                _ _ _ _ _
                _ _ _ _ _
                _ _ _ _ _
                _ _ _ _ *
            "
            .parse()
            .unwrap();
            let mut game = Game::new(board, ChaCha8Rng::seed_from_u64(seed)).with_verification(true);
            let outcome = game.play().unwrap();
            if outcome == Outcome::Lost((3, 4)) {
                continue;
            }

            assert_eq!(outcome, Outcome::Won);
            let board = game.board();
            let engine = game.engine();
            assert!(board.won(engine.mines()) || board.is_cleared(engine.moves_made()));
            assert!(!engine.moves_made().is_empty());
            won += 1;
        }
        assert!(won > 0);
    }

    #[test]
    fn nothing_to_reveal_is_won() {
        assert_eq!(do_test("*", 0), Outcome::Won);
    }

    #[test]
    fn mine_next_to_clear_cell() {
        let outcomes: Vec<Outcome> = (0..32).map(|seed| do_test("* _", seed)).collect();
        for outcome in outcomes.iter() {
            assert!(
                *outcome == Outcome::Won || *outcome == Outcome::Lost((0, 0)),
                "unexpected outcome {:?}",
                outcome
            );
        }
        // The first move is a coin flip.
        assert!(outcomes.contains(&Outcome::Won));
        assert!(outcomes.contains(&Outcome::Lost((0, 0))));
    }

    #[test]
    fn corridor_walk_flags_the_mine() {
        // Walking the corridor from the left pins down the mine at its end.
        let board: Board = "_ _ _ _ *".parse().unwrap();
        let mut engine = KnowledgeEngine::new(board.height(), board.width());
        engine.observe((0, 0), board.nearby_mines((0, 0))).unwrap();
        engine.observe((0, 1), board.nearby_mines((0, 1))).unwrap();
        engine.observe((0, 2), board.nearby_mines((0, 2))).unwrap();
        engine.observe((0, 3), board.nearby_mines((0, 3))).unwrap();
        assert!(board.won(engine.mines()));
    }

    #[test]
    fn deductions_are_sound() {
        for seed in 0..10 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let board = Board::generate(8, 8, 8, &mut rng).unwrap();
            let mut game = Game::new(board, rng).with_verification(true);
            let outcome = game.play().unwrap();

            let board = game.board();
            let engine = game.engine();
            assert!(engine.mines().iter().all(|cell| board.is_mine(*cell)));
            assert!(engine.safes().iter().all(|cell| !board.is_mine(*cell)));
            if outcome == Outcome::Won {
                assert!(board.won(engine.mines()) || board.is_cleared(engine.moves_made()));
            }
        }
    }

    #[test]
    fn safe_moves_are_preferred() {
        let board: Board = "
            _ _ _
            _ _ _
            _ _ *
        "
        .parse()
        .unwrap();
        let mut game = Game::new(board, ChaCha8Rng::seed_from_u64(7));

        let mut guessed = false;
        while let Some(turn) = game.step().unwrap() {
            if turn.kind == MoveKind::Random {
                guessed = true;
            } else {
                assert!(!game.board().is_mine(turn.cell));
            }
        }
        assert!(guessed, "the first move is always a guess");
        assert!(game.outcome().is_some());
    }

    fn do_test(raw_board: &str, seed: u64) -> Outcome {
        let board: Board = raw_board.parse().unwrap();
        let mut game = Game::new(board, ChaCha8Rng::seed_from_u64(seed)).with_verification(true);
        game.play().unwrap()
    }
}
