//! Property-based tests using proptest.

use crate::board::{Bitboard, Position, Setup};
use crate::zobrist::ZobristKeys;
use once_cell::sync::Lazy;
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

/// A second key set built apart from the shared one.
static FRESH_KEYS: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Strategy to generate a random game length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=24usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play random moves from the start, stopping early if the game ends.
/// Returns every position reached, each in its mover's frame; white is to
/// move at even indices.
fn random_game(seed: u64, num_moves: usize) -> Vec<Position> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos = Position::START;
    let mut seen = vec![pos];

    for _ in 0..num_moves {
        if pos.is_lost() {
            break;
        }
        let moves = pos.generate_moves();
        if moves.is_empty() {
            break;
        }
        let idx = rng.gen_range(0..moves.len());
        pos = moves[idx].position.flip();
        seen.push(pos);
    }
    seen
}

proptest! {
    /// Property: flipping twice gives back the same position
    #[test]
    fn prop_flip_is_involution(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let positions = random_game(seed, num_moves);
        for pos in positions {
            prop_assert_eq!(pos.flip().flip(), pos);
            prop_assert_eq!(pos.mirror_files().mirror_files(), pos);
        }
    }

    /// Property: every generated child is a valid position with one pawn
    /// moved and at most one pawn captured
    #[test]
    fn prop_children_are_valid(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let positions = random_game(seed, num_moves);
        for pos in positions {
            let mine = pos.my_pawns.popcount();
            let theirs = pos.their_pawns.popcount();
            for child in pos.generate_moves().iter() {
                let next = child.position.flip();
                prop_assert!(
                    Position::try_new(next.my_pawns, next.their_pawns, next.en_passant).is_ok(),
                    "invalid child {:?}", next
                );
                prop_assert_eq!(child.position.my_pawns.popcount(), mine);
                let expected = if child.is_capture { theirs - 1 } else { theirs };
                prop_assert_eq!(child.position.their_pawns.popcount(), expected);
            }
        }
    }

    /// Property: only a double advance leaves an en passant square behind
    #[test]
    fn prop_en_passant_only_after_double_advance(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let positions = random_game(seed, num_moves);
        for pos in positions {
            for child in pos.generate_moves().iter() {
                let double = child.mv.to.0 == child.mv.from.0 + 16;
                prop_assert_eq!(child.position.en_passant.is_some(), double);
            }
        }
    }

    /// Property: FEN round-trip preserves position and side to move
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let positions = random_game(seed, num_moves);
        let home_ranks = Bitboard::RANK_1.or(Bitboard::RANK_8);
        for (ply, &position) in positions.iter().enumerate() {
            // A pawn that reached the last rank cannot be written as FEN.
            if position.occupied().intersects(home_ranks) {
                continue;
            }
            let setup = Setup { position, white_to_move: ply % 2 == 0 };
            let parsed: Setup = setup.to_fen().parse().unwrap();
            prop_assert_eq!(parsed, setup);
        }
    }

    /// Property: independently built key sets hash every position alike
    #[test]
    fn prop_hash_consistency(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let shared = ZobristKeys::shared();
        for pos in random_game(seed, num_moves) {
            prop_assert_eq!(shared.hash(&pos), FRESH_KEYS.hash(&pos));
        }
    }

    /// Property: exchanging the a and h files does not change the game tree
    #[test]
    fn prop_mirror_preserves_perft(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let positions = random_game(seed, num_moves);
        let last = *positions.last().unwrap();
        prop_assert_eq!(last.perft(2), last.mirror_files().perft(2));
    }
}
