//! Standard Boggle dice for rolling random boards.
//!
//! Each die is a string of its six faces. Boards with more than sixteen cells
//! reuse whole sets of dice so letter frequencies stay the same as in the
//! real game.

use rand::seq::SliceRandom;
use rand::Rng;

/// The sixteen dice of a standard Boggle set.
pub const STANDARD_DICE: [&str; 16] = [
    "RYTTEL", "VTHRWE", "EGHWNE", "SEOTIS", "ANAEEG", "IDSYTT", "OATTOW", "MTOICU",
    "AFPKFS", "XLDERI", "HCPOAS", "ENSIEU", "YLDEVR", "ZNRNHL", "NMIQHU", "OBBAOJ",
];

/// Picks one face of a die.
fn roll_die<R: Rng + ?Sized>(die: &str, rng: &mut R) -> char {
    let faces = die.as_bytes();
    char::from(faces[rng.gen_range(0..faces.len())])
}

/// Rolls `num_dice` letters.
///
/// At the start of every full set the base dice are shuffled into a new
/// order and each one is rolled; die `k` then shows the face of base die
/// `k % 16`.
pub fn roll<R: Rng + ?Sized>(num_dice: usize, rng: &mut R) -> Vec<char> {
    let mut base_set = STANDARD_DICE;
    let mut faces = [' '; STANDARD_DICE.len()];
    let mut letters = Vec::with_capacity(num_dice);

    for count in 0..num_dice {
        let slot = count % base_set.len();
        if slot == 0 {
            base_set.shuffle(rng);
            for (face, die) in faces.iter_mut().zip(&base_set) {
                *face = roll_die(die, rng);
            }
        }
        letters.push(faces[slot]);
    }

    letters
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_roll_count_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in [0, 1, 16, 25, 64] {
            let letters = roll(count, &mut rng);
            assert_eq!(letters.len(), count);
            assert!(letters.iter().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_full_set_uses_each_die_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let letters = roll(16, &mut rng);

        // match every rolled letter to a distinct die that carries it
        let mut used = [false; 16];
        assert!(
            assign(&letters, &mut used),
            "No die assignment explains {letters:?}"
        );
    }

    fn assign(letters: &[char], used: &mut [bool; 16]) -> bool {
        let Some((&letter, rest)) = letters.split_first() else {
            return true;
        };
        for (i, die) in STANDARD_DICE.iter().enumerate() {
            if !used[i] && die.contains(letter) {
                used[i] = true;
                if assign(rest, used) {
                    return true;
                }
                used[i] = false;
            }
        }
        false
    }

    #[test]
    fn test_seeded_rolls_repeat() {
        let first = roll(25, &mut StdRng::seed_from_u64(1234));
        let second = roll(25, &mut StdRng::seed_from_u64(1234));
        assert_eq!(first, second);
    }
}
