//! Letter dice and rolling.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Faces of the twelve dice in play.
pub const DICE_FACES: [&str; 12] = [
    "MMLLBY", "VFGKPP", "HHNNRR", "DFRLLW", "RRDLGG", "XKBSZN", "WHHTTP", "CCBTJD", "CCMTTS",
    "OIINNY", "AEIOUU", "AAEEOO",
];

/// One rolled die: its set id and the face that came up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    pub id: usize,
    pub letter: char,
}

/// Roll every die once and shuffle the resulting tray order.
pub fn roll_dice<R: Rng + ?Sized>(rng: &mut R) -> Vec<Die> {
    let mut dice: Vec<Die> = DICE_FACES
        .iter()
        .enumerate()
        .map(|(id, faces)| {
            let faces = faces.as_bytes();
            Die {
                id,
                letter: char::from(faces[rng.gen_range(0..faces.len())]),
            }
        })
        .collect();
    dice.shuffle(rng);
    dice
}

/// Dice with fixed letters, ids assigned in order. Used for scripted rounds.
pub fn dice_from_letters(letters: &str) -> Vec<Die> {
    letters
        .chars()
        .filter(|ch| ch.is_ascii_alphabetic())
        .enumerate()
        .map(|(id, letter)| Die {
            id,
            letter: letter.to_ascii_uppercase(),
        })
        .collect()
}
