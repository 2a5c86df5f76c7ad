//! Fixed bank of fill-in-the-blank passage templates, keyed by difficulty.

use rand::Rng;

use crate::types::Level;

/// Marker substituted into the `{word}` slot of a template.
pub const BLANK: &str = "_____";

const BEGINNER: [&str; 5] = [
    "The student's work was {word}, showing clear understanding of the subject matter.",
    "Her {word} approach to the problem impressed everyone in the room.",
    "The results of the experiment were {word} and left no room for doubt.",
    "His {word} nature made him well-liked among his colleagues.",
    "The presentation was {word}, capturing the audience's attention throughout.",
];

const INTERMEDIATE: [&str; 5] = [
    "The committee's decision to {word} the new policy changes was met with approval.",
    "Her {word} personality traits became evident during the team-building exercises.",
    "The researcher's {word} about climate change was supported by extensive data.",
    "The architect's {word} design solution addressed all the structural challenges.",
    "The author chose to {word} different themes throughout the narrative.",
];

const ADVANCED: [&str; 5] = [
    "The politician's {word} behavior during the scandal damaged his reputation.",
    "The {word} melody of the funeral march conveyed the solemnity of the occasion.",
    "She demonstrated {word} leadership by supporting her defeated rival.",
    "The detective uncovered the criminal's {word} scheme to defraud investors.",
    "His {word} lifestyle attracted criticism from more modest community members.",
];

const EXPERT: [&str; 5] = [
    "The critic's {word} analysis revealed subtle flaws in the artist's technique.",
    "His {word} crusade to reform the education system faced practical obstacles.",
    "The professor's {word} theories were difficult for undergraduate students to comprehend.",
    "The employee's {word} flattery toward management was transparent to colleagues.",
    "The witness's {word} testimony complicated the prosecutor's case.",
];

fn bank_for(level: Level) -> &'static [&'static str] {
    match level {
        Level::Beginner => &BEGINNER,
        Level::Intermediate => &INTERMEDIATE,
        Level::Advanced => &ADVANCED,
        Level::Expert => &EXPERT,
    }
}

/// Pick a passage for `level` uniformly at random, with the word slot
/// replaced by [`BLANK`].
pub fn passage_for<R: Rng + ?Sized>(rng: &mut R, level: Level) -> String {
    let bank = bank_for(level);
    let template = bank[rng.gen_range(0..bank.len())];
    template.replace("{word}", BLANK)
}
