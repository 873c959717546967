use rand::Rng;

use crate::SessionId;

const ADJECTIVES: &[&str] = &[
    "swift", "brave", "clever", "mighty", "silent", "golden", "wild", "noble",
    "fierce", "gentle", "quick", "wise", "bold", "proud", "cunning", "sly",
];

const NOUNS: &[&str] = &[
    "viper", "adder", "cobra", "python", "mamba", "boa", "krait", "taipan",
    "asp", "racer", "ribbon", "garter", "kingsnake", "sidewinder", "moccasin", "coral",
];

pub fn generate_session_id() -> SessionId {
    let mut rng = rand::rng();
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    let suffix: u16 = rng.random_range(0..10000);
    SessionId::new(format!("{}-{}-{:04}", adjective, noun, suffix))
}
