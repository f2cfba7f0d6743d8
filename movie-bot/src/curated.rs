//! The fixed list of titles `/movie` recommends from.

use rand::Rng;

pub const CURATED_TITLES: [&str; 25] = [
    "The Shawshank Redemption",
    "The Godfather",
    "The Dark Knight",
    "12 Angry Men",
    "Schindler's List",
    "The Lord of the Rings: The Return of the King",
    "Pulp Fiction",
    "Fight Club",
    "Forrest Gump",
    "Inception",
    "The Matrix",
    "Goodfellas",
    "Se7en",
    "City of God",
    "The Silence of the Lambs",
    "Spirited Away",
    "Saving Private Ryan",
    "Interstellar",
    "Parasite",
    "The Green Mile",
    "Gladiator",
    "The Departed",
    "Whiplash",
    "The Prestige",
    "The Lion King",
];

/// Picks one curated title uniformly at random.
pub fn pick_title<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    CURATED_TITLES[rng.random_range(0..CURATED_TITLES.len())]
}
