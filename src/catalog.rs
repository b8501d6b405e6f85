use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// A cast member.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Actor {
    pub first_name: String,
    pub last_name: String,
}

impl Actor {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

/// A single movie record. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Movie {
    pub title: String,
    pub genre: String,
    pub summary: String,
    /// Opaque asset key for poster lookup; resolution is the caller's problem.
    pub poster: String,
    #[serde(default)]
    pub cast: Vec<Actor>,
}

/// Errors raised when loading a catalog from a file.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("malformed record at index {index}: missing or empty field `{field}`")]
    MalformedRecord { index: usize, field: &'static str },
}

/// The sorted movie collection backing the list screen.
///
/// Built once on screen entry and never mutated afterwards; the sort is
/// stable, so movies sharing a genre keep their source order.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Build a catalog from raw definitions, sorting ascending by genre.
    pub fn new(mut movies: Vec<Movie>) -> Self {
        movies.sort_by(|a, b| a.genre.cmp(&b.genre));
        Self { movies }
    }

    /// The fixed movie set the application ships with.
    pub fn builtin() -> Self {
        Self::new(builtin_movies())
    }

    /// Load a catalog from a JSON file (an array of movie definitions).
    ///
    /// The whole file is rejected on the first malformed record, reporting
    /// its index and the offending field.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse a JSON array of movie definitions.
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let movies: Vec<Movie> = serde_json::from_str(text)?;
        for (index, movie) in movies.iter().enumerate() {
            if let Some(field) = missing_field(movie) {
                return Err(CatalogError::MalformedRecord { index, field });
            }
        }
        Ok(Self::new(movies))
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }
}

fn missing_field(movie: &Movie) -> Option<&'static str> {
    if movie.title.is_empty() {
        return Some("title");
    }
    if movie.genre.is_empty() {
        return Some("genre");
    }
    if movie.summary.is_empty() {
        return Some("summary");
    }
    if movie.poster.is_empty() {
        return Some("poster");
    }
    for actor in &movie.cast {
        if actor.first_name.is_empty() {
            return Some("cast.first_name");
        }
        if actor.last_name.is_empty() {
            return Some("cast.last_name");
        }
    }
    None
}

fn movie(
    title: &str,
    genre: &str,
    summary: &str,
    poster: &str,
    cast: &[(&str, &str)],
) -> Movie {
    Movie {
        title: title.to_string(),
        genre: genre.to_string(),
        summary: summary.to_string(),
        poster: poster.to_string(),
        cast: cast.iter().map(|(f, l)| Actor::new(f, l)).collect(),
    }
}

fn builtin_movies() -> Vec<Movie> {
    vec![
        movie(
            "Mad Max: Fury Road",
            "action",
            "In a stark desert wasteland, Max joins the fugitive Furiosa to flee a \
             tyrant warlord in an armored war rig.",
            "mad_max_fury_road",
            &[
                ("Tom", "Hardy"),
                ("Charlize", "Theron"),
                ("Nicholas", "Hoult"),
            ],
        ),
        movie(
            "Jurassic World",
            "action",
            "A fully operational dinosaur theme park descends into chaos when its \
             newest genetically engineered attraction escapes containment.",
            "jurassic_world",
            &[
                ("Chris", "Pratt"),
                ("Bryce", "Dallas Howard"),
                ("Irrfan", "Khan"),
            ],
        ),
        movie(
            "Star Wars: The Force Awakens",
            "action",
            "Three decades after the Empire's fall, a scavenger and a defected \
             stormtrooper are swept into the Resistance's fight against the First Order.",
            "force_awakens",
            &[
                ("Daisy", "Ridley"),
                ("John", "Boyega"),
                ("Harrison", "Ford"),
            ],
        ),
        movie(
            "Minions",
            "animation",
            "Three minions set out to find a new villainous master and stumble into \
             the orbit of the supervillain Scarlet Overkill.",
            "minions",
            &[
                ("Sandra", "Bullock"),
                ("Jon", "Hamm"),
                ("Michael", "Keaton"),
            ],
        ),
        movie(
            "Inside Out",
            "animation",
            "The personified emotions inside a young girl's head struggle to guide \
             her through a cross-country move.",
            "inside_out",
            &[
                ("Amy", "Poehler"),
                ("Phyllis", "Smith"),
                ("Richard", "Kind"),
            ],
        ),
        movie(
            "Frozen",
            "animation",
            "A fearless princess sets off with an iceman and a talking snowman to \
             find her sister, whose icy powers have trapped their kingdom in winter.",
            "frozen",
            &[("Kristen", "Bell"), ("Idina", "Menzel"), ("Josh", "Gad")],
        ),
        movie(
            "Titanic",
            "drama",
            "A young aristocrat falls for a penniless artist aboard the doomed \
             maiden voyage of the RMS Titanic.",
            "titanic",
            &[
                ("Leonardo", "DiCaprio"),
                ("Kate", "Winslet"),
                ("Billy", "Zane"),
            ],
        ),
        movie(
            "Spotlight",
            "drama",
            "The Boston Globe's investigative team uncovers a decades-long cover-up \
             of abuse within the local archdiocese.",
            "spotlight",
            &[
                ("Mark", "Ruffalo"),
                ("Michael", "Keaton"),
                ("Rachel", "McAdams"),
            ],
        ),
        movie(
            "Room",
            "drama",
            "A mother raises her young son inside the single room where they are \
             held captive, then plots their escape into an overwhelming world.",
            "room",
            &[
                ("Brie", "Larson"),
                ("Jacob", "Tremblay"),
                ("Joan", "Allen"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bare(title: &str, genre: &str) -> Movie {
        movie(title, genre, "summary", "poster", &[])
    }

    #[test]
    fn test_builtin_has_nine_movies() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 9);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_catalog_sorted_ascending_by_genre() {
        let catalog = Catalog::builtin();
        let genres: Vec<&str> = catalog.movies().iter().map(|m| m.genre.as_str()).collect();
        let mut sorted = genres.clone();
        sorted.sort();
        assert_eq!(genres, sorted);
        assert_eq!(genres[0], "action");
        assert_eq!(genres[8], "drama");
    }

    #[test]
    fn test_sort_is_stable_for_equal_genres() {
        let catalog = Catalog::new(vec![
            bare("first drama", "drama"),
            bare("only action", "action"),
            bare("second drama", "drama"),
            bare("third drama", "drama"),
        ]);
        let titles: Vec<&str> = catalog.movies().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(
            titles,
            ["only action", "first drama", "second drama", "third drama"]
        );
    }

    #[test]
    fn test_parse_valid_catalog() {
        let text = r#"[
            {
                "title": "Heat",
                "genre": "action",
                "summary": "A thief and a detective circle each other across Los Angeles.",
                "poster": "heat",
                "cast": [
                    {"first_name": "Al", "last_name": "Pacino"},
                    {"first_name": "Robert", "last_name": "De Niro"}
                ]
            }
        ]"#;
        let catalog = Catalog::parse(text).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().cast.len(), 2);
    }

    #[test]
    fn test_parse_rejects_empty_title() {
        let text = r#"[
            {"title": "ok", "genre": "drama", "summary": "s", "poster": "p"},
            {"title": "", "genre": "drama", "summary": "s", "poster": "p"}
        ]"#;
        let err = Catalog::parse(text).unwrap_err();
        match err {
            CatalogError::MalformedRecord { index, field } => {
                assert_eq!(index, 1);
                assert_eq!(field, "title");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_empty_actor_name() {
        let text = r#"[
            {
                "title": "t", "genre": "g", "summary": "s", "poster": "p",
                "cast": [{"first_name": "Jane", "last_name": ""}]
            }
        ]"#;
        let err = Catalog::parse(text).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MalformedRecord {
                index: 0,
                field: "cast.last_name"
            }
        ));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(matches!(
            Catalog::parse("not json").unwrap_err(),
            CatalogError::Parse(_)
        ));
    }

    #[test]
    fn test_from_file_round_trip() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title": "t", "genre": "g", "summary": "s", "poster": "p"}}]"#
        )
        .unwrap();
        let catalog = Catalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_from_file_missing_file() {
        let err = Catalog::from_file(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    fn arb_movies() -> impl Strategy<Value = Vec<Movie>> {
        prop::collection::vec(
            (0usize..3, "[a-z]{1,8}").prop_map(|(g, title)| {
                bare(&title, ["action", "animation", "drama"][g])
            }),
            0..20,
        )
    }

    proptest! {
        #[test]
        fn prop_sort_is_stable(movies in arb_movies()) {
            // Tag each source movie with its original position via the title.
            let tagged: Vec<Movie> = movies
                .iter()
                .enumerate()
                .map(|(i, m)| bare(&format!("{i}"), &m.genre))
                .collect();
            let catalog = Catalog::new(tagged);

            for pair in catalog.movies().windows(2) {
                prop_assert!(pair[0].genre <= pair[1].genre);
                if pair[0].genre == pair[1].genre {
                    let a: usize = pair[0].title.parse().unwrap();
                    let b: usize = pair[1].title.parse().unwrap();
                    prop_assert!(a < b);
                }
            }
        }

        #[test]
        fn prop_sort_preserves_contents(movies in arb_movies()) {
            let catalog = Catalog::new(movies.clone());
            prop_assert_eq!(catalog.len(), movies.len());
            for m in &movies {
                prop_assert!(catalog.movies().contains(m));
            }
        }
    }
}
