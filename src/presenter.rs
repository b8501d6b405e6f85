use crate::catalog::{Catalog, Movie};

/// One of the two alternating row layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowVariant {
    Standard,
    RightAligned,
}

impl RowVariant {
    /// Even rows use the standard layout, odd rows the right-aligned one.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Standard
        } else {
            Self::RightAligned
        }
    }
}

/// Display-ready strings for one list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowModel {
    pub display_title: String,
    pub summary: String,
    pub poster: String,
    pub variant: RowVariant,
}

/// Title line shown for a movie: `"{title} - ({genre})"`.
pub fn display_title(movie: &Movie) -> String {
    format!("{} - ({})", movie.title, movie.genre)
}

/// Build the render model for the movie at the given catalog row.
pub fn row_model(movie: &Movie, index: usize) -> RowModel {
    RowModel {
        display_title: display_title(movie),
        summary: movie.summary.clone(),
        poster: movie.poster.clone(),
        variant: RowVariant::for_index(index),
    }
}

/// Map the whole catalog to its ordered render models.
pub fn render_rows(catalog: &Catalog) -> Vec<RowModel> {
    catalog
        .movies()
        .iter()
        .enumerate()
        .map(|(index, movie)| row_model(movie, index))
        .collect()
}

/// Newline-terminated cast listing, one `-First Last` line per actor in
/// cast order. Empty cast yields the empty string.
pub fn cast_list(movie: &Movie) -> String {
    let mut out = String::new();
    for actor in &movie.cast {
        out.push('-');
        out.push_str(&actor.first_name);
        out.push(' ');
        out.push_str(&actor.last_name);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Actor;
    use proptest::prelude::*;

    fn movie(title: &str, genre: &str, cast: &[(&str, &str)]) -> Movie {
        Movie {
            title: title.to_string(),
            genre: genre.to_string(),
            summary: "summary".to_string(),
            poster: "poster".to_string(),
            cast: cast.iter().map(|(f, l)| Actor::new(f, l)).collect(),
        }
    }

    #[test]
    fn test_variant_alternates_by_parity() {
        assert_eq!(RowVariant::for_index(0), RowVariant::Standard);
        assert_eq!(RowVariant::for_index(1), RowVariant::RightAligned);
        assert_eq!(RowVariant::for_index(2), RowVariant::Standard);
        assert_eq!(RowVariant::for_index(3), RowVariant::RightAligned);
    }

    #[test]
    fn test_display_title_format() {
        let m = movie("Heat", "action", &[]);
        assert_eq!(display_title(&m), "Heat - (action)");
    }

    #[test]
    fn test_cast_list_formats_one_line_per_actor() {
        let m = movie("t", "g", &[("Jane", "Doe"), ("John", "Roe")]);
        assert_eq!(cast_list(&m), "-Jane Doe\n-John Roe\n");
    }

    #[test]
    fn test_cast_list_empty_cast() {
        let m = movie("t", "g", &[]);
        assert_eq!(cast_list(&m), "");
    }

    #[test]
    fn test_render_rows_sorted_end_to_end() {
        let catalog = Catalog::new(vec![movie("A", "drama", &[]), movie("B", "action", &[])]);
        let rows = render_rows(&catalog);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].display_title, "B - (action)");
        assert_eq!(rows[0].variant, RowVariant::Standard);
        assert_eq!(rows[1].display_title, "A - (drama)");
        assert_eq!(rows[1].variant, RowVariant::RightAligned);
    }

    #[test]
    fn test_row_model_carries_poster_key() {
        let m = movie("t", "g", &[]);
        assert_eq!(row_model(&m, 0).poster, "poster");
    }

    proptest! {
        #[test]
        fn prop_variant_parity(index in 0usize..10_000) {
            let variant = RowVariant::for_index(index);
            prop_assert_eq!(variant == RowVariant::Standard, index % 2 == 0);
        }

        #[test]
        fn prop_row_model_deterministic(
            title in "[a-zA-Z ]{1,20}",
            genre in "[a-z]{1,10}",
            index in 0usize..100,
        ) {
            let m = movie(&title, &genre, &[("Jane", "Doe")]);
            prop_assert_eq!(row_model(&m, index), row_model(&m, index));
        }

        #[test]
        fn prop_display_title_concatenation(
            title in "[a-zA-Z ]{1,20}",
            genre in "[a-z]{1,10}",
        ) {
            let m = movie(&title, &genre, &[]);
            let expected = format!("{title} - ({genre})");
            prop_assert_eq!(display_title(&m), expected);
        }
    }
}
