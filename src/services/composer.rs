use crate::models::{MovieRecord, NormalizedMovie};

/// Joins the token fields of a movie into one bag-of-words string
///
/// Field order is genre, director, actors, keywords. Empty fields leave
/// doubled spaces behind; they carry no terms so vectorization ignores them.
pub fn compose_bag_of_words(
    genre_tokens: &[String],
    director_token: &str,
    actor_tokens: &[String],
    keyword_tokens: &[String],
) -> String {
    [
        genre_tokens.join(" "),
        director_token.to_string(),
        actor_tokens.join(" "),
        keyword_tokens.join(" "),
    ]
    .join(" ")
}

/// Completes a normalized movie with its keywords and composed bag of words
pub fn compose(movie: NormalizedMovie, keyword_tokens: Vec<String>) -> MovieRecord {
    let bag_of_words = compose_bag_of_words(
        &movie.genre_tokens,
        &movie.director_token,
        &movie.actor_tokens,
        &keyword_tokens,
    );

    MovieRecord {
        title: movie.title,
        genre_tokens: movie.genre_tokens,
        director_token: movie.director_token,
        actor_tokens: movie.actor_tokens,
        keyword_tokens,
        bag_of_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_field_order() {
        let bag = compose_bag_of_words(
            &strings(&["action", "drama"]),
            "jamesmangold",
            &strings(&["hughjackman", "patrickstewart"]),
            &strings(&["aging wolverine", "professor"]),
        );

        assert_eq!(
            bag,
            "action drama jamesmangold hughjackman patrickstewart aging wolverine professor"
        );
    }

    #[test]
    fn test_empty_fields_keep_double_spaces() {
        let bag = compose_bag_of_words(&strings(&["drama"]), "someone", &[], &[]);
        assert_eq!(bag, "drama someone  ");
    }

    #[test]
    fn test_compose_keeps_every_token() {
        let movie = NormalizedMovie {
            title: "Alien".to_string(),
            genre_tokens: strings(&["horror", " sci-fi"]),
            director_token: "ridleyscott".to_string(),
            actor_tokens: strings(&["sigourneyweaver", "tomskerritt"]),
            plot: String::new(),
        };

        let record = compose(movie, strings(&["deadly alien", "crew"]));
        let terms: Vec<&str> = record.bag_of_words.split_whitespace().collect();

        for expected in ["horror", "sci-fi", "ridleyscott", "sigourneyweaver", "tomskerritt"] {
            assert!(terms.contains(&expected), "missing {expected}");
        }
        for keyword in &record.keyword_tokens {
            for word in keyword.split_whitespace() {
                assert!(terms.contains(&word));
            }
        }
        assert_eq!(record.title, "Alien");
    }
}
