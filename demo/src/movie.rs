use optflow_core::option::{self, OptionExt};
use optflow_core::pipe;

use crate::list::head;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Movie {
  pub title: String,
  pub release_year: u32,
  pub rating_position: u32,
  pub award: Option<String>,
}

fn to_uppercase(s: &str) -> String { s.to_uppercase() }
fn add_prefix(s: String) -> String { format!("Best - {}", s) }

/// The first of `titles`, highlighted.
pub fn best_movie(titles: &[&str]) -> Option<String> {
  pipe!(
    titles,
    head,
    option::map(to_uppercase),
    option::map(add_prefix),
  )
}

pub fn award_highlight(movie: &Movie) -> Option<String> {
  pipe!(
    movie.award.as_deref(),
    option::from_nullable,
    option::map(|award: &str| format!("Awarded with: {}", award)),
  )
}

pub fn top_10_highlight(movie: &Movie) -> Option<String> {
  pipe!(
    movie.rating_position,
    option::from_predicate(|rating: &u32| *rating <= 10),
    option::map(|rating: u32| format!("In TOP 10 at position: {}", rating)),
  )
}

/// The award of `movie` if it has one, otherwise its top 10 position if it is in the top 10, otherwise its release
/// year.
pub fn movie_highlight(movie: &Movie) -> String {
  pipe!(
    movie,
    award_highlight,
    option::alt(|| top_10_highlight(movie)),
    option::get_or_else(|| format!("Released in {}", movie.release_year)),
  )
}

/// Same as [`movie_highlight`], with method-style combinators.
pub fn movie_highlight_methods(movie: &Movie) -> String {
  award_highlight(movie)
    .alt(|| top_10_highlight(movie))
    .fold(|| format!("Released in {}", movie.release_year), |highlight| highlight)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn movie(rating_position: u32, award: Option<&str>) -> Movie {
    Movie {
      title: "Movie 1".to_string(),
      release_year: 2023,
      rating_position,
      award: award.map(str::to_string),
    }
  }

  #[test]
  fn best() {
    assert_eq!(best_movie(&[]), None);
    assert_eq!(best_movie(&["An American in Rome", "Winter Holidays"]), Some("Best - AN AMERICAN IN ROME".to_string()));
  }

  #[test]
  fn highlights() {
    assert_eq!(award_highlight(&movie(1, None)), None);
    assert_eq!(top_10_highlight(&movie(11, None)), None);
    assert_eq!(top_10_highlight(&movie(10, None)), Some("In TOP 10 at position: 10".to_string()));

    for m in [movie(1, Some("Oscar")), movie(3, None), movie(50, None)] {
      assert_eq!(movie_highlight(&m), movie_highlight_methods(&m));
    }
  }
}
