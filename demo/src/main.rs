use std::env;
use std::error::Error;

use optflow_core::option::{self, OptionExt};
use optflow_core::pipe;
use optflow_core::trace::{inspect, trace};
use optflow_demo::app::storage::Storage;
use optflow_demo::app::tracing::{AppTracingBuilder, FILE_LOG};
use optflow_demo::discount::{discount_text, Discount};
use optflow_demo::movie::{best_movie, movie_highlight, Movie};
use optflow_demo::number::{safe_inverse_w, ui_message_with_inverse};
use optflow_demo::shape::{circle, Circle, Shape, Square};
use optflow_demo::text::{is_valid, is_valid_concat};

fn main() -> Result<(), Box<dyn Error>> {
  let _ = dotenvy::dotenv(); // Ignore error ok: .env file is not required.

  let storage = Storage::new("Demo");
  let log_file_path = storage.local_data_file("log.txt").filter(|_| env::var_os(FILE_LOG).is_some());
  let _tracing = AppTracingBuilder::default()
    .with_log_file_path_opt(log_file_path)
    .build();

  for x in [0.0, 2.0] {
    tracing::info!(x, text = %ui_message_with_inverse(x), widened = ?safe_inverse_w(x), "inverse");
  }

  let titles = ["An American in Rome", "Winter Holidays"];
  let best = pipe!(best_movie(&titles), trace("best movie")).ok_or_absent()?;
  tracing::info!(%best, "best movie");

  for discount in [Discount { percentage: 10, expired: false }, Discount { percentage: 20, expired: true }] {
    tracing::info!(?discount, text = ?discount_text(discount), "discount");
  }

  for shape in [Shape::from(Circle { radius: 3.0 }), Shape::from(Square { side: 5.0 })] {
    let radius = pipe!(shape, circle, option::map(|c: Circle| c.radius), inspect("radius"));
    tracing::info!(?shape, ?radius, "circle");
  }

  let movies = [
    Movie { title: "Movie 1".to_string(), release_year: 2023, rating_position: 1, award: Some("Oscar".to_string()) },
    Movie { title: "Movie 2".to_string(), release_year: 2021, rating_position: 3, award: None },
    Movie { title: "Movie 3".to_string(), release_year: 2019, rating_position: 42, award: None },
  ];
  for movie in &movies {
    tracing::info!(title = %movie.title, highlight = %movie_highlight(movie), "movie");
  }

  let is_valid_concat = is_valid_concat();
  for (s1, s2) in [(" h", "i "), ("he", "llo")] {
    tracing::info!(s1, s2, valid = is_valid(&format!("{}{}", s1, s2)), valid_concat = is_valid_concat(s1.to_string(), s2.to_string()), "text");
  }

  Ok(())
}
