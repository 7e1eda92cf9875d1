use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::occupancy::OccupiedSeats;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub poster: String,
    pub duration_min: u32,
    pub genre: String,
}

/// The catalog a real deployment would fetch from a movie service. Embedded
/// here as a static document; the view only ever reads it.
const BUILTIN_CATALOG: &str = r#"[
  { "id": "m1", "title": "Mai", "poster": "/posters/mai.jpg", "duration_min": 131, "genre": "Tâm lý" },
  { "id": "m2", "title": "Đào, Phở và Piano", "poster": "/posters/dao-pho-piano.jpg", "duration_min": 100, "genre": "Lịch sử" },
  { "id": "m3", "title": "Dune: Part Two", "poster": "/posters/dune-2.jpg", "duration_min": 166, "genre": "Khoa học viễn tưởng" },
  { "id": "m4", "title": "Inside Out 2", "poster": "/posters/inside-out-2.jpg", "duration_min": 96, "genre": "Hoạt hình" },
  { "id": "m5", "title": "Godzilla x Kong: The New Empire", "poster": "/posters/godzilla-x-kong.jpg", "duration_min": 115, "genre": "Hành động" },
  { "id": "m6", "title": "Exhuma: Quật Mộ Trùng Ma", "poster": "/posters/exhuma.jpg", "duration_min": 134, "genre": "Kinh dị" },
  { "id": "m7", "title": "Lật Mặt 7: Một Điều Ước", "poster": "/posters/lat-mat-7.jpg", "duration_min": 138, "genre": "Gia đình" },
  { "id": "m8", "title": "Kung Fu Panda 4", "poster": "/posters/kung-fu-panda-4.jpg", "duration_min": 94, "genre": "Hoạt hình" }
]"#;

/// Read-only lookup-by-id over the static dataset.
#[derive(Debug, Clone)]
pub struct MovieCatalog {
    movies: Vec<Movie>,
}

impl MovieCatalog {
    pub fn builtin() -> Self {
        let movies = serde_json::from_str(BUILTIN_CATALOG).expect("built-in catalog parses");
        Self { movies }
    }

    pub fn get(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }
}

pub const DEFAULT_BASE_PRICE: u64 = 100_000;
pub const DEFAULT_SHOW_TIME: &str = "19:30";
pub const DEFAULT_CINEMA: &str = "CGV Vincom Center";
pub const DEFAULT_ROOM: &str = "Phòng chiếu 1";
/// Showtimes offered per movie on the listing.
pub const SHOWTIMES: [&str; 3] = ["17:00", "19:30", "21:45"];

/// Navigation-carried schedule state: the date/time the caller already
/// picked, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowSchedule {
    pub date: NaiveDate,
    pub time: String,
}

impl ShowSchedule {
    /// Today's date with the given start time.
    pub fn today(time: &str) -> Self {
        Self {
            date: Local::now().date_naive(),
            time: time.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowDetails {
    pub id: String,
    pub movie_id: String,
    pub date: NaiveDate,
    pub time: String,
    /// Price of a regular seat, in whole đồng.
    pub base_price: u64,
    pub cinema: String,
    pub room: String,
}

impl ShowDetails {
    /// Built once per view load: the caller-supplied schedule when present,
    /// defaults (today, 19:30) otherwise. Immutable thereafter.
    pub fn synthesize(show_id: &str, movie_id: &str, schedule: Option<ShowSchedule>) -> Self {
        let (date, time) = match schedule {
            Some(s) => (s.date, s.time),
            None => (Local::now().date_naive(), DEFAULT_SHOW_TIME.to_string()),
        };
        Self {
            id: show_id.to_string(),
            movie_id: movie_id.to_string(),
            date,
            time,
            base_price: DEFAULT_BASE_PRICE,
            cinema: DEFAULT_CINEMA.to_string(),
            room: DEFAULT_ROOM.to_string(),
        }
    }
}

/// Everything the seat view needs once loading finishes.
#[derive(Debug, Clone)]
pub struct ShowContext {
    pub movie: Movie,
    pub show: ShowDetails,
    pub occupied: OccupiedSeats,
}

/// Resolve a movie id against the catalog and assemble the show context.
/// Synchronous by design: the artificial latency lives with the caller as a
/// `Delay`, so swapping in a real fetch later does not touch this contract.
pub fn load_show(
    catalog: &MovieCatalog,
    movie_id: &str,
    show_id: &str,
    schedule: Option<ShowSchedule>,
) -> Result<ShowContext> {
    let movie = catalog
        .get(movie_id)
        .cloned()
        .ok_or_else(|| Error::MovieNotFound {
            id: movie_id.to_string(),
        })?;

    Ok(ShowContext {
        show: ShowDetails::synthesize(show_id, movie_id, schedule),
        movie,
        occupied: OccupiedSeats::mock(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_lookup() {
        let catalog = MovieCatalog::builtin();
        assert!(!catalog.movies().is_empty());

        let movie = catalog.get("m1").expect("m1 is in the built-in catalog");
        assert_eq!(movie.title, "Mai");
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_load_show_not_found() {
        let catalog = MovieCatalog::builtin();
        let err = load_show(&catalog, "nope", "show-1", None).unwrap_err();
        assert_eq!(err, Error::MovieNotFound { id: "nope".to_string() });
    }

    #[test]
    fn test_synthesized_defaults() {
        let show = ShowDetails::synthesize("show-1", "m1", None);
        assert_eq!(show.time, "19:30");
        assert_eq!(show.base_price, 100_000);
        assert_eq!(show.cinema, "CGV Vincom Center");
        assert_eq!(show.room, "Phòng chiếu 1");
        assert_eq!(show.date, Local::now().date_naive());
    }

    #[test]
    fn test_schedule_passthrough() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
        let schedule = ShowSchedule { date, time: "21:45".to_string() };
        let show = ShowDetails::synthesize("show-2", "m3", Some(schedule));
        assert_eq!(show.date, date);
        assert_eq!(show.time, "21:45");
        assert_eq!(show.movie_id, "m3");
    }

    #[test]
    fn test_load_show_seeds_occupancy() {
        let catalog = MovieCatalog::builtin();
        let ctx = load_show(&catalog, "m2", "show-1", None).unwrap();
        assert_eq!(ctx.movie.id, "m2");
        assert_eq!(ctx.occupied.len(), 17, "mock occupancy is seeded");
    }
}
