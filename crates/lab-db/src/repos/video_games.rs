//! Video game queries.

use lab_core::entities::{NewVideoGame, VideoGame};
use lab_core::enums::Genre;
use rust_decimal::Decimal;

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, get_decimal, parse_enum};
use crate::service::LabService;

const SELECT_COLS: &str = "id, title, genre, release_year, rating";

fn row_to_game(row: &libsql::Row) -> Result<VideoGame, DatabaseError> {
    Ok(VideoGame {
        id: row.get(0)?,
        title: row.get(1)?,
        genre: parse_enum(&row.get::<String>(2)?)?,
        release_year: row.get(3)?,
        rating: get_decimal(row, 4)?,
    })
}

impl LabService {
    pub async fn create_video_game(&self, new: &NewVideoGame) -> Result<VideoGame, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO video_games (title, genre, release_year, rating) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    new.title.as_str(),
                    new.genre.as_str(),
                    new.release_year,
                    new.rating.to_string()
                ],
            )
            .await?;
        Ok(VideoGame {
            id,
            title: new.title.clone(),
            genre: new.genre,
            release_year: new.release_year,
            rating: new.rating,
        })
    }

    pub async fn list_video_games(&self) -> Result<Vec<VideoGame>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM video_games ORDER BY id"), ())
            .await?;
        collect_rows(rows, row_to_game).await
    }

    pub async fn games_by_genre(&self, genre: Genre) -> Result<Vec<VideoGame>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM video_games WHERE genre = ?1 ORDER BY id"),
                [genre.as_str()],
            )
            .await?;
        collect_rows(rows, row_to_game).await
    }

    /// Games released in `year` or later.
    pub async fn recently_released_games(&self, year: i64) -> Result<Vec<VideoGame>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM video_games WHERE release_year >= ?1 ORDER BY id"),
                [year],
            )
            .await?;
        collect_rows(rows, row_to_game).await
    }

    async fn game_by_rating(&self, direction: &str) -> Result<Option<VideoGame>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM video_games
                     ORDER BY CAST(rating AS NUMERIC) {direction}, id LIMIT 1"
                ),
                (),
            )
            .await?;
        rows.next().await?.map(|row| row_to_game(&row)).transpose()
    }

    pub async fn highest_rated_game(&self) -> Result<Option<VideoGame>, DatabaseError> {
        self.game_by_rating("DESC").await
    }

    pub async fn lowest_rated_game(&self) -> Result<Option<VideoGame>, DatabaseError> {
        self.game_by_rating("ASC").await
    }

    /// Mean rating formatted to one decimal place. `None` when there are no games.
    pub async fn average_rating(&self) -> Result<Option<String>, DatabaseError> {
        let games = self.list_video_games().await?;
        if games.is_empty() {
            return Ok(None);
        }
        let total: Decimal = games.iter().map(|g| g.rating).sum();
        let mut average = (total / Decimal::from(games.len())).round_dp(1);
        average.rescale(1);
        Ok(Some(average.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use lab_core::entities::{RATING_MESSAGE, RELEASE_YEAR_MESSAGE};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::test_service;

    fn game(title: &str, genre: Genre, year: i64, rating: &str) -> NewVideoGame {
        NewVideoGame {
            title: title.into(),
            genre,
            release_year: year,
            rating: rating.parse().unwrap(),
        }
    }

    async fn seed(svc: &LabService) {
        svc.create_video_game(&game("The Last of Us", Genre::Action, 2013, "9.5")).await.unwrap();
        svc.create_video_game(&game("Skyrim", Genre::Rpg, 2011, "9.0")).await.unwrap();
        svc.create_video_game(&game("FIFA 23", Genre::Sports, 2022, "7.2")).await.unwrap();
    }

    #[tokio::test]
    async fn queries() {
        let svc = test_service().await;
        seed(&svc).await;
        assert_eq!(svc.games_by_genre(Genre::Rpg).await.unwrap()[0].title, "Skyrim");
        assert_eq!(svc.recently_released_games(2013).await.unwrap().len(), 2);
        assert_eq!(
            svc.highest_rated_game().await.unwrap().unwrap().to_string(),
            "The Last of Us"
        );
        assert_eq!(svc.lowest_rated_game().await.unwrap().unwrap().title, "FIFA 23");
        // (9.5 + 9.0 + 7.2) / 3 = 8.566..
        assert_eq!(svc.average_rating().await.unwrap().as_deref(), Some("8.6"));
    }

    #[tokio::test]
    async fn empty_table_has_no_average() {
        let svc = test_service().await;
        assert_eq!(svc.average_rating().await.unwrap(), None);
        assert!(svc.highest_rated_game().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn out_of_range_values_never_persisted() {
        let svc = test_service().await;
        let err = svc
            .create_video_game(&game("Pong", Genre::Sports, 1972, "10.5"))
            .await
            .unwrap_err();
        let DatabaseError::Validation(errors) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(errors.messages_for("release_year"), vec![RELEASE_YEAR_MESSAGE]);
        assert_eq!(errors.messages_for("rating"), vec![RATING_MESSAGE]);
        assert!(svc.list_video_games().await.unwrap().is_empty());
    }
}
