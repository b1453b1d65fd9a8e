use crate::app_context::{AppContext, RequestContext};
use crate::auth::models::AuthContext;
use crate::difficulty::Difficulty;
use crate::game::controller::GameController;
use crate::game::errors::GameError;
use crate::game::models::Game;
use crate::game::requests::StartGameRequest;
use crate::game::responses::{DeleteGameResponse, GameResponse, GameView};
use crate::game::timer;
use crate::geo::models::LatLng;
use crate::storage::games::GameEntry;
use crate::storage::interface::{LeaderboardRepo, LocationRepo};
use chrono::Utc;
use tokio::sync::OwnedMutexGuard;

pub struct GameHttpHandler<'a, LS, BS> {
    app_context: AppContext<LS, BS>,
    request_context: &'a RequestContext,
}

impl<'a, LS, BS> GameHttpHandler<'a, LS, BS>
where
    LS: LocationRepo + Clone,
    BS: LeaderboardRepo + Clone + 'static,
{
    pub fn new(app_context: AppContext<LS, BS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn state(&self) -> Result<GameResponse, GameError> {
        let game_entry = self.owned_game().await?;
        Ok(self.respond(&game_entry.game))
    }

    pub async fn start(&self, request: StartGameRequest) -> Result<GameResponse, GameError> {
        let difficulty = parse_difficulty(&request.difficulty)?;
        let mut game_entry = self.owned_game().await?;
        let previous_session_id = session_id(&game_entry.game);
        let started = controller(&self.app_context, &self.request_context.player)
            .start(&mut game_entry.game, difficulty)
            .await;
        // A session opened before a failed first fetch still needs its timer.
        if session_id(&game_entry.game) != previous_session_id {
            self.spawn_timer(&game_entry.game);
        }
        started?;
        Ok(self.respond(&game_entry.game))
    }

    pub async fn guess(&self, guess: LatLng) -> Result<GameResponse, GameError> {
        let mut game_entry = self.owned_game().await?;
        controller(&self.app_context, &self.request_context.player)
            .place_guess(&mut game_entry.game, guess)?;
        Ok(self.respond(&game_entry.game))
    }

    pub async fn confirm(&self) -> Result<GameResponse, GameError> {
        let mut game_entry = self.owned_game().await?;
        controller(&self.app_context, &self.request_context.player)
            .confirm(&mut game_entry.game)?;
        Ok(self.respond(&game_entry.game))
    }

    pub async fn skip(&self) -> Result<GameResponse, GameError> {
        let mut game_entry = self.owned_game().await?;
        controller(&self.app_context, &self.request_context.player)
            .skip(&mut game_entry.game)
            .await?;
        Ok(self.respond(&game_entry.game))
    }

    pub async fn next(&self) -> Result<GameResponse, GameError> {
        let mut game_entry = self.owned_game().await?;
        controller(&self.app_context, &self.request_context.player)
            .next_round(&mut game_entry.game)
            .await?;
        Ok(self.respond(&game_entry.game))
    }

    pub async fn exit(&self) -> Result<GameResponse, GameError> {
        let mut game_entry = self.owned_game().await?;
        controller(&self.app_context, &self.request_context.player).exit(&mut game_entry.game);
        Ok(self.respond(&game_entry.game))
    }

    pub async fn delete(&self) -> Result<DeleteGameResponse, GameError> {
        let game_entry = self.owned_game().await?;
        drop(game_entry);
        self.app_context
            .games
            .remove(&self.request_context.game_id)
            .await;
        Ok(DeleteGameResponse { error: false })
    }

    async fn owned_game(&self) -> Result<OwnedMutexGuard<GameEntry>, GameError> {
        let game_handle = self
            .app_context
            .games
            .get(&self.request_context.game_id)
            .await
            .ok_or(GameError::GameNotFound)?;
        let mut game_entry = game_handle.lock_owned().await;
        if game_entry.owner != self.request_context.player.username {
            return Err(GameError::NotYourGame);
        }
        game_entry.touched_at = Utc::now();
        Ok(game_entry)
    }

    fn spawn_timer(&self, game: &Game) {
        if let Some(session) = game.session() {
            timer::spawn(
                self.app_context.games.clone(),
                self.app_context.leaderboard.clone(),
                self.request_context.game_id.clone(),
                session.id.clone(),
            );
        }
    }

    fn respond(&self, game: &Game) -> GameResponse {
        GameResponse {
            error: false,
            game_id: self.request_context.game_id.clone(),
            game: GameView::from(game),
        }
    }
}

pub struct CreateGameHttpHandler<'a, LS, BS> {
    app_context: AppContext<LS, BS>,
    player: &'a AuthContext,
}

impl<'a, LS, BS> CreateGameHttpHandler<'a, LS, BS>
where
    LS: LocationRepo + Clone,
    BS: LeaderboardRepo + Clone + 'static,
{
    pub fn new(app_context: AppContext<LS, BS>, player: &'a AuthContext) -> Self {
        Self {
            app_context,
            player,
        }
    }

    /// Creates a game for the player and immediately starts its first session.
    pub async fn create(&self, request: StartGameRequest) -> Result<GameResponse, GameError> {
        let difficulty = parse_difficulty(&request.difficulty)?;
        let mut game = Game::Selecting;
        controller(&self.app_context, self.player)
            .start(&mut game, difficulty)
            .await?;
        let view = GameView::from(&game);
        let new_session_id = session_id(&game);
        let game_id = self
            .app_context
            .games
            .insert(self.player.username.clone(), game)
            .await;
        if let Some(session_id) = new_session_id {
            timer::spawn(
                self.app_context.games.clone(),
                self.app_context.leaderboard.clone(),
                game_id.clone(),
                session_id,
            );
        }
        Ok(GameResponse {
            error: false,
            game_id,
            game: view,
        })
    }
}

fn controller<'a, LS, BS>(
    app_context: &'a AppContext<LS, BS>,
    player: &'a AuthContext,
) -> GameController<'a, LS>
where
    LS: LocationRepo,
{
    GameController::new(
        player,
        &app_context.locations,
        app_context.session_duration_secs,
    )
}

fn session_id(game: &Game) -> Option<String> {
    game.session().map(|session| session.id.clone())
}

fn parse_difficulty(value: &str) -> Result<Difficulty, GameError> {
    value.parse().map_err(|_| GameError::InvalidMode)
}
