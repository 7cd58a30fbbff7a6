//! Dealing a new game.

use im::Vector;

use crate::cards::{create_building_deck, create_production_deck, create_railroad_deck, create_town_deck};
use crate::core::{
    Commodity, ConfigError, GameConfig, GameRng, GameState, Market, Phase, Player, PlayerId, PlayerMap,
};

/// Railroads face up at once.
pub const RAILROAD_OFFER_SIZE: usize = 2;

/// Start a game with default money and hand size.
///
/// ```
/// use tycoon_engine::rules::init_game;
///
/// let state = init_game(3, &["A", "B", "C"], 42).unwrap();
/// assert_eq!(state.player_count(), 3);
/// assert_eq!(state.railroad_offer.len(), 2);
/// ```
pub fn init_game(num_players: usize, names: &[&str], seed: u64) -> Result<GameState, ConfigError> {
    let config = GameConfig::new(num_players)
        .with_names(names.iter().copied())
        .with_seed(seed);
    init_game_with_config(&config)
}

/// Start a game from a full config.
pub fn init_game_with_config(config: &GameConfig) -> Result<GameState, ConfigError> {
    config.validate()?;
    let n = config.player_count;
    let rng = GameRng::new(config.seed);

    let mut production_deck = create_production_deck(&mut rng.for_context("production"));
    let mut railroad_deck = create_railroad_deck(n, &mut rng.for_context("railroads"));
    let mut town_deck = create_town_deck(n, &mut rng.for_context("towns"));
    let buildings = create_building_deck(&mut rng.for_context("buildings"));

    let mut players = PlayerMap::new(n, |p| Player::new(config.player_name(p.index()), config.starting_money));
    for (_, player) in players.iter_mut() {
        let mut hand = Vector::new();
        for _ in 0..config.starting_hand_size {
            match production_deck.pop_back() {
                Some(card) => hand.push_back(card),
                None => break,
            }
        }
        player.hand = hand;
    }
    deal_starting_commodities(&mut players);

    let railroad_offer = railroad_deck.slice(..RAILROAD_OFFER_SIZE.min(railroad_deck.len()));
    let current_town = town_deck.pop_front();

    let state = GameState {
        phase: Phase::Playing,
        current_player: PlayerId::new(0),
        players,
        market: Market::opening(),
        production_deck,
        production_discard: Vector::new(),
        railroad_deck,
        railroad_offer,
        town_deck,
        current_town,
        building_stack: buildings.stack,
        building_offer: buildings.offer,
        auction: None,
        last_auction_result: None,
        action_taken_this_turn: false,
        pending_draw_count: 0,
        building_purchases_this_turn: 0,
        sell_actions_this_turn: 0,
        rng: rng.for_context("gameplay").state(),
    };

    tracing::info!(
        target: "tycoon::setup",
        players = n,
        seed = config.seed,
        railroads = state.railroad_deck.len() + state.railroad_offer.len(),
        towns = state.town_deck.len() + usize::from(state.current_town.is_some()),
        "game.initialized"
    );
    Ok(state)
}

/// Seat `i` receives `i + 1` units, one each of commodities nobody holds yet.
fn deal_starting_commodities(players: &mut PlayerMap<Player>) {
    let mut unused = Commodity::ALL.iter().copied();
    for (seat, player) in players.iter_mut() {
        for commodity in unused.by_ref().take(seat.index() + 1) {
            player.commodities.add(commodity, 1);
        }
    }
}
