// League Registry - teams and players
//
// Registry A: teams with jersey colors and an optional captain, players
// owned by exactly one team. Identifier uniqueness and the owner reference
// are checked at creation; every listing / extremum query follows the
// deterministic ordering contract in `store`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};
use crate::store::{self, Identified, Store};

// ============================================================================
// TEAM
// ============================================================================

/// A team in the league.
///
/// The captain reference is the only mutable attribute; teams are never
/// removed from the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Externally assigned identifier - never changes
    pub id: u64,
    pub name: String,
    pub founded: NaiveDate,
    /// Primary jersey color
    pub primary_color: String,
    /// Secondary jersey color, worn when the primary clashes with the host's
    pub secondary_color: String,
    /// Current captain (a player of this team), if one has been assigned.
    /// Explicit `Option` so the unset case is a structural state, not a
    /// sentinel value.
    pub captain: Option<u64>,
}

impl Team {
    /// Create a new team with no captain assigned
    pub fn new(
        id: u64,
        name: String,
        founded: NaiveDate,
        primary_color: String,
        secondary_color: String,
    ) -> Self {
        Team {
            id,
            name,
            founded,
            primary_color,
            secondary_color,
            captain: None,
        }
    }
}

impl Identified for Team {
    fn id(&self) -> u64 {
        self.id
    }
}

// ============================================================================
// PLAYER
// ============================================================================

/// A player under contract with one team. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Externally assigned identifier - never changes
    pub id: u64,
    /// Owning team; resolved against the team store at creation time and
    /// never revalidated afterwards (teams are never deleted)
    pub team_id: u64,
    pub name: String,
    pub birth_date: NaiveDate,
    /// Integer skill level, higher is better
    pub skill: u32,
    /// Monthly salary, non-negative
    pub salary: f64,
}

impl Player {
    pub fn new(
        id: u64,
        team_id: u64,
        name: String,
        birth_date: NaiveDate,
        skill: u32,
        salary: f64,
    ) -> Self {
        Player {
            id,
            team_id,
            name,
            birth_date,
            skill,
            salary,
        }
    }
}

impl Identified for Player {
    fn id(&self) -> u64 {
        self.id
    }
}

// ============================================================================
// LEAGUE REGISTRY
// ============================================================================

/// Registry of all teams and players.
///
/// Owns both stores exclusively; players hold a non-owning `team_id` link
/// resolved through the team store. All state is process-lifetime only.
#[derive(Debug, Serialize)]
pub struct LeagueRegistry {
    teams: Store<Team>,
    players: Store<Player>,
}

impl LeagueRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        LeagueRegistry {
            teams: Store::new(),
            players: Store::new(),
        }
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Register a new team. The identifier must be unused.
    pub fn add_team(
        &mut self,
        id: u64,
        name: &str,
        founded: NaiveDate,
        primary_color: &str,
        secondary_color: &str,
    ) -> Result<()> {
        self.teams.insert(Team::new(
            id,
            name.to_string(),
            founded,
            primary_color.to_string(),
            secondary_color.to_string(),
        ))
    }

    /// Register a new player with an existing team.
    ///
    /// Check order: duplicate identifier first, then the owner reference.
    /// Nothing is inserted unless both pass.
    pub fn add_player(
        &mut self,
        id: u64,
        team_id: u64,
        name: &str,
        birth_date: NaiveDate,
        skill: u32,
        salary: f64,
    ) -> Result<()> {
        if self.players.contains(id) {
            return Err(RegistryError::IdentifierInUse(id));
        }
        if !self.teams.contains(team_id) {
            return Err(RegistryError::TeamNotFound);
        }
        self.players.insert(Player::new(
            id,
            team_id,
            name.to_string(),
            birth_date,
            skill,
            salary,
        ))
    }

    /// Make a player captain of their own team, silently replacing any
    /// prior captain.
    pub fn set_captain(&mut self, player_id: u64) -> Result<()> {
        let team_id = self
            .players
            .find(player_id)
            .ok_or(RegistryError::PlayerNotFound)?
            .team_id;
        let team = self
            .teams
            .find_mut(team_id)
            .ok_or(RegistryError::TeamNotFound)?;
        team.captain = Some(player_id);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    /// Current captain of the team.
    pub fn captain(&self, team_id: u64) -> Result<u64> {
        self.teams
            .find(team_id)
            .ok_or(RegistryError::TeamNotFound)?
            .captain
            .ok_or(RegistryError::CaptainUnset)
    }

    pub fn team_name(&self, team_id: u64) -> Result<String> {
        self.teams
            .find(team_id)
            .map(|t| t.name.clone())
            .ok_or(RegistryError::TeamNotFound)
    }

    pub fn player_name(&self, player_id: u64) -> Result<String> {
        self.players
            .find(player_id)
            .map(|p| p.name.clone())
            .ok_or(RegistryError::PlayerNotFound)
    }

    pub fn salary(&self, player_id: u64) -> Result<f64> {
        self.players
            .find(player_id)
            .map(|p| p.salary)
            .ok_or(RegistryError::PlayerNotFound)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// All team identifiers, ascending.
    pub fn teams(&self) -> Vec<u64> {
        store::sorted_ids(self.teams.iter())
    }

    /// Identifiers of the team's players, ascending. A team with no
    /// players yields an empty list, not an error.
    pub fn team_players(&self, team_id: u64) -> Result<Vec<u64>> {
        if !self.teams.contains(team_id) {
            return Err(RegistryError::TeamNotFound);
        }
        Ok(store::sorted_ids(self.players_of(team_id)))
    }

    /// Highest-skill player of the team, ties resolved to the lowest id.
    /// A team with no players has no best player.
    pub fn best_player(&self, team_id: u64) -> Result<u64> {
        if !self.teams.contains(team_id) {
            return Err(RegistryError::TeamNotFound);
        }
        store::max_id_by(self.players_of(team_id), |a, b| a.skill.cmp(&b.skill))
            .ok_or(RegistryError::TeamNotFound)
    }

    /// Earliest-born player of the team, ties resolved to the lowest id.
    pub fn oldest_player(&self, team_id: u64) -> Result<u64> {
        if !self.teams.contains(team_id) {
            return Err(RegistryError::TeamNotFound);
        }
        store::min_id_by(self.players_of(team_id), |a, b| {
            a.birth_date.cmp(&b.birth_date)
        })
        .ok_or(RegistryError::TeamNotFound)
    }

    /// Best-paid player of the team, ties resolved to the lowest id.
    pub fn highest_paid_player(&self, team_id: u64) -> Result<u64> {
        if !self.teams.contains(team_id) {
            return Err(RegistryError::TeamNotFound);
        }
        store::max_id_by(self.players_of(team_id), |a, b| {
            a.salary.total_cmp(&b.salary)
        })
        .ok_or(RegistryError::TeamNotFound)
    }

    /// Top `count` players league-wide: skill descending, id ascending on
    /// ties. A count beyond the population returns everyone.
    pub fn top_players(&self, count: usize) -> Vec<u64> {
        store::top_ids(self.players.iter(), |a, b| a.skill.cmp(&b.skill), count)
    }

    /// Jersey color the away team wears at the home team's ground:
    /// secondary on a primary-color clash, primary otherwise.
    pub fn away_jersey_color(&self, home_id: u64, away_id: u64) -> Result<String> {
        let home = self.teams.find(home_id).ok_or(RegistryError::TeamNotFound)?;
        let away = self.teams.find(away_id).ok_or(RegistryError::TeamNotFound)?;

        if home.primary_color == away.primary_color {
            Ok(away.secondary_color.clone())
        } else {
            Ok(away.primary_color.clone())
        }
    }

    /// Count registered teams
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Count registered players
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    fn players_of(&self, team_id: u64) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.team_id == team_id)
    }
}

impl Default for LeagueRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn league_with_team(team_id: u64) -> LeagueRegistry {
        let mut league = LeagueRegistry::new();
        league
            .add_team(team_id, "Test FC", date(1902, 3, 6), "red", "white")
            .unwrap();
        league
    }

    #[test]
    fn test_add_team_duplicate_id_rejected() {
        let mut league = league_with_team(1);
        let err = league
            .add_team(1, "Other FC", date(1950, 1, 1), "blue", "black")
            .unwrap_err();

        assert_eq!(err, RegistryError::IdentifierInUse(1));
        assert_eq!(league.team_count(), 1);
        assert_eq!(league.team_name(1).unwrap(), "Test FC");
    }

    #[test]
    fn test_add_player_unknown_team_inserts_nothing() {
        let mut league = league_with_team(1);
        let err = league
            .add_player(10, 99, "Nadia", date(1990, 5, 20), 80, 1200.0)
            .unwrap_err();

        assert_eq!(err, RegistryError::TeamNotFound);
        assert_eq!(league.player_count(), 0);
        assert_eq!(league.player_name(10).unwrap_err(), RegistryError::PlayerNotFound);
    }

    #[test]
    fn test_add_player_duplicate_checked_before_owner() {
        let mut league = league_with_team(1);
        league
            .add_player(10, 1, "Nadia", date(1990, 5, 20), 80, 1200.0)
            .unwrap();

        // Same player id with an unknown team: the duplicate wins
        let err = league
            .add_player(10, 99, "Marta", date(1991, 1, 1), 70, 900.0)
            .unwrap_err();
        assert_eq!(err, RegistryError::IdentifierInUse(10));
        assert_eq!(league.player_count(), 1);
    }

    #[test]
    fn test_uniqueness_is_per_store() {
        let mut league = league_with_team(1);
        // A player may share an identifier with a team; the stores are
        // checked independently
        league
            .add_player(1, 1, "Nadia", date(1990, 5, 20), 80, 1200.0)
            .unwrap();

        assert_eq!(league.team_name(1).unwrap(), "Test FC");
        assert_eq!(league.player_name(1).unwrap(), "Nadia");
    }

    #[test]
    fn test_captain_lifecycle() {
        let mut league = league_with_team(1);
        league
            .add_player(10, 1, "Nadia", date(1990, 5, 20), 80, 1200.0)
            .unwrap();
        league
            .add_player(11, 1, "Marta", date(1991, 1, 1), 75, 1000.0)
            .unwrap();

        assert_eq!(league.captain(1).unwrap_err(), RegistryError::CaptainUnset);

        league.set_captain(10).unwrap();
        assert_eq!(league.captain(1).unwrap(), 10);

        // Silently replaced
        league.set_captain(11).unwrap();
        assert_eq!(league.captain(1).unwrap(), 11);

        assert_eq!(
            league.set_captain(99).unwrap_err(),
            RegistryError::PlayerNotFound
        );
        assert_eq!(league.captain(99).unwrap_err(), RegistryError::TeamNotFound);
    }

    #[test]
    fn test_team_players_ascending_and_scoped() {
        let mut league = league_with_team(1);
        league
            .add_team(2, "Rivals", date(1930, 7, 1), "blue", "yellow")
            .unwrap();
        league
            .add_player(7, 1, "A", date(1990, 1, 1), 50, 100.0)
            .unwrap();
        league
            .add_player(3, 1, "B", date(1991, 1, 1), 60, 200.0)
            .unwrap();
        league
            .add_player(5, 2, "C", date(1992, 1, 1), 70, 300.0)
            .unwrap();

        assert_eq!(league.team_players(1).unwrap(), vec![3, 7]);
        assert_eq!(league.team_players(2).unwrap(), vec![5]);
        assert_eq!(
            league.team_players(99).unwrap_err(),
            RegistryError::TeamNotFound
        );
    }

    #[test]
    fn test_empty_team_listing_vs_extremum() {
        let league = league_with_team(1);

        // Listing over an empty team is empty, extremum is a failure
        assert_eq!(league.team_players(1).unwrap(), Vec::<u64>::new());
        assert_eq!(league.best_player(1).unwrap_err(), RegistryError::TeamNotFound);
        assert_eq!(
            league.oldest_player(1).unwrap_err(),
            RegistryError::TeamNotFound
        );
        assert_eq!(
            league.highest_paid_player(1).unwrap_err(),
            RegistryError::TeamNotFound
        );
    }

    #[test]
    fn test_best_player_tie_goes_to_lowest_id() {
        let mut league = league_with_team(1);
        league
            .add_player(5, 1, "A", date(1990, 1, 1), 9, 100.0)
            .unwrap();
        league
            .add_player(2, 1, "B", date(1991, 1, 1), 9, 100.0)
            .unwrap();

        assert_eq!(league.best_player(1).unwrap(), 2);
    }

    #[test]
    fn test_oldest_and_highest_paid() {
        let mut league = league_with_team(1);
        league
            .add_player(1, 1, "A", date(1985, 6, 1), 50, 800.0)
            .unwrap();
        league
            .add_player(2, 1, "B", date(1979, 2, 10), 60, 2500.0)
            .unwrap();
        league
            .add_player(3, 1, "C", date(1992, 11, 5), 70, 1500.0)
            .unwrap();

        assert_eq!(league.oldest_player(1).unwrap(), 2);
        assert_eq!(league.highest_paid_player(1).unwrap(), 2);
        assert_eq!(league.salary(2).unwrap(), 2500.0);
    }

    #[test]
    fn test_top_players_ranking_example() {
        let mut league = league_with_team(1);
        league
            .add_player(1, 1, "A", date(1990, 1, 1), 10, 100.0)
            .unwrap();
        league
            .add_player(2, 1, "B", date(1991, 1, 1), 20, 100.0)
            .unwrap();
        league
            .add_player(3, 1, "C", date(1992, 1, 1), 20, 100.0)
            .unwrap();

        assert_eq!(league.top_players(2), vec![2, 3]);
        assert_eq!(league.top_players(10), vec![2, 3, 1]);
    }

    #[test]
    fn test_teams_listed_ascending() {
        let mut league = league_with_team(4);
        league
            .add_team(2, "Early", date(1900, 1, 1), "green", "white")
            .unwrap();
        league
            .add_team(9, "Late", date(1999, 1, 1), "black", "gold")
            .unwrap();

        assert_eq!(league.teams(), vec![2, 4, 9]);
    }

    #[test]
    fn test_away_jersey_color() {
        let mut league = LeagueRegistry::new();
        league
            .add_team(1, "Home", date(1900, 1, 1), "red", "white")
            .unwrap();
        league
            .add_team(2, "Clash", date(1910, 1, 1), "red", "blue")
            .unwrap();
        league
            .add_team(3, "NoClash", date(1920, 1, 1), "green", "white")
            .unwrap();

        assert_eq!(league.away_jersey_color(1, 2).unwrap(), "blue");
        assert_eq!(league.away_jersey_color(1, 3).unwrap(), "green");
        assert_eq!(
            league.away_jersey_color(1, 99).unwrap_err(),
            RegistryError::TeamNotFound
        );
    }
}
