// Clubhouse demo CLI
// Seeds both registries with fixture data and walks through every
// operation class. State is process-lifetime only: initialized empty,
// discarded at exit.

use anyhow::Result;
use chrono::NaiveDate;
use std::env;

use clubhouse::{GarageRegistry, LeagueRegistry, VERSION};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("league") => run_league()?,
        Some("garage") => run_garage()?,
        Some("json") => run_json()?,
        _ => {
            run_league()?;
            println!();
            run_garage()?;
        }
    }

    Ok(())
}

fn date(s: &str) -> Result<NaiveDate> {
    Ok(s.parse()?)
}

fn seed_league() -> Result<LeagueRegistry> {
    let mut league = LeagueRegistry::new();

    league.add_team(1, "Harbor City FC", date("1902-03-06")?, "red", "white")?;
    league.add_team(2, "Northfield United", date("1899-11-28")?, "red", "blue")?;
    league.add_team(3, "Valley Rovers", date("1921-05-14")?, "green", "black")?;

    league.add_player(10, 1, "Nadia Kerr", date("1991-04-02")?, 88, 42_000.0)?;
    league.add_player(11, 1, "Tom Alvarez", date("1987-09-17")?, 91, 61_000.0)?;
    league.add_player(12, 2, "Elena Voss", date("1994-01-23")?, 91, 58_000.0)?;
    league.add_player(13, 2, "Sam Okafor", date("1989-06-30")?, 76, 29_500.0)?;
    league.add_player(14, 3, "Ira Lindqvist", date("1996-12-08")?, 83, 37_250.0)?;

    league.set_captain(11)?;
    league.set_captain(12)?;

    Ok(league)
}

fn seed_garage() -> Result<GarageRegistry> {
    let mut garage = GarageRegistry::new();

    garage.add_driver(1, "Ayrton Senna", date("1960-03-21")?, date("1981-03-01")?, 900_000.0)?;
    garage.add_driver(2, "Michele Mouton", date("1951-06-23")?, date("1974-01-15")?, 650_000.0)?;
    garage.add_driver(3, "Gilles Villeneuve", date("1950-01-18")?, date("1977-07-16")?, 480_000.0)?;

    garage.buy_car(10, 1, "white", "McLaren", 1988, 680, 310_000.0)?;
    garage.buy_car(11, 1, "yellow", "Lotus", 1985, 650, 185_000.0)?;
    garage.buy_car(12, 2, "blue", "Audi", 1982, 540, 140_000.0)?;
    garage.buy_car(13, 3, "red", "Ferrari", 1979, 520, 260_000.0)?;
    garage.buy_car(14, 3, "red", "Ferrari", 1981, 560, 230_000.0)?;

    Ok(garage)
}

fn run_league() -> Result<()> {
    println!("⚽ League Registry walkthrough (v{})", VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let league = seed_league()?;
    println!("✓ Seeded {} teams, {} players", league.team_count(), league.player_count());

    println!("\n📋 Teams: {:?}", league.teams());
    for team_id in league.teams() {
        println!(
            "   {} → players {:?}",
            league.team_name(team_id)?,
            league.team_players(team_id)?
        );
    }

    println!("\n🔍 Queries:");
    let best = league.best_player(2)?;
    println!("✓ Best player of {}: {}", league.team_name(2)?, league.player_name(best)?);
    let oldest = league.oldest_player(1)?;
    println!("✓ Oldest player of {}: {}", league.team_name(1)?, league.player_name(oldest)?);
    let paid = league.highest_paid_player(1)?;
    println!(
        "✓ Highest paid of {}: {} ({})",
        league.team_name(1)?,
        league.player_name(paid)?,
        league.salary(paid)?
    );
    println!("✓ Top 3 league-wide: {:?}", league.top_players(3));
    println!("✓ Captain of {}: {}", league.team_name(1)?, league.player_name(league.captain(1)?)?);

    // Both sides wear red, so the visitors switch to their secondary
    println!(
        "✓ Away jersey for {} at {}: {}",
        league.team_name(2)?,
        league.team_name(1)?,
        league.away_jersey_color(1, 2)?
    );

    Ok(())
}

fn run_garage() -> Result<()> {
    println!("🏎️  Garage Registry walkthrough (v{})", VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut garage = seed_garage()?;
    println!("✓ Seeded {} drivers, {} cars", garage.driver_count(), garage.car_count());

    println!("\n📋 Drivers: {:?}", garage.drivers());
    for driver_id in garage.drivers() {
        println!(
            "   {} → cars {:?}, balance {:.2}, net worth {:.2}",
            garage.driver_name(driver_id)?,
            garage.driver_cars(driver_id)?,
            garage.balance(driver_id)?,
            garage.net_worth(driver_id)?
        );
    }

    println!("\n🔍 Queries:");
    if let Some(id) = garage.most_experienced() {
        println!("✓ Most experienced driver: {}", garage.driver_name(id)?);
    }
    if let Some(id) = garage.least_experienced() {
        println!("✓ Least experienced driver: {}", garage.driver_name(id)?);
    }
    println!("✓ Most expensive car: {}", garage.most_expensive_car()?);
    println!("✓ Most powerful car: {}", garage.most_powerful_car()?);
    println!("✓ Ferraris on file: {:?}", garage.cars_by_brand("ferrari"));
    println!("✓ Brands (first seen): {:?}", garage.brands());

    println!("\n💰 Mutations:");
    garage.repaint_car(11, "black")?;
    println!("✓ Repainted car 11 → {}", garage.car_color(11)?);
    garage.sell_car(10)?;
    println!(
        "✓ Sold car 10; driver 1 balance back to {:.2}, cars {:?}",
        garage.balance(1)?,
        garage.driver_cars(1)?
    );

    Ok(())
}

fn run_json() -> Result<()> {
    let league = seed_league()?;
    let garage = seed_garage()?;

    let export = serde_json::json!({
        "version": VERSION,
        "league": league,
        "garage": garage,
    });
    println!("{}", serde_json::to_string_pretty(&export)?);

    Ok(())
}
