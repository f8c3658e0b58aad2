//! Squad builder CLI
//!
//! Inspect the character/equipment/technique catalogs and preview computed
//! stats for a character with a chosen level, rarity and loadout.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use tb_core::{
    data, BuilderSession, Character, CharacterCatalog, EquipmentCatalog, Position, Rarity,
    StatName, TechniqueCatalog,
};

#[derive(Parser)]
#[command(name = "tb_cli")]
#[command(about = "Inspect catalogs and preview loadout stats", long_about = None)]
struct Cli {
    /// Directory holding characters.json / equipment.json / techniques.json
    /// (defaults to the embedded sample catalogs)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List characters, optionally filtered
    List {
        /// Filter by position (FW/MF/DF/GK)
        #[arg(long)]
        position: Option<String>,

        /// Filter by element (Fire/Earth/Wind/Wood/Void)
        #[arg(long)]
        element: Option<String>,

        /// Filter by base rarity (Common/Rare/Epic/Legendary)
        #[arg(long)]
        rarity: Option<String>,

        /// Substring search over name and nickname
        #[arg(long)]
        search: Option<String>,
    },

    /// Show computed stats for one character
    Show {
        /// Character name or catalog id
        character: String,

        /// Level override (1-99, defaults to the character's base level)
        #[arg(long)]
        level: Option<u8>,

        /// Rarity override (defaults to the character's base rarity)
        #[arg(long)]
        rarity: Option<String>,

        /// Equipment item ids to equip (slot follows the item's category)
        #[arg(long)]
        equip: Vec<String>,

        /// Technique ids to slot (max 4, in order)
        #[arg(long)]
        technique: Vec<String>,

        /// Print the computed stat block as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print catalog summary counts
    Summary,
}

struct Catalogs {
    characters: CharacterCatalog,
    equipment: EquipmentCatalog,
    techniques: TechniqueCatalog,
}

fn load_catalogs(dir: Option<&Path>) -> Result<Catalogs> {
    match dir {
        Some(dir) => {
            let read = |name: &str| -> Result<String> {
                std::fs::read_to_string(dir.join(name))
                    .with_context(|| format!("Failed to read {}", dir.join(name).display()))
            };
            Ok(Catalogs {
                characters: CharacterCatalog::from_json(&read("characters.json")?)?,
                equipment: EquipmentCatalog::from_json(&read("equipment.json")?)?,
                techniques: TechniqueCatalog::from_json(&read("techniques.json")?)?,
            })
        }
        None => Ok(Catalogs {
            characters: data::sample_characters().clone(),
            equipment: data::sample_equipment().clone(),
            techniques: data::sample_techniques().clone(),
        }),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalogs = load_catalogs(cli.catalog.as_deref())?;

    match cli.command {
        Commands::List { position, element, rarity, search } => {
            list_characters(&catalogs.characters, position, element, rarity, search)
        }
        Commands::Show { character, level, rarity, equip, technique, json } => {
            show_character(&catalogs, &character, level, rarity, &equip, &technique, json)
        }
        Commands::Summary => {
            print_summary(&catalogs);
            Ok(())
        }
    }
}

fn list_characters(
    catalog: &CharacterCatalog,
    position: Option<String>,
    element: Option<String>,
    rarity: Option<String>,
    search: Option<String>,
) -> Result<()> {
    let position = position.map(|p| p.parse::<Position>()).transpose()?;
    let element = element.map(|e| e.parse::<tb_core::Element>()).transpose()?;
    let rarity = rarity.map(|r| r.parse::<Rarity>()).transpose()?;
    let search = search.map(|s| s.to_lowercase());

    let mut count = 0;
    for character in catalog.iter() {
        if position.is_some_and(|p| character.position != p) {
            continue;
        }
        if element.is_some_and(|e| character.element != e) {
            continue;
        }
        if rarity.is_some_and(|r| character.base_rarity != r) {
            continue;
        }
        if let Some(needle) = &search {
            if !character.name.to_lowercase().contains(needle)
                && !character.nickname.to_lowercase().contains(needle)
            {
                continue;
            }
        }
        println!(
            "{:<20} #{:<3} {:<3} {:<6} Lv.{:<3} {:<10} {}",
            character.name,
            character.jersey_number,
            character.position.as_str(),
            character.element.as_str(),
            character.base_level,
            character.base_rarity.as_str(),
            character.id,
        );
        count += 1;
    }
    println!("\n{} character(s)", count);
    Ok(())
}

fn show_character(
    catalogs: &Catalogs,
    query: &str,
    level: Option<u8>,
    rarity: Option<String>,
    equip_ids: &[String],
    technique_ids: &[String],
    json: bool,
) -> Result<()> {
    let index = find_character(&catalogs.characters, query)?;
    let mut session = BuilderSession::new(catalogs.characters.characters().to_vec())?;
    session.select_character(index)?;

    if let Some(level) = level {
        session.set_level(level)?;
    }
    if let Some(rarity) = rarity {
        session.set_rarity(rarity.parse::<Rarity>()?);
    }

    for id in equip_ids {
        let item = catalogs
            .equipment
            .get(id)
            .ok_or_else(|| anyhow!("Unknown equipment id: {}", id))?
            .clone();
        let category = item.category;
        if let Some(replaced) = session.equip(category, item) {
            if !json {
                println!("(replaced {} in the {} slot)", replaced.name, category.as_str());
            }
        }
    }
    for id in technique_ids {
        let technique = catalogs
            .techniques
            .get(id)
            .ok_or_else(|| anyhow!("Unknown technique id: {}", id))?
            .clone();
        session.add_technique(technique)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&session.computed_stats()?)?);
    } else {
        print_session(&session)?;
    }
    Ok(())
}

fn find_character(catalog: &CharacterCatalog, query: &str) -> Result<usize> {
    let position = catalog
        .iter()
        .position(|c| c.id == query || c.name.eq_ignore_ascii_case(query));
    match position {
        Some(index) => Ok(index),
        None => {
            let matches = catalog.search(query);
            match matches.len() {
                0 => bail!("No character matches '{}'", query),
                1 => {
                    let id = &matches[0].id;
                    Ok(catalog.iter().position(|c| &c.id == id).expect("id came from catalog"))
                }
                n => bail!(
                    "'{}' is ambiguous ({} matches): {}",
                    query,
                    n,
                    matches.iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join(", ")
                ),
            }
        }
    }
}

fn print_session(session: &BuilderSession) -> Result<()> {
    let character = session.character();
    let stats = session.computed_stats()?;

    println!("{} ({})", character.name, character.title);
    println!(
        "#{} {} | {} | Lv.{} | {}",
        character.jersey_number,
        character.position.as_str(),
        character.element.as_str(),
        session.level(),
        session.rarity().as_str(),
    );
    println!();

    println!("{:<14} {:>6} {:>10}", "Stat", "Main", "Secondary");
    for stat in StatName::all() {
        let pair = stats.get(*stat);
        println!("{:<14} {:>6} {:>10}", stat.key(), pair.main, pair.secondary);
    }
    println!("{:<14} {:>6}", "total", stats.total_main());

    let loadout = session.loadout();
    if loadout.equipped_items().next().is_some() {
        println!("\nEquipment:");
        for item in loadout.equipped_items() {
            println!("  [{}] {} ({})", item.category.as_str(), item.name, item.rarity.as_str());
        }
    }
    if !loadout.techniques().is_empty() {
        println!("\nTechniques:");
        for (slot, technique) in loadout.techniques().iter().enumerate() {
            println!(
                "  {}. {} ({})",
                slot + 1,
                technique.name,
                technique.technique_type.as_str()
            );
        }
    }
    print_passives(character);
    Ok(())
}

fn print_passives(character: &Character) {
    if !character.team_passives.is_empty() {
        println!("\nTeam passives:");
        for passive in &character.team_passives {
            println!("  {} - {}", passive.name, passive.description);
        }
    }
}

fn print_summary(catalogs: &Catalogs) {
    let summary = catalogs.characters.summary();
    println!("Characters: {}", summary.total_characters);

    println!("\nBy position:");
    for position in Position::all() {
        let count = summary.by_position.get(position).copied().unwrap_or(0);
        println!("  {:<6} {}", position.as_str(), count);
    }

    println!("\nBy rarity:");
    for rarity in Rarity::all() {
        let count = summary.by_rarity.get(rarity).copied().unwrap_or(0);
        println!("  {:<10} {}", rarity.as_str(), count);
    }

    println!("\nBy element:");
    for element in tb_core::Element::all() {
        let count = summary.by_element.get(element).copied().unwrap_or(0);
        println!("  {:<6} {}", element.as_str(), count);
    }

    println!("\nEquipment items: {}", catalogs.equipment.len());
    println!("Techniques: {}", catalogs.techniques.len());
}
