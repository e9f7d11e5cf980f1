use delve::build_info;
use delve::config::{default_config_path, GameConfig};
use delve::core::constants::{DEFAULT_LOG_FILTER, DEFAULT_PURCHASE_QUANTITY};
use delve::encounter::{EncounterOutcome, EncounterReport};
use delve::items::title_case;
use delve::GameSession;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    config: Option<PathBuf>,
    seed: Option<u64>,
    name: Option<String>,
}

enum CliCommand {
    Play(CliOptions),
    Exit(i32),
}

fn print_help() {
    println!("Delve - Text Adventure\n");
    println!("Usage: delve [options]\n");
    println!("Options:");
    println!("  --config <path>  Load settings from a JSON file (default ~/.delve/config.json)");
    println!("  --seed <n>       Seed the random number generator");
    println!("  --name <name>    Skip the name prompt");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
}

fn parse_args(args: &[String]) -> CliCommand {
    let mut options = CliOptions::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                return CliCommand::Exit(0);
            }
            "--help" | "-h" => {
                print_help();
                return CliCommand::Exit(0);
            }
            "--config" => match iter.next() {
                Some(path) => options.config = Some(PathBuf::from(path)),
                None => {
                    eprintln!("--config needs a path");
                    return CliCommand::Exit(1);
                }
            },
            "--seed" => match iter.next().map(|s| s.parse::<u64>()) {
                Some(Ok(seed)) => options.seed = Some(seed),
                _ => {
                    eprintln!("--seed needs a non-negative integer");
                    return CliCommand::Exit(1);
                }
            },
            "--name" => match iter.next() {
                Some(name) => options.name = Some(name.clone()),
                None => {
                    eprintln!("--name needs a value");
                    return CliCommand::Exit(1);
                }
            },
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'delve --help' for usage.");
                return CliCommand::Exit(1);
            }
        }
    }

    CliCommand::Play(options)
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        CliCommand::Play(options) => options,
        CliCommand::Exit(code) => std::process::exit(code),
    };

    // Logs go to stderr so they never interleave with the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = match &options.config {
        Some(path) => load_explicit_config(path),
        None => match default_config_path() {
            Ok(path) => GameConfig::load_or_default(&path),
            Err(_) => GameConfig::default(),
        },
    };

    let seed = options.seed.unwrap_or_else(rand::random);
    debug!(seed, "rng seeded");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let Some(mut session) = create_session(options.name, config, &mut input, &mut out)? else {
        return Ok(());
    };
    run_menu(&mut session, &mut rng, &mut input, &mut out)
}

/// A config named on the command line that fails to load is reported and
/// replaced by the defaults, like the implicit one.
fn load_explicit_config(path: &Path) -> GameConfig {
    GameConfig::load(path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "ignoring config file");
        eprintln!("❌ {}: {} (using defaults)", path.display(), e);
        GameConfig::default()
    })
}

/// Reads one trimmed line. `None` on end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    message: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;
    read_line(input)
}

/// Asks for a name until it's valid, starting with `--name` if given.
/// `None` when input runs out.
fn create_session(
    name: Option<String>,
    config: GameConfig,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<Option<GameSession>> {
    let mut pending = name;
    loop {
        let name = match pending.take() {
            Some(name) => name,
            None => match prompt(input, out, "Enter your name: ")? {
                Some(name) => name,
                None => return Ok(None),
            },
        };
        match GameSession::new(&name, config.clone()) {
            Ok(session) => {
                writeln!(
                    out,
                    "\nWelcome, {}! Let's begin your adventure!\n",
                    session.player.name
                )?;
                return Ok(Some(session));
            }
            Err(e) => writeln!(out, "❌ {}", e)?,
        }
    }
}

fn run_menu(
    session: &mut GameSession,
    rng: &mut ChaCha8Rng,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    loop {
        writeln!(
            out,
            "\nCurrent HP: {}, Gold: {}",
            session.player.hp, session.player.gold
        )?;
        writeln!(out, "What would you like to do?")?;
        writeln!(out, "1) Visit Shop")?;
        writeln!(out, "2) Show Inventory")?;
        writeln!(out, "3) Equip Weapon")?;
        writeln!(out, "4) Leave town (Fight Monster)")?;
        writeln!(
            out,
            "5) Sleep (Restore HP for {} Gold)",
            session.rest_cost()
        )?;
        writeln!(out, "6) Quit")?;

        let Some(choice) = prompt(input, out, "> ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => shop_screen(session, input, out)?,
            "2" => inventory_screen(session, out)?,
            "3" => equip_screen(session, input, out)?,
            "4" => fight(session, rng, out)?,
            "5" => match session.rest() {
                Ok((hp, gold)) => {
                    writeln!(out, "💤 You sleep soundly. HP: {}, Gold: {}", hp, gold)?
                }
                Err(e) => writeln!(out, "❌ {}", e)?,
            },
            "6" => {
                writeln!(out, "Goodbye, adventurer!")?;
                return Ok(());
            }
            _ => writeln!(out, "❌ Invalid choice. Please try again.")?,
        }
    }
}

fn shop_screen(
    session: &mut GameSession,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "\n🛒 Welcome to the Shop! Here's what we have:")?;
    for (i, item) in session.shop().iter().enumerate() {
        writeln!(
            out,
            "{}. {} ({}) - ${}",
            i + 1,
            title_case(&item.name),
            item.kind.name(),
            item.price
        )?;
    }
    writeln!(out, "0. Exit Shop")?;

    let Some(choice) = prompt(input, out, "Choose an item number to buy: ")? else {
        return Ok(());
    };
    if choice == "0" {
        return Ok(());
    }
    let Some(index) = choice.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
        writeln!(out, "❌ Invalid choice.")?;
        return Ok(());
    };
    if let Err(e) = session.shop().get(index) {
        writeln!(out, "❌ {}", e)?;
        return Ok(());
    }

    let Some(quantity) = prompt(input, out, "How many? [1]: ")? else {
        return Ok(());
    };
    let quantity = if quantity.is_empty() {
        DEFAULT_PURCHASE_QUANTITY
    } else {
        match quantity.parse::<u32>() {
            Ok(n) => n,
            Err(_) => {
                writeln!(out, "❌ Invalid quantity.")?;
                return Ok(());
            }
        }
    };

    match session.buy(index, quantity) {
        Ok(receipt) if receipt.quantity == 0 => writeln!(out, "❌ Not enough gold!")?,
        Ok(receipt) => writeln!(
            out,
            "✅ You purchased {} x {}! Gold remaining: {}",
            receipt.quantity, receipt.name, receipt.remaining_gold
        )?,
        Err(e) => writeln!(out, "❌ {}", e)?,
    }
    Ok(())
}

fn inventory_screen(session: &GameSession, out: &mut impl Write) -> io::Result<()> {
    let views = session.list_inventory();
    if views.is_empty() {
        writeln!(out, "\n🎒 Your inventory is empty.")?;
        return Ok(());
    }
    let equipped = session.player.inventory.equipped_weapon_id();
    writeln!(out, "\n🎒 Your Inventory:")?;
    for (i, view) in views.iter().enumerate() {
        let marker = if Some(view.id) == equipped {
            " [equipped]"
        } else {
            ""
        };
        writeln!(out, "{}. {}{}", i + 1, view, marker)?;
    }
    Ok(())
}

fn equip_screen(
    session: &mut GameSession,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    // Snapshot ids so the list can't shift under the selection
    let weapons: Vec<_> = session.list_weapons().map(|w| w.view()).collect();
    if weapons.is_empty() {
        writeln!(out, "\n⚔️ You have no weapons to equip.")?;
        return Ok(());
    }

    writeln!(out, "\n⚔️ Choose a weapon to equip:")?;
    for (i, weapon) in weapons.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, weapon)?;
    }
    writeln!(out, "0. Cancel")?;

    let Some(choice) = prompt(input, out, "Enter number: ")? else {
        return Ok(());
    };
    if choice == "0" {
        return Ok(());
    }
    let selected = choice
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| weapons.get(i));
    let Some(weapon) = selected else {
        writeln!(out, "❌ Invalid selection.")?;
        return Ok(());
    };

    match session.equip_weapon(weapon.id) {
        Ok(_) => writeln!(out, "✅ You equipped the {}!", weapon.name)?,
        Err(e) => writeln!(out, "❌ {}", e)?,
    }
    Ok(())
}

fn fight(session: &mut GameSession, rng: &mut ChaCha8Rng, out: &mut impl Write) -> io::Result<()> {
    let report = match session.resolve_encounter(rng) {
        Ok(report) => report,
        Err(e) => {
            writeln!(out, "❌ {}", e)?;
            return Ok(());
        }
    };
    print_encounter(&report, session.player.gold, session.player.hp, out)?;
    if session.player.is_defeated() {
        writeln!(out, "☠️ You are badly hurt. Sleep before you fight again!")?;
    }
    Ok(())
}

fn print_encounter(
    report: &EncounterReport,
    gold: u32,
    hp: i32,
    out: &mut impl Write,
) -> io::Result<()> {
    let monster = &report.monster;
    writeln!(out, "\n👹 A monster appears!")?;
    writeln!(out, "Name: {}", monster.name)?;
    writeln!(out, "Description: {}", monster.description)?;
    writeln!(out, "Health: {}", monster.health)?;
    writeln!(out, "Power: {}", monster.power)?;
    writeln!(out, "Money: {}", monster.money)?;

    match report.outcome {
        EncounterOutcome::AutoWin { .. } => {
            let name = report
                .items_removed
                .first()
                .map(|item| item.name.as_str())
                .unwrap_or("charm");
            writeln!(
                out,
                "✨ Your {} glows and defeats the monster instantly!",
                name
            )?;
            writeln!(out, "You gain ${}! Total gold: {}", report.gold_delta, gold)?;
        }
        EncounterOutcome::WeaponWin {
            remaining,
            max,
            broke,
            ..
        } => {
            writeln!(out, "⚔️ You attack the monster!")?;
            writeln!(out, "🪓 Weapon durability is now {}/{}", remaining, max)?;
            if broke {
                for item in &report.items_removed {
                    writeln!(out, "💥 Your {} breaks!", item.name)?;
                }
            }
            writeln!(
                out,
                "🏆 You defeated the monster and earned ${}!",
                report.gold_delta
            )?;
        }
        EncounterOutcome::UnarmedLoss => {
            writeln!(out, "😨 You have no weapon! You take damage!")?;
            writeln!(out, "💔 Your HP is now {}", hp)?;
        }
    }
    Ok(())
}
