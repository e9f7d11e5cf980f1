//! Built-in monster templates.

use super::types::{MonsterTemplate, StatRange};

fn range(min: u32, max: u32) -> StatRange {
    StatRange::new(min, max).expect("built-in ranges are ordered")
}

fn template(
    name: &str,
    descriptions: &[&str],
    health: (u32, u32),
    power: (u32, u32),
    money: (u32, u32),
) -> MonsterTemplate {
    MonsterTemplate {
        name: name.to_string(),
        descriptions: descriptions.iter().map(|d| d.to_string()).collect(),
        health: range(health.0, health.1),
        power: range(power.0, power.1),
        money: range(money.0, money.1),
    }
}

/// Returns the default monster roster: Goblin, Vulture, Troll and Orc.
pub fn builtin_monsters() -> Vec<MonsterTemplate> {
    vec![
        template(
            "Goblin",
            &[
                "This is a lone goblin. When it notices you, it rushes at you quickly with a sharp dagger drawn.",
                "A goblin sneaks behind a rock, eyeing you with a mischievous grin.",
                "A goblin appears from the shadows, muttering strange words under its breath.",
            ],
            (5, 10),
            (1, 5),
            (10, 50),
        ),
        template(
            "Vulture",
            &[
                "You discover a vulture eating the remains of two orcs that appear to have killed each other. They were carrying a chest that contains a small treasure horde. You will need to scare off the vulture before you can take the treasure.",
                "A vulture circles above a small pile of bones, watching your every move.",
                "A vulture is perched on a tree branch, its eyes gleaming as it spots you.",
            ],
            (1, 3),
            (1, 2),
            (100, 2000),
        ),
        template(
            "Troll",
            &[
                "A massive troll lumbers toward you, its club swinging menacingly.",
                "A troll blocks your path, growling and stomping the ground.",
                "You hear heavy footsteps; a troll emerges from the trees, hungry for trouble.",
            ],
            (20, 40),
            (10, 20),
            (50, 150),
        ),
        template(
            "Orc",
            &["A fierce orc blocks your path, wielding a large axe and grinning menacingly."],
            (20, 40),
            (5, 10),
            (100, 400),
        ),
    ]
}
