// patterns.rs - Built-in template library

use crate::template::{Pattern, TemplateCollection};
use std::collections::BTreeMap;

pub struct NamedPattern {
    pub name: &'static str,
    pub art: &'static [&'static str],
}

pub struct BuiltinCollection {
    pub is_static: bool,
    pub page: u32,
    pub patterns: &'static [NamedPattern],
}

pub const STILL_LIFES: BuiltinCollection = BuiltinCollection {
    is_static: true,
    page: 1,
    patterns: &[
        NamedPattern {
            name: "block",
            art: &["OO", "OO"],
        },
        NamedPattern {
            name: "beehive",
            art: &[".OO.", "O..O", ".OO."],
        },
        NamedPattern {
            name: "loaf",
            art: &[".OO.", "O..O", ".O.O", "..O."],
        },
        NamedPattern {
            name: "boat",
            art: &["OO.", "O.O", ".O."],
        },
    ],
};

pub const OSCILLATORS: BuiltinCollection = BuiltinCollection {
    is_static: false,
    page: 1,
    patterns: &[
        NamedPattern {
            name: "blinker",
            art: &["...", "OOO", "..."],
        },
        NamedPattern {
            name: "toad",
            art: &["....", ".OOO", "OOO.", "...."],
        },
        NamedPattern {
            name: "beacon",
            art: &["OO..", "OO..", "..OO", "..OO"],
        },
        NamedPattern {
            name: "pulsar",
            art: &[
                "..OOO...OOO..",
                ".............",
                "O....O.O....O",
                "O....O.O....O",
                "O....O.O....O",
                "..OOO...OOO..",
                ".............",
                "..OOO...OOO..",
                "O....O.O....O",
                "O....O.O....O",
                "O....O.O....O",
                ".............",
                "..OOO...OOO..",
            ],
        },
    ],
};

pub const SPACESHIPS: BuiltinCollection = BuiltinCollection {
    is_static: false,
    page: 2,
    patterns: &[
        NamedPattern {
            name: "glider",
            art: &[".O.", "..O", "OOO"],
        },
        NamedPattern {
            name: "LWSS",
            art: &[".O..O", "O....", "O...O", "OOOO."],
        },
    ],
};

pub const METHUSELAHS: BuiltinCollection = BuiltinCollection {
    is_static: true,
    page: 2,
    patterns: &[
        NamedPattern {
            name: "r-pentomino",
            art: &[".OO", "OO.", ".O."],
        },
        NamedPattern {
            name: "gosper glider gun",
            art: &[
                "........................O...........",
                "......................O.O...........",
                "............OO......OO............OO",
                "...........O...O....OO............OO",
                "OO........O.....O...OO..............",
                "OO........O...O.OO....O.O...........",
                "..........O.....O.......O...........",
                "...........O...O....................",
                "............OO......................",
            ],
        },
    ],
};

pub const COLLECTIONS: &[BuiltinCollection] = &[STILL_LIFES, OSCILLATORS, SPACESHIPS, METHUSELAHS];

impl BuiltinCollection {
    pub fn to_collection(&self) -> TemplateCollection {
        let templates: BTreeMap<String, Pattern> = self
            .patterns
            .iter()
            .filter_map(|named| match Pattern::from_art(named.art) {
                Ok(pattern) => Some((named.name.to_string(), pattern)),
                Err(err) => {
                    log::error!("built-in pattern {:?} is malformed: {err}", named.name);
                    None
                }
            })
            .collect();
        TemplateCollection::new(self.is_static, self.page, templates)
    }
}

/// Template library used when no template directory is available.
pub fn builtin_collections() -> Vec<TemplateCollection> {
    COLLECTIONS.iter().map(BuiltinCollection::to_collection).collect()
}

/// Looks up a built-in pattern by name, ignoring case.
pub fn find(name: &str) -> Option<Pattern> {
    COLLECTIONS
        .iter()
        .flat_map(|collection| collection.patterns.iter())
        .find(|named| named.name.eq_ignore_ascii_case(name))
        .and_then(|named| Pattern::from_art(named.art).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_parses() {
        for collection in COLLECTIONS {
            for named in collection.patterns {
                assert!(Pattern::from_art(named.art).is_ok(), "{} is malformed", named.name);
            }
        }
        let total: usize = builtin_collections().iter().map(|c| c.templates().len()).sum();
        assert_eq!(total, 12);
    }

    #[test]
    fn lookup_ignores_case() {
        let glider = find("Glider").unwrap();
        assert_eq!(glider.alive_count(), 5);
        assert_eq!(find("lwss").unwrap().alive_count(), 9);
        assert_eq!(find("gosper glider gun").unwrap().alive_count(), 36);
        assert!(find("nope").is_none());
    }

    #[test]
    fn pages_cover_one_and_two() {
        let collections = builtin_collections();
        assert!(collections.iter().any(|c| c.page() == 1));
        assert!(collections.iter().any(|c| c.page() == 2));
        assert!(collections.iter().all(|c| (1..=2).contains(&c.page())));
    }
}
