// templates.rs - Shipped template files

use life_core::patterns::builtin_collections;
use life_core::{GameOfLife, Grid, TEMPLATE_PADDING, TemplateCollection};
use std::path::PathBuf;

fn shipped() -> Vec<TemplateCollection> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../templates");
    let mut paths: Vec<_> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    paths.sort();
    paths
        .iter()
        .map(|path| TemplateCollection::load(path).unwrap())
        .collect()
}

#[test]
fn shipped_files_match_builtin_library() {
    let shipped = shipped();
    let builtin = builtin_collections();
    assert_eq!(shipped.len(), builtin.len());
    for collection in &shipped {
        let twin = builtin
            .iter()
            .find(|b| b.templates().keys().eq(collection.templates().keys()))
            .expect("no built-in collection with the same templates");
        assert_eq!(twin.is_static(), collection.is_static());
        assert_eq!(twin.page(), collection.page());
        assert_eq!(twin.templates(), collection.templates());
    }
}

#[test]
fn still_lifes_stay_still_when_padded() {
    for collection in shipped().iter().filter(|c| c.is_static() && c.page() == 1) {
        for (name, pattern) in collection.templates() {
            let mut game = GameOfLife::new(Grid::from_pattern((0, 0), &pattern.padded(TEMPLATE_PADDING)));
            let before = game.grid().alive_positions();
            game.run_generation();
            assert_eq!(game.grid().alive_positions(), before, "{name} moved");
        }
    }
}
