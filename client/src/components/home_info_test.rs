use super::*;

#[test]
fn greeting_names_the_author() {
    assert_eq!(stage_text(Stage::Greeting), "Hi 👋, my name is Hardin, welcome to my first 3D web.");
}

#[test]
fn every_stage_has_copy() {
    for index in 1..=4 {
        let stage = Stage::from_index(index).expect("stage");
        assert!(!stage_copy(stage).is_empty());
        assert!(!stage_text(stage).trim().is_empty());
    }
}

#[test]
fn craft_copy_emphasizes_assets_and_semester() {
    let emphasized: Vec<_> = stage_copy(Stage::Craft).iter().filter(|s| s.emphasis.is_some()).map(|s| s.text).collect();
    assert_eq!(emphasized, vec!["low-poly 3D assets", "4th semester"]);
}

#[test]
fn farewell_is_plain() {
    assert!(stage_copy(Stage::Farewell).iter().all(|s| s.emphasis.is_none()));
}
