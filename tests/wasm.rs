#![cfg(target_arch = "wasm32")]

use checkers::wasm::CheckersGame;
use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn new_game_reports_the_opening_position() {
    let game = CheckersGame::new(JsValue::UNDEFINED).unwrap();
    let state = game.game_state().unwrap();

    assert_eq!(game.movable_checkers(), vec![20, 21, 22, 23]);
    assert_eq!(field(&state, "current_side").as_string().as_deref(), Some("First"));
    assert_eq!(field(&state, "first_count").as_f64(), Some(12.0));
    assert_eq!(field(&state, "is_game_over").as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn actions_pass_the_turn_and_flip_the_board() {
    let mut game = CheckersGame::new(JsValue::NULL).unwrap();

    assert_eq!(game.legal_destinations(1).unwrap(), vec![16, 17]);
    let record = game.apply_action(1, 1).unwrap();

    assert_eq!(field(&record, "to").as_f64(), Some(17.0));
    assert_eq!(field(&record, "turn_passed").as_bool(), Some(true));
    assert_eq!(game.current_side().unwrap().as_string().as_deref(), Some("Second"));
    assert_eq!(field(&game.game_state().unwrap(), "flipped").as_bool(), Some(true));
}

#[wasm_bindgen_test]
fn options_object_controls_flipping() {
    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("autoFlip"), &JsValue::FALSE).unwrap();
    let mut game = CheckersGame::new(options.into()).unwrap();

    game.apply_action(0, 0).unwrap();

    assert_eq!(field(&game.game_state().unwrap(), "flipped").as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn bad_indices_and_early_results_are_errors() {
    let mut game = CheckersGame::new(JsValue::UNDEFINED).unwrap();

    assert!(game.legal_destinations(4).is_err());
    assert!(game.apply_action(0, 3).is_err());
    assert!(game.result().is_err());
    assert!(!game.is_game_over());
}
