use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::Error;
use crate::game::{GameOptions, TurnController};

/// JavaScript handle to one game.
///
/// Checker and destination lists are 0-based and ordered exactly as the engine reports them;
/// turning them into menus is up to the caller.
#[wasm_bindgen]
pub struct CheckersGame {
    inner: TurnController,
}

#[wasm_bindgen]
impl CheckersGame {
    /// `options` may be `undefined`, `null`, or `{ autoFlip: boolean }`.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<CheckersGame, JsValue> {
        let options: GameOptions = if options.is_undefined() || options.is_null() {
            GameOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };
        Ok(Self {
            inner: TurnController::with_options(options),
        })
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[wasm_bindgen(js_name = gameState)]
    pub fn game_state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.to_game_state())
    }

    #[wasm_bindgen(js_name = currentSide)]
    pub fn current_side(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.current_side())
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    /// Square indices (0..=31) of the checkers that may act.
    #[wasm_bindgen(js_name = movableCheckers)]
    pub fn movable_checkers(&self) -> Vec<u8> {
        self.inner
            .movable_checkers()
            .into_iter()
            .map(|checker| checker.coordinate.index() as u8)
            .collect()
    }

    /// Square indices (0..=31) the chosen checker may go to.
    #[wasm_bindgen(js_name = legalDestinations)]
    pub fn legal_destinations(&self, checker_index: usize) -> Result<Vec<u8>, JsValue> {
        let destinations = self
            .inner
            .legal_destinations(checker_index)
            .map_err(engine_error)?;
        Ok(destinations
            .into_iter()
            .map(|coord| coord.index() as u8)
            .collect())
    }

    /// Returns the resulting `ActionRecord`.
    #[wasm_bindgen(js_name = applyAction)]
    pub fn apply_action(
        &mut self,
        checker_index: usize,
        destination_index: usize,
    ) -> Result<JsValue, JsValue> {
        let record = self
            .inner
            .apply_chosen_action(checker_index, destination_index)
            .map_err(engine_error)?;
        to_js(&record)
    }

    pub fn result(&self) -> Result<JsValue, JsValue> {
        let result = self.inner.to_game_result().map_err(engine_error)?;
        to_js(&result)
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(Into::into)
}

fn engine_error(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}
