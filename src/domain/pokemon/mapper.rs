//! Maps raw upstream payloads into [`PokemonSummary`] values

use serde_json::Value;

use super::{PokemonAbility, PokemonStat, PokemonSummary};

/// Number of moves kept for display
pub const MOVE_DISPLAY_LIMIT: usize = 6;

const ARTWORK_SPRITE_POINTER: &str = "/sprites/other/official-artwork/front_default";
const DEFAULT_SPRITE_POINTER: &str = "/sprites/front_default";

/// Pure transformation from the upstream JSON tree to the summary shape.
///
/// Mapping never fails. Scalars of the wrong JSON type are coerced where a
/// reading exists (`"25"` as 25, `25` as `"25"`); anything else resolves to
/// `0`, `""`, `false` or an empty list.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadMapper;

impl PayloadMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map(&self, root: &Value) -> PokemonSummary {
        PokemonSummary {
            id: int_at(root, "/id"),
            name: text_at(root, "/name"),
            height: int_at(root, "/height"),
            weight: int_at(root, "/weight"),
            base_experience: int_at(root, "/base_experience"),
            order: int_at(root, "/order"),
            sprite: extract_sprite(root),
            types: list(root, "types")
                .map(|node| text_at(node, "/type/name"))
                .collect(),
            held_items: list(root, "held_items")
                .map(|node| text_at(node, "/item/name"))
                .collect(),
            abilities: list(root, "abilities")
                .map(|node| {
                    PokemonAbility::new(text_at(node, "/ability/name"), bool_at(node, "/is_hidden"))
                })
                .collect(),
            stats: list(root, "stats")
                .map(|node| PokemonStat::new(text_at(node, "/stat/name"), int_at(node, "/base_stat")))
                .collect(),
            moves: list(root, "moves")
                .take(MOVE_DISPLAY_LIMIT)
                .map(|node| text_at(node, "/move/name"))
                .collect(),
        }
    }
}

/// Official artwork first, then the default front sprite, then empty
fn extract_sprite(root: &Value) -> String {
    root.pointer(ARTWORK_SPRITE_POINTER)
        .and_then(Value::as_str)
        .or_else(|| root.pointer(DEFAULT_SPRITE_POINTER).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}

fn list<'a>(root: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    root.get(key)
        .and_then(Value::as_array)
        .map(|items| items.as_slice())
        .unwrap_or_default()
        .iter()
}

/// Scalar as text; numbers and booleans are rendered, null reads as empty
fn text_at(node: &Value, pointer: &str) -> String {
    match node.pointer(pointer) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    }
}

/// Scalar as integer; numeric strings are parsed and fractions truncated
fn int_at(node: &Value, pointer: &str) -> i64 {
    match node.pointer(pointer) {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(text)) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or(0)
        }
        Some(Value::Bool(flag)) => i64::from(*flag),
        _ => 0,
    }
}

/// Scalar as boolean; `"true"` in any case and non-zero numbers are true
fn bool_at(node: &Value, pointer: &str) -> bool {
    match node.pointer(pointer) {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => text.trim().eq_ignore_ascii_case("true"),
        Some(Value::Number(number)) => number.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}
