// SPDX-License-Identifier: MPL-2.0
//! Decoded level data model.
//!
//! A [`Level`] is created only by parsing the JSON body of a successful
//! decode response and lives until the next response replaces it. The
//! coordinate system follows the level thumbnail: the horizontal plane is
//! `(x, z)` with `x` increasing to the right and `z` to the left, and `y`
//! increases upwards.

pub mod summary;

use serde::{Deserialize, Serialize};

/// Contents of a decoded voxel level.
///
/// `raw_data` and `serialized_data` are opaque text blobs kept for
/// inspection panels only; the client never parses them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub title: String,
    pub author: String,
    pub raw_data: String,
    pub serialized_data: String,
    pub data: Vec<Block>,
}

/// One voxel placement: integer coordinates plus a type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Block {
    pub x: i64,
    pub y: i64,
    pub z: i64,
    #[serde(rename = "type")]
    pub block_type: BlockType,
}

/// A named voxel category.
///
/// A type without `parent` is a base (unoriented) type. A type with
/// `parent` is an orientation variant: `parent.value` carries the base
/// value and `value` the orientation-specific one. Parsing tolerates
/// deeper chains, but rendering only ever consults one parent level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockType {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<BlockType>>,
}

impl Level {
    /// Parses a decode-response body into a `Level`.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error when the body is not valid JSON
    /// or is missing required fields. Callers surface this as a malformed
    /// response rather than rendering partial values.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Sorts the block list in place by `(y, z, x)` ascending.
    ///
    /// The sort is stable, so blocks with equal coordinates keep their
    /// input order. Table row order is exactly this order.
    pub fn sort_blocks(&mut self) {
        self.data
            .sort_by(|a, b| (a.y, a.z, a.x).cmp(&(b.y, b.z, b.x)));
    }
}

/// One rendered table row, with the orientation columns already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRow {
    pub x: i64,
    pub y: i64,
    pub z: i64,
    pub name: String,
    /// Column 5: base value (the parent's value for oriented types).
    pub base_value: String,
    /// Column 6: orientation value, empty for unoriented types.
    pub orientation: String,
}

impl BlockRow {
    fn from_block(block: &Block) -> Self {
        let ty = &block.block_type;
        let (base_value, orientation) = match &ty.parent {
            Some(parent) => (parent.value.clone(), ty.value.clone()),
            None => (ty.value.clone(), String::new()),
        };
        Self {
            x: block.x,
            y: block.y,
            z: block.z,
            name: ty.name.clone(),
            base_value,
            orientation,
        }
    }
}

/// Builds one row per block, in the list's current order.
///
/// Call [`Level::sort_blocks`] first; this function does not reorder.
pub fn table_rows(level: &Level) -> Vec<BlockRow> {
    level.data.iter().map(BlockRow::from_block).collect()
}
