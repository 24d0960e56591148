//! The fixed forging recipe table.

use crucible_types::TokenId;
use serde::Serialize;

const FORGE3_INPUTS: [TokenId; 2] = [TokenId::of(0), TokenId::of(1)];
const FORGE4_INPUTS: [TokenId; 2] = [TokenId::of(1), TokenId::of(2)];
const FORGE5_INPUTS: [TokenId; 2] = [TokenId::of(0), TokenId::of(2)];
const FORGE6_INPUTS: [TokenId; 3] = [TokenId::of(0), TokenId::of(1), TokenId::of(2)];

/// A forging recipe — a closed set of four, one per derived output id.
///
/// Each input is consumed in amount one, in declared order; the output is
/// minted in amount one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Recipe {
    Forge3,
    Forge4,
    Forge5,
    Forge6,
}

impl Recipe {
    /// Every recipe, in output-id order.
    pub const ALL: [Self; 4] = [Self::Forge3, Self::Forge4, Self::Forge5, Self::Forge6];

    /// The input ids consumed, in the order they are checked.
    pub fn inputs(self) -> &'static [TokenId] {
        match self {
            Self::Forge3 => &FORGE3_INPUTS,
            Self::Forge4 => &FORGE4_INPUTS,
            Self::Forge5 => &FORGE5_INPUTS,
            Self::Forge6 => &FORGE6_INPUTS,
        }
    }

    /// The derived id this recipe mints.
    pub const fn output(self) -> TokenId {
        match self {
            Self::Forge3 => TokenId::of(3),
            Self::Forge4 => TokenId::of(4),
            Self::Forge5 => TokenId::of(5),
            Self::Forge6 => TokenId::of(6),
        }
    }

    /// The recipe name carried by `TokenForged` notifications.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forge3 => "forge3",
            Self::Forge4 => "forge4",
            Self::Forge5 => "forge5",
            Self::Forge6 => "forge6",
        }
    }
}
