//! Domain to wire conversions.

use magic_movers_domain::{MagicItem, Mission, Mover};
use magic_movers_shared::{MagicItemResponse, MagicMoverResponse, MissionResponse, RankedMoverResponse};

use crate::use_cases::movers::MoverRank;

pub fn item_to_response(item: &MagicItem) -> MagicItemResponse {
    MagicItemResponse {
        id: item.id().to_uuid(),
        name: item.name().to_string(),
        weight: item.weight().value(),
        is_being_used: item.is_being_used(),
    }
}

/// The completed-missions counter is internal and never leaves the engine.
pub fn mover_to_response(mover: &Mover) -> MagicMoverResponse {
    MagicMoverResponse {
        id: mover.id().to_uuid(),
        name: mover.name().to_string(),
        weight_limit: mover.weight_limit().value(),
        energy: mover.energy().value(),
        quest_state: mover.quest_state(),
    }
}

pub fn mission_to_response(mission: &Mission) -> MissionResponse {
    MissionResponse {
        id: mission.id().to_uuid(),
        mover_id: mission.mover_id().to_uuid(),
        items_ids: mission.items_ids().iter().map(|id| id.to_uuid()).collect(),
        quest_state: mission.quest_state(),
    }
}

pub fn rank_to_response(rank: MoverRank) -> RankedMoverResponse {
    RankedMoverResponse {
        id: rank.id.to_uuid(),
        name: rank.name.to_string(),
        rank: rank.rank,
    }
}
